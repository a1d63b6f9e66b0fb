//! Real-time and historical sector performance (`SECTOR`).
//!
//! The response is a JSON object of ranking windows, each mapping sector
//! names to percentage strings such as `"-0.04%"`. Windows and sectors the
//! provider leaves out decode as `None`.

use serde::{Deserialize, Serialize};

use crate::client::Query;
use crate::endpoints::QUERY_PATH;
use crate::{Client, Result};

/// Per-sector performance over one window, as fractions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorPerformance {
    #[serde(
        rename(deserialize = "Utilities"),
        default,
        deserialize_with = "crate::decode::de::optional_percent"
    )]
    pub utilities: Option<f64>,
    #[serde(
        rename(deserialize = "Communication Services"),
        default,
        deserialize_with = "crate::decode::de::optional_percent"
    )]
    pub communication_services: Option<f64>,
    #[serde(
        rename(deserialize = "Real Estate"),
        default,
        deserialize_with = "crate::decode::de::optional_percent"
    )]
    pub real_estate: Option<f64>,
    #[serde(
        rename(deserialize = "Financials"),
        default,
        deserialize_with = "crate::decode::de::optional_percent"
    )]
    pub financials: Option<f64>,
    #[serde(
        rename(deserialize = "Consumer Discretionary"),
        default,
        deserialize_with = "crate::decode::de::optional_percent"
    )]
    pub consumer_discretionary: Option<f64>,
    #[serde(
        rename(deserialize = "Consumer Staples"),
        default,
        deserialize_with = "crate::decode::de::optional_percent"
    )]
    pub consumer_staples: Option<f64>,
    #[serde(
        rename(deserialize = "Health Care"),
        default,
        deserialize_with = "crate::decode::de::optional_percent"
    )]
    pub health_care: Option<f64>,
    #[serde(
        rename(deserialize = "Industrials"),
        default,
        deserialize_with = "crate::decode::de::optional_percent"
    )]
    pub industrials: Option<f64>,
    #[serde(
        rename(deserialize = "Materials"),
        default,
        deserialize_with = "crate::decode::de::optional_percent"
    )]
    pub materials: Option<f64>,
    #[serde(
        rename(deserialize = "Energy"),
        default,
        deserialize_with = "crate::decode::de::optional_percent"
    )]
    pub energy: Option<f64>,
    #[serde(
        rename(deserialize = "Information Technology"),
        default,
        deserialize_with = "crate::decode::de::optional_percent"
    )]
    pub information_technology: Option<f64>,
}

/// Sector performance across every ranking window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorPerformances {
    #[serde(rename(deserialize = "Rank A: Real-Time Performance"), default)]
    pub real_time: Option<SectorPerformance>,
    #[serde(rename(deserialize = "Rank B: 1 Day Performance"), default)]
    pub one_day: Option<SectorPerformance>,
    #[serde(rename(deserialize = "Rank C: 5 Day Performance"), default)]
    pub five_day: Option<SectorPerformance>,
    #[serde(rename(deserialize = "Rank D: 1 Month Performance"), default)]
    pub one_month: Option<SectorPerformance>,
    #[serde(rename(deserialize = "Rank E: 3 Month Performance"), default)]
    pub three_month: Option<SectorPerformance>,
    #[serde(
        rename(deserialize = "Rank F: Year-to-Date (YTD) Performance"),
        default
    )]
    pub year_to_date: Option<SectorPerformance>,
    #[serde(rename(deserialize = "Rank G: 1 Year Performance"), default)]
    pub one_year: Option<SectorPerformance>,
    #[serde(rename(deserialize = "Rank H: 3 Year Performance"), default)]
    pub three_year: Option<SectorPerformance>,
    #[serde(rename(deserialize = "Rank I: 5 Year Performance"), default)]
    pub five_year: Option<SectorPerformance>,
    #[serde(rename(deserialize = "Rank J: 10 Year Performance"), default)]
    pub ten_year: Option<SectorPerformance>,
}

impl Client {
    pub async fn sector_performances(&self) -> Result<SectorPerformances> {
        self.get_json(QUERY_PATH, Query::new().with("function", "SECTOR"))
            .await
    }
}
