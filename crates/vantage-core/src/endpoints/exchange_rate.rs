use serde::{Deserialize, Serialize};

use crate::client::Query;
use crate::endpoints::QUERY_PATH;
use crate::{Client, Result, UtcDateTime};

/// Realtime rate between two currencies, physical or digital.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    #[serde(rename(deserialize = "1. From_Currency Code"))]
    pub from_currency_code: String,
    #[serde(rename(deserialize = "2. From_Currency Name"))]
    pub from_currency_name: String,
    #[serde(rename(deserialize = "3. To_Currency Code"))]
    pub to_currency_code: String,
    #[serde(rename(deserialize = "4. To_Currency Name"))]
    pub to_currency_name: String,
    #[serde(
        rename(deserialize = "5. Exchange Rate"),
        deserialize_with = "crate::decode::de::float_from_str"
    )]
    pub exchange_rate: f64,
    #[serde(
        rename(deserialize = "6. Last Refreshed"),
        deserialize_with = "crate::decode::de::date_time"
    )]
    pub last_refreshed: UtcDateTime,
    #[serde(rename(deserialize = "7. Time Zone"))]
    pub time_zone: String,
    #[serde(
        rename(deserialize = "8. Bid Price"),
        deserialize_with = "crate::decode::de::float_from_str"
    )]
    pub bid_price: f64,
    #[serde(
        rename(deserialize = "9. Ask Price"),
        deserialize_with = "crate::decode::de::float_from_str"
    )]
    pub ask_price: f64,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "Realtime Currency Exchange Rate")]
    rate: ExchangeRate,
}

impl Client {
    /// Fetches the current `from`/`to` rate.
    pub async fn exchange_rate(&self, from: &str, to: &str) -> Result<ExchangeRate> {
        let query = Query::new()
            .with("function", "CURRENCY_EXCHANGE_RATE")
            .with("from_currency", from)
            .with("to_currency", to);

        let envelope: Envelope = self.get_json(QUERY_PATH, query).await?;
        Ok(envelope.rate)
    }
}
