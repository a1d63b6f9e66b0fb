use serde::Serialize;

use crate::client::Query;
use crate::decode::{DecodeError, FromRow, Row};
use crate::endpoints::QUERY_PATH;
use crate::{Client, Error};

/// One match from a keyword search, best matches first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub symbol: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub region: String,
    /// Local opening time as sent, for example `09:30`.
    pub market_open: String,
    pub market_close: String,
    pub timezone: String,
    pub currency: String,
    /// Between 0 and 1.
    pub match_score: f64,
}

impl FromRow for SearchResult {
    fn from_row(row: &Row<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            symbol: row.text("symbol")?,
            name: row.text("name")?,
            asset_type: row.text("type")?,
            region: row.text("region")?,
            market_open: row.text("marketOpen")?,
            market_close: row.text("marketClose")?,
            timezone: row.text("timezone")?,
            currency: row.text("currency")?,
            match_score: row.float("matchScore")?,
        })
    }
}

impl Client {
    /// Streams symbols matching `keywords`.
    pub async fn search<F, E>(&self, keywords: &str, consumer: F) -> Result<(), E>
    where
        F: FnMut(SearchResult) -> Result<(), E>,
        E: From<Error>,
    {
        let query = Query::new()
            .with("function", "SYMBOL_SEARCH")
            .with("keywords", keywords);
        self.for_each_csv(QUERY_PATH, query, consumer).await
    }
}
