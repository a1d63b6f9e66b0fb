use serde::Serialize;

use crate::client::Query;
use crate::decode::{DecodeError, FromRow, Row};
use crate::endpoints::QUERY_PATH;
use crate::{Client, Error, Result, UtcDateTime};

/// Latest price and volume for one symbol (`GLOBAL_QUOTE`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestStockQuote {
    pub symbol: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub price: f64,
    pub volume: i64,
    pub latest_day: UtcDateTime,
    pub previous_close: f64,
    pub change: f64,
    /// Fraction, so `0.0089` for a `0.89%` move.
    pub change_percent: f64,
}

impl FromRow for LatestStockQuote {
    fn from_row(row: &Row<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            symbol: row.text("symbol")?,
            open: row.float("open")?,
            high: row.float("high")?,
            low: row.float("low")?,
            price: row.float("price")?,
            volume: row.integer("volume")?,
            latest_day: row.date("latestDay")?,
            previous_close: row.float("previousClose")?,
            change: row.float("change")?,
            change_percent: row.percent("changePercent")?,
        })
    }
}

impl Client {
    /// Fetches the latest quote for `symbol`.
    ///
    /// Rows after the first are never read. A body with no data row is
    /// [`Error::EmptyResponse`].
    pub async fn latest_stock_quote(&self, symbol: &str) -> Result<LatestStockQuote> {
        let query = Query::new()
            .with("function", "GLOBAL_QUOTE")
            .with("symbol", symbol);

        let mut records = self.get_csv::<LatestStockQuote>(QUERY_PATH, query).await?;
        records.next().unwrap_or(Err(Error::EmptyResponse))
    }
}
