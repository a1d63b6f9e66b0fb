//! Stock, forex, and cryptocurrency time series.
//!
//! See <https://www.alphavantage.co/documentation/#time-series-data>.

use serde::Serialize;

use crate::client::Query;
use crate::decode::{DecodeError, FromRow, Row};
use crate::endpoints::{series_query, QUERY_PATH};
use crate::{Client, Error, Interval, OutputSize, UtcDateTime};

/// One bar of a stock time series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockQuote {
    pub timestamp: UtcDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

impl FromRow for StockQuote {
    fn from_row(row: &Row<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            timestamp: row.timestamp("timestamp")?,
            open: row.float("open")?,
            high: row.float("high")?,
            low: row.float("low")?,
            close: row.float("close")?,
            volume: row.integer("volume")?,
        })
    }
}

/// One bar of a split/dividend adjusted stock time series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockQuoteAdjusted {
    pub timestamp: UtcDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub adjusted_close: f64,
    pub volume: i64,
    pub dividend_amount: f64,
    pub split_coefficient: f64,
}

impl FromRow for StockQuoteAdjusted {
    fn from_row(row: &Row<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            timestamp: row.timestamp("timestamp")?,
            open: row.float("open")?,
            high: row.float("high")?,
            low: row.float("low")?,
            close: row.float("close")?,
            adjusted_close: row.float("adjusted_close")?,
            volume: row.integer("volume")?,
            dividend_amount: row.float("dividend_amount")?,
            split_coefficient: row.float("split_coefficient")?,
        })
    }
}

/// One bar of a currency pair time series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForexQuote {
    pub timestamp: UtcDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl FromRow for ForexQuote {
    fn from_row(row: &Row<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            timestamp: row.timestamp("timestamp")?,
            open: row.float("open")?,
            high: row.float("high")?,
            low: row.float("low")?,
            close: row.float("close")?,
        })
    }
}

/// One bar of a cryptocurrency time series, priced in USD.
///
/// The provider also returns prices in the requested market currency; those
/// columns are ignored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CryptoQuote {
    pub timestamp: UtcDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub market_cap: f64,
}

impl FromRow for CryptoQuote {
    fn from_row(row: &Row<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            timestamp: row.timestamp("timestamp")?,
            open: row.float("open (USD)")?,
            high: row.float("high (USD)")?,
            low: row.float("low (USD)")?,
            close: row.float("close (USD)")?,
            volume: row.float("volume")?,
            market_cap: row.float("market cap (USD)")?,
        })
    }
}

impl Client {
    /// Streams stock bars for `symbol`, newest first as the provider orders them.
    pub async fn stock_time_series<F, E>(
        &self,
        symbol: &str,
        interval: Interval,
        output_size: OutputSize,
        consumer: F,
    ) -> Result<(), E>
    where
        F: FnMut(StockQuote) -> Result<(), E>,
        E: From<Error>,
    {
        let query = series_query("TIME_SERIES", interval)
            .with("symbol", symbol)
            .with("outputsize", output_size.as_str());
        self.for_each_csv(QUERY_PATH, query, consumer).await
    }

    /// Streams adjusted stock bars. Only daily, weekly, and monthly intervals exist.
    pub async fn stock_time_series_adjusted<F, E>(
        &self,
        symbol: &str,
        interval: Interval,
        output_size: OutputSize,
        consumer: F,
    ) -> Result<(), E>
    where
        F: FnMut(StockQuoteAdjusted) -> Result<(), E>,
        E: From<Error>,
    {
        let Some(period) = interval.period() else {
            return Err(Error::UnsupportedInterval {
                interval,
                reason: "adjusted stock series are only available daily, weekly, and monthly",
            }
            .into());
        };

        let query = Query::new()
            .with("function", format!("TIME_SERIES_{period}_ADJUSTED"))
            .with("symbol", symbol)
            .with("outputsize", output_size.as_str());
        self.for_each_csv(QUERY_PATH, query, consumer).await
    }

    /// Streams bars for the `from`/`to` currency pair.
    pub async fn forex_time_series<F, E>(
        &self,
        from: &str,
        to: &str,
        interval: Interval,
        output_size: OutputSize,
        consumer: F,
    ) -> Result<(), E>
    where
        F: FnMut(ForexQuote) -> Result<(), E>,
        E: From<Error>,
    {
        let query = series_query("FX", interval)
            .with("from_symbol", from)
            .with("to_symbol", to)
            .with("outputsize", output_size.as_str());
        self.for_each_csv(QUERY_PATH, query, consumer).await
    }

    /// Streams bars for a cryptocurrency traded on `market`.
    ///
    /// Intraday intervals fail before any request is sent.
    pub async fn crypto_time_series<F, E>(
        &self,
        symbol: &str,
        market: &str,
        interval: Interval,
        consumer: F,
    ) -> Result<(), E>
    where
        F: FnMut(CryptoQuote) -> Result<(), E>,
        E: From<Error>,
    {
        if interval.is_intraday() {
            return Err(Error::UnsupportedInterval {
                interval,
                reason: "only daily, weekly, and monthly intervals are supported for cryptocurrencies",
            }
            .into());
        }

        let query = series_query("DIGITAL_CURRENCY", interval)
            .with("symbol", symbol)
            .with("market", market);
        self.for_each_csv(QUERY_PATH, query, consumer).await
    }
}
