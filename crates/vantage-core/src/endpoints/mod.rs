//! # Endpoints
//!
//! One module per endpoint family. Each defines its record types and the
//! [`Client`](crate::Client) methods that fetch them.
//!
//! | Module | Methods | Format |
//! |--------|---------|--------|
//! | [`time_series`] | stock, adjusted stock, forex and crypto series | CSV |
//! | [`latest_quote`] | latest stock quote | CSV |
//! | [`search`] | symbol search | CSV |
//! | [`currencies`] | digital and physical currency lists | CSV |
//! | [`sector`] | sector performances | JSON |
//! | [`exchange_rate`] | realtime exchange rate | JSON |
//!
//! Multi-row methods take a consumer closure that receives each record as it
//! is decoded. Returning `Err` from the consumer stops the call and the error
//! comes back unchanged from the method.

pub mod currencies;
pub mod exchange_rate;
pub mod latest_quote;
pub mod search;
pub mod sector;
pub mod time_series;

use crate::client::Query;
use crate::Interval;

/// Path shared by every function-style endpoint.
pub(crate) const QUERY_PATH: &str = "/query";

/// `function` (and `interval` for intraday) for a `{prefix}_*` series family.
pub(crate) fn series_query(prefix: &str, interval: Interval) -> Query {
    match interval.period() {
        Some(period) => Query::new().with("function", format!("{prefix}_{period}")),
        None => Query::new()
            .with("function", format!("{prefix}_INTRADAY"))
            .with("interval", interval.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intraday_series_carry_interval_parameter() {
        let query = series_query("FX", Interval::FiveMinutes);
        assert_eq!(query.get("function"), Some("FX_INTRADAY"));
        assert_eq!(query.get("interval"), Some("5min"));
    }

    #[test]
    fn daily_and_longer_series_encode_period_in_function() {
        let query = series_query("TIME_SERIES", Interval::Monthly);
        assert_eq!(query.get("function"), Some("TIME_SERIES_MONTHLY"));
        assert_eq!(query.get("interval"), None);
    }
}
