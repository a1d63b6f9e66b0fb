//! Parsers for the loosely formatted scalar values the provider emits.

use thiserror::Error;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime};

use crate::UtcDateTime;

/// A single cell or JSON string that could not be read as the expected scalar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScalarError {
    #[error("invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },
    #[error("invalid date-time '{value}', expected YYYY-MM-DD HH:MM:SS")]
    InvalidDateTime { value: String },
    #[error("invalid timestamp '{value}', expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS")]
    InvalidTimestamp { value: String },
    #[error("percentage '{value}' has no trailing '%'")]
    MissingPercentSign { value: String },
    #[error("invalid percentage '{value}'")]
    InvalidPercent { value: String },
    #[error("invalid integer '{value}'")]
    InvalidInteger { value: String },
    #[error("invalid number '{value}'")]
    InvalidFloat { value: String },
}

/// Parses `YYYY-MM-DD` as midnight UTC.
pub fn parse_date(value: &str) -> Result<UtcDateTime, ScalarError> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map(UtcDateTime::from_date)
        .map_err(|_| ScalarError::InvalidDate {
            value: value.to_owned(),
        })
}

/// Parses `YYYY-MM-DD HH:MM:SS` as a UTC instant.
pub fn parse_date_time(value: &str) -> Result<UtcDateTime, ScalarError> {
    PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    )
    .map(UtcDateTime::from_primitive)
    .map_err(|_| ScalarError::InvalidDateTime {
        value: value.to_owned(),
    })
}

/// Accepts either a date or a full date-time, in that order.
pub fn parse_timestamp(value: &str) -> Result<UtcDateTime, ScalarError> {
    parse_date(value)
        .or_else(|_| parse_date_time(value))
        .map_err(|_| ScalarError::InvalidTimestamp {
            value: value.to_owned(),
        })
}

/// Converts `"0.89%"` to `0.0089`.
pub fn parse_percent(value: &str) -> Result<f64, ScalarError> {
    let number = value
        .trim()
        .strip_suffix('%')
        .ok_or_else(|| ScalarError::MissingPercentSign {
            value: value.to_owned(),
        })?;

    number
        .trim()
        .parse::<f64>()
        .map(|percent| percent / 100.0)
        .map_err(|_| ScalarError::InvalidPercent {
            value: value.to_owned(),
        })
}

pub fn parse_float(value: &str) -> Result<f64, ScalarError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ScalarError::InvalidFloat {
            value: value.to_owned(),
        })
}

/// Integer parsing that tolerates padding and whole-valued decimals such as `"1200.0"`.
pub fn parse_integer(value: &str) -> Result<i64, ScalarError> {
    let trimmed = value.trim();
    if let Ok(parsed) = trimmed.parse::<i64>() {
        return Ok(parsed);
    }

    match trimmed.parse::<f64>() {
        Ok(parsed)
            if parsed.is_finite()
                && parsed.fract() == 0.0
                && parsed.abs() <= i64::MAX as f64 =>
        {
            Ok(parsed as i64)
        }
        _ => Err(ScalarError::InvalidInteger {
            value: value.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_is_midnight_utc() {
        let ts = parse_date("2019-09-17").expect("must parse");
        assert_eq!(ts.format_rfc3339(), "2019-09-17T00:00:00Z");
    }

    #[test]
    fn date_rejects_other_shapes() {
        for input in ["2019-09-17 10:00:00", "17/09/2019", "2019-13-01", ""] {
            assert!(
                matches!(parse_date(input), Err(ScalarError::InvalidDate { .. })),
                "{input:?} should not parse as a date"
            );
        }
    }

    #[test]
    fn date_time_keeps_clock_time() {
        let ts = parse_date_time("2019-09-18 03:22:34").expect("must parse");
        assert_eq!(ts.format_rfc3339(), "2019-09-18T03:22:34Z");
        assert!(parse_date_time("2019-09-18").is_err());
    }

    #[test]
    fn timestamp_accepts_both_layouts() {
        assert_eq!(
            parse_timestamp("2019-09-18").expect("date").format_rfc3339(),
            "2019-09-18T00:00:00Z"
        );
        assert_eq!(
            parse_timestamp("2019-09-18 16:00:00")
                .expect("date-time")
                .format_rfc3339(),
            "2019-09-18T16:00:00Z"
        );
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(ScalarError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn percent_divides_by_one_hundred() {
        assert_eq!(parse_percent("1.40%"), Ok(1.40 / 100.0));
        assert_eq!(parse_percent("-0.04%"), Ok(-0.04 / 100.0));
        assert_eq!(parse_percent("0.7775%"), Ok(0.7775 / 100.0));
        assert!((parse_percent("0.89%").expect("must parse") - 0.0089).abs() < 1e-12);
    }

    #[test]
    fn percent_requires_suffix_and_number() {
        assert!(matches!(
            parse_percent("0.89"),
            Err(ScalarError::MissingPercentSign { .. })
        ));
        assert!(matches!(
            parse_percent("abc%"),
            Err(ScalarError::InvalidPercent { .. })
        ));
    }

    #[test]
    fn integer_tolerates_padding() {
        assert_eq!(parse_integer("13611682"), Ok(13_611_682));
        assert_eq!(parse_integer(" 16013000 "), Ok(16_013_000));
        assert_eq!(parse_integer("1200.0"), Ok(1200));
        assert!(parse_integer("12.5").is_err());
        assert!(parse_integer("n/a").is_err());
    }

    #[test]
    fn float_parses_plain_numbers() {
        assert_eq!(parse_float("136.9600"), Ok(136.96));
        assert!(matches!(
            parse_float("1,234"),
            Err(ScalarError::InvalidFloat { .. })
        ));
    }
}
