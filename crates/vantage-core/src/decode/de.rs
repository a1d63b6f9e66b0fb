//! `deserialize_with` adapters for JSON fields the provider encodes as strings.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};

use crate::decode::scalar;
use crate::UtcDateTime;

pub(crate) fn float_from_str<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    scalar::parse_float(&value).map_err(D::Error::custom)
}

pub(crate) fn date_time<'de, D>(deserializer: D) -> Result<UtcDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    scalar::parse_date_time(&value).map_err(D::Error::custom)
}

pub(crate) fn optional_percent<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|value| scalar::parse_percent(&value).map_err(D::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "float_from_str")]
        rate: f64,
        #[serde(deserialize_with = "date_time")]
        at: UtcDateTime,
        #[serde(default, deserialize_with = "optional_percent")]
        change: Option<f64>,
    }

    #[test]
    fn string_encoded_fields_are_parsed() {
        let sample: Sample = serde_json::from_str(
            r#"{"rate": "108.24000000", "at": "2019-09-18 03:22:34", "change": "0.89%"}"#,
        )
        .expect("must decode");

        assert_eq!(sample.rate, 108.24);
        assert_eq!(sample.at.format_rfc3339(), "2019-09-18T03:22:34Z");
        assert_eq!(sample.change, Some(0.89 / 100.0));
    }

    #[test]
    fn absent_optional_percent_is_none() {
        let sample: Sample =
            serde_json::from_str(r#"{"rate": "1", "at": "2019-09-18 00:00:00"}"#)
                .expect("must decode");
        assert_eq!(sample.change, None);
    }

    #[test]
    fn malformed_values_surface_as_json_errors() {
        let err = serde_json::from_str::<Sample>(
            r#"{"rate": "n/a", "at": "2019-09-18 00:00:00"}"#,
        )
        .expect_err("must fail");
        assert!(err.to_string().contains("invalid number 'n/a'"));
    }
}
