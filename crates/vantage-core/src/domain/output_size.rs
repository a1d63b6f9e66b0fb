use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::ValidationError;

/// Number of most recent data points the provider keeps in a compact response.
const COMPACT_DAYS: i64 = 100;

/// Amount of history returned by time series endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputSize {
    /// Latest 100 data points.
    #[default]
    Compact,
    /// Full available history.
    Full,
}

impl OutputSize {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Full => "full",
        }
    }

    /// Smallest output size whose history still reaches back to `date`.
    pub fn since(date: Date, today: Date) -> Self {
        if (today - date).whole_days() <= COMPACT_DAYS {
            Self::Compact
        } else {
            Self::Full
        }
    }

    pub fn since_today(date: Date) -> Self {
        Self::since(date, OffsetDateTime::now_utc().date())
    }
}

impl Display for OutputSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputSize {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "full" => Ok(Self::Full),
            other => Err(ValidationError::InvalidOutputSize {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn recent_dates_fit_in_compact_output() {
        let today = date!(2019 - 09 - 18);
        assert_eq!(OutputSize::since(today, today), OutputSize::Compact);
        assert_eq!(
            OutputSize::since(date!(2019 - 06 - 10), today),
            OutputSize::Compact
        );
    }

    #[test]
    fn older_dates_need_full_output() {
        let today = date!(2019 - 09 - 18);
        assert_eq!(
            OutputSize::since(date!(2019 - 06 - 09), today),
            OutputSize::Full
        );
        assert_eq!(
            OutputSize::since(date!(2001 - 01 - 02), today),
            OutputSize::Full
        );
    }

    #[test]
    fn parses_output_size() {
        assert_eq!("FULL".parse::<OutputSize>(), Ok(OutputSize::Full));
        assert!(matches!(
            "huge".parse::<OutputSize>(),
            Err(ValidationError::InvalidOutputSize { .. })
        ));
    }
}
