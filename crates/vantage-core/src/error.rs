use thiserror::Error;

use crate::decode::DecodeError;
use crate::http_client::HttpError;
use crate::Interval;

/// Errors raised when parsing request parameters from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "invalid interval '{value}', expected one of 1min, 5min, 15min, 30min, 60min, daily, weekly, monthly"
    )]
    InvalidInterval { value: String },
    #[error("invalid output size '{value}', expected compact or full")]
    InvalidOutputSize { value: String },
}

/// Coarse classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Status,
    RateLimited,
    Decode,
    InvalidRequest,
}

/// Top-level error type for client calls.
#[derive(Debug, Error)]
pub enum Error {
    #[error("alphavantage transport error: {0}")]
    Transport(#[from] HttpError),

    #[error("alphavantage returned status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("alphavantage: rate limit exceeded")]
    RateLimitExceeded,

    #[error("failed to decode JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read CSV response: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("interval {interval} is not supported: {reason}")]
    UnsupportedInterval {
        interval: Interval,
        reason: &'static str,
    },

    #[error("response contained no records")]
    EmptyResponse,
}

impl Error {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::Status { .. } => ErrorKind::Status,
            Self::RateLimitExceeded => ErrorKind::RateLimited,
            Self::Json(_) | Self::Csv(_) | Self::Decode(_) | Self::EmptyResponse => {
                ErrorKind::Decode
            }
            Self::UnsupportedInterval { .. } => ErrorKind::InvalidRequest,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_has_its_own_kind() {
        assert_eq!(Error::RateLimitExceeded.kind(), ErrorKind::RateLimited);
        assert_eq!(
            Error::Status {
                url: String::from("https://example.test"),
                status: 500
            }
            .kind(),
            ErrorKind::Status
        );
    }

    #[test]
    fn decode_failures_share_a_kind() {
        let missing = Error::from(DecodeError::MissingColumn {
            column: String::from("open"),
        });
        assert_eq!(missing.kind(), ErrorKind::Decode);
        assert_eq!(missing.to_string(), "missing column 'open'");
        assert_eq!(Error::EmptyResponse.kind(), ErrorKind::Decode);
    }
}
