//! # Domain Types
//!
//! Request parameters and the timestamp type shared by every record.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Interval`] | Spacing between time series points (1min .. monthly) |
//! | [`OutputSize`] | Compact (latest 100 points) or full history |
//! | [`UtcDateTime`] | Provider timestamp interpreted as UTC |

mod interval;
mod output_size;
mod timestamp;

pub use interval::Interval;
pub use output_size::OutputSize;
pub use timestamp::UtcDateTime;
