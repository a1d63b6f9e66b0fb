//! Response decoding: scalar parsers, CSV row binding, and JSON field adapters.

pub(crate) mod de;
pub mod scalar;
pub mod tabular;

pub use scalar::ScalarError;
pub use tabular::{DecodeError, FromRow, Header, Records, Row};
