//! # Vantage Core
//!
//! Async client for the Alpha Vantage market data API.
//!
//! ## Overview
//!
//! - **Typed records** for stock, forex, and cryptocurrency series, latest
//!   quotes, symbol search, sector performance, exchange rates, and currency lists
//! - **Streaming CSV decoding**: multi-row endpoints hand each record to a
//!   caller-supplied consumer as soon as it is decoded
//! - **Rate-limit detection**: a JSON reply to a CSV request surfaces as
//!   [`Error::RateLimitExceeded`]
//! - **Pluggable transport** through the [`HttpClient`] trait
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Query building and request dispatch |
//! | [`config`] | Base URL, API key, and transport settings |
//! | [`decode`] | Scalar parsers and CSV row binding |
//! | [`domain`] | Interval, output size, and timestamp types |
//! | [`endpoints`] | Records and methods for each API function |
//! | [`error`] | Error types |
//! | [`http_client`] | HTTP client abstraction |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vantage_core::{Client, Error, Interval, OutputSize};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let client = Client::from_env()?;
//!
//!     let quote = client.latest_stock_quote("MSFT").await?;
//!     println!("MSFT {:.2} ({:+.2}%)", quote.price, quote.change_percent * 100.0);
//!
//!     client
//!         .stock_time_series("MSFT", Interval::Daily, OutputSize::Compact, |bar| {
//!             println!("{} close {:.2}", bar.timestamp, bar.close);
//!             Ok::<(), Error>(())
//!         })
//!         .await
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use vantage_core::{Error, ErrorKind};
//!
//! fn handle_error(error: Error) {
//!     match error.kind() {
//!         ErrorKind::RateLimited => {
//!             // Back off; the free tier allows a few calls per minute
//!         }
//!         ErrorKind::InvalidRequest => {
//!             // Fix the parameters; nothing was sent
//!         }
//!         _ => {}
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - The API key is read from `ALPHA_VANTAGE_API_KEY` or passed explicitly
//! - The key is masked in logs, in `Debug` output, and in status errors

pub mod client;
pub mod config;
pub mod decode;
pub mod domain;
pub mod endpoints;
pub mod error;
pub mod http_client;

// Client and dispatch
pub use client::{is_rate_limited, Client, Query};

// Configuration
pub use config::ClientConfig;

// Decoding
pub use decode::{DecodeError, FromRow, Records, Row, ScalarError};

// Domain types
pub use domain::{Interval, OutputSize, UtcDateTime};

// Records
pub use endpoints::currencies::Currency;
pub use endpoints::exchange_rate::ExchangeRate;
pub use endpoints::latest_quote::LatestStockQuote;
pub use endpoints::search::SearchResult;
pub use endpoints::sector::{SectorPerformance, SectorPerformances};
pub use endpoints::time_series::{CryptoQuote, ForexQuote, StockQuote, StockQuoteAdjusted};

// Error types
pub use error::{Error, ErrorKind, Result, ValidationError};

// HTTP client types
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
