//! Streams a daily series and keeps a running high without buffering the rows.
//!
//! ```text
//! ALPHA_VANTAGE_API_KEY=... cargo run -p vantage-core --example stream_time_series -- MSFT 2019-06-01
//! ```

use time::macros::format_description;
use time::Date;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vantage_core::{Client, Error, Interval, OutputSize, UtcDateTime};

#[derive(Debug)]
enum DemoError {
    Api(Error),
    BadDate(String),
    ReachedStart,
}

impl std::fmt::Display for DemoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api(error) => write!(f, "{error}"),
            Self::BadDate(text) => write!(f, "bad start date '{text}', expected YYYY-MM-DD"),
            Self::ReachedStart => f.write_str("reached start date"),
        }
    }
}

impl From<Error> for DemoError {
    fn from(error: Error) -> Self {
        Self::Api(error)
    }
}

#[tokio::main]
async fn main() -> Result<(), DemoError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let symbol = args.next().unwrap_or_else(|| String::from("MSFT"));
    let start = match args.next() {
        Some(text) => Date::parse(&text, format_description!("[year]-[month]-[day]"))
            .map_err(|_| {
                let bad = DemoError::BadDate(text);
                error!(%bad, "cannot stream");
                bad
            })?,
        None => UtcDateTime::now().date() - time::Duration::days(30),
    };

    let client = Client::from_env()?;
    let output_size = OutputSize::since_today(start);
    info!(%symbol, %start, %output_size, "streaming daily bars");

    let mut rows = 0usize;
    let mut high = f64::MIN;
    let result = client
        .stock_time_series(&symbol, Interval::Daily, output_size, |bar| {
            // Rows arrive newest first, so the first bar older than `start` ends the walk.
            if bar.timestamp.date() < start {
                return Err(DemoError::ReachedStart);
            }
            rows += 1;
            high = high.max(bar.high);
            Ok(())
        })
        .await;

    match result {
        Ok(()) | Err(DemoError::ReachedStart) => {
            info!(rows, high, "done");
            Ok(())
        }
        Err(other) => {
            error!(%other, "stream failed");
            Err(other)
        }
    }
}
