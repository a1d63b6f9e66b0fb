//! Prints the latest quote and exchange rate for the symbols given on the
//! command line.
//!
//! ```text
//! ALPHA_VANTAGE_API_KEY=... RUST_LOG=vantage_core=debug \
//!     cargo run -p vantage-core --example latest_quote -- MSFT IBM
//! ```

use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vantage_core::{Client, Error, ErrorKind};

fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_logging();

    let client = Client::from_env()?;
    if !client.has_api_key() {
        warn!("ALPHA_VANTAGE_API_KEY is not set; most endpoints will refuse the request");
    }

    let mut symbols: Vec<String> = std::env::args().skip(1).collect();
    if symbols.is_empty() {
        symbols.push(String::from("MSFT"));
    }

    for symbol in &symbols {
        match client.latest_stock_quote(symbol).await {
            Ok(quote) => info!(
                symbol = %quote.symbol,
                price = quote.price,
                change_percent = quote.change_percent * 100.0,
                latest_day = %quote.latest_day,
                "latest quote"
            ),
            Err(error) if error.kind() == ErrorKind::RateLimited => {
                warn!("rate limit reached, stopping");
                return Ok(());
            }
            Err(error) => warn!(%symbol, %error, "quote failed"),
        }
    }

    let rate = client.exchange_rate("USD", "EUR").await?;
    info!(
        rate = rate.exchange_rate,
        refreshed = %rate.last_refreshed,
        "USD/EUR"
    );
    Ok(())
}
