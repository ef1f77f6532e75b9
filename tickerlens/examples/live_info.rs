//! Fetch live data from Yahoo Finance for a ticker given on the command line.
//!
//! ```sh
//! cargo run -p tickerlens --example live_info -- AAPL
//! ```

use std::sync::Arc;

use tickerlens::Tickerlens;
use tickerlens::tools;
use tickerlens_yfinance::YfConnector;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let ticker = std::env::args().nth(1).unwrap_or_else(|| "AAPL".to_string());
    let lens = Tickerlens::new(Arc::new(YfConnector::new_default()));

    println!("{}", tools::get_stock_info(&lens, &ticker).await);
    println!(
        "{}",
        tools::get_historical_stock_prices(&lens, &ticker, Some("5d"), Some("1d")).await
    );
}
