//! Run the tool surface against the deterministic mock connector.
//!
//! ```sh
//! cargo run -p tickerlens --example quickstart
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use tickerlens::Tickerlens;
use tickerlens::tools;
use tickerlens_mock::MockConnector;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let lens = Tickerlens::new(Arc::new(MockConnector::new()));

    println!("== tool catalog ==");
    for spec in tools::catalog() {
        println!("- {}: {}", spec.name, spec.description);
    }

    let mut args = HashMap::new();
    args.insert("ticker".to_string(), "AAPL".to_string());
    args.insert("financial_type".to_string(), "income_stmt".to_string());

    println!("\n== get_stock_info AAPL ==");
    println!("{}", tools::dispatch(&lens, "get_stock_info", &args).await);

    println!("\n== get_financial_statement AAPL income_stmt ==");
    println!(
        "{}",
        tools::dispatch(&lens, "get_financial_statement", &args).await
    );

    args.insert("ticker".to_string(), "INVALIDTICKER123456".to_string());
    println!("\n== get_stock_info with an unknown ticker ==");
    println!("{}", tools::dispatch(&lens, "get_stock_info", &args).await);
}
