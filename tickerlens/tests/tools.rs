use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tickerlens::tools::{self, DEFAULT_MONTHS_BACK};
use tickerlens::{Dataset, FinancialType, HistoryQuery, LensError, Symbol, Tickerlens};
use tickerlens_core::connector::{
    HistoryProvider, MarketConnector, StatementsProvider,
};
use tickerlens_mock::MockConnector;

fn lens() -> Tickerlens {
    Tickerlens::new(Arc::new(MockConnector::new()))
}

fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Connector that counts provider invocations, for asserting that argument
/// validation rejects bad input before any provider call happens.
#[derive(Default)]
struct CountingConnector {
    calls: AtomicUsize,
}

#[async_trait]
impl HistoryProvider for CountingConnector {
    async fn history(&self, _symbol: &Symbol, _query: &HistoryQuery) -> Result<Dataset, LensError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Dataset::table(vec![serde_json::json!({"close": 1.0})]))
    }
}

#[async_trait]
impl StatementsProvider for CountingConnector {
    async fn financial_statement(
        &self,
        _symbol: &Symbol,
        _kind: FinancialType,
    ) -> Result<Dataset, LensError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Dataset::table(vec![serde_json::json!({"total": 1})]))
    }
}

impl MarketConnector for CountingConnector {
    fn name(&self) -> &'static str {
        "counting"
    }
    fn vendor(&self) -> &'static str {
        "Test"
    }
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self)
    }
    fn as_statements_provider(&self) -> Option<&dyn StatementsProvider> {
        Some(self)
    }
}

#[tokio::test]
async fn known_ticker_renders_data_as_text() {
    let out = tools::get_stock_info(&lens(), "AAPL").await;
    assert!(out.contains("Apple Inc."), "{out}");
    assert!(!out.starts_with("Error:"), "{out}");
}

#[tokio::test]
async fn unknown_ticker_renders_not_found_text() {
    let out = tools::get_stock_info(&lens(), "INVALIDTICKER123456").await;
    assert!(out.starts_with("Error:"), "{out}");
    assert!(out.to_lowercase().contains("not found"), "{out}");
    assert!(out.contains("INVALIDTICKER123456"), "{out}");
}

#[tokio::test]
async fn unknown_ticker_history_renders_not_found_text() {
    let out = tools::get_historical_stock_prices(&lens(), "INVALIDTICKER123456", None, None).await;
    assert!(out.starts_with("Error:"), "{out}");
    assert!(out.to_lowercase().contains("not found"), "{out}");
    assert!(out.contains("INVALIDTICKER123456"), "{out}");
}

#[tokio::test]
async fn empty_ticker_is_rejected() {
    let out = tools::get_historical_stock_prices(&lens(), "   ", None, None).await;
    assert!(out.starts_with("Error:"), "{out}");
    assert!(out.contains("ticker symbol cannot be empty"), "{out}");
}

#[tokio::test]
async fn empty_dataset_renders_no_data_message() {
    let out = tools::get_holder_info(&lens(), "EMPTY", "institutional_holders").await;
    assert_eq!(
        out,
        "Error: no institutional_holders data available for EMPTY"
    );
}

#[tokio::test]
async fn provider_failure_renders_error_text() {
    let out = tools::get_historical_stock_prices(&lens(), "FAIL", None, None).await;
    assert!(out.starts_with("Error:"), "{out}");
    assert!(out.to_lowercase().contains("error"), "{out}");
}

#[tokio::test]
async fn invalid_selector_is_rejected_before_any_provider_call() {
    let connector = Arc::new(CountingConnector::default());
    let lens = Tickerlens::new(Arc::clone(&connector) as Arc<dyn MarketConnector>);

    let out = tools::get_financial_statement(&lens, "AAPL", "weekly_income_stmt").await;
    assert!(out.starts_with("Error:"), "{out}");
    assert!(out.contains("unknown financial_type"), "{out}");
    assert_eq!(connector.calls.load(Ordering::SeqCst), 0);

    let out = tools::get_financial_statement(&lens, "AAPL", "income_stmt").await;
    assert!(!out.starts_with("Error:"), "{out}");
    assert_eq!(connector.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn selector_matching_is_case_sensitive() {
    let connector = Arc::new(CountingConnector::default());
    let lens = Tickerlens::new(Arc::clone(&connector) as Arc<dyn MarketConnector>);

    let out = tools::get_financial_statement(&lens, "AAPL", "Income_Stmt").await;
    assert!(out.starts_with("Error:"), "{out}");
    assert_eq!(connector.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unsupported_capability_renders_error_text() {
    let connector = Arc::new(CountingConnector::default());
    let lens = Tickerlens::new(connector as Arc<dyn MarketConnector>);

    let out = tools::get_yahoo_finance_news(&lens, "AAPL", 5).await;
    assert!(out.starts_with("Error:"), "{out}");
    assert!(out.contains("unsupported capability"), "{out}");
}

#[tokio::test]
async fn upgrades_downgrades_drop_rows_older_than_window() {
    let out = tools::get_recommendations(&lens(), "AAPL", "upgrades_downgrades", DEFAULT_MONTHS_BACK)
        .await;
    let rows: Vec<Value> = serde_json::from_str(&out).expect("table output parses as JSON");
    // Fixtures hold one row 12 days old and one 400 days old.
    assert_eq!(rows.len(), 1, "{out}");

    let out = tools::get_recommendations(&lens(), "AAPL", "upgrades_downgrades", 24).await;
    let rows: Vec<Value> = serde_json::from_str(&out).expect("table output parses as JSON");
    assert_eq!(rows.len(), 2, "{out}");
}

#[tokio::test]
async fn plain_recommendations_are_not_windowed() {
    let out = tools::get_recommendations(&lens(), "AAPL", "recommendations", 1).await;
    let rows: Vec<Value> = serde_json::from_str(&out).expect("table output parses as JSON");
    assert_eq!(rows.len(), 3, "{out}");
}

#[tokio::test]
async fn option_chain_accepts_date_and_epoch_expirations() {
    let by_date = tools::get_option_chain(&lens(), "AAPL", Some("2025-06-20"), "calls").await;
    assert!(!by_date.starts_with("Error:"), "{by_date}");

    let by_epoch = tools::get_option_chain(&lens(), "AAPL", Some("1750377600"), "puts").await;
    assert!(!by_epoch.starts_with("Error:"), "{by_epoch}");

    let bad = tools::get_option_chain(&lens(), "AAPL", Some("June 2025"), "calls").await;
    assert!(bad.starts_with("Error:"), "{bad}");

    let bad_side = tools::get_option_chain(&lens(), "AAPL", None, "straddles").await;
    assert!(bad_side.starts_with("Error:"), "{bad_side}");
}

#[tokio::test]
async fn repeated_requests_agree_on_outcome() {
    let lens = lens();
    for ticker in ["AAPL", "INVALIDTICKER123456", "EMPTY"] {
        let first = tools::get_stock_actions(&lens, ticker).await;
        let second = tools::get_stock_actions(&lens, ticker).await;
        assert_eq!(
            first.starts_with("Error:"),
            second.starts_with("Error:"),
            "{ticker}"
        );
    }
}

#[tokio::test]
async fn dispatch_requires_a_ticker() {
    let out = tools::dispatch(&lens(), "get_stock_info", &HashMap::new()).await;
    assert_eq!(out, "Error: missing required param: ticker");
}

#[tokio::test]
async fn dispatch_rejects_unknown_tools() {
    let out = tools::dispatch(&lens(), "get_crystal_ball", &args(&[("ticker", "AAPL")])).await;
    assert_eq!(out, "Error: unknown tool: get_crystal_ball");
}

#[tokio::test]
async fn dispatch_covers_every_cataloged_tool() {
    let lens = lens();
    let full = args(&[
        ("ticker", "MSFT"),
        ("financial_type", "quarterly_cashflow"),
        ("holder_type", "major_holders"),
        ("recommendation_type", "recommendations"),
        ("option_type", "puts"),
        ("period", "1mo"),
        ("interval", "1d"),
    ]);
    for spec in tools::catalog() {
        let out = tools::dispatch(&lens, spec.name, &full).await;
        assert!(!out.starts_with("Error:"), "{}: {out}", spec.name);
    }
}

#[tokio::test]
async fn dispatch_reports_missing_selector_params() {
    let out = tools::dispatch(
        &lens(),
        "get_financial_statement",
        &args(&[("ticker", "AAPL")]),
    )
    .await;
    assert_eq!(out, "Error: missing required param: financial_type");

    let out = tools::dispatch(&lens(), "get_recommendations", &args(&[("ticker", "AAPL")])).await;
    assert_eq!(out, "Error: missing required param: recommendation_type");
}

#[tokio::test]
async fn dispatch_validates_numeric_params() {
    let out = tools::dispatch(
        &lens(),
        "get_recommendations",
        &args(&[
            ("ticker", "AAPL"),
            ("recommendation_type", "upgrades_downgrades"),
            ("months_back", "twelve"),
        ]),
    )
    .await;
    assert!(out.starts_with("Error:"), "{out}");
    assert!(out.contains("months_back"), "{out}");
}
