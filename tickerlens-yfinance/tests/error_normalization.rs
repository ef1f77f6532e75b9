#![cfg(feature = "test-adapters")]

use std::sync::Arc;

use tickerlens_core::{LensError, Symbol, connector::InfoProvider};
use tickerlens_yfinance::{YfConnector, adapter};

struct Combo {
    i: Arc<dyn adapter::YfInfo>,
}
impl adapter::CloneArcAdapters for Combo {
    fn clone_arc_info(&self) -> Arc<dyn adapter::YfInfo> {
        self.i.clone()
    }
}

#[tokio::test]
async fn other_error_becomes_provider_error_with_name() {
    let info = <dyn adapter::YfInfo>::from_fn(|_symbol| {
        Err(LensError::Other("some http error".to_string()))
    });

    let yf = YfConnector::from_adapter(&Combo { i: info });

    let symbol = Symbol::new("AAPL").expect("valid test symbol");
    let err = yf.info(&symbol).await.unwrap_err();
    match err {
        LensError::Provider { provider, .. } => assert_eq!(provider, "tickerlens-yfinance"),
        _ => panic!("expected provider error"),
    }
}

#[tokio::test]
async fn not_found_message_maps_to_not_found() {
    let info = <dyn adapter::YfInfo>::from_fn(|_symbol| {
        Err(LensError::provider("tickerlens-yfinance", "Not Found"))
    });

    let yf = YfConnector::from_adapter(&Combo { i: info });

    let symbol = Symbol::new("INVALIDTICKER123456").expect("valid test symbol");
    let err = yf.info(&symbol).await.unwrap_err();
    assert!(matches!(err, LensError::NotFound { .. }));
}

#[tokio::test]
async fn no_data_message_maps_to_not_found() {
    let info = <dyn adapter::YfInfo>::from_fn(|_symbol| {
        Err(LensError::provider("tickerlens-yfinance", "no data returned"))
    });

    let yf = YfConnector::from_adapter(&Combo { i: info });

    let symbol = Symbol::new("ZZZQ").expect("valid test symbol");
    let err = yf.info(&symbol).await.unwrap_err();
    assert!(matches!(err, LensError::NotFound { .. }));
}

#[tokio::test]
async fn rate_limited_preserves_provider() {
    let info = <dyn adapter::YfInfo>::from_fn(|_symbol| {
        Err(LensError::provider("tickerlens-yfinance", "rate limit"))
    });

    let yf = YfConnector::from_adapter(&Combo { i: info });

    let symbol = Symbol::new("AAPL").expect("valid test symbol");
    let err = yf.info(&symbol).await.unwrap_err();
    match err {
        LensError::Provider { provider, .. } => assert_eq!(provider, "tickerlens-yfinance"),
        _ => panic!("expected provider error"),
    }
}

#[tokio::test]
async fn empty_info_payload_maps_to_not_found() {
    let info = <dyn adapter::YfInfo>::from_fn(|_symbol| Ok(serde_json::json!({})));
    let yf = YfConnector::from_adapter(&Combo { i: info });

    let symbol = Symbol::new("INVALIDTICKER123456").expect("valid test symbol");
    let err = yf.info(&symbol).await.unwrap_err();
    match err {
        LensError::NotFound { what } => assert!(what.contains("INVALIDTICKER123456")),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[tokio::test]
async fn unused_seams_report_unsupported() {
    let info = <dyn adapter::YfInfo>::from_fn(|_symbol| Ok(serde_json::json!({})));
    let yf = YfConnector::from_adapter(&Combo { i: info });

    let symbol = Symbol::new("AAPL").expect("valid test symbol");
    let query = tickerlens_core::HistoryQuery::new(None, None);
    let err = tickerlens_core::connector::HistoryProvider::history(&yf, &symbol, &query)
        .await
        .unwrap_err();
    assert!(matches!(err, LensError::Unsupported { .. }));
}
