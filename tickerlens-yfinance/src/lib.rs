//! tickerlens-yfinance
//!
//! Production connector that implements `MarketConnector` on top of the
//! `yfinance-rs` client library. Exposes price history, company info, news,
//! corporate actions, financial statements, holder tables, analyst
//! recommendations, and option data.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `yfinance-rs`.
pub mod adapter;

use std::sync::Arc;

#[cfg(feature = "test-adapters")]
use adapter::CloneArcAdapters;
use adapter::{
    RealAdapter, YfActions, YfAnalysis, YfFundamentals, YfHistory, YfHolders, YfInfo, YfNews,
    YfOptions,
};
use async_trait::async_trait;
use tickerlens_core::{
    Dataset, FinancialType, HistoryQuery, HolderType, LensError, OptionType, RecommendationType,
    Symbol,
    connector::{
        ActionsProvider, HistoryProvider, HoldersProvider, InfoProvider, MarketConnector,
        NewsProvider, OptionsProvider, RecommendationsProvider, StatementsProvider,
    },
};

#[cfg(not(feature = "test-adapters"))]
type AdapterArc = Arc<RealAdapter>;

#[cfg(feature = "test-adapters")]
type HistoryAdapter = Arc<dyn YfHistory>;
#[cfg(not(feature = "test-adapters"))]
type HistoryAdapter = AdapterArc;

#[cfg(feature = "test-adapters")]
type InfoAdapter = Arc<dyn YfInfo>;
#[cfg(not(feature = "test-adapters"))]
type InfoAdapter = AdapterArc;

#[cfg(feature = "test-adapters")]
type NewsAdapter = Arc<dyn YfNews>;
#[cfg(not(feature = "test-adapters"))]
type NewsAdapter = AdapterArc;

#[cfg(feature = "test-adapters")]
type ActionsAdapter = Arc<dyn YfActions>;
#[cfg(not(feature = "test-adapters"))]
type ActionsAdapter = AdapterArc;

#[cfg(feature = "test-adapters")]
type FundamentalsAdapter = Arc<dyn YfFundamentals>;
#[cfg(not(feature = "test-adapters"))]
type FundamentalsAdapter = AdapterArc;

#[cfg(feature = "test-adapters")]
type HoldersAdapter = Arc<dyn YfHolders>;
#[cfg(not(feature = "test-adapters"))]
type HoldersAdapter = AdapterArc;

#[cfg(feature = "test-adapters")]
type AnalysisAdapter = Arc<dyn YfAnalysis>;
#[cfg(not(feature = "test-adapters"))]
type AnalysisAdapter = AdapterArc;

#[cfg(feature = "test-adapters")]
type OptionsAdapter = Arc<dyn YfOptions>;
#[cfg(not(feature = "test-adapters"))]
type OptionsAdapter = AdapterArc;

/// Public connector type. Production users will construct with `YfConnector::new_default()`.
pub struct YfConnector {
    history: HistoryAdapter,
    info: InfoAdapter,
    news: NewsAdapter,
    actions: ActionsAdapter,
    fundamentals: FundamentalsAdapter,
    holders: HoldersAdapter,
    analysis: AnalysisAdapter,
    options: OptionsAdapter,
}

impl YfConnector {
    /// Stable connector name reported through `MarketConnector::name`.
    pub const NAME: &'static str = "tickerlens-yfinance";

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("no matches")
    }

    fn normalize_error(e: LensError, what: &str) -> LensError {
        match e {
            LensError::Provider { provider: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    LensError::not_found(what.to_string())
                } else {
                    LensError::provider(Self::NAME, msg)
                }
            }
            LensError::Other(msg) => LensError::provider(Self::NAME, msg),
            other => other,
        }
    }

    /// Build with a fresh `yfinance_rs::YfClient` inside.
    #[must_use]
    pub fn new_default() -> Self {
        let a = RealAdapter::new_default();
        Self::from_adapter(&a)
    }

    /// Build from an existing `yfinance_rs::YfClient`.
    #[must_use]
    pub fn new_with_client(client: yfinance_rs::YfClient) -> Self {
        let a = RealAdapter::new(client);
        Self::from_adapter(&a)
    }

    /// Build from a provided `reqwest::Client` by constructing a `yfinance_rs::YfClient`.
    ///
    /// Note: The provided client should enable a cookie store for yfinance auth/crumb flow.
    ///
    /// # Errors
    /// Returns an error if the internal `YfClient` cannot be constructed from the provided HTTP client.
    pub fn try_new_with_reqwest_client(http: reqwest::Client) -> Result<Self, LensError> {
        let yf = yfinance_rs::YfClient::builder()
            .custom_client(http)
            .user_agent("Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36")
            .build()
            .map_err(|e| LensError::Other(e.to_string()))?;
        Ok(Self::new_with_client(yf))
    }

    /// For tests/injection (requires the `test-adapters` feature).
    ///
    /// Accepts a borrowed adapter to avoid unnecessary moves.
    #[cfg(feature = "test-adapters")]
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self {
            history: adapter.clone_arc_history(),
            info: adapter.clone_arc_info(),
            news: adapter.clone_arc_news(),
            actions: adapter.clone_arc_actions(),
            fundamentals: adapter.clone_arc_fundamentals(),
            holders: adapter.clone_arc_holders(),
            analysis: adapter.clone_arc_analysis(),
            options: adapter.clone_arc_options(),
        }
    }

    #[cfg(not(feature = "test-adapters"))]
    /// Build from a concrete `RealAdapter` by cloning it into shared handles.
    pub fn from_adapter(adapter: &RealAdapter) -> Self {
        let shared = Arc::new(adapter.clone());
        Self {
            history: Arc::clone(&shared),
            info: Arc::clone(&shared),
            news: Arc::clone(&shared),
            actions: Arc::clone(&shared),
            fundamentals: Arc::clone(&shared),
            holders: Arc::clone(&shared),
            analysis: Arc::clone(&shared),
            options: shared,
        }
    }
}

#[async_trait]
impl HistoryProvider for YfConnector {
    async fn history(&self, symbol: &Symbol, query: &HistoryQuery) -> Result<Dataset, LensError> {
        let raw = self
            .history
            .fetch(symbol.as_ref(), query.period.as_deref(), query.interval.as_deref())
            .await
            .map_err(|e| Self::normalize_error(e, &format!("history for {symbol}")))?;
        Ok(Dataset::from(raw))
    }
}

#[async_trait]
impl InfoProvider for YfConnector {
    async fn info(&self, symbol: &Symbol) -> Result<Dataset, LensError> {
        let raw = self
            .info
            .info(symbol.as_ref())
            .await
            .map_err(|e| Self::normalize_error(e, &format!("info for {symbol}")))?;
        // An empty info payload means the symbol resolved to nothing.
        if raw.is_null() || raw.as_object().is_some_and(|obj| obj.is_empty()) {
            return Err(LensError::not_found(format!("info for {symbol}")));
        }
        Ok(Dataset::record(raw))
    }
}

#[async_trait]
impl NewsProvider for YfConnector {
    async fn news(&self, symbol: &Symbol, count: u32) -> Result<Dataset, LensError> {
        let raw = self
            .news
            .news(symbol.as_ref(), count)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("news for {symbol}")))?;
        Ok(Dataset::from(raw))
    }
}

#[async_trait]
impl ActionsProvider for YfConnector {
    async fn actions(&self, symbol: &Symbol) -> Result<Dataset, LensError> {
        let raw = self
            .actions
            .actions(symbol.as_ref())
            .await
            .map_err(|e| Self::normalize_error(e, &format!("actions for {symbol}")))?;
        Ok(Dataset::from(raw))
    }
}

#[async_trait]
impl StatementsProvider for YfConnector {
    async fn financial_statement(
        &self,
        symbol: &Symbol,
        kind: FinancialType,
    ) -> Result<Dataset, LensError> {
        let quarterly = kind.is_quarterly();
        let raw = match kind {
            FinancialType::IncomeStmt | FinancialType::QuarterlyIncomeStmt => {
                self.fundamentals
                    .income_statement(symbol.as_ref(), quarterly)
                    .await
            }
            FinancialType::BalanceSheet | FinancialType::QuarterlyBalanceSheet => {
                self.fundamentals
                    .balance_sheet(symbol.as_ref(), quarterly)
                    .await
            }
            FinancialType::Cashflow | FinancialType::QuarterlyCashflow => {
                self.fundamentals.cashflow(symbol.as_ref(), quarterly).await
            }
        }
        .map_err(|e| Self::normalize_error(e, &format!("{kind} for {symbol}")))?;
        Ok(Dataset::from(raw))
    }
}

#[async_trait]
impl HoldersProvider for YfConnector {
    async fn holder_table(&self, symbol: &Symbol, kind: HolderType) -> Result<Dataset, LensError> {
        let raw = match kind {
            HolderType::MajorHolders => self.holders.major_holders(symbol.as_ref()).await,
            HolderType::InstitutionalHolders => {
                self.holders.institutional_holders(symbol.as_ref()).await
            }
            HolderType::MutualfundHolders => {
                self.holders.mutual_fund_holders(symbol.as_ref()).await
            }
            HolderType::InsiderTransactions => {
                self.holders.insider_transactions(symbol.as_ref()).await
            }
            HolderType::InsiderPurchases => self.holders.insider_purchases(symbol.as_ref()).await,
            HolderType::InsiderRosterHolders => {
                self.holders.insider_roster_holders(symbol.as_ref()).await
            }
        }
        .map_err(|e| Self::normalize_error(e, &format!("{kind} for {symbol}")))?;
        Ok(Dataset::from(raw))
    }
}

#[async_trait]
impl RecommendationsProvider for YfConnector {
    async fn recommendations(
        &self,
        symbol: &Symbol,
        kind: RecommendationType,
    ) -> Result<Dataset, LensError> {
        let raw = match kind {
            RecommendationType::Recommendations => {
                self.analysis.recommendations(symbol.as_ref()).await
            }
            RecommendationType::UpgradesDowngrades => {
                self.analysis.upgrades_downgrades(symbol.as_ref()).await
            }
        }
        .map_err(|e| Self::normalize_error(e, &format!("{kind} for {symbol}")))?;
        Ok(Dataset::from(raw))
    }
}

#[async_trait]
impl OptionsProvider for YfConnector {
    async fn option_expirations(&self, symbol: &Symbol) -> Result<Dataset, LensError> {
        let raw = self
            .options
            .expirations(symbol.as_ref())
            .await
            .map_err(|e| Self::normalize_error(e, &format!("option expirations for {symbol}")))?;
        Ok(Dataset::from(raw))
    }

    async fn option_chain(
        &self,
        symbol: &Symbol,
        date: Option<i64>,
        side: OptionType,
    ) -> Result<Dataset, LensError> {
        let raw = self
            .options
            .chain(symbol.as_ref(), date)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("option chain for {symbol}")))?;
        Ok(select_chain_side(raw, side))
    }
}

/// Pull the requested side out of a full option-chain payload.
///
/// Payloads keyed `calls`/`puts` are narrowed to the requested table. Anything
/// else is passed through unchanged so callers still see what the provider sent.
fn select_chain_side(raw: serde_json::Value, side: OptionType) -> Dataset {
    match raw {
        serde_json::Value::Object(mut map) => match map.remove(side.as_str()) {
            Some(table) => Dataset::from(table),
            None => Dataset::record(serde_json::Value::Object(map)),
        },
        other => Dataset::from(other),
    }
}

impl MarketConnector for YfConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self)
    }
    fn as_info_provider(&self) -> Option<&dyn InfoProvider> {
        Some(self)
    }
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self)
    }
    fn as_actions_provider(&self) -> Option<&dyn ActionsProvider> {
        Some(self)
    }
    fn as_statements_provider(&self) -> Option<&dyn StatementsProvider> {
        Some(self)
    }
    fn as_holders_provider(&self) -> Option<&dyn HoldersProvider> {
        Some(self)
    }
    fn as_recommendations_provider(&self) -> Option<&dyn RecommendationsProvider> {
        Some(self)
    }
    fn as_options_provider(&self) -> Option<&dyn OptionsProvider> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_not_found_messages_normalize() {
        let e = LensError::provider(YfConnector::NAME, "symbol not found: ZZZZ");
        let n = YfConnector::normalize_error(e, "info for ZZZZ");
        assert_eq!(n, LensError::not_found("info for ZZZZ"));
    }

    #[test]
    fn other_errors_become_provider_errors() {
        let e = LensError::Other("boom".into());
        let n = YfConnector::normalize_error(e, "info for AAPL");
        assert!(matches!(n, LensError::Provider { .. }));
    }

    #[test]
    fn structured_errors_pass_through() {
        let e = LensError::invalid_arg("unknown period: 2wk");
        let n = YfConnector::normalize_error(e.clone(), "history for AAPL");
        assert_eq!(n, e);
    }

    #[test]
    fn chain_side_selection_narrows_object_payloads() {
        let raw = serde_json::json!({
            "calls": [{"strike": 100.0}],
            "puts": [{"strike": 90.0}],
        });
        let calls = select_chain_side(raw.clone(), OptionType::Calls);
        assert_eq!(calls.rows().map(<[serde_json::Value]>::len), Some(1));
        let puts = select_chain_side(raw, OptionType::Puts);
        assert_eq!(puts.rows().map(<[serde_json::Value]>::len), Some(1));
    }
}
