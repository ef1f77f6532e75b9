//! tickerlens-mock
//!
//! Deterministic, network-free `MarketConnector` for tests and examples.
//!
//! Sentinel symbols steer edge cases:
//! - `"FAIL"` makes every capability return a provider error.
//! - `"EMPTY"` returns empty datasets rather than errors.
//!
//! Any other symbol outside the fixture set resolves to a not-found error.
#![warn(missing_docs)]

use async_trait::async_trait;
use tickerlens_core::connector::{
    ActionsProvider, HistoryProvider, HoldersProvider, InfoProvider, MarketConnector,
    NewsProvider, OptionsProvider, RecommendationsProvider, StatementsProvider,
};
use tickerlens_core::{
    Dataset, FinancialType, HistoryQuery, HolderType, LensError, OptionType, RecommendationType,
    Symbol,
};

mod fixtures;

/// Mock connector for CI-safe tests and examples. Serves deterministic fixture data.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Construct the connector. Stateless; fixtures are static.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> LensError {
        LensError::not_found(what.to_string())
    }

    async fn gate(symbol: &str, capability: &'static str) -> Result<Option<Dataset>, LensError> {
        match symbol {
            "FAIL" => Err(LensError::provider(
                "tickerlens-mock",
                format!("forced failure: {capability}"),
            )),
            "EMPTY" => Ok(Some(Dataset::table(Vec::new()))),
            s if fixtures::is_known(s) => Ok(None),
            s => Err(Self::not_found(&format!("{capability} for {s}"))),
        }
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(&self, symbol: &Symbol, _query: &HistoryQuery) -> Result<Dataset, LensError> {
        if let Some(empty) = Self::gate(symbol.as_ref(), "history").await? {
            return Ok(empty);
        }
        Ok(Dataset::from(fixtures::history::by_symbol(symbol.as_ref())))
    }
}

#[async_trait]
impl InfoProvider for MockConnector {
    async fn info(&self, symbol: &Symbol) -> Result<Dataset, LensError> {
        if Self::gate(symbol.as_ref(), "info").await?.is_some() {
            return Ok(Dataset::record(serde_json::Value::Object(
                serde_json::Map::new(),
            )));
        }
        Ok(Dataset::record(fixtures::info::by_symbol(symbol.as_ref())))
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    async fn news(&self, symbol: &Symbol, count: u32) -> Result<Dataset, LensError> {
        if let Some(empty) = Self::gate(symbol.as_ref(), "news").await? {
            return Ok(empty);
        }
        Ok(Dataset::from(fixtures::news::by_symbol(
            symbol.as_ref(),
            count,
        )))
    }
}

#[async_trait]
impl ActionsProvider for MockConnector {
    async fn actions(&self, symbol: &Symbol) -> Result<Dataset, LensError> {
        if let Some(empty) = Self::gate(symbol.as_ref(), "actions").await? {
            return Ok(empty);
        }
        Ok(Dataset::from(fixtures::actions::by_symbol(symbol.as_ref())))
    }
}

#[async_trait]
impl StatementsProvider for MockConnector {
    async fn financial_statement(
        &self,
        symbol: &Symbol,
        kind: FinancialType,
    ) -> Result<Dataset, LensError> {
        if let Some(empty) = Self::gate(symbol.as_ref(), "financial statement").await? {
            return Ok(empty);
        }
        let endpoint = match kind {
            FinancialType::IncomeStmt | FinancialType::QuarterlyIncomeStmt => "income_statement",
            FinancialType::BalanceSheet | FinancialType::QuarterlyBalanceSheet => "balance_sheet",
            FinancialType::Cashflow | FinancialType::QuarterlyCashflow => "cashflow",
        };
        Ok(Dataset::from(fixtures::statements::by_symbol(
            symbol.as_ref(),
            endpoint,
            kind.is_quarterly(),
        )))
    }
}

#[async_trait]
impl HoldersProvider for MockConnector {
    async fn holder_table(&self, symbol: &Symbol, kind: HolderType) -> Result<Dataset, LensError> {
        if let Some(empty) = Self::gate(symbol.as_ref(), "holders").await? {
            return Ok(empty);
        }
        Ok(Dataset::from(fixtures::holders::by_symbol(
            symbol.as_ref(),
            kind.as_str(),
        )))
    }
}

#[async_trait]
impl RecommendationsProvider for MockConnector {
    async fn recommendations(
        &self,
        symbol: &Symbol,
        kind: RecommendationType,
    ) -> Result<Dataset, LensError> {
        if let Some(empty) = Self::gate(symbol.as_ref(), "recommendations").await? {
            return Ok(empty);
        }
        let raw = match kind {
            RecommendationType::Recommendations => {
                fixtures::analysis::recommendations(symbol.as_ref())
            }
            RecommendationType::UpgradesDowngrades => {
                fixtures::analysis::upgrades_downgrades(symbol.as_ref())
            }
        };
        Ok(Dataset::from(raw))
    }
}

#[async_trait]
impl OptionsProvider for MockConnector {
    async fn option_expirations(&self, symbol: &Symbol) -> Result<Dataset, LensError> {
        if let Some(empty) = Self::gate(symbol.as_ref(), "option expirations").await? {
            return Ok(empty);
        }
        Ok(Dataset::from(fixtures::options::expirations()))
    }

    async fn option_chain(
        &self,
        symbol: &Symbol,
        _date: Option<i64>,
        side: OptionType,
    ) -> Result<Dataset, LensError> {
        if let Some(empty) = Self::gate(symbol.as_ref(), "option chain").await? {
            return Ok(empty);
        }
        Ok(Dataset::from(fixtures::options::chain(
            symbol.as_ref(),
            side.as_str(),
        )))
    }
}

impl MarketConnector for MockConnector {
    fn name(&self) -> &'static str {
        "tickerlens-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
    fn as_info_provider(&self) -> Option<&dyn InfoProvider> {
        Some(self as &dyn InfoProvider)
    }
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
    fn as_actions_provider(&self) -> Option<&dyn ActionsProvider> {
        Some(self as &dyn ActionsProvider)
    }
    fn as_statements_provider(&self) -> Option<&dyn StatementsProvider> {
        Some(self as &dyn StatementsProvider)
    }
    fn as_holders_provider(&self) -> Option<&dyn HoldersProvider> {
        Some(self as &dyn HoldersProvider)
    }
    fn as_recommendations_provider(&self) -> Option<&dyn RecommendationsProvider> {
        Some(self as &dyn RecommendationsProvider)
    }
    fn as_options_provider(&self) -> Option<&dyn OptionsProvider> {
        Some(self as &dyn OptionsProvider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(s: &str) -> Symbol {
        Symbol::new(s).expect("valid test symbol")
    }

    #[tokio::test]
    async fn known_symbols_resolve() {
        let mock = MockConnector::new();
        let data = mock.info(&sym("AAPL")).await.expect("info dataset");
        assert!(!data.is_empty());
    }

    #[tokio::test]
    async fn unknown_symbols_are_not_found() {
        let mock = MockConnector::new();
        let err = mock.info(&sym("INVALIDTICKER123456")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn fail_sentinel_forces_provider_error() {
        let mock = MockConnector::new();
        let err = mock
            .history(&sym("FAIL"), &HistoryQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, LensError::Provider { .. }));
    }

    #[tokio::test]
    async fn empty_sentinel_yields_empty_dataset() {
        let mock = MockConnector::new();
        let data = mock
            .holder_table(&sym("EMPTY"), HolderType::MajorHolders)
            .await
            .expect("empty dataset");
        assert!(data.is_empty());
    }
}
