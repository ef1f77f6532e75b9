use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Dataset, FinancialType, HolderType, LensError, OptionType, RecommendationType, Symbol};

/// Query-shaping parameters for a historical prices request.
///
/// Both fields are provider codes passed through as given (e.g. period
/// `"1mo"`, interval `"1d"`); connectors decide what they accept and report
/// anything unmappable as an invalid argument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryQuery {
    /// Relative period code (e.g. "1d", "1mo", "1y", "max").
    pub period: Option<String>,
    /// Candle interval code (e.g. "1m", "1d", "1wk").
    pub interval: Option<String>,
}

impl HistoryQuery {
    /// Build a query from optional period/interval codes.
    #[must_use]
    pub fn new(period: Option<&str>, interval: Option<&str>) -> Self {
        Self {
            period: period.map(str::to_string),
            interval: interval.map(str::to_string),
        }
    }
}

/// Focused role trait for connectors that provide OHLCV history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch historical prices for the given symbol and query.
    async fn history(&self, symbol: &Symbol, query: &HistoryQuery) -> Result<Dataset, LensError>;
}

/// Focused role trait for connectors that provide comprehensive company info.
#[async_trait]
pub trait InfoProvider: Send + Sync {
    /// Fetch the aggregate info record for the given symbol.
    async fn info(&self, symbol: &Symbol) -> Result<Dataset, LensError>;
}

/// Focused role trait for connectors that provide news articles.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch up to `count` recent news articles for the given symbol.
    async fn news(&self, symbol: &Symbol, count: u32) -> Result<Dataset, LensError>;
}

/// Focused role trait for connectors that provide corporate actions.
#[async_trait]
pub trait ActionsProvider: Send + Sync {
    /// Fetch dividends and splits for the given symbol.
    async fn actions(&self, symbol: &Symbol) -> Result<Dataset, LensError>;
}

/// Focused role trait for connectors that provide financial statements.
#[async_trait]
pub trait StatementsProvider: Send + Sync {
    /// Fetch the statement selected by `kind` for the given symbol.
    async fn financial_statement(
        &self,
        symbol: &Symbol,
        kind: FinancialType,
    ) -> Result<Dataset, LensError>;
}

/// Focused role trait for connectors that provide holder tables.
#[async_trait]
pub trait HoldersProvider: Send + Sync {
    /// Fetch the holder table selected by `kind` for the given symbol.
    async fn holder_table(&self, symbol: &Symbol, kind: HolderType) -> Result<Dataset, LensError>;
}

/// Focused role trait for connectors that provide analyst recommendations.
#[async_trait]
pub trait RecommendationsProvider: Send + Sync {
    /// Fetch the recommendation table selected by `kind` for the given symbol.
    async fn recommendations(
        &self,
        symbol: &Symbol,
        kind: RecommendationType,
    ) -> Result<Dataset, LensError>;
}

/// Focused role trait for connectors that provide option data.
#[async_trait]
pub trait OptionsProvider: Send + Sync {
    /// Fetch available option expiration dates as Unix timestamps.
    async fn option_expirations(&self, symbol: &Symbol) -> Result<Dataset, LensError>;

    /// Fetch one side of the option chain for an optional expiration.
    async fn option_chain(
        &self,
        symbol: &Symbol,
        expiration: Option<i64>,
        side: OptionType,
    ) -> Result<Dataset, LensError>;
}

/// A market-data connector: a directory of the capabilities it implements.
///
/// Connectors advertise each capability through an `as_*_provider` accessor;
/// the default for every accessor is `None`, and callers map an absent
/// capability to `LensError::Unsupported`.
pub trait MarketConnector: Send + Sync {
    /// Short connector name used in error tags (e.g. "tickerlens-yfinance").
    fn name(&self) -> &'static str;

    /// Human-readable data vendor name.
    fn vendor(&self) -> &'static str;

    /// History capability, if implemented.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }

    /// Company-info capability, if implemented.
    fn as_info_provider(&self) -> Option<&dyn InfoProvider> {
        None
    }

    /// News capability, if implemented.
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        None
    }

    /// Corporate-actions capability, if implemented.
    fn as_actions_provider(&self) -> Option<&dyn ActionsProvider> {
        None
    }

    /// Financial-statements capability, if implemented.
    fn as_statements_provider(&self) -> Option<&dyn StatementsProvider> {
        None
    }

    /// Holder-tables capability, if implemented.
    fn as_holders_provider(&self) -> Option<&dyn HoldersProvider> {
        None
    }

    /// Recommendations capability, if implemented.
    fn as_recommendations_provider(&self) -> Option<&dyn RecommendationsProvider> {
        None
    }

    /// Options capability, if implemented.
    fn as_options_provider(&self) -> Option<&dyn OptionsProvider> {
        None
    }
}
