//! Tickerlens exposes Yahoo Finance style market data as a small set of
//! assistant-facing tools.
//!
//! Overview
//! - Validates ticker symbols and closed-set selectors before any provider call.
//! - Delegates data fetching to a pluggable [`MarketConnector`]; each request
//!   suspends exactly once, on the outbound provider call. Deadlines are the
//!   caller's responsibility.
//! - Renders every outcome as text through [`tools`], including failures, so
//!   the tool surface never raises.
//!
//! Fetching a few datasets directly:
//! ```rust,ignore
//! use std::sync::Arc;
//! use tickerlens::Tickerlens;
//! use tickerlens_core::{FinancialType, Symbol};
//!
//! let lens = Tickerlens::new(Arc::new(YfConnector::new_default()));
//! let aapl = Symbol::new("AAPL")?;
//! let history = lens.historical_prices(&aapl, Some("1mo"), Some("1d")).await?;
//! let income = lens.financial_statement(&aapl, FinancialType::IncomeStmt).await?;
//! ```
#![warn(missing_docs)]

use std::sync::Arc;

use chrono::{DateTime, Months, NaiveDate, Utc};
use serde_json::Value;
use tickerlens_core::connector::MarketConnector;
pub use tickerlens_core::{
    Dataset, FinancialType, HistoryQuery, HolderType, LensError, OptionType, RecommendationType,
    Symbol,
};

pub mod tools;

/// Validated entry point over a single [`MarketConnector`].
///
/// All operations check capability support first and return
/// [`LensError::Unsupported`] when the connector does not provide one,
/// so callers can distinguish "provider lacks this" from data errors.
/// No timeout or cancellation is imposed here; callers own the deadline.
pub struct Tickerlens {
    connector: Arc<dyn MarketConnector>,
}

impl Tickerlens {
    /// Wrap a connector.
    #[must_use]
    pub fn new(connector: Arc<dyn MarketConnector>) -> Self {
        Self { connector }
    }

    /// Name of the wrapped connector.
    #[must_use]
    pub fn connector_name(&self) -> &'static str {
        self.connector.name()
    }

    /// Historical OHLCV candles for a ticker.
    ///
    /// `period` and `interval` accept Yahoo range/interval codes (`"1mo"`,
    /// `"1d"`, ...); `None` lets the provider apply its defaults.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(symbol = %symbol))
    )]
    pub async fn historical_prices(
        &self,
        symbol: &Symbol,
        period: Option<&str>,
        interval: Option<&str>,
    ) -> Result<Dataset, LensError> {
        let p = self
            .connector
            .as_history_provider()
            .ok_or_else(|| LensError::unsupported("history"))?;
        let query = HistoryQuery::new(period, interval);
        p.history(symbol, &query).await
    }

    /// Aggregate company information record.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(symbol = %symbol))
    )]
    pub async fn stock_info(&self, symbol: &Symbol) -> Result<Dataset, LensError> {
        let p = self
            .connector
            .as_info_provider()
            .ok_or_else(|| LensError::unsupported("info"))?;
        p.info(symbol).await
    }

    /// Recent news articles for a ticker.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(symbol = %symbol))
    )]
    pub async fn news(&self, symbol: &Symbol, count: u32) -> Result<Dataset, LensError> {
        let p = self
            .connector
            .as_news_provider()
            .ok_or_else(|| LensError::unsupported("news"))?;
        p.news(symbol, count).await
    }

    /// Dividend and split history.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(symbol = %symbol))
    )]
    pub async fn stock_actions(&self, symbol: &Symbol) -> Result<Dataset, LensError> {
        let p = self
            .connector
            .as_actions_provider()
            .ok_or_else(|| LensError::unsupported("actions"))?;
        p.actions(symbol).await
    }

    /// One of the six financial statement tables selected by `kind`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(symbol = %symbol, kind = %kind))
    )]
    pub async fn financial_statement(
        &self,
        symbol: &Symbol,
        kind: FinancialType,
    ) -> Result<Dataset, LensError> {
        let p = self
            .connector
            .as_statements_provider()
            .ok_or_else(|| LensError::unsupported("statements"))?;
        p.financial_statement(symbol, kind).await
    }

    /// One of the six holder tables selected by `kind`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(symbol = %symbol, kind = %kind))
    )]
    pub async fn holder_info(
        &self,
        symbol: &Symbol,
        kind: HolderType,
    ) -> Result<Dataset, LensError> {
        let p = self
            .connector
            .as_holders_provider()
            .ok_or_else(|| LensError::unsupported("holders"))?;
        p.holder_table(symbol, kind).await
    }

    /// Analyst recommendations or broker upgrades/downgrades.
    ///
    /// For upgrades/downgrades, rows older than `months_back` months are
    /// dropped. Rows whose date cannot be recognized are kept.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(symbol = %symbol, kind = %kind))
    )]
    pub async fn recommendations(
        &self,
        symbol: &Symbol,
        kind: RecommendationType,
        months_back: u32,
    ) -> Result<Dataset, LensError> {
        let p = self
            .connector
            .as_recommendations_provider()
            .ok_or_else(|| LensError::unsupported("recommendations"))?;
        let mut data = p.recommendations(symbol, kind).await?;
        if kind == RecommendationType::UpgradesDowngrades {
            let cutoff = months_cutoff(Utc::now(), months_back);
            data.retain_rows(|row| row_timestamp(row).is_none_or(|ts| ts >= cutoff));
        }
        Ok(data)
    }

    /// Available option expiration dates.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(symbol = %symbol))
    )]
    pub async fn option_expiration_dates(&self, symbol: &Symbol) -> Result<Dataset, LensError> {
        let p = self
            .connector
            .as_options_provider()
            .ok_or_else(|| LensError::unsupported("options"))?;
        p.option_expirations(symbol).await
    }

    /// Calls or puts for one expiration, or the nearest when `expiration` is `None`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(symbol = %symbol, side = %side))
    )]
    pub async fn option_chain(
        &self,
        symbol: &Symbol,
        expiration: Option<i64>,
        side: OptionType,
    ) -> Result<Dataset, LensError> {
        let p = self
            .connector
            .as_options_provider()
            .ok_or_else(|| LensError::unsupported("options"))?;
        p.option_chain(symbol, expiration, side).await
    }
}

/// Epoch seconds `months` calendar months before `now`, saturating on overflow.
fn months_cutoff(now: DateTime<Utc>, months: u32) -> i64 {
    now.checked_sub_months(Months::new(months))
        .map_or(i64::MIN, |dt| dt.timestamp())
}

/// Best-effort timestamp extraction from a table row.
///
/// Recognizes an integer `ts` field (epoch seconds) and a string `date` field
/// holding RFC 3339 or a `YYYY-MM-DD` prefix.
fn row_timestamp(row: &Value) -> Option<i64> {
    let obj = row.as_object()?;
    if let Some(ts) = obj.get("ts").and_then(Value::as_i64) {
        return Some(ts);
    }
    let date = obj.get("date").and_then(Value::as_str)?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.timestamp());
    }
    let day = NaiveDate::parse_from_str(date.get(..10)?, "%Y-%m-%d").ok()?;
    Some(
        day.and_hms_opt(0, 0, 0)?
            .and_utc()
            .timestamp(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn epoch_rows_are_recognized() {
        let row = json!({"ts": 1_700_000_000, "firm": "x"});
        assert_eq!(row_timestamp(&row), Some(1_700_000_000));
    }

    #[test]
    fn date_string_rows_are_recognized() {
        let row = json!({"date": "2024-06-01", "firm": "x"});
        let ts = row_timestamp(&row).expect("parsed date");
        assert!(ts > 1_700_000_000);

        let row = json!({"date": "2024-06-01T12:30:00Z", "firm": "x"});
        assert!(row_timestamp(&row).is_some());
    }

    #[test]
    fn undated_rows_are_not_recognized() {
        assert_eq!(row_timestamp(&json!({"firm": "x"})), None);
        assert_eq!(row_timestamp(&json!({"date": "soon"})), None);
        assert_eq!(row_timestamp(&json!(42)), None);
    }

    #[test]
    fn cutoff_moves_back_by_calendar_months() {
        let now = Utc::now();
        let one_year = months_cutoff(now, 12);
        let one_month = months_cutoff(now, 1);
        assert!(one_year < one_month);
        assert!(one_month < now.timestamp());
    }
}
