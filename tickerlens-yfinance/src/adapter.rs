#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use tickerlens_core::LensError;
use yfinance_rs as yf;
use yfinance_rs::core::HistoryService;

/// History abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YfHistory: Send + Sync {
    /// Fetch historical candles for a symbol with optional period/interval codes.
    async fn fetch(
        &self,
        symbol: &str,
        period: Option<&str>,
        interval: Option<&str>,
    ) -> Result<Value, LensError>;
}

/// Aggregate company-info abstraction.
#[async_trait]
pub trait YfInfo: Send + Sync {
    /// Fetch the aggregate info record for a symbol.
    async fn info(&self, symbol: &str) -> Result<Value, LensError>;
}

/// News abstraction.
#[async_trait]
pub trait YfNews: Send + Sync {
    /// Fetch up to `count` recent articles for a symbol.
    async fn news(&self, symbol: &str, count: u32) -> Result<Value, LensError>;
}

/// Corporate-actions abstraction (dividends and splits).
#[async_trait]
pub trait YfActions: Send + Sync {
    /// Fetch all dividends and splits for a symbol.
    async fn actions(&self, symbol: &str) -> Result<Value, LensError>;
}

/// Fundamentals abstraction for the three statement endpoints.
#[async_trait]
pub trait YfFundamentals: Send + Sync {
    /// Fetch income statement rows.
    async fn income_statement(&self, symbol: &str, quarterly: bool) -> Result<Value, LensError>;

    /// Fetch balance sheet rows.
    async fn balance_sheet(&self, symbol: &str, quarterly: bool) -> Result<Value, LensError>;

    /// Fetch cashflow rows.
    async fn cashflow(&self, symbol: &str, quarterly: bool) -> Result<Value, LensError>;
}

/// Holder-table abstraction covering major/institutional/mutual and insider activity.
#[async_trait]
pub trait YfHolders: Send + Sync {
    /// Fetch major holders summary rows.
    async fn major_holders(&self, symbol: &str) -> Result<Value, LensError>;
    /// Fetch institutional holders.
    async fn institutional_holders(&self, symbol: &str) -> Result<Value, LensError>;
    /// Fetch mutual fund holders.
    async fn mutual_fund_holders(&self, symbol: &str) -> Result<Value, LensError>;
    /// Fetch insider transactions.
    async fn insider_transactions(&self, symbol: &str) -> Result<Value, LensError>;
    /// Fetch net share purchase activity (Yahoo's insider purchases table).
    async fn insider_purchases(&self, symbol: &str) -> Result<Value, LensError>;
    /// Fetch the insider roster.
    async fn insider_roster_holders(&self, symbol: &str) -> Result<Value, LensError>;
}

/// Analyst analysis abstraction for recommendation tables.
#[async_trait]
pub trait YfAnalysis: Send + Sync {
    /// Fetch recommendation trend rows.
    async fn recommendations(&self, symbol: &str) -> Result<Value, LensError>;
    /// Fetch broker upgrades/downgrades.
    async fn upgrades_downgrades(&self, symbol: &str) -> Result<Value, LensError>;
}

/// Options abstraction for expirations and the option chain.
#[async_trait]
pub trait YfOptions: Send + Sync {
    /// Fetch available option expiration dates.
    async fn expirations(&self, symbol: &str) -> Result<Value, LensError>;
    /// Fetch the option chain for an optional expiration.
    async fn chain(&self, symbol: &str, date: Option<i64>) -> Result<Value, LensError>;
}

/// Real adapter backed by a single `YfClient` instance.
/// `YfClient` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    client: yf::YfClient,
}

impl RealAdapter {
    /// Build a default `YfClient` with a recommended user agent.
    ///
    /// # Panics
    /// Panics if building the underlying `YfClient` fails, which is unexpected
    /// in normal environments (invalid user agent configuration).
    #[must_use]
    pub fn new_default() -> Self {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .no_proxy()
            .build()
            .expect("Failed to build reqwest client for YfClient");
        Self {
            client: yf::YfClient::builder()
                .custom_client(http)
                .user_agent("Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36")
                .build()
                .expect("Failed to build YfClient with user agent"),
        }
    }

    /// Wrap an existing `YfClient`.
    #[must_use]
    pub const fn new(client: yf::YfClient) -> Self {
        Self { client }
    }
}

fn map_yf_err(e: &yf::YfError, context: &str) -> LensError {
    match e {
        yf::YfError::NotFound { .. } => LensError::not_found(context.to_string()),
        yf::YfError::RateLimited { .. } => {
            LensError::provider("tickerlens-yfinance", format!("rate limit: {context}"))
        }
        yf::YfError::ServerError { status, .. } => LensError::provider(
            "tickerlens-yfinance",
            format!("server error {status}: {context}"),
        ),
        yf::YfError::Status { status, .. } => {
            LensError::provider("tickerlens-yfinance", format!("status {status}: {context}"))
        }
        other => LensError::provider("tickerlens-yfinance", other.to_string()),
    }
}

/// Freeze a provider payload to JSON exactly as reported.
fn freeze<T: Serialize>(payload: &T) -> Result<Value, LensError> {
    serde_json::to_value(payload).map_err(|e| LensError::Data(e.to_string()))
}

fn parse_period(period: Option<&str>) -> Result<yf::core::Range, LensError> {
    use yf::core::Range;
    let Some(p) = period else {
        return Ok(Range::M1);
    };
    Ok(match p {
        "1d" => Range::D1,
        "5d" => Range::D5,
        "1mo" => Range::M1,
        "3mo" => Range::M3,
        "6mo" => Range::M6,
        "1y" => Range::Y1,
        "2y" => Range::Y2,
        "5y" => Range::Y5,
        "10y" => Range::Y10,
        "ytd" => Range::Ytd,
        "max" => Range::Max,
        other => {
            return Err(LensError::invalid_arg(format!("unknown period: {other}")));
        }
    })
}

fn parse_interval(interval: Option<&str>) -> Result<yf::core::Interval, LensError> {
    use yf::core::Interval;
    let Some(i) = interval else {
        return Ok(Interval::D1);
    };
    Ok(match i {
        "1m" => Interval::I1m,
        "2m" => Interval::I2m,
        "5m" => Interval::I5m,
        "15m" => Interval::I15m,
        "30m" => Interval::I30m,
        "60m" => Interval::I1h,
        "90m" => Interval::I90m,
        "1h" => Interval::I1h,
        "1d" => Interval::D1,
        "5d" => Interval::D5,
        "1wk" => Interval::W1,
        "1mo" => Interval::M1,
        "3mo" => Interval::M3,
        other => {
            return Err(LensError::invalid_arg(format!("unknown interval: {other}")));
        }
    })
}

#[async_trait]
impl YfHistory for RealAdapter {
    async fn fetch(
        &self,
        symbol: &str,
        period: Option<&str>,
        interval: Option<&str>,
    ) -> Result<Value, LensError> {
        let req = yf::core::services::HistoryRequest {
            range: Some(parse_period(period)?),
            period: None,
            interval: parse_interval(interval)?,
            include_prepost: false,
            include_actions: true,
            auto_adjust: true,
            keepna: false,
        };
        let resp = self
            .client
            .fetch_full_history(symbol, req)
            .await
            .map_err(|e| map_yf_err(&e, &format!("history for {symbol}")))?;
        freeze(&resp)
    }
}

#[async_trait]
impl YfInfo for RealAdapter {
    async fn info(&self, symbol: &str) -> Result<Value, LensError> {
        let info = yf::ticker::Ticker::new(&self.client, symbol.to_string())
            .info()
            .await
            .map_err(|e| map_yf_err(&e, &format!("info for {symbol}")))?;
        freeze(&info)
    }
}

#[async_trait]
impl YfNews for RealAdapter {
    async fn news(&self, symbol: &str, count: u32) -> Result<Value, LensError> {
        let articles = yf::news::NewsBuilder::new(&self.client, symbol)
            .count(count)
            .tab(yf::news::NewsTab::News)
            .fetch()
            .await
            .map_err(|e| map_yf_err(&e, &format!("news for {symbol}")))?;
        freeze(&articles)
    }
}

#[async_trait]
impl YfActions for RealAdapter {
    async fn actions(&self, symbol: &str) -> Result<Value, LensError> {
        let actions = yf::ticker::Ticker::new(&self.client, symbol.to_string())
            .actions(None)
            .await
            .map_err(|e| map_yf_err(&e, &format!("actions for {symbol}")))?;
        freeze(&actions)
    }
}

#[async_trait]
impl YfFundamentals for RealAdapter {
    async fn income_statement(&self, symbol: &str, quarterly: bool) -> Result<Value, LensError> {
        let fb = yf::fundamentals::FundamentalsBuilder::new(&self.client, symbol.to_string());
        let rows = fb
            .income_statement(quarterly, None)
            .await
            .map_err(|e| map_yf_err(&e, &format!("income statement for {symbol}")))?;
        freeze(&rows)
    }

    async fn balance_sheet(&self, symbol: &str, quarterly: bool) -> Result<Value, LensError> {
        let fb = yf::fundamentals::FundamentalsBuilder::new(&self.client, symbol.to_string());
        let rows = fb
            .balance_sheet(quarterly, None)
            .await
            .map_err(|e| map_yf_err(&e, &format!("balance sheet for {symbol}")))?;
        freeze(&rows)
    }

    async fn cashflow(&self, symbol: &str, quarterly: bool) -> Result<Value, LensError> {
        let fb = yf::fundamentals::FundamentalsBuilder::new(&self.client, symbol.to_string());
        let rows = fb
            .cashflow(quarterly, None)
            .await
            .map_err(|e| map_yf_err(&e, &format!("cashflow for {symbol}")))?;
        freeze(&rows)
    }
}

#[async_trait]
impl YfHolders for RealAdapter {
    async fn major_holders(&self, symbol: &str) -> Result<Value, LensError> {
        let hb = yf::holders::HoldersBuilder::new(&self.client, symbol.to_string());
        let rows = hb
            .major_holders()
            .await
            .map_err(|e| map_yf_err(&e, &format!("major holders for {symbol}")))?;
        freeze(&rows)
    }

    async fn institutional_holders(&self, symbol: &str) -> Result<Value, LensError> {
        let hb = yf::holders::HoldersBuilder::new(&self.client, symbol.to_string());
        let rows = hb
            .institutional_holders()
            .await
            .map_err(|e| map_yf_err(&e, &format!("institutional holders for {symbol}")))?;
        freeze(&rows)
    }

    async fn mutual_fund_holders(&self, symbol: &str) -> Result<Value, LensError> {
        let hb = yf::holders::HoldersBuilder::new(&self.client, symbol.to_string());
        let rows = hb
            .mutual_fund_holders()
            .await
            .map_err(|e| map_yf_err(&e, &format!("mutual fund holders for {symbol}")))?;
        freeze(&rows)
    }

    async fn insider_transactions(&self, symbol: &str) -> Result<Value, LensError> {
        let hb = yf::holders::HoldersBuilder::new(&self.client, symbol.to_string());
        let rows = hb
            .insider_transactions()
            .await
            .map_err(|e| map_yf_err(&e, &format!("insider transactions for {symbol}")))?;
        freeze(&rows)
    }

    async fn insider_purchases(&self, symbol: &str) -> Result<Value, LensError> {
        let hb = yf::holders::HoldersBuilder::new(&self.client, symbol.to_string());
        let activity = hb
            .net_share_purchase_activity()
            .await
            .map_err(|e| map_yf_err(&e, &format!("insider purchases for {symbol}")))?;
        freeze(&activity)
    }

    async fn insider_roster_holders(&self, symbol: &str) -> Result<Value, LensError> {
        let hb = yf::holders::HoldersBuilder::new(&self.client, symbol.to_string());
        let rows = hb
            .insider_roster_holders()
            .await
            .map_err(|e| map_yf_err(&e, &format!("insider roster holders for {symbol}")))?;
        freeze(&rows)
    }
}

#[async_trait]
impl YfAnalysis for RealAdapter {
    async fn recommendations(&self, symbol: &str) -> Result<Value, LensError> {
        let ab = yf::analysis::AnalysisBuilder::new(&self.client, symbol.to_string());
        let rows = ab
            .recommendations()
            .await
            .map_err(|e| map_yf_err(&e, &format!("recommendations for {symbol}")))?;
        freeze(&rows)
    }

    async fn upgrades_downgrades(&self, symbol: &str) -> Result<Value, LensError> {
        let ab = yf::analysis::AnalysisBuilder::new(&self.client, symbol.to_string());
        let rows = ab
            .upgrades_downgrades()
            .await
            .map_err(|e| map_yf_err(&e, &format!("upgrades downgrades for {symbol}")))?;
        freeze(&rows)
    }
}

#[async_trait]
impl YfOptions for RealAdapter {
    async fn expirations(&self, symbol: &str) -> Result<Value, LensError> {
        let t = yf::ticker::Ticker::new(&self.client, symbol.to_string());
        let dates = t
            .options()
            .await
            .map_err(|e| map_yf_err(&e, &format!("options expirations for {symbol}")))?;
        freeze(&dates)
    }

    async fn chain(&self, symbol: &str, date: Option<i64>) -> Result<Value, LensError> {
        let t = yf::ticker::Ticker::new(&self.client, symbol.to_string());
        let chain = t
            .option_chain(date)
            .await
            .map_err(|e| map_yf_err(&e, &format!("option chain for {symbol}")))?;
        freeze(&chain)
    }
}

/* -------- Test-only lightweight adapter constructors ------- */

#[cfg(feature = "test-adapters")]
impl dyn YfHistory {
    /// Build a `YfHistory` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfHistory>
    where
        F: Send
            + Sync
            + 'static
            + Fn(String, Option<String>, Option<String>) -> Result<Value, LensError>,
    {
        struct FnHist<F>(F);
        #[async_trait]
        impl<F> YfHistory for FnHist<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(String, Option<String>, Option<String>) -> Result<Value, LensError>,
        {
            async fn fetch(
                &self,
                symbol: &str,
                period: Option<&str>,
                interval: Option<&str>,
            ) -> Result<Value, LensError> {
                (self.0)(
                    symbol.to_string(),
                    period.map(str::to_string),
                    interval.map(str::to_string),
                )
            }
        }
        Arc::new(FnHist(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfInfo {
    /// Build a `YfInfo` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfInfo>
    where
        F: Send + Sync + 'static + Fn(String) -> Result<Value, LensError>,
    {
        struct FnInfo<F>(F);
        #[async_trait]
        impl<F> YfInfo for FnInfo<F>
        where
            F: Send + Sync + 'static + Fn(String) -> Result<Value, LensError>,
        {
            async fn info(&self, symbol: &str) -> Result<Value, LensError> {
                (self.0)(symbol.to_string())
            }
        }
        Arc::new(FnInfo(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfNews {
    /// Build a `YfNews` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfNews>
    where
        F: Send + Sync + 'static + Fn(String, u32) -> Result<Value, LensError>,
    {
        struct FnNews<F>(F);
        #[async_trait]
        impl<F> YfNews for FnNews<F>
        where
            F: Send + Sync + 'static + Fn(String, u32) -> Result<Value, LensError>,
        {
            async fn news(&self, symbol: &str, count: u32) -> Result<Value, LensError> {
                (self.0)(symbol.to_string(), count)
            }
        }
        Arc::new(FnNews(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfActions {
    /// Build a `YfActions` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfActions>
    where
        F: Send + Sync + 'static + Fn(String) -> Result<Value, LensError>,
    {
        struct FnActions<F>(F);
        #[async_trait]
        impl<F> YfActions for FnActions<F>
        where
            F: Send + Sync + 'static + Fn(String) -> Result<Value, LensError>,
        {
            async fn actions(&self, symbol: &str) -> Result<Value, LensError> {
                (self.0)(symbol.to_string())
            }
        }
        Arc::new(FnActions(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfFundamentals {
    /// Build a `YfFundamentals` from a single closure receiving the endpoint
    /// label, symbol, and quarterly flag (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfFundamentals>
    where
        F: Send + Sync + 'static + Fn(&'static str, String, bool) -> Result<Value, LensError>,
    {
        struct FnFund<F>(F);
        #[async_trait]
        impl<F> YfFundamentals for FnFund<F>
        where
            F: Send + Sync + 'static + Fn(&'static str, String, bool) -> Result<Value, LensError>,
        {
            async fn income_statement(
                &self,
                symbol: &str,
                quarterly: bool,
            ) -> Result<Value, LensError> {
                (self.0)("income_statement", symbol.to_string(), quarterly)
            }
            async fn balance_sheet(
                &self,
                symbol: &str,
                quarterly: bool,
            ) -> Result<Value, LensError> {
                (self.0)("balance_sheet", symbol.to_string(), quarterly)
            }
            async fn cashflow(&self, symbol: &str, quarterly: bool) -> Result<Value, LensError> {
                (self.0)("cashflow", symbol.to_string(), quarterly)
            }
        }
        Arc::new(FnFund(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfHolders {
    /// Build a `YfHolders` from a single closure receiving the endpoint label
    /// and symbol (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfHolders>
    where
        F: Send + Sync + 'static + Fn(&'static str, String) -> Result<Value, LensError>,
    {
        struct FnHolders<F>(F);
        #[async_trait]
        impl<F> YfHolders for FnHolders<F>
        where
            F: Send + Sync + 'static + Fn(&'static str, String) -> Result<Value, LensError>,
        {
            async fn major_holders(&self, symbol: &str) -> Result<Value, LensError> {
                (self.0)("major_holders", symbol.to_string())
            }
            async fn institutional_holders(&self, symbol: &str) -> Result<Value, LensError> {
                (self.0)("institutional_holders", symbol.to_string())
            }
            async fn mutual_fund_holders(&self, symbol: &str) -> Result<Value, LensError> {
                (self.0)("mutual_fund_holders", symbol.to_string())
            }
            async fn insider_transactions(&self, symbol: &str) -> Result<Value, LensError> {
                (self.0)("insider_transactions", symbol.to_string())
            }
            async fn insider_purchases(&self, symbol: &str) -> Result<Value, LensError> {
                (self.0)("insider_purchases", symbol.to_string())
            }
            async fn insider_roster_holders(&self, symbol: &str) -> Result<Value, LensError> {
                (self.0)("insider_roster_holders", symbol.to_string())
            }
        }
        Arc::new(FnHolders(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfAnalysis {
    /// Build a `YfAnalysis` from a single closure receiving the endpoint label
    /// and symbol (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfAnalysis>
    where
        F: Send + Sync + 'static + Fn(&'static str, String) -> Result<Value, LensError>,
    {
        struct FnAnalysis<F>(F);
        #[async_trait]
        impl<F> YfAnalysis for FnAnalysis<F>
        where
            F: Send + Sync + 'static + Fn(&'static str, String) -> Result<Value, LensError>,
        {
            async fn recommendations(&self, symbol: &str) -> Result<Value, LensError> {
                (self.0)("recommendations", symbol.to_string())
            }
            async fn upgrades_downgrades(&self, symbol: &str) -> Result<Value, LensError> {
                (self.0)("upgrades_downgrades", symbol.to_string())
            }
        }
        Arc::new(FnAnalysis(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfOptions {
    /// Build a `YfOptions` from closures (tests only).
    pub fn from_fns<FE, FC>(fe: FE, fc: FC) -> Arc<dyn YfOptions>
    where
        FE: Send + Sync + 'static + Fn(String) -> Result<Value, LensError>,
        FC: Send + Sync + 'static + Fn(String, Option<i64>) -> Result<Value, LensError>,
    {
        struct FnOptions<FE, FC> {
            fe: FE,
            fc: FC,
        }
        #[async_trait]
        impl<FE, FC> YfOptions for FnOptions<FE, FC>
        where
            FE: Send + Sync + 'static + Fn(String) -> Result<Value, LensError>,
            FC: Send + Sync + 'static + Fn(String, Option<i64>) -> Result<Value, LensError>,
        {
            async fn expirations(&self, symbol: &str) -> Result<Value, LensError> {
                (self.fe)(symbol.to_string())
            }
            async fn chain(&self, symbol: &str, date: Option<i64>) -> Result<Value, LensError> {
                (self.fc)(symbol.to_string(), date)
            }
        }
        Arc::new(FnOptions { fe, fc })
    }
}

/// Helper trait to split a concrete adapter into arc trait objects.
/// Defaults stub every seam as unsupported so tests override only what they need.
#[cfg(feature = "test-adapters")]
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn YfHistory>`.
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        <dyn YfHistory>::from_fn(|_, _, _| Err(LensError::unsupported("history")))
    }
    /// Clone as `Arc<dyn YfInfo>`.
    fn clone_arc_info(&self) -> Arc<dyn YfInfo> {
        <dyn YfInfo>::from_fn(|_| Err(LensError::unsupported("info")))
    }
    /// Clone as `Arc<dyn YfNews>`.
    fn clone_arc_news(&self) -> Arc<dyn YfNews> {
        <dyn YfNews>::from_fn(|_, _| Err(LensError::unsupported("news")))
    }
    /// Clone as `Arc<dyn YfActions>`.
    fn clone_arc_actions(&self) -> Arc<dyn YfActions> {
        <dyn YfActions>::from_fn(|_| Err(LensError::unsupported("actions")))
    }
    /// Clone as `Arc<dyn YfFundamentals>`.
    fn clone_arc_fundamentals(&self) -> Arc<dyn YfFundamentals> {
        <dyn YfFundamentals>::from_fn(|_, _, _| Err(LensError::unsupported("statements")))
    }
    /// Clone as `Arc<dyn YfHolders>`.
    fn clone_arc_holders(&self) -> Arc<dyn YfHolders> {
        <dyn YfHolders>::from_fn(|_, _| Err(LensError::unsupported("holders")))
    }
    /// Clone as `Arc<dyn YfAnalysis>`.
    fn clone_arc_analysis(&self) -> Arc<dyn YfAnalysis> {
        <dyn YfAnalysis>::from_fn(|_, _| Err(LensError::unsupported("recommendations")))
    }
    /// Clone as `Arc<dyn YfOptions>`.
    fn clone_arc_options(&self) -> Arc<dyn YfOptions> {
        <dyn YfOptions>::from_fns(
            |_| Err(LensError::unsupported("options/expirations")),
            |_, _| Err(LensError::unsupported("options/chain")),
        )
    }
}

#[cfg(feature = "test-adapters")]
impl CloneArcAdapters for RealAdapter {
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        Arc::new(self.clone()) as Arc<dyn YfHistory>
    }
    fn clone_arc_info(&self) -> Arc<dyn YfInfo> {
        Arc::new(self.clone()) as Arc<dyn YfInfo>
    }
    fn clone_arc_news(&self) -> Arc<dyn YfNews> {
        Arc::new(self.clone()) as Arc<dyn YfNews>
    }
    fn clone_arc_actions(&self) -> Arc<dyn YfActions> {
        Arc::new(self.clone()) as Arc<dyn YfActions>
    }
    fn clone_arc_fundamentals(&self) -> Arc<dyn YfFundamentals> {
        Arc::new(self.clone()) as Arc<dyn YfFundamentals>
    }
    fn clone_arc_holders(&self) -> Arc<dyn YfHolders> {
        Arc::new(self.clone()) as Arc<dyn YfHolders>
    }
    fn clone_arc_analysis(&self) -> Arc<dyn YfAnalysis> {
        Arc::new(self.clone()) as Arc<dyn YfAnalysis>
    }
    fn clone_arc_options(&self) -> Arc<dyn YfOptions> {
        Arc::new(self.clone()) as Arc<dyn YfOptions>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_period_and_interval_parse() {
        assert!(parse_period(None).is_ok());
        assert!(parse_interval(None).is_ok());
    }

    #[test]
    fn known_period_codes_parse() {
        for code in ["1d", "5d", "1mo", "3mo", "6mo", "1y", "2y", "5y", "10y", "ytd", "max"] {
            assert!(parse_period(Some(code)).is_ok(), "period {code}");
        }
    }

    #[test]
    fn known_interval_codes_parse() {
        for code in [
            "1m", "2m", "5m", "15m", "30m", "60m", "90m", "1h", "1d", "5d", "1wk", "1mo", "3mo",
        ] {
            assert!(parse_interval(Some(code)).is_ok(), "interval {code}");
        }
    }

    #[test]
    fn unknown_codes_are_invalid_arguments() {
        let err = parse_period(Some("2wk")).unwrap_err();
        assert!(matches!(err, LensError::InvalidArg(_)));
        let err = parse_interval(Some("7m")).unwrap_err();
        assert!(matches!(err, LensError::InvalidArg(_)));
    }
}
