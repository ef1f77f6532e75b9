//! Assistant-facing tool surface.
//!
//! Every tool takes string arguments, validates them up front, and returns a
//! plain-text answer. Failures come back as `Error: ...` strings rather than
//! `Err`, so a tool call never raises toward the caller.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;
use tickerlens_core::{
    Dataset, FinancialType, HolderType, LensError, OptionType, RecommendationType, Symbol,
};

use crate::Tickerlens;

/// Articles returned by `get_yahoo_finance_news` when `count` is omitted.
pub const DEFAULT_NEWS_COUNT: u32 = 10;

/// Recency window for upgrades/downgrades when `months_back` is omitted.
pub const DEFAULT_MONTHS_BACK: u32 = 12;

/// Machine-readable description of one tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    /// Stable tool name used for dispatch.
    pub name: &'static str,
    /// Human-readable summary for the tool catalog.
    pub description: &'static str,
    /// Accepted parameters in declaration order.
    pub params: Vec<ToolParam>,
}

/// One parameter of a tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolParam {
    /// Parameter name as it appears in the argument map.
    pub name: &'static str,
    /// What the parameter means, including accepted values where closed.
    pub description: String,
    /// Whether dispatch rejects calls missing this parameter.
    pub required: bool,
}

fn ticker_param() -> ToolParam {
    ToolParam {
        name: "ticker",
        description: "Ticker symbol, e.g. AAPL, MSFT, BTC-USD".to_string(),
        required: true,
    }
}

fn choices<I: IntoIterator<Item = &'static str>>(values: I) -> String {
    values.into_iter().collect::<Vec<_>>().join(", ")
}

/// The full tool catalog, in the order tools are advertised.
#[must_use]
pub fn catalog() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "get_historical_stock_prices",
            description: "Historical OHLCV prices for a ticker.",
            params: vec![
                ticker_param(),
                ToolParam {
                    name: "period",
                    description:
                        "Yahoo range code: 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max. Default 1mo."
                            .to_string(),
                    required: false,
                },
                ToolParam {
                    name: "interval",
                    description:
                        "Yahoo interval code: 1m, 2m, 5m, 15m, 30m, 60m, 90m, 1h, 1d, 5d, 1wk, 1mo, 3mo. Default 1d."
                            .to_string(),
                    required: false,
                },
            ],
        },
        ToolSpec {
            name: "get_stock_info",
            description: "Aggregate company information: price, sector, market cap, and more.",
            params: vec![ticker_param()],
        },
        ToolSpec {
            name: "get_yahoo_finance_news",
            description: "Recent news articles for a ticker.",
            params: vec![
                ticker_param(),
                ToolParam {
                    name: "count",
                    description: format!("Maximum articles to return. Default {DEFAULT_NEWS_COUNT}."),
                    required: false,
                },
            ],
        },
        ToolSpec {
            name: "get_stock_actions",
            description: "Dividend and split history for a ticker.",
            params: vec![ticker_param()],
        },
        ToolSpec {
            name: "get_financial_statement",
            description: "One financial statement table for a ticker.",
            params: vec![
                ticker_param(),
                ToolParam {
                    name: "financial_type",
                    description: format!("One of: {}.", choices(FinancialType::ALL.map(FinancialType::as_str))),
                    required: true,
                },
            ],
        },
        ToolSpec {
            name: "get_holder_info",
            description: "One holder table for a ticker.",
            params: vec![
                ticker_param(),
                ToolParam {
                    name: "holder_type",
                    description: format!("One of: {}.", choices(HolderType::ALL.map(HolderType::as_str))),
                    required: true,
                },
            ],
        },
        ToolSpec {
            name: "get_option_expiration_dates",
            description: "Available option expiration dates for a ticker.",
            params: vec![ticker_param()],
        },
        ToolSpec {
            name: "get_option_chain",
            description: "Option chain for one expiration date and side.",
            params: vec![
                ticker_param(),
                ToolParam {
                    name: "expiration_date",
                    description:
                        "Expiration as YYYY-MM-DD or epoch seconds. Omit for the nearest expiration."
                            .to_string(),
                    required: false,
                },
                ToolParam {
                    name: "option_type",
                    description: format!("One of: {}.", choices(OptionType::ALL.map(OptionType::as_str))),
                    required: true,
                },
            ],
        },
        ToolSpec {
            name: "get_recommendations",
            description: "Analyst recommendations or recent upgrades/downgrades.",
            params: vec![
                ticker_param(),
                ToolParam {
                    name: "recommendation_type",
                    description: format!("One of: {}.", choices(RecommendationType::ALL.map(RecommendationType::as_str))),
                    required: true,
                },
                ToolParam {
                    name: "months_back",
                    description: format!(
                        "For upgrades_downgrades, how many months of history to keep. Default {DEFAULT_MONTHS_BACK}."
                    ),
                    required: false,
                },
            ],
        },
    ]
}

/// Run a tool by name with string arguments, always producing text.
///
/// Unknown tools and missing or malformed arguments render as `Error: ...`
/// strings; no argument problem ever reaches the provider.
pub async fn dispatch(lens: &Tickerlens, tool: &str, args: &HashMap<String, String>) -> String {
    const TOOL_NAMES: &[&str] = &[
        "get_historical_stock_prices",
        "get_stock_info",
        "get_yahoo_finance_news",
        "get_stock_actions",
        "get_financial_statement",
        "get_holder_info",
        "get_option_expiration_dates",
        "get_option_chain",
        "get_recommendations",
    ];
    if !TOOL_NAMES.contains(&tool) {
        return format!("Error: unknown tool: {tool}");
    }
    let Some(ticker) = args.get("ticker") else {
        return "Error: missing required param: ticker".to_string();
    };
    let opt = |key: &str| args.get(key).map(String::as_str);

    match tool {
        "get_historical_stock_prices" => {
            get_historical_stock_prices(lens, ticker, opt("period"), opt("interval")).await
        }
        "get_stock_info" => get_stock_info(lens, ticker).await,
        "get_yahoo_finance_news" => {
            let count = match opt("count").map(str::parse::<u32>) {
                None => DEFAULT_NEWS_COUNT,
                Some(Ok(n)) => n,
                Some(Err(_)) => return render_err(&LensError::invalid_arg("count must be a non-negative integer")),
            };
            get_yahoo_finance_news(lens, ticker, count).await
        }
        "get_stock_actions" => get_stock_actions(lens, ticker).await,
        "get_financial_statement" => {
            let Some(kind) = args.get("financial_type") else {
                return "Error: missing required param: financial_type".to_string();
            };
            get_financial_statement(lens, ticker, kind).await
        }
        "get_holder_info" => {
            let Some(kind) = args.get("holder_type") else {
                return "Error: missing required param: holder_type".to_string();
            };
            get_holder_info(lens, ticker, kind).await
        }
        "get_option_expiration_dates" => get_option_expiration_dates(lens, ticker).await,
        "get_option_chain" => {
            let Some(side) = args.get("option_type") else {
                return "Error: missing required param: option_type".to_string();
            };
            get_option_chain(lens, ticker, opt("expiration_date"), side).await
        }
        "get_recommendations" => {
            let Some(kind) = args.get("recommendation_type") else {
                return "Error: missing required param: recommendation_type".to_string();
            };
            let months_back = match opt("months_back").map(str::parse::<u32>) {
                None => DEFAULT_MONTHS_BACK,
                Some(Ok(n)) => n,
                Some(Err(_)) => {
                    return render_err(&LensError::invalid_arg(
                        "months_back must be a non-negative integer",
                    ));
                }
            };
            get_recommendations(lens, ticker, kind, months_back).await
        }
        other => format!("Error: unknown tool: {other}"),
    }
}

fn render_err(e: &LensError) -> String {
    format!("Error: {e}")
}

fn render(result: Result<Dataset, LensError>, what: &str, ticker: &str) -> String {
    match result {
        Ok(data) if data.is_empty() => format!("Error: no {what} data available for {ticker}"),
        Ok(data) => data.to_text(),
        Err(e) => render_err(&e),
    }
}

fn parse_symbol(ticker: &str) -> Result<Symbol, LensError> {
    Symbol::new(ticker)
}

/// Historical OHLCV prices rendered as text.
pub async fn get_historical_stock_prices(
    lens: &Tickerlens,
    ticker: &str,
    period: Option<&str>,
    interval: Option<&str>,
) -> String {
    let symbol = match parse_symbol(ticker) {
        Ok(s) => s,
        Err(e) => return render_err(&e),
    };
    render(
        lens.historical_prices(&symbol, period, interval).await,
        "historical price",
        ticker,
    )
}

/// Aggregate company information rendered as text.
pub async fn get_stock_info(lens: &Tickerlens, ticker: &str) -> String {
    let symbol = match parse_symbol(ticker) {
        Ok(s) => s,
        Err(e) => return render_err(&e),
    };
    render(lens.stock_info(&symbol).await, "stock info", ticker)
}

/// Recent news rendered as text.
pub async fn get_yahoo_finance_news(lens: &Tickerlens, ticker: &str, count: u32) -> String {
    let symbol = match parse_symbol(ticker) {
        Ok(s) => s,
        Err(e) => return render_err(&e),
    };
    render(lens.news(&symbol, count).await, "news", ticker)
}

/// Dividend and split history rendered as text.
pub async fn get_stock_actions(lens: &Tickerlens, ticker: &str) -> String {
    let symbol = match parse_symbol(ticker) {
        Ok(s) => s,
        Err(e) => return render_err(&e),
    };
    render(lens.stock_actions(&symbol).await, "actions", ticker)
}

/// One financial statement table, selected by the `financial_type` string.
pub async fn get_financial_statement(lens: &Tickerlens, ticker: &str, kind: &str) -> String {
    let symbol = match parse_symbol(ticker) {
        Ok(s) => s,
        Err(e) => return render_err(&e),
    };
    let kind = match FinancialType::from_str(kind) {
        Ok(k) => k,
        Err(e) => return render_err(&e),
    };
    render(
        lens.financial_statement(&symbol, kind).await,
        kind.as_str(),
        ticker,
    )
}

/// One holder table, selected by the `holder_type` string.
pub async fn get_holder_info(lens: &Tickerlens, ticker: &str, kind: &str) -> String {
    let symbol = match parse_symbol(ticker) {
        Ok(s) => s,
        Err(e) => return render_err(&e),
    };
    let kind = match HolderType::from_str(kind) {
        Ok(k) => k,
        Err(e) => return render_err(&e),
    };
    render(lens.holder_info(&symbol, kind).await, kind.as_str(), ticker)
}

/// Available option expiration dates rendered as text.
pub async fn get_option_expiration_dates(lens: &Tickerlens, ticker: &str) -> String {
    let symbol = match parse_symbol(ticker) {
        Ok(s) => s,
        Err(e) => return render_err(&e),
    };
    render(
        lens.option_expiration_dates(&symbol).await,
        "option expiration",
        ticker,
    )
}

/// One side of the option chain for the given expiration.
pub async fn get_option_chain(
    lens: &Tickerlens,
    ticker: &str,
    expiration_date: Option<&str>,
    side: &str,
) -> String {
    let symbol = match parse_symbol(ticker) {
        Ok(s) => s,
        Err(e) => return render_err(&e),
    };
    let side = match OptionType::from_str(side) {
        Ok(s) => s,
        Err(e) => return render_err(&e),
    };
    let expiration = match expiration_date.map(parse_expiration) {
        None => None,
        Some(Ok(ts)) => Some(ts),
        Some(Err(e)) => return render_err(&e),
    };
    render(
        lens.option_chain(&symbol, expiration, side).await,
        side.as_str(),
        ticker,
    )
}

/// Analyst recommendations or upgrades/downgrades, windowed by `months_back`.
pub async fn get_recommendations(
    lens: &Tickerlens,
    ticker: &str,
    kind: &str,
    months_back: u32,
) -> String {
    let symbol = match parse_symbol(ticker) {
        Ok(s) => s,
        Err(e) => return render_err(&e),
    };
    let kind = match RecommendationType::from_str(kind) {
        Ok(k) => k,
        Err(e) => return render_err(&e),
    };
    render(
        lens.recommendations(&symbol, kind, months_back).await,
        kind.as_str(),
        ticker,
    )
}

/// Parse an expiration argument as epoch seconds or a `YYYY-MM-DD` date.
fn parse_expiration(raw: &str) -> Result<i64, LensError> {
    if let Ok(ts) = raw.parse::<i64>() {
        return Ok(ts);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
        .ok_or_else(|| {
            LensError::invalid_arg(format!(
                "expiration_date must be YYYY-MM-DD or epoch seconds, got: {raw}"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_are_unique_and_ticker_first() {
        let specs = catalog();
        assert_eq!(specs.len(), 9);
        let mut names: Vec<_> = specs.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 9);
        for spec in &specs {
            assert_eq!(spec.params[0].name, "ticker", "{}", spec.name);
            assert!(spec.params[0].required);
        }
    }

    #[test]
    fn expiration_accepts_epoch_and_dates() {
        assert_eq!(parse_expiration("1735689600"), Ok(1_735_689_600));
        assert_eq!(parse_expiration("2025-01-01"), Ok(1_735_689_600));
        assert!(parse_expiration("next friday").is_err());
    }

    #[test]
    fn selector_descriptions_list_every_value() {
        let specs = catalog();
        let stmt = specs
            .iter()
            .find(|s| s.name == "get_financial_statement")
            .expect("statement tool");
        let desc = &stmt.params[1].description;
        for kind in FinancialType::ALL {
            assert!(desc.contains(kind.as_str()), "{kind}");
        }
    }
}
