//! Deterministic fixture payloads keyed by symbol.
//!
//! Timestamps for dated tables are derived from the current clock so that
//! recency filters keep them without pinning the fixtures to a wall date.

use chrono::{Duration, Utc};
use serde_json::{Value, json};

pub const KNOWN: &[&str] = &["AAPL", "MSFT", "TSLA"];

pub fn is_known(symbol: &str) -> bool {
    KNOWN.contains(&symbol)
}

fn days_ago(days: i64) -> i64 {
    (Utc::now() - Duration::days(days)).timestamp()
}

fn date_days_ago(days: i64) -> String {
    (Utc::now() - Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

pub mod history {
    use super::{Value, days_ago, json};

    pub fn by_symbol(s: &str) -> Value {
        let base = match s {
            "AAPL" => 190.0,
            "MSFT" => 420.0,
            _ => 250.0,
        };
        json!([
            { "ts": days_ago(3), "open": base - 2.0, "high": base + 1.0, "low": base - 3.0, "close": base - 1.0, "volume": 51_218_400_u64 },
            { "ts": days_ago(2), "open": base - 1.0, "high": base + 2.0, "low": base - 2.0, "close": base + 0.5, "volume": 48_090_100_u64 },
            { "ts": days_ago(1), "open": base + 0.5, "high": base + 3.0, "low": base - 0.5, "close": base + 2.0, "volume": 52_427_700_u64 },
        ])
    }
}

pub mod info {
    use super::{Value, json};

    pub fn by_symbol(s: &str) -> Value {
        let (name, sector, cap) = match s {
            "AAPL" => ("Apple Inc.", "Technology", 2_950_000_000_000_u64),
            "MSFT" => ("Microsoft Corporation", "Technology", 3_120_000_000_000_u64),
            _ => ("Tesla, Inc.", "Consumer Cyclical", 790_000_000_000_u64),
        };
        json!({
            "symbol": s,
            "shortName": name,
            "sector": sector,
            "marketCap": cap,
            "currency": "USD",
            "exchange": "NASDAQ",
        })
    }
}

pub mod news {
    use super::{Value, days_ago, json};

    pub fn by_symbol(s: &str, count: u32) -> Value {
        let all = [
            json!({ "title": format!("{s} beats quarterly estimates"), "publisher": "Example Wire", "ts": days_ago(1) }),
            json!({ "title": format!("Analysts weigh in on {s} guidance"), "publisher": "Market Desk", "ts": days_ago(4) }),
            json!({ "title": format!("{s} announces product roadmap"), "publisher": "Tech Daily", "ts": days_ago(9) }),
        ];
        Value::Array(all.into_iter().take(count as usize).collect())
    }
}

pub mod actions {
    use super::{Value, days_ago, json};

    pub fn by_symbol(s: &str) -> Value {
        match s {
            // Tesla has no dividend history in the fixture set
            "TSLA" => json!([
                { "ts": days_ago(1500), "kind": "split", "ratio": "3:1" },
            ]),
            _ => json!([
                { "ts": days_ago(200), "kind": "dividend", "amount": 0.24 },
                { "ts": days_ago(110), "kind": "dividend", "amount": 0.24 },
                { "ts": days_ago(20), "kind": "dividend", "amount": 0.25 },
            ]),
        }
    }
}

pub mod statements {
    use super::{Value, date_days_ago, json};

    pub fn by_symbol(s: &str, endpoint: &str, quarterly: bool) -> Value {
        let span = if quarterly { 90 } else { 365 };
        let scale: i64 = match s {
            "AAPL" => 119,
            "MSFT" => 245,
            _ => 25,
        };
        json!([
            { "period": date_days_ago(span), "item": endpoint, "value": scale * 1_000_000_000 },
            { "period": date_days_ago(span * 2), "item": endpoint, "value": (scale - 3) * 1_000_000_000 },
        ])
    }
}

pub mod holders {
    use super::{Value, date_days_ago, json};

    pub fn by_symbol(s: &str, kind: &str) -> Value {
        match kind {
            "major_holders" => json!([
                { "category": "insidersPercentHeld", "value": 0.02 },
                { "category": "institutionsPercentHeld", "value": 0.61 },
            ]),
            "insider_purchases" => json!({
                "period": "6m",
                "buyShares": 120_000,
                "sellShares": 480_000,
                "netShares": -360_000,
            }),
            _ => json!([
                { "holder": "Vanguard Group", "shares": 1_310_000_000_u64, "reported": date_days_ago(45), "symbol": s },
                { "holder": "BlackRock", "shares": 1_040_000_000_u64, "reported": date_days_ago(45), "symbol": s },
            ]),
        }
    }
}

pub mod analysis {
    use super::{Value, date_days_ago, json};

    pub fn recommendations(s: &str) -> Value {
        json!([
            { "date": date_days_ago(30), "firm": "Example Research", "toGrade": "Buy", "symbol": s },
            { "date": date_days_ago(150), "firm": "Sample Securities", "toGrade": "Hold", "symbol": s },
            { "date": date_days_ago(800), "firm": "Old House", "toGrade": "Sell", "symbol": s },
        ])
    }

    pub fn upgrades_downgrades(s: &str) -> Value {
        json!([
            { "date": date_days_ago(12), "firm": "Example Research", "fromGrade": "Hold", "toGrade": "Buy", "symbol": s },
            { "date": date_days_ago(400), "firm": "Sample Securities", "fromGrade": "Buy", "toGrade": "Hold", "symbol": s },
        ])
    }
}

pub mod options {
    use super::{Value, days_ago, json};

    pub fn expirations() -> Value {
        json!([days_ago(-7), days_ago(-35), days_ago(-63)])
    }

    pub fn chain(s: &str, side: &str) -> Value {
        let strike = match s {
            "AAPL" => 190.0,
            "MSFT" => 420.0,
            _ => 250.0,
        };
        let sign = if side == "calls" { 1.0 } else { -1.0 };
        json!([
            { "contract": format!("{s}-{side}-1"), "strike": strike, "lastPrice": 4.1, "inTheMoney": sign > 0.0 },
            { "contract": format!("{s}-{side}-2"), "strike": strike + sign * 5.0, "lastPrice": 2.3, "inTheMoney": false },
        ])
    }
}
