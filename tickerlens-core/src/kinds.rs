use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::LensError;

/// Selects a financial statement and its period granularity.
///
/// The string form of every member equals its symbolic name exactly; callers
/// and tests compare members directly against their string form, so the
/// mapping is an identity and `FromStr` accepts nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialType {
    /// Annual income statement.
    IncomeStmt,
    /// Quarterly income statement.
    QuarterlyIncomeStmt,
    /// Annual balance sheet.
    BalanceSheet,
    /// Quarterly balance sheet.
    QuarterlyBalanceSheet,
    /// Annual cash-flow statement.
    Cashflow,
    /// Quarterly cash-flow statement.
    QuarterlyCashflow,
}

impl FinancialType {
    /// Every member, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::IncomeStmt,
        Self::QuarterlyIncomeStmt,
        Self::BalanceSheet,
        Self::QuarterlyBalanceSheet,
        Self::Cashflow,
        Self::QuarterlyCashflow,
    ];

    /// The canonical string form (identity with the member name).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IncomeStmt => "income_stmt",
            Self::QuarterlyIncomeStmt => "quarterly_income_stmt",
            Self::BalanceSheet => "balance_sheet",
            Self::QuarterlyBalanceSheet => "quarterly_balance_sheet",
            Self::Cashflow => "cashflow",
            Self::QuarterlyCashflow => "quarterly_cashflow",
        }
    }

    /// Whether this member selects quarterly granularity.
    #[must_use]
    pub const fn is_quarterly(self) -> bool {
        matches!(
            self,
            Self::QuarterlyIncomeStmt | Self::QuarterlyBalanceSheet | Self::QuarterlyCashflow
        )
    }
}

impl fmt::Display for FinancialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FinancialType {
    type Err = LensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income_stmt" => Ok(Self::IncomeStmt),
            "quarterly_income_stmt" => Ok(Self::QuarterlyIncomeStmt),
            "balance_sheet" => Ok(Self::BalanceSheet),
            "quarterly_balance_sheet" => Ok(Self::QuarterlyBalanceSheet),
            "cashflow" => Ok(Self::Cashflow),
            "quarterly_cashflow" => Ok(Self::QuarterlyCashflow),
            other => Err(LensError::invalid_arg(format!(
                "unknown financial_type: {other}"
            ))),
        }
    }
}

/// Selects a holder or insider-activity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolderType {
    /// Ownership breakdown percentages.
    MajorHolders,
    /// Top institutional holders.
    InstitutionalHolders,
    /// Top mutual fund holders.
    MutualfundHolders,
    /// Reported insider transactions.
    InsiderTransactions,
    /// Net share purchase activity (Yahoo's insider purchases table).
    InsiderPurchases,
    /// Current insider roster.
    InsiderRosterHolders,
}

impl HolderType {
    /// Every member, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::MajorHolders,
        Self::InstitutionalHolders,
        Self::MutualfundHolders,
        Self::InsiderTransactions,
        Self::InsiderPurchases,
        Self::InsiderRosterHolders,
    ];

    /// The canonical string form (identity with the member name).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MajorHolders => "major_holders",
            Self::InstitutionalHolders => "institutional_holders",
            Self::MutualfundHolders => "mutualfund_holders",
            Self::InsiderTransactions => "insider_transactions",
            Self::InsiderPurchases => "insider_purchases",
            Self::InsiderRosterHolders => "insider_roster_holders",
        }
    }
}

impl fmt::Display for HolderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HolderType {
    type Err = LensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major_holders" => Ok(Self::MajorHolders),
            "institutional_holders" => Ok(Self::InstitutionalHolders),
            "mutualfund_holders" => Ok(Self::MutualfundHolders),
            "insider_transactions" => Ok(Self::InsiderTransactions),
            "insider_purchases" => Ok(Self::InsiderPurchases),
            "insider_roster_holders" => Ok(Self::InsiderRosterHolders),
            other => Err(LensError::invalid_arg(format!(
                "unknown holder_type: {other}"
            ))),
        }
    }
}

/// Selects an analyst recommendation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    /// Recommendation trend rows.
    Recommendations,
    /// Broker upgrade/downgrade history.
    UpgradesDowngrades,
}

impl RecommendationType {
    /// Every member, in declaration order.
    pub const ALL: [Self; 2] = [Self::Recommendations, Self::UpgradesDowngrades];

    /// The canonical string form (identity with the member name).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recommendations => "recommendations",
            Self::UpgradesDowngrades => "upgrades_downgrades",
        }
    }
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecommendationType {
    type Err = LensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recommendations" => Ok(Self::Recommendations),
            "upgrades_downgrades" => Ok(Self::UpgradesDowngrades),
            other => Err(LensError::invalid_arg(format!(
                "unknown recommendation_type: {other}"
            ))),
        }
    }
}

/// Selects one side of an option chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionType {
    /// Call contracts.
    Calls,
    /// Put contracts.
    Puts,
}

impl OptionType {
    /// Every member, in declaration order.
    pub const ALL: [Self; 2] = [Self::Calls, Self::Puts];

    /// The canonical string form (identity with the member name).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calls => "calls",
            Self::Puts => "puts",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = LensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "calls" => Ok(Self::Calls),
            "puts" => Ok(Self::Puts),
            other => Err(LensError::invalid_arg(format!(
                "unknown option_type: {other}"
            ))),
        }
    }
}
