//! tickerlens-core
//!
//! Core types and traits shared across the tickerlens workspace.
//!
//! - `error`: the unified [`LensError`] type.
//! - `kinds`: closed-set selector enums whose string form equals the member
//!   name exactly (callers compare members against their string form).
//! - `symbol`: the validated [`Symbol`] ticker newtype.
//! - `dataset`: the provider payload, frozen to JSON at the provider seam.
//! - `connector`: capability role traits and the aggregate
//!   [`MarketConnector`] interface.
#![warn(missing_docs)]

/// Capability role traits and the primary `MarketConnector` interface.
pub mod connector;
/// Provider payloads as JSON tables or records.
pub mod dataset;
/// The unified error type for the workspace.
pub mod error;
/// Closed-set selector enums for statements, holders, recommendations, and options.
pub mod kinds;
/// Validated ticker symbol newtype.
pub mod symbol;

pub use connector::{HistoryQuery, MarketConnector};
pub use dataset::Dataset;
pub use error::LensError;
pub use kinds::{FinancialType, HolderType, OptionType, RecommendationType};
pub use symbol::Symbol;
