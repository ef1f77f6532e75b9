use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::LensError;

/// A ticker symbol.
///
/// Free-form by design: validity is decided by the provider's response, not
/// locally. The only local check is non-emptiness after trimming, and the
/// symbol is otherwise preserved exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Build a symbol from raw caller input.
    ///
    /// # Errors
    /// Returns `LensError::InvalidArg` when the input is empty or whitespace.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, LensError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(LensError::invalid_arg("ticker symbol cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Symbol {
    type Err = LensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_preserves_case() {
        let s = Symbol::new("  Btc-Usd ").expect("valid");
        assert_eq!(s.as_str(), "Btc-Usd");
    }

    #[test]
    fn rejects_empty_input() {
        assert!(Symbol::new("").is_err());
        assert!(Symbol::new("   ").is_err());
    }

    #[test]
    fn passes_unknown_symbols_through() {
        // Existence is the provider's call, not ours.
        let s = Symbol::new("INVALIDTICKER123456").expect("shape is fine");
        assert_eq!(s.to_string(), "INVALIDTICKER123456");
    }
}
