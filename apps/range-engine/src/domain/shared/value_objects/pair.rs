//! Pair value object for currency-pair symbols.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::shared::DomainError;

/// Length of an ISO 4217 currency code.
const CURRENCY_LEN: usize = 3;

/// A forex currency pair (base + quote), e.g. "EURUSD", "USDJPY".
///
/// Normalized to six uppercase ASCII letters. Separators commonly typed
/// into form fields ("EUR/USD", "eur-usd", "EUR_USD") are stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pair(String);

impl Pair {
    /// Parse and normalize a pair symbol.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPair` if the symbol is not two three-letter
    /// currency codes.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let normalized: String = input
            .trim()
            .chars()
            .filter(|c| !matches!(c, '/' | '-' | '_' | ' '))
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if normalized.is_empty() {
            return Err(DomainError::InvalidPair {
                symbol: input.to_string(),
                message: "Pair cannot be empty".to_string(),
            });
        }

        if !normalized.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidPair {
                symbol: input.to_string(),
                message: "Pair must contain only currency letters".to_string(),
            });
        }

        if normalized.len() != CURRENCY_LEN * 2 {
            return Err(DomainError::InvalidPair {
                symbol: input.to_string(),
                message: "Pair must be two three-letter currency codes".to_string(),
            });
        }

        Ok(Self(normalized))
    }

    /// Get the pair string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Base currency (first three letters).
    #[must_use]
    pub fn base(&self) -> &str {
        &self.0[..CURRENCY_LEN]
    }

    /// Quote currency (last three letters).
    #[must_use]
    pub fn quote(&self) -> &str {
        &self.0[CURRENCY_LEN..]
    }

    /// True when prices are quoted in yen (two-decimal pip).
    #[must_use]
    pub fn is_jpy_quoted(&self) -> bool {
        self.quote() == "JPY"
    }

    /// True when either side of the pair is `currency`.
    #[must_use]
    pub fn involves(&self, currency: &str) -> bool {
        self.base().eq_ignore_ascii_case(currency) || self.quote().eq_ignore_ascii_case(currency)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Pair {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Pair {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Pair {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Pair> for String {
    fn from(value: Pair) -> Self {
        value.0
    }
}
