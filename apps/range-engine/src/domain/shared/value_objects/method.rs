//! Range method value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::shared::DomainError;

/// Session-range method a measurement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Central Bank Dealing Range.
    Cbdr,
    /// Asian session range.
    Asian,
    /// Flout session (CBDR through the end of the Asian session).
    Flout,
}

impl Method {
    /// All methods in display order.
    pub const ALL: [Self; 3] = [Self::Cbdr, Self::Asian, Self::Flout];

    /// Wire tag (`"cbdr"`, `"asian"`, `"flout"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cbdr => "cbdr",
            Self::Asian => "asian",
            Self::Flout => "flout",
        }
    }

    /// Human-readable label used in recommendation text.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Cbdr => "CBDR",
            Self::Asian => "Asian Range",
            Self::Flout => "Flout Session",
        }
    }

    /// Parse a method tag, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMethod` for unknown tags.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "cbdr" => Ok(Self::Cbdr),
            "asian" => Ok(Self::Asian),
            "flout" => Ok(Self::Flout),
            _ => Err(DomainError::InvalidMethod {
                value: input.to_string(),
            }),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
