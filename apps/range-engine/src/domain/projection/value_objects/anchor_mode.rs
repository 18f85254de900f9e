//! Anchor Mode Value Object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::shared::{DomainError, Method};

/// Where an SD ladder is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorMode {
    /// Multiples of the full range, projected from the high and the low.
    Extremity,
    /// Multiples of a quarter range, projected from the midpoint.
    Equilibrium,
}

impl AnchorMode {
    /// Wire tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Extremity => "extremity",
            Self::Equilibrium => "equilibrium",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn alternate(&self) -> Self {
        match self {
            Self::Extremity => Self::Equilibrium,
            Self::Equilibrium => Self::Extremity,
        }
    }
}

impl From<Method> for AnchorMode {
    fn from(method: Method) -> Self {
        match method {
            Method::Cbdr | Method::Asian => Self::Extremity,
            Method::Flout => Self::Equilibrium,
        }
    }
}

impl fmt::Display for AnchorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnchorMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "extremity" => Ok(Self::Extremity),
            "equilibrium" => Ok(Self::Equilibrium),
            _ => Err(DomainError::InvalidInput {
                field: "anchor".to_string(),
                message: format!("unknown anchor mode '{s}', expected extremity or equilibrium"),
            }),
        }
    }
}
