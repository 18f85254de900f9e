//! Domain errors for the range engine.

use thiserror::Error;

/// Domain-level errors raised while building or evaluating a range.
///
/// Projection and scoring are total over a valid [`RangeData`], so every
/// variant here is raised at the point of first use: pair parsing, range
/// construction, or pip conversion.
///
/// [`RangeData`]: crate::domain::range::RangeData
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// High/low pair cannot form a range (inverted, equal, or non-finite).
    #[error("Invalid range (high {high}, low {low}): {message}")]
    InvalidRange {
        /// High price as supplied.
        high: String,
        /// Low price as supplied.
        low: String,
        /// Reason for rejection.
        message: String,
    },

    /// Caller passed a value outside a function's contract.
    #[error("Invalid value for '{field}': {message}")]
    InvalidInput {
        /// Field or argument name.
        field: String,
        /// Error message.
        message: String,
    },

    /// Currency pair symbol could not be parsed.
    #[error("Invalid pair '{symbol}': {message}")]
    InvalidPair {
        /// Symbol as supplied.
        symbol: String,
        /// Error message.
        message: String,
    },

    /// Unknown range method tag.
    #[error("Unknown method '{value}': expected one of cbdr, asian, flout")]
    InvalidMethod {
        /// Tag as supplied.
        value: String,
    },
}

impl DomainError {
    /// Range error for a high that does not exceed the low.
    pub(crate) fn inverted_range(high: impl ToString, low: impl ToString) -> Self {
        Self::InvalidRange {
            high: high.to_string(),
            low: low.to_string(),
            message: "high must be greater than low".to_string(),
        }
    }

    /// Range error for a price that is NaN or infinite.
    pub(crate) fn non_finite_range(high: f64, low: f64) -> Self {
        Self::InvalidRange {
            high: high.to_string(),
            low: low.to_string(),
            message: "prices must be finite numbers".to_string(),
        }
    }

    /// Range error for prices whose range, midpoint or pip count does not
    /// fit in a `Decimal`.
    pub(crate) fn range_overflow(high: impl ToString, low: impl ToString) -> Self {
        Self::InvalidRange {
            high: high.to_string(),
            low: low.to_string(),
            message: "prices are too large to measure".to_string(),
        }
    }

    /// Range error for distinct prices that collapse to the same `Decimal`.
    pub(crate) fn collapsed_range(high: f64, low: f64) -> Self {
        Self::InvalidRange {
            high: high.to_string(),
            low: low.to_string(),
            message: "prices differ by less than the supported decimal precision".to_string(),
        }
    }

    /// Returns true if the error should be shown to the user as a
    /// validation message rather than treated as a caller bug.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        !matches!(self, Self::InvalidInput { .. })
    }
}
