//! Quality Verdict Value Object

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::domain::shared::Method;

/// Which part of the method's pip policy a range fell into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeZone {
    /// Inside the optimal band.
    Optimal,
    /// Outside the band but still tradeable.
    Caution,
    /// Above the invalidation threshold.
    Invalid,
}

impl RangeZone {
    /// Inclusive score bounds for the zone.
    #[must_use]
    pub const fn score_bounds(&self) -> (u8, u8) {
        match self {
            Self::Optimal => (70, 100),
            Self::Caution => (40, 69),
            Self::Invalid => (0, 39),
        }
    }
}

impl fmt::Display for RangeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Optimal => write!(f, "optimal"),
            Self::Caution => write!(f, "caution"),
            Self::Invalid => write!(f, "invalid"),
        }
    }
}

/// Outcome of scoring a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityVerdict {
    /// Method the range was scored for.
    pub method: Method,
    /// Range size in pips.
    pub pips: Decimal,
    /// Zone the pip count fell into.
    pub zone: RangeZone,
    /// 0-100 quality score.
    pub score: u8,
    /// False only for invalid ranges.
    pub is_valid: bool,
    /// Ordered advice lines.
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_bounds_do_not_overlap() {
        let (opt_lo, opt_hi) = RangeZone::Optimal.score_bounds();
        let (cau_lo, cau_hi) = RangeZone::Caution.score_bounds();
        let (inv_lo, inv_hi) = RangeZone::Invalid.score_bounds();
        assert_eq!((opt_lo, opt_hi), (70, 100));
        assert_eq!(cau_hi + 1, opt_lo);
        assert_eq!(inv_hi + 1, cau_lo);
        assert_eq!(inv_lo, 0);
    }

    #[test]
    fn zone_display() {
        assert_eq!(RangeZone::Caution.to_string(), "caution");
        assert_eq!(
            serde_json::to_string(&RangeZone::Invalid).unwrap(),
            "\"invalid\""
        );
    }
}
