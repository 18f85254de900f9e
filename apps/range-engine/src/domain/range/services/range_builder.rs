//! Range Builder
//!
//! Validates a high/low pair and derives range size, equilibrium and pip
//! count.

use rust_decimal::Decimal;

use crate::domain::pricing::to_pips;
use crate::domain::range::value_objects::RangeData;
use crate::domain::shared::{DomainError, Pair};

/// Builds [`RangeData`] from two prices.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeBuilder;

impl RangeBuilder {
    /// Build a range from decimal prices.
    ///
    /// Every value a ladder or score derives from the result stays within
    /// `Decimal` bounds once the range, midpoint and pip count fit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if `high <= low`, or if the range, midpoint or
    /// pip count overflows a `Decimal`.
    pub fn build(high: Decimal, low: Decimal, pair: &Pair) -> Result<RangeData, DomainError> {
        if high <= low {
            return Err(DomainError::inverted_range(high, low));
        }

        let overflow = || DomainError::range_overflow(high, low);
        let range = high.checked_sub(low).ok_or_else(overflow)?;
        let equilibrium = high
            .checked_add(low)
            .and_then(|sum| sum.checked_div(Decimal::TWO))
            .ok_or_else(overflow)?;
        let pips = to_pips(range, pair).map_err(|_| overflow())?;

        Ok(RangeData::new(
            high,
            low,
            range,
            equilibrium,
            pips,
            pair.clone(),
        ))
    }

    /// Build a range from `f64` prices as typed into a form or read from a
    /// feed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if either price is not finite, cannot be
    /// represented as a decimal, or `high <= low`. Distinct prices that
    /// round to the same decimal are reported as a precision failure rather
    /// than an inverted range.
    pub fn build_f64(high: f64, low: f64, pair: &Pair) -> Result<RangeData, DomainError> {
        if !high.is_finite() || !low.is_finite() {
            return Err(DomainError::non_finite_range(high, low));
        }

        let (Ok(high_dec), Ok(low_dec)) = (Decimal::try_from(high), Decimal::try_from(low)) else {
            return Err(DomainError::InvalidRange {
                high: high.to_string(),
                low: low.to_string(),
                message: "prices are outside the supported decimal range".to_string(),
            });
        };

        if high > low && high_dec <= low_dec {
            return Err(DomainError::collapsed_range(high, low));
        }

        Self::build(high_dec, low_dec, pair)
    }
}
