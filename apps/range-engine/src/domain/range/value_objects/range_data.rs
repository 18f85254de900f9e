//! Range Data Value Object

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::shared::Pair;

/// A measured session range.
///
/// Only [`RangeBuilder`](crate::domain::range::RangeBuilder) constructs
/// values with a guaranteed `high > low`; fields are read-only afterwards.
/// Nothing is pre-rounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeData {
    high: Decimal,
    low: Decimal,
    range: Decimal,
    equilibrium: Decimal,
    pips: Decimal,
    pair: Pair,
}

impl RangeData {
    pub(crate) const fn new(
        high: Decimal,
        low: Decimal,
        range: Decimal,
        equilibrium: Decimal,
        pips: Decimal,
        pair: Pair,
    ) -> Self {
        Self {
            high,
            low,
            range,
            equilibrium,
            pips,
            pair,
        }
    }

    /// Session high.
    #[must_use]
    pub const fn high(&self) -> Decimal {
        self.high
    }

    /// Session low.
    #[must_use]
    pub const fn low(&self) -> Decimal {
        self.low
    }

    /// `high - low`.
    #[must_use]
    pub const fn range(&self) -> Decimal {
        self.range
    }

    /// Midpoint, `(high + low) / 2`.
    #[must_use]
    pub const fn equilibrium(&self) -> Decimal {
        self.equilibrium
    }

    /// Range size in pips for the originating pair.
    #[must_use]
    pub const fn pips(&self) -> Decimal {
        self.pips
    }

    /// Originating pair.
    #[must_use]
    pub const fn pair(&self) -> &Pair {
        &self.pair
    }
}
