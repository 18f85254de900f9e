//! Projection Calculator
//!
//! Both anchoring modes are kept as separate named operations. Their
//! defining identities differ and each has its own tests:
//!
//! - extremity: `sd1_high == high + range`
//! - equilibrium: `sd2_high == high`, `sd2_low == low`

use rust_decimal::Decimal;

use crate::domain::projection::value_objects::{AnchorMode, SdLevels};
use crate::domain::range::RangeData;
use crate::domain::shared::Method;

/// Quarter of the range: one SD in equilibrium mode.
const EQUILIBRIUM_UNIT_DIVISOR: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Stateless SD ladder calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionCalculator;

impl ProjectionCalculator {
    /// Extremity-anchored ladder.
    ///
    /// One SD is the full range: `sdN_high = high + N * range`,
    /// `sdN_low = low - N * range`.
    #[must_use]
    pub fn calculate_sd_levels(range: &RangeData) -> SdLevels {
        SdLevels::project(
            AnchorMode::Extremity,
            range.high(),
            range.low(),
            range.range(),
        )
    }

    /// Equilibrium-anchored ladder.
    ///
    /// Centred on the midpoint with the measured high and low on the 2-SD
    /// points, so one SD is half the equilibrium-to-extreme distance:
    /// `sdN_high = equilibrium + N * range / 4`.
    ///
    /// The unit is `range / 4`, not the `range / 2` equilibrium-to-extreme
    /// distance itself. `sd1_high` therefore sits halfway between the
    /// equilibrium and the high, and never on the high.
    #[must_use]
    pub fn calculate_sd_from_equilibrium(range: &RangeData) -> SdLevels {
        let unit = range.range() / EQUILIBRIUM_UNIT_DIVISOR;
        SdLevels::project(
            AnchorMode::Equilibrium,
            range.equilibrium(),
            range.equilibrium(),
            unit,
        )
    }

    /// Ladder for an explicit anchoring mode.
    #[must_use]
    pub fn calculate(range: &RangeData, mode: AnchorMode) -> SdLevels {
        match mode {
            AnchorMode::Extremity => Self::calculate_sd_levels(range),
            AnchorMode::Equilibrium => Self::calculate_sd_from_equilibrium(range),
        }
    }

    /// Ladder using the method's customary anchoring mode.
    #[must_use]
    pub fn calculate_for_method(range: &RangeData, method: Method) -> SdLevels {
        Self::calculate(range, AnchorMode::from(method))
    }
}
