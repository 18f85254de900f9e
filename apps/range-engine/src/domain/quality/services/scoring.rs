//! Pip-count scoring curve.
//!
//! - Optimal: `100 - 30 * |pips - centre| / half_width`
//! - Caution above: `69 - 29 * (pips - max) / (invalid_above - max)`
//! - Caution below: `40 + 29 * pips / min`
//! - Invalid: `39 * invalid_above / pips`
//!
//! Results are rounded half away from zero and clamped to the zone bounds.

use rust_decimal::prelude::*;

use crate::domain::quality::value_objects::{MethodPolicy, RangeZone};

/// Classify `pips` against `policy` and score it.
#[must_use]
pub fn score_pips(pips: Decimal, policy: &MethodPolicy) -> (RangeZone, u8) {
    let min = policy.min_pips;
    let max = policy.max_pips;
    let invalid_above = policy.invalid_above_pips;

    if pips > invalid_above {
        let raw = Decimal::from(39) * invalid_above / pips;
        return (RangeZone::Invalid, clamp_score(raw, RangeZone::Invalid));
    }

    if pips >= min && pips <= max {
        let half_width = (max - min) / Decimal::TWO;
        let raw = if half_width.is_zero() {
            Decimal::ONE_HUNDRED
        } else {
            let distance = (pips - policy.band_centre()).abs();
            Decimal::ONE_HUNDRED - Decimal::from(30) * distance / half_width
        };
        return (RangeZone::Optimal, clamp_score(raw, RangeZone::Optimal));
    }

    let raw = if pips < min {
        Decimal::from(40) + Decimal::from(29) * pips / min
    } else {
        Decimal::from(69) - Decimal::from(29) * (pips - max) / (invalid_above - max)
    };
    (RangeZone::Caution, clamp_score(raw, RangeZone::Caution))
}

fn clamp_score(raw: Decimal, zone: RangeZone) -> u8 {
    let (lo, hi) = zone.score_bounds();
    raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .clamp(Decimal::from(lo), Decimal::from(hi))
        .to_u8()
        .unwrap_or(lo)
}
