//! Property-based tests for range and projection invariants
//!
//! Invariants proven:
//! 1. Validation: `high <= low` is always rejected
//! 2. Midpoint: `low < equilibrium < high` and `equilibrium = (high + low) / 2`
//! 3. Ladder ordering: every ladder is strictly monotone outward
//! 4. Equilibrium identity: the 2-SD equilibrium levels sit exactly on the extremes
//! 5. Pip round trip: `to_pips(pip_size * n) == n` and `from_pips(to_pips(d)) == d`
//! 6. Idempotence: repeated evaluation yields identical verdicts
//! 7. Score bands: zone matches the policy and wider invalid ranges never score higher

use proptest::prelude::*;
use range_engine::domain::pricing::{from_pips, pip_size, to_pips};
use range_engine::domain::projection::{AnchorMode, LADDER_DEPTH, ProjectionCalculator};
use range_engine::domain::quality::{PolicyTable, RangeQualityAdvisor, RangeZone, score_pips};
use range_engine::{DomainError, Method, Pair, RangeBuilder};
use rust_decimal::Decimal;

const PAIRS: [&str; 6] = ["EURUSD", "GBPUSD", "AUDNZD", "USDJPY", "GBPJPY", "EURCHF"];

fn pair_strategy() -> impl Strategy<Value = Pair> {
    prop::sample::select(PAIRS.to_vec()).prop_map(|symbol| {
        Pair::parse(symbol).unwrap_or_else(|e| panic!("fixture pair {symbol}: {e}"))
    })
}

fn method_strategy() -> impl Strategy<Value = Method> {
    prop::sample::select(Method::ALL.to_vec())
}

/// Price at the pair's tick precision: 5 decimals, or 3 for yen quotes.
fn price(units: i64, pair: &Pair) -> Decimal {
    Decimal::new(units, if pair.is_jpy_quoted() { 3 } else { 5 })
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// Proves: a range whose high is not above its low never builds.
    #[test]
    fn inverted_or_flat_range_rejected(
        pair in pair_strategy(),
        low_units in 50_000i64..=200_000i64,
        drop in 0i64..=5_000i64,
    ) {
        let low = price(low_units, &pair);
        let high = price(low_units - drop, &pair);

        let result = RangeBuilder::build(high, low, &pair);
        let is_invalid_range = matches!(result, Err(DomainError::InvalidRange { .. }));
        prop_assert!(is_invalid_range);
    }

    /// Proves: the equilibrium is the exact midpoint and lies strictly inside.
    #[test]
    fn equilibrium_is_exact_midpoint(
        pair in pair_strategy(),
        low_units in 50_000i64..=200_000i64,
        width in 1i64..=5_000i64,
    ) {
        let low = price(low_units, &pair);
        let high = price(low_units + width, &pair);
        let range = RangeBuilder::build(high, low, &pair).unwrap();

        prop_assert_eq!(range.equilibrium(), (high + low) / Decimal::TWO);
        prop_assert!(range.low() < range.equilibrium());
        prop_assert!(range.equilibrium() < range.high());
        prop_assert_eq!(range.range(), high - low);
    }

    /// Proves: both ladders step strictly outward from their anchors.
    #[test]
    fn ladders_are_strictly_ordered(
        pair in pair_strategy(),
        low_units in 50_000i64..=200_000i64,
        width in 1i64..=5_000i64,
    ) {
        let range = RangeBuilder::build(
            price(low_units + width, &pair),
            price(low_units, &pair),
            &pair,
        ).unwrap();

        let extremity = ProjectionCalculator::calculate(&range, AnchorMode::Extremity);
        prop_assert!(extremity.sd1_high() > range.high());
        prop_assert!(extremity.sd1_low() < range.low());

        let equilibrium = ProjectionCalculator::calculate(&range, AnchorMode::Equilibrium);
        prop_assert!(equilibrium.sd1_high() > range.equilibrium());
        prop_assert!(equilibrium.sd1_low() < range.equilibrium());

        for levels in [&extremity, &equilibrium] {
            for n in 1..LADDER_DEPTH {
                prop_assert!(levels.highs()[n] > levels.highs()[n - 1]);
                prop_assert!(levels.lows()[n] < levels.lows()[n - 1]);
            }
        }
    }

    /// Proves: the equilibrium ladder's 2-SD points are the measured extremes.
    #[test]
    fn equilibrium_sd2_hits_extremes(
        pair in pair_strategy(),
        low_units in 50_000i64..=200_000i64,
        width in 1i64..=5_000i64,
    ) {
        let range = RangeBuilder::build(
            price(low_units + width, &pair),
            price(low_units, &pair),
            &pair,
        ).unwrap();
        let levels = ProjectionCalculator::calculate_sd_from_equilibrium(&range);

        prop_assert_eq!(levels.sd2_high(), range.high());
        prop_assert_eq!(levels.sd2_low(), range.low());
    }

    /// Proves: any non-negative pip count, whole or fractional, survives
    /// scaling by the pip size and converting back.
    #[test]
    fn pips_from_pip_multiples(
        pair in pair_strategy(),
        units in 0i64..=10_000_000i64,
        scale in 0u32..=3u32,
    ) {
        let n = Decimal::new(units, scale);
        let pips = to_pips(pip_size(&pair) * n, &pair).unwrap();

        prop_assert_eq!(pips, n);
    }

    /// Proves: converting a price delta to pips and back is lossless.
    #[test]
    fn pip_round_trip(
        pair in pair_strategy(),
        delta_units in 0i64..=1_000_000i64,
    ) {
        let delta = price(delta_units, &pair);
        let pips = to_pips(delta, &pair).unwrap();

        prop_assert_eq!(from_pips(pips, &pair), delta);
    }

    /// Proves: evaluation is a pure function of its inputs.
    #[test]
    fn evaluation_is_idempotent(
        pair in pair_strategy(),
        method in method_strategy(),
        low_units in 50_000i64..=200_000i64,
        width in 1i64..=20_000i64,
    ) {
        let advisor = RangeQualityAdvisor::default();
        let range = RangeBuilder::build(
            price(low_units + width, &pair),
            price(low_units, &pair),
            &pair,
        ).unwrap();

        let first = advisor.evaluate(&range, method, &pair).unwrap();
        let second = advisor.evaluate(&range, method, &pair).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.is_valid, first.zone != RangeZone::Invalid);
        prop_assert!(!first.recommendations.is_empty());
    }

    /// Proves: the zone follows the policy thresholds and the score stays in its band.
    #[test]
    fn zone_matches_policy(
        method in method_strategy(),
        tenths in 0i64..=2_000i64,
    ) {
        let pips = Decimal::new(tenths, 1);
        let policy = PolicyTable::defaults().get(method);
        let (zone, score) = score_pips(pips, policy);

        let expected = if pips > policy.invalid_above_pips {
            RangeZone::Invalid
        } else if pips >= policy.min_pips && pips <= policy.max_pips {
            RangeZone::Optimal
        } else {
            RangeZone::Caution
        };
        prop_assert_eq!(zone, expected);

        let (lo, hi) = zone.score_bounds();
        prop_assert!((lo..=hi).contains(&score));
    }

    /// Proves: above the invalidation threshold, wider ranges never score higher.
    #[test]
    fn invalid_score_monotone(
        method in method_strategy(),
        a in 0i64..=5_000i64,
        b in 0i64..=5_000i64,
    ) {
        let policy = PolicyTable::defaults().get(method);
        let base = policy.invalid_above_pips + Decimal::new(1, 1);
        let narrow = base + Decimal::new(a.min(b), 1);
        let wide = base + Decimal::new(a.max(b), 1);

        let (_, narrow_score) = score_pips(narrow, policy);
        let (_, wide_score) = score_pips(wide, policy);
        prop_assert!(wide_score <= narrow_score);
    }
}
