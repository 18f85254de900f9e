//! Price formatting and pip conversion.
//!
//! Rounding is half away from zero everywhere (`1.123455` → `1.12346`).
//! Values are never pre-rounded; rounding happens only when a string is
//! produced.

use rust_decimal::prelude::*;

use super::constants::{
    JPY_DISPLAY_PRECISION, JPY_PIP_SIZE, PIPS_DISPLAY_PRECISION, STANDARD_DISPLAY_PRECISION,
    STANDARD_PIP_SIZE,
};
use crate::domain::shared::{DomainError, Pair};

/// Smallest standard price increment for `pair`.
#[must_use]
pub fn pip_size(pair: &Pair) -> Decimal {
    if pair.is_jpy_quoted() {
        JPY_PIP_SIZE
    } else {
        STANDARD_PIP_SIZE
    }
}

/// Number of decimals a price for `pair` is displayed with.
#[must_use]
pub fn display_precision(pair: &Pair) -> u32 {
    if pair.is_jpy_quoted() {
        JPY_DISPLAY_PRECISION
    } else {
        STANDARD_DISPLAY_PRECISION
    }
}

/// Render `price` fixed to the pair's display precision.
#[must_use]
pub fn format_price(price: Decimal, pair: &Pair) -> String {
    fixed(price, display_precision(pair))
}

/// Render an `f64` price fixed to the pair's display precision.
///
/// Values outside `Decimal`'s range fall back to float formatting, so this
/// never fails.
#[must_use]
pub fn format_price_f64(price: f64, pair: &Pair) -> String {
    let dp = display_precision(pair);
    Decimal::from_f64(price).map_or_else(
        || format!("{price:.prec$}", prec = dp as usize),
        |d| fixed(d, dp),
    )
}

/// Render a pip count with one decimal (`"30.0"`).
#[must_use]
pub fn format_pips(pips: Decimal) -> String {
    fixed(pips, PIPS_DISPLAY_PRECISION)
}

/// Convert a non-negative price delta to pips.
///
/// # Errors
///
/// Returns `InvalidInput` if `price_delta` is negative or its pip count
/// does not fit in a `Decimal`.
pub fn to_pips(price_delta: Decimal, pair: &Pair) -> Result<Decimal, DomainError> {
    if price_delta.is_sign_negative() && !price_delta.is_zero() {
        return Err(DomainError::InvalidInput {
            field: "price_delta".to_string(),
            message: format!("pip conversion requires a non-negative delta, got {price_delta}"),
        });
    }
    price_delta
        .checked_div(pip_size(pair))
        .map(|pips| pips.normalize())
        .ok_or_else(|| DomainError::InvalidInput {
            field: "price_delta".to_string(),
            message: format!("delta {price_delta} is too large to express in pips"),
        })
}

/// Convert an `f64` price delta to pips.
///
/// # Errors
///
/// Returns `InvalidInput` if `price_delta` is NaN, infinite, or negative.
pub fn to_pips_f64(price_delta: f64, pair: &Pair) -> Result<Decimal, DomainError> {
    if !price_delta.is_finite() {
        return Err(DomainError::InvalidInput {
            field: "price_delta".to_string(),
            message: format!("pip conversion requires a finite delta, got {price_delta}"),
        });
    }
    let delta = Decimal::from_f64(price_delta).ok_or_else(|| DomainError::InvalidInput {
        field: "price_delta".to_string(),
        message: format!("delta {price_delta} is out of range"),
    })?;
    to_pips(delta, pair)
}

/// Convert a pip count back to a price delta.
#[must_use]
pub fn from_pips(pips: Decimal, pair: &Pair) -> Decimal {
    pips * pip_size(pair)
}

fn fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    fn pair(s: &str) -> Pair {
        Pair::parse(s).unwrap()
    }

    #[test_case("EURUSD", dec!(0.0001), 5 ; "eurusd")]
    #[test_case("GBPUSD", dec!(0.0001), 5 ; "gbpusd")]
    #[test_case("USDJPY", dec!(0.01), 3 ; "usdjpy")]
    #[test_case("GBPJPY", dec!(0.01), 3 ; "gbpjpy")]
    #[test_case("JPYUSD", dec!(0.0001), 5 ; "jpy base only")]
    fn pip_size_and_precision(symbol: &str, pip: Decimal, dp: u32) {
        let p = pair(symbol);
        assert_eq!(pip_size(&p), pip);
        assert_eq!(display_precision(&p), dp);
    }

    #[test]
    fn format_price_rounds_to_five_decimals() {
        assert_eq!(format_price(dec!(1.123456), &pair("EURUSD")), "1.12346");
    }

    #[test]
    fn format_price_pads_jpy() {
        assert_eq!(format_price(dec!(148.7), &pair("USDJPY")), "148.700");
    }

    #[test]
    fn format_price_midpoint_rounds_away_from_zero() {
        assert_eq!(format_price(dec!(1.123455), &pair("EURUSD")), "1.12346");
        assert_eq!(format_price(dec!(148.1235), &pair("USDJPY")), "148.124");
    }

    #[test]
    fn format_price_f64_matches_decimal() {
        assert_eq!(format_price_f64(1.123456, &pair("EURUSD")), "1.12346");
        assert_eq!(format_price_f64(148.7, &pair("USDJPY")), "148.700");
    }

    #[test]
    fn format_price_f64_never_fails() {
        let p = pair("EURUSD");
        assert!(!format_price_f64(1e300, &p).is_empty());
        assert!(!format_price_f64(f64::NAN, &p).is_empty());
    }

    #[test]
    fn format_pips_one_decimal() {
        assert_eq!(format_pips(dec!(30)), "30.0");
        assert_eq!(format_pips(dec!(12.25)), "12.3");
    }

    #[test]
    fn to_pips_standard_pair() {
        assert_eq!(to_pips(dec!(0.0030), &pair("EURUSD")).unwrap(), dec!(30));
    }

    #[test]
    fn to_pips_jpy_pair() {
        assert_eq!(to_pips(dec!(0.30), &pair("USDJPY")).unwrap(), dec!(30));
    }

    #[test]
    fn to_pips_zero_is_allowed() {
        assert_eq!(to_pips(Decimal::ZERO, &pair("EURUSD")).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn to_pips_rejects_negative() {
        let err = to_pips(dec!(-0.0010), &pair("EURUSD")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput { .. }));
    }

    #[test]
    fn to_pips_rejects_overflow() {
        let err = to_pips(Decimal::MAX, &pair("EURUSD")).unwrap_err();
        let DomainError::InvalidInput { field, message } = err else {
            panic!("expected InvalidInput, got {err:?}");
        };
        assert_eq!(field, "price_delta");
        assert!(message.contains("too large"));
    }

    #[test]
    fn to_pips_accepts_large_jpy_delta() {
        let delta = Decimal::MAX / Decimal::ONE_THOUSAND;
        assert!(to_pips(delta, &pair("USDJPY")).is_ok());
    }

    #[test_case(f64::NAN ; "nan")]
    #[test_case(f64::INFINITY ; "infinity")]
    #[test_case(-0.001 ; "negative")]
    fn to_pips_f64_rejects(delta: f64) {
        assert!(matches!(
            to_pips_f64(delta, &pair("EURUSD")),
            Err(DomainError::InvalidInput { .. })
        ));
    }

    #[test]
    fn to_pips_f64_converts() {
        assert_eq!(to_pips_f64(0.003, &pair("EURUSD")).unwrap(), dec!(30));
    }

    #[test]
    fn from_pips_inverts_to_pips() {
        let p = pair("GBPJPY");
        let delta = from_pips(dec!(45), &p);
        assert_eq!(delta, dec!(0.45));
        assert_eq!(to_pips(delta, &p).unwrap(), dec!(45));
    }
}
