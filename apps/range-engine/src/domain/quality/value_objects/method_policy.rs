//! Method Policy Value Objects
//!
//! Pip bands per method. The thresholds are methodology constants quoted
//! in the trading panels; configuration may override them but the defaults
//! below must stay as they are.

use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::OnceLock;

use super::SessionWindow;
use crate::domain::shared::{DomainError, Method};

/// Pip policy for one method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodPolicy {
    /// Method this policy applies to.
    pub method: Method,
    /// Lower bound of the optimal band (inclusive).
    pub min_pips: Decimal,
    /// Upper bound of the optimal band (inclusive).
    pub max_pips: Decimal,
    /// Ranges strictly above this are invalid.
    pub invalid_above_pips: Decimal,
    /// Method to suggest when the range is invalid.
    pub fallback: Option<Method>,
    /// Measurement window in New York time.
    pub window: SessionWindow,
    /// Method-specific advice line.
    pub note: String,
}

impl MethodPolicy {
    /// Default policy for `method`.
    #[must_use]
    pub fn default_for(method: Method) -> Self {
        match method {
            Method::Cbdr => Self {
                method,
                min_pips: Decimal::from(20),
                max_pips: Decimal::from(40),
                invalid_above_pips: Decimal::from(40),
                fallback: Some(Method::Flout),
                window: SessionWindow::from_hours(14, 20),
                note: "Clean consolidation required: no trending through the window".to_string(),
            },
            Method::Asian => Self {
                method,
                min_pips: Decimal::from(20),
                max_pips: Decimal::from(30),
                invalid_above_pips: Decimal::from(50),
                fallback: Some(Method::Flout),
                window: SessionWindow::from_hours(19, 0),
                note: "Expect London to raid one side of the Asian range before expansion"
                    .to_string(),
            },
            Method::Flout => Self {
                method,
                min_pips: Decimal::from(30),
                max_pips: Decimal::from(50),
                invalid_above_pips: Decimal::from(60),
                fallback: None,
                window: SessionWindow::from_hours(15, 0),
                note: "Flout spans the CBDR into the Asian session: project from equilibrium"
                    .to_string(),
            },
        }
    }

    /// Replace the pip thresholds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` unless `0 < min < max <= invalid_above`.
    pub fn with_bands(
        mut self,
        min_pips: Decimal,
        max_pips: Decimal,
        invalid_above_pips: Decimal,
    ) -> Result<Self, DomainError> {
        if min_pips <= Decimal::ZERO || min_pips >= max_pips || max_pips > invalid_above_pips {
            return Err(DomainError::InvalidInput {
                field: format!("policy.{}", self.method),
                message: format!(
                    "pip bands must satisfy 0 < min < max <= invalid_above \
                     (got {min_pips}, {max_pips}, {invalid_above_pips})"
                ),
            });
        }
        self.min_pips = min_pips;
        self.max_pips = max_pips;
        self.invalid_above_pips = invalid_above_pips;
        Ok(self)
    }

    /// Centre of the optimal band.
    #[must_use]
    pub fn band_centre(&self) -> Decimal {
        (self.min_pips + self.max_pips) / Decimal::TWO
    }

    /// True when a caution zone exists between the band and invalidation.
    #[must_use]
    pub fn has_caution_above(&self) -> bool {
        self.invalid_above_pips > self.max_pips
    }
}

/// Policies for every method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyTable {
    cbdr: MethodPolicy,
    asian: MethodPolicy,
    flout: MethodPolicy,
}

impl PolicyTable {
    /// Table from explicit policies.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a policy is filed under the wrong method.
    pub fn new(
        cbdr: MethodPolicy,
        asian: MethodPolicy,
        flout: MethodPolicy,
    ) -> Result<Self, DomainError> {
        for (expected, policy) in [
            (Method::Cbdr, &cbdr),
            (Method::Asian, &asian),
            (Method::Flout, &flout),
        ] {
            if policy.method != expected {
                return Err(DomainError::InvalidInput {
                    field: format!("policy.{expected}"),
                    message: format!("policy is for method '{}'", policy.method),
                });
            }
        }
        Ok(Self { cbdr, asian, flout })
    }

    /// Shared read-only default table.
    #[must_use]
    pub fn defaults() -> &'static Self {
        static DEFAULT_TABLE: OnceLock<PolicyTable> = OnceLock::new();
        DEFAULT_TABLE.get_or_init(Self::default)
    }

    /// Policy for `method`.
    #[must_use]
    pub const fn get(&self, method: Method) -> &MethodPolicy {
        match method {
            Method::Cbdr => &self.cbdr,
            Method::Asian => &self.asian,
            Method::Flout => &self.flout,
        }
    }

    /// All policies in method order.
    pub fn iter(&self) -> impl Iterator<Item = &MethodPolicy> {
        [&self.cbdr, &self.asian, &self.flout].into_iter()
    }
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self {
            cbdr: MethodPolicy::default_for(Method::Cbdr),
            asian: MethodPolicy::default_for(Method::Asian),
            flout: MethodPolicy::default_for(Method::Flout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test_case(Method::Cbdr, dec!(20), dec!(40), dec!(40) ; "cbdr")]
    #[test_case(Method::Asian, dec!(20), dec!(30), dec!(50) ; "asian")]
    #[test_case(Method::Flout, dec!(30), dec!(50), dec!(60) ; "flout")]
    fn default_bands(method: Method, min: Decimal, max: Decimal, invalid: Decimal) {
        let policy = PolicyTable::defaults().get(method);
        assert_eq!(policy.method, method);
        assert_eq!(policy.min_pips, min);
        assert_eq!(policy.max_pips, max);
        assert_eq!(policy.invalid_above_pips, invalid);
    }

    #[test]
    fn default_fallbacks() {
        let table = PolicyTable::default();
        assert_eq!(table.get(Method::Cbdr).fallback, Some(Method::Flout));
        assert_eq!(table.get(Method::Asian).fallback, Some(Method::Flout));
        assert_eq!(table.get(Method::Flout).fallback, None);
    }

    #[test]
    fn default_windows() {
        let table = PolicyTable::default();
        assert_eq!(table.get(Method::Cbdr).window.to_string(), "14:00-20:00");
        assert_eq!(table.get(Method::Asian).window.to_string(), "19:00-00:00");
        assert_eq!(table.get(Method::Flout).window.to_string(), "15:00-00:00");
    }

    #[test]
    fn cbdr_has_no_caution_above() {
        let table = PolicyTable::default();
        assert!(!table.get(Method::Cbdr).has_caution_above());
        assert!(table.get(Method::Asian).has_caution_above());
        assert!(table.get(Method::Flout).has_caution_above());
    }

    #[test]
    fn band_centre() {
        assert_eq!(MethodPolicy::default_for(Method::Flout).band_centre(), dec!(40));
    }

    #[test]
    fn with_bands_accepts_valid() {
        let policy = MethodPolicy::default_for(Method::Cbdr)
            .with_bands(dec!(15), dec!(35), dec!(45))
            .unwrap();
        assert_eq!(policy.min_pips, dec!(15));
        assert_eq!(policy.max_pips, dec!(35));
        assert_eq!(policy.invalid_above_pips, dec!(45));
    }

    #[test_case(dec!(0), dec!(40), dec!(40) ; "zero min")]
    #[test_case(dec!(40), dec!(20), dec!(60) ; "min above max")]
    #[test_case(dec!(20), dec!(40), dec!(30) ; "invalid below max")]
    fn with_bands_rejects(min: Decimal, max: Decimal, invalid: Decimal) {
        let result = MethodPolicy::default_for(Method::Cbdr).with_bands(min, max, invalid);
        assert!(matches!(result, Err(DomainError::InvalidInput { .. })));
    }

    #[test]
    fn table_rejects_misfiled_policy() {
        let result = PolicyTable::new(
            MethodPolicy::default_for(Method::Asian),
            MethodPolicy::default_for(Method::Asian),
            MethodPolicy::default_for(Method::Flout),
        );
        assert!(result.is_err());
    }

    #[test]
    fn table_iter_in_method_order() {
        let methods: Vec<Method> = PolicyTable::default().iter().map(|p| p.method).collect();
        assert_eq!(methods, Method::ALL.to_vec());
    }
}
