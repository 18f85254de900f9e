//! Pip band overrides per method.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::quality::{MethodPolicy, PolicyTable};
use crate::domain::shared::{DomainError, Method};

/// Policy overrides for every method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// CBDR bands.
    #[serde(default)]
    pub cbdr: BandConfig,
    /// Asian Range bands.
    #[serde(default)]
    pub asian: BandConfig,
    /// Flout Session bands.
    #[serde(default)]
    pub flout: BandConfig,
}

/// Pip thresholds for one method. Unset fields keep the method default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandConfig {
    /// Lower edge of the optimal band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_pips: Option<Decimal>,
    /// Upper edge of the optimal band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pips: Option<Decimal>,
    /// Ranges strictly above this are invalid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_above_pips: Option<Decimal>,
}

impl BandConfig {
    fn is_empty(&self) -> bool {
        self.min_pips.is_none() && self.max_pips.is_none() && self.invalid_above_pips.is_none()
    }

    fn apply(&self, method: Method) -> Result<MethodPolicy, DomainError> {
        let policy = MethodPolicy::default_for(method);
        if self.is_empty() {
            return Ok(policy);
        }
        let min = self.min_pips.unwrap_or(policy.min_pips);
        let max = self.max_pips.unwrap_or(policy.max_pips);
        let invalid_above = self.invalid_above_pips.unwrap_or(policy.invalid_above_pips);
        policy.with_bands(min, max, invalid_above)
    }
}

impl PolicyConfig {
    /// Merge the overrides onto the default table.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a merged band violates `0 < min < max <= invalid_above`.
    pub fn to_table(&self) -> Result<PolicyTable, DomainError> {
        PolicyTable::new(
            self.cbdr.apply(Method::Cbdr)?,
            self.asian.apply(Method::Asian)?,
            self.flout.apply(Method::Flout)?,
        )
    }
}
