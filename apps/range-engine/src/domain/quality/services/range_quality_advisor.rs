//! Range Quality Advisor
//!
//! Scores a range against the method's pip policy and assembles the
//! recommendation list shown under the quality badge.

use rust_decimal::Decimal;

use super::pair_notes::pair_recommendations;
use super::scoring::score_pips;
use crate::domain::pricing::{format_pips, to_pips};
use crate::domain::quality::value_objects::{MethodPolicy, PolicyTable, QualityVerdict, RangeZone};
use crate::domain::range::RangeData;
use crate::domain::shared::{DomainError, Method, Pair};

/// Range quality advisor.
#[derive(Debug, Clone, Default)]
pub struct RangeQualityAdvisor {
    policies: PolicyTable,
}

impl RangeQualityAdvisor {
    /// Create an advisor with a custom policy table.
    #[must_use]
    pub const fn new(policies: PolicyTable) -> Self {
        Self { policies }
    }

    /// Policy table in use.
    #[must_use]
    pub const fn policies(&self) -> &PolicyTable {
        &self.policies
    }

    /// Policy for one method.
    #[must_use]
    pub const fn policy(&self, method: Method) -> &MethodPolicy {
        self.policies.get(method)
    }

    /// Score `range` for `method`, with pair notes for `pair`.
    ///
    /// Recommendation order: pip-band verdict, switch suggestion (invalid
    /// ranges only), method note, pair notes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if the range is zero or negative.
    pub fn evaluate(
        &self,
        range: &RangeData,
        method: Method,
        pair: &Pair,
    ) -> Result<QualityVerdict, DomainError> {
        if range.range() <= Decimal::ZERO {
            return Err(DomainError::inverted_range(range.high(), range.low()));
        }

        let pips = to_pips(range.range(), pair)?;
        let policy = self.policy(method);
        let (zone, score) = score_pips(pips, policy);

        let mut recommendations = vec![band_verdict(pips, policy, zone)];
        if zone == RangeZone::Invalid {
            recommendations.push(self.switch_suggestion(policy));
        }
        recommendations.push(method_note(policy));
        recommendations.extend(pair_recommendations(pair, method));

        Ok(QualityVerdict {
            method,
            pips,
            zone,
            score,
            is_valid: zone != RangeZone::Invalid,
            recommendations,
        })
    }

    /// Advice text for a pair without scoring anything.
    #[must_use]
    pub fn get_pair_recommendations(&self, pair: &Pair, method: Method) -> Vec<String> {
        pair_recommendations(pair, method)
    }

    fn switch_suggestion(&self, policy: &MethodPolicy) -> String {
        match policy.fallback {
            Some(fallback) => {
                let target = self.policy(fallback);
                format!(
                    "Switch to the {} method (optimal {}-{} pips) for today's projections",
                    fallback.label(),
                    target.min_pips,
                    target.max_pips
                )
            }
            None => "No fallback method: stand aside until a cleaner range forms".to_string(),
        }
    }
}

fn band_verdict(pips: Decimal, policy: &MethodPolicy, zone: RangeZone) -> String {
    let label = policy.method.label();
    let pips_text = format_pips(pips);
    let (min, max, invalid_above) = (
        policy.min_pips,
        policy.max_pips,
        policy.invalid_above_pips,
    );

    match zone {
        RangeZone::Optimal => {
            format!("{label} range of {pips_text} pips is within the optimal {min}-{max} pip band")
        }
        RangeZone::Caution if pips < min => format!(
            "{label} range of {pips_text} pips is below the optimal {min}-{max} pip band; \
             projections may be too tight to trade"
        ),
        RangeZone::Caution => format!(
            "{label} range of {pips_text} pips is above the optimal {min}-{max} pip band; \
             trade with caution (invalid above {invalid_above} pips)"
        ),
        RangeZone::Invalid if !policy.has_caution_above() => format!(
            "{label} range of {pips_text} pips is above the optimal {min}-{max} pip band \
             and {label} has no caution zone; the range is invalid for this method"
        ),
        RangeZone::Invalid => format!(
            "{label} range of {pips_text} pips exceeds {invalid_above} pips; \
             the range is invalid for this method"
        ),
    }
}

fn method_note(policy: &MethodPolicy) -> String {
    format!("{} ({} New York)", policy.note, policy.window)
}
