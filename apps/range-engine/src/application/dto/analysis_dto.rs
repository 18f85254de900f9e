//! Range analysis DTOs

use serde::{Deserialize, Serialize};

use crate::domain::pricing::{format_pips, format_price, to_pips};
use crate::domain::projection::{LADDER_DEPTH, SdLevels};
use crate::domain::quality::{MethodPolicy, QualityVerdict};
use crate::domain::range::RangeData;
use crate::domain::shared::{DomainError, Method, Pair};

/// Request to analyze one measured range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRangeRequestDto {
    /// Range high.
    pub high: f64,
    /// Range low.
    pub low: f64,
    /// Pair symbol, e.g. `EURUSD` or `eur/usd`.
    pub pair: String,
    /// Method tag: `cbdr`, `asian` or `flout`.
    pub method: String,
    /// Primary ladder anchor override (`extremity` or `equilibrium`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

impl AnalyzeRangeRequestDto {
    /// Request with the method's default anchor.
    #[must_use]
    pub fn new(high: f64, low: f64, pair: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            high,
            low,
            pair: pair.into(),
            method: method.into(),
            anchor: None,
        }
    }

    /// Override the primary anchor.
    #[must_use]
    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }
}

/// One rung of an SD ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdLevelDto {
    /// SD multiple, 1 through 4.
    pub sd: u8,
    /// Level above the anchor.
    pub high: String,
    /// Level below the anchor.
    pub low: String,
}

/// Formatted SD ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdLadderDto {
    /// `extremity` or `equilibrium`.
    pub anchor: String,
    /// Price distance of one SD.
    pub unit: String,
    /// One SD in pips.
    pub unit_pips: String,
    /// Rungs, innermost first.
    pub levels: Vec<SdLevelDto>,
}

impl SdLadderDto {
    /// Format `levels` for `pair`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the unit is negative.
    pub fn from_levels(levels: &SdLevels, pair: &Pair) -> Result<Self, DomainError> {
        let rungs = levels
            .highs()
            .iter()
            .zip(levels.lows())
            .zip(1..=LADDER_DEPTH)
            .map(|((high, low), n)| SdLevelDto {
                sd: u8::try_from(n).unwrap_or(u8::MAX),
                high: format_price(*high, pair),
                low: format_price(*low, pair),
            })
            .collect();

        Ok(Self {
            anchor: levels.mode().to_string(),
            unit: format_price(levels.unit(), pair),
            unit_pips: format_pips(to_pips(levels.unit(), pair)?),
            levels: rungs,
        })
    }
}

/// Quality badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityDto {
    /// `optimal`, `caution` or `invalid`.
    pub zone: String,
    /// 0-100 score.
    pub score: u8,
    /// False for invalid ranges.
    pub is_valid: bool,
    /// Advice lines in display order.
    pub recommendations: Vec<String>,
}

impl From<QualityVerdict> for QualityDto {
    fn from(verdict: QualityVerdict) -> Self {
        Self {
            zone: verdict.zone.to_string(),
            score: verdict.score,
            is_valid: verdict.is_valid,
            recommendations: verdict.recommendations,
        }
    }
}

/// Full analysis of one range, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeAnalysisDto {
    /// Canonical pair symbol.
    pub pair: String,
    /// Method tag.
    pub method: String,
    /// Formatted high.
    pub high: String,
    /// Formatted low.
    pub low: String,
    /// Formatted range size.
    pub range: String,
    /// Formatted midpoint.
    pub equilibrium: String,
    /// Range size in pips.
    pub pips: String,
    /// Ladder for the requested (or method default) anchor.
    pub primary: SdLadderDto,
    /// Ladder for the other anchor.
    pub alternate: SdLadderDto,
    /// Quality verdict.
    pub quality: QualityDto,
}

impl RangeAnalysisDto {
    /// Assemble the view model.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a ladder unit is negative.
    pub fn build(
        range: &RangeData,
        method: Method,
        primary: &SdLevels,
        alternate: &SdLevels,
        verdict: QualityVerdict,
    ) -> Result<Self, DomainError> {
        let pair = range.pair();
        Ok(Self {
            pair: pair.to_string(),
            method: method.to_string(),
            high: format_price(range.high(), pair),
            low: format_price(range.low(), pair),
            range: format_price(range.range(), pair),
            equilibrium: format_price(range.equilibrium(), pair),
            pips: format_pips(range.pips()),
            primary: SdLadderDto::from_levels(primary, pair)?,
            alternate: SdLadderDto::from_levels(alternate, pair)?,
            quality: QualityDto::from(verdict),
        })
    }
}

/// Pair advice without a measured range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceDto {
    /// Canonical pair symbol.
    pub pair: String,
    /// Method tag.
    pub method: String,
    /// Advice lines.
    pub recommendations: Vec<String>,
}

/// One row of the policy table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDto {
    /// Method tag.
    pub method: String,
    /// Display label.
    pub label: String,
    /// Lower edge of the optimal band.
    pub min_pips: String,
    /// Upper edge of the optimal band.
    pub max_pips: String,
    /// Invalidation threshold.
    pub invalid_above_pips: String,
    /// Suggested method when invalid.
    pub fallback: Option<String>,
    /// New York measurement window.
    pub window: String,
    /// Method note.
    pub note: String,
}

impl From<&MethodPolicy> for PolicyDto {
    fn from(policy: &MethodPolicy) -> Self {
        Self {
            method: policy.method.to_string(),
            label: policy.method.label().to_string(),
            min_pips: policy.min_pips.normalize().to_string(),
            max_pips: policy.max_pips.normalize().to_string(),
            invalid_above_pips: policy.invalid_above_pips.normalize().to_string(),
            fallback: policy.fallback.map(|m| m.to_string()),
            window: policy.window.to_string(),
            note: policy.note.clone(),
        }
    }
}
