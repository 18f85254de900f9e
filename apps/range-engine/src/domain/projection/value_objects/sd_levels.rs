//! SD Levels Value Object

use rust_decimal::Decimal;
use serde::Serialize;

use super::AnchorMode;

/// Number of projected levels on each side of the anchor.
pub const LADDER_DEPTH: usize = 4;

/// Which side of the anchor a level sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LadderSide {
    /// Above the anchor.
    High,
    /// Below the anchor.
    Low,
}

/// A projected ladder of four levels above and four below the anchor.
///
/// `highs[0]` is SD1 high, `highs[3]` is SD4 high; `lows` mirrors that
/// downward. Highs are strictly increasing and lows strictly decreasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SdLevels {
    mode: AnchorMode,
    unit: Decimal,
    highs: [Decimal; LADDER_DEPTH],
    lows: [Decimal; LADDER_DEPTH],
}

impl SdLevels {
    /// Project `LADDER_DEPTH` multiples of `unit` up from `anchor_high` and
    /// down from `anchor_low`.
    pub(crate) fn project(
        mode: AnchorMode,
        anchor_high: Decimal,
        anchor_low: Decimal,
        unit: Decimal,
    ) -> Self {
        let highs = std::array::from_fn(|i| anchor_high + unit * Decimal::from(i + 1));
        let lows = std::array::from_fn(|i| anchor_low - unit * Decimal::from(i + 1));
        Self {
            mode,
            unit,
            highs,
            lows,
        }
    }

    /// Anchoring mode the ladder was built with.
    #[must_use]
    pub const fn mode(&self) -> AnchorMode {
        self.mode
    }

    /// Price distance of one SD.
    #[must_use]
    pub const fn unit(&self) -> Decimal {
        self.unit
    }

    /// SD1..SD4 above the anchor.
    #[must_use]
    pub const fn highs(&self) -> &[Decimal; LADDER_DEPTH] {
        &self.highs
    }

    /// SD1..SD4 below the anchor.
    #[must_use]
    pub const fn lows(&self) -> &[Decimal; LADDER_DEPTH] {
        &self.lows
    }

    /// Level `n` (1-based) on `side`, or `None` outside `1..=4`.
    #[must_use]
    pub fn level(&self, n: usize, side: LadderSide) -> Option<Decimal> {
        let idx = n.checked_sub(1)?;
        match side {
            LadderSide::High => self.highs.get(idx).copied(),
            LadderSide::Low => self.lows.get(idx).copied(),
        }
    }

    /// SD1 high.
    #[must_use]
    pub const fn sd1_high(&self) -> Decimal {
        self.highs[0]
    }

    /// SD2 high.
    #[must_use]
    pub const fn sd2_high(&self) -> Decimal {
        self.highs[1]
    }

    /// SD3 high.
    #[must_use]
    pub const fn sd3_high(&self) -> Decimal {
        self.highs[2]
    }

    /// SD4 high.
    #[must_use]
    pub const fn sd4_high(&self) -> Decimal {
        self.highs[3]
    }

    /// SD1 low.
    #[must_use]
    pub const fn sd1_low(&self) -> Decimal {
        self.lows[0]
    }

    /// SD2 low.
    #[must_use]
    pub const fn sd2_low(&self) -> Decimal {
        self.lows[1]
    }

    /// SD3 low.
    #[must_use]
    pub const fn sd3_low(&self) -> Decimal {
        self.lows[2]
    }

    /// SD4 low.
    #[must_use]
    pub const fn sd4_low(&self) -> Decimal {
        self.lows[3]
    }
}
