//! Pip and precision constants.

use rust_decimal::Decimal;

/// Pip size for pairs not quoted in yen.
pub const STANDARD_PIP_SIZE: Decimal = Decimal::from_parts(1, 0, 0, false, 4); // 0.0001
/// Pip size for yen-quoted pairs.
pub const JPY_PIP_SIZE: Decimal = Decimal::from_parts(1, 0, 0, false, 2); // 0.01
/// Display decimals for pairs not quoted in yen.
pub const STANDARD_DISPLAY_PRECISION: u32 = 5;
/// Display decimals for yen-quoted pairs.
pub const JPY_DISPLAY_PRECISION: u32 = 3;
/// Display decimals for pip counts.
pub const PIPS_DISPLAY_PRECISION: u32 = 1;
