//! Pricing Bounded Context
//!
//! Pair-aware pip sizing, display precision and price formatting. Every
//! other context converts between price deltas and pips through here.

mod constants;
mod formatter;

pub use constants::{JPY_DISPLAY_PRECISION, JPY_PIP_SIZE, STANDARD_DISPLAY_PRECISION, STANDARD_PIP_SIZE};
pub use formatter::{
    display_precision, format_pips, format_price, format_price_f64, from_pips, pip_size, to_pips,
    to_pips_f64,
};
