//! Projection Value Objects

mod anchor_mode;
mod sd_levels;

pub use anchor_mode::AnchorMode;
pub use sd_levels::{LADDER_DEPTH, LadderSide, SdLevels};
