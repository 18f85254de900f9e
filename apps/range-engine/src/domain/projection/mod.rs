//! Projection Bounded Context
//!
//! Projects standard-deviation ladders from a measured range. Two anchoring
//! modes exist:
//!
//! - **Extremity**: one SD equals the full range, projected outward from
//!   the high and the low (CBDR, Asian Range).
//! - **Equilibrium**: ladder centred on the midpoint, with the measured
//!   high and low sitting exactly on the 2-SD points (Flout Session).

pub mod services;
pub mod value_objects;

pub use services::ProjectionCalculator;
pub use value_objects::{AnchorMode, LADDER_DEPTH, LadderSide, SdLevels};
