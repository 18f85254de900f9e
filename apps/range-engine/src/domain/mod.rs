//! Domain Layer
//!
//! The innermost layer containing the calculation logic with zero
//! infrastructure dependencies. Every service is a pure function over
//! immutable value objects.
//!
//! # Bounded Contexts
//!
//! - [`pricing`]: Pip size, display precision, formatting
//! - [`range`]: High/low validation, range size, equilibrium
//! - [`projection`]: SD ladders (extremity- and equilibrium-anchored)
//! - [`quality`]: Range scoring, method policy, advice text

pub mod pricing;
pub mod projection;
pub mod quality;
pub mod range;
pub mod shared;
