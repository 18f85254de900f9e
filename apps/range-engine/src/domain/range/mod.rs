//! Range Bounded Context
//!
//! Turns a raw (high, low, pair) triple into a validated [`RangeData`]
//! value. Projection and quality scoring both start from here and may
//! assume a strictly positive range.

pub mod services;
pub mod value_objects;

pub use services::RangeBuilder;
pub use value_objects::RangeData;
