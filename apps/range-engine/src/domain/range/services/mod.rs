//! Range Domain Services

mod range_builder;

pub use range_builder::RangeBuilder;
