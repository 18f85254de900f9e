//! Range Value Objects

mod range_data;

pub use range_data::RangeData;
