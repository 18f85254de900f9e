//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod analyze_range;

pub use analyze_range::AnalyzeRangeUseCase;
