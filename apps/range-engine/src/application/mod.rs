//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Use Cases**: Parse raw inputs, run the domain services, render results
//! - **DTOs**: Formatted view models for the CLI and other callers

pub mod dto;
pub mod use_cases;

pub use dto::*;
pub use use_cases::*;
