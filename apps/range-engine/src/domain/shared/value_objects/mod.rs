//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.
//! Value objects are compared by value, not identity.

mod method;
mod pair;

pub use method::Method;
pub use pair::Pair;
