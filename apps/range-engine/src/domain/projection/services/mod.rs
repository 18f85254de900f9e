//! Projection Domain Services

mod projection_calculator;

pub use projection_calculator::ProjectionCalculator;
