// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Range Engine - Rust Core Library
//!
//! Session range and standard-deviation projection engine for BTMM/ICT
//! forex trading. Given a measured high/low for a pair, it produces SD
//! ladders, a range quality score and plain-language advice.
//!
//! # Architecture (Clean Architecture + DDD)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Pure calculation logic over immutable value objects
//!   - `pricing`: Pip size, display precision, formatting
//!   - `range`: Range validation, size, equilibrium
//!   - `projection`: Extremity- and equilibrium-anchored SD ladders
//!   - `quality`: Pip policy, scoring, recommendations
//!
//! - **Application**: Use cases and orchestration
//!   - `use_cases`: `AnalyzeRange` (single and batch), pair advice, policy table
//!   - `dto`: Formatted view models
//!
//! - **Ambient**: `config` (YAML + env interpolation), `telemetry`
//!   (tracing subscriber), `error` (error codes)
//!
//! # Example
//!
//! ```rust
//! use range_engine::application::{AnalyzeRangeRequestDto, AnalyzeRangeUseCase};
//!
//! let use_case = AnalyzeRangeUseCase::default();
//! let analysis = use_case
//!     .execute(&AnalyzeRangeRequestDto::new(1.1650, 1.1620, "EURUSD", "cbdr"))
//!     .unwrap();
//!
//! assert_eq!(analysis.pips, "30.0");
//! assert_eq!(analysis.primary.levels[1].high, "1.17100");
//! assert!(analysis.quality.is_valid);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Calculation logic with no infrastructure dependencies.
pub mod domain;

/// Application layer - Use cases and DTOs.
pub mod application;

// =============================================================================
// Ambient Modules
// =============================================================================

/// Configuration loading and validation.
pub mod config;

/// Error codes and the library error type.
pub mod error;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::pricing::{format_price, from_pips, pip_size, to_pips};
pub use domain::projection::{AnchorMode, ProjectionCalculator, SdLevels};
pub use domain::quality::{MethodPolicy, PolicyTable, QualityVerdict, RangeQualityAdvisor, RangeZone};
pub use domain::range::{RangeBuilder, RangeData};
pub use domain::shared::{DomainError, Method, Pair};

// Application re-exports
pub use application::dto::{AnalyzeRangeRequestDto, RangeAnalysisDto};
pub use application::use_cases::AnalyzeRangeUseCase;

// Ambient re-exports
pub use config::{Config, ConfigError, load_config, load_config_from_string};
pub use error::{EngineError, ErrorCode};
