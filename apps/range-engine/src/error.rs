//! Error handling for the range engine.
//!
//! Domain and configuration failures are folded into [`EngineError`], which
//! carries a stable [`ErrorCode`] for callers that render validation
//! messages or map failures to exit codes.
//!
//! | Code | User-facing | Usage |
//! |------|-------------|-------|
//! | `INVALID_RANGE` | yes | High not above low, or a non-finite price |
//! | `INVALID_PAIR` | yes | Unparsable pair symbol |
//! | `INVALID_METHOD` | yes | Unknown method tag |
//! | `INVALID_INPUT` | no | Caller contract violation (e.g. negative pip delta) |
//! | `CONFIG_ERROR` | no | Configuration could not be loaded or validated |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::shared::DomainError;

/// Error codes for the range engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// High/low cannot form a range.
    InvalidRange,
    /// Pair symbol could not be parsed.
    InvalidPair,
    /// Unknown method tag.
    InvalidMethod,
    /// Caller passed a value outside a function's contract.
    InvalidInput,
    /// Configuration failed to load or validate.
    ConfigError,
}

impl ErrorCode {
    /// Stable reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidRange => "INVALID_RANGE",
            Self::InvalidPair => "INVALID_PAIR",
            Self::InvalidMethod => "INVALID_METHOD",
            Self::InvalidInput => "INVALID_INPUT",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// True for errors the UI should show as a blocking validation message.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange | Self::InvalidPair | Self::InvalidMethod
        )
    }

    /// Process exit code for the CLI.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.is_user_facing() { 2 } else { 1 }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// A range engine error with code and context.
#[derive(Debug, Error)]
pub struct EngineError {
    code: ErrorCode,
    message: String,
    context: Vec<(String, String)>,
}

impl EngineError {
    /// Create a new error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Add context to the error.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the context.
    #[must_use]
    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }

    /// Serializable error body.
    #[must_use]
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code.reason().to_string(),
            message: self.message.clone(),
            user_facing: self.code.is_user_facing(),
            details: self.context.iter().cloned().collect(),
        }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.reason(), self.message)
    }
}

impl From<DomainError> for EngineError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidRange { high, low, message } => {
                Self::new(ErrorCode::InvalidRange, message)
                    .with_context("high", high)
                    .with_context("low", low)
            }
            DomainError::InvalidPair { symbol, message } => {
                Self::new(ErrorCode::InvalidPair, message).with_context("pair", symbol)
            }
            DomainError::InvalidMethod { value } => Self::new(
                ErrorCode::InvalidMethod,
                format!("unknown method '{value}', expected one of cbdr, asian, flout"),
            )
            .with_context("method", value),
            DomainError::InvalidInput { field, message } => {
                Self::new(ErrorCode::InvalidInput, message).with_context("field", field)
            }
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigError, err.to_string())
    }
}

/// Error body rendered by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code string.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Whether the message is meant for the end user.
    pub user_facing: bool,
    /// Additional details.
    pub details: std::collections::BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_classification() {
        assert!(ErrorCode::InvalidRange.is_user_facing());
        assert!(ErrorCode::InvalidPair.is_user_facing());
        assert!(ErrorCode::InvalidMethod.is_user_facing());
        assert!(!ErrorCode::InvalidInput.is_user_facing());
        assert!(!ErrorCode::ConfigError.is_user_facing());
        assert_eq!(ErrorCode::InvalidRange.exit_code(), 2);
        assert_eq!(ErrorCode::ConfigError.exit_code(), 1);
    }

    #[test]
    fn test_engine_error_creation() {
        let error = EngineError::new(ErrorCode::InvalidInput, "negative delta")
            .with_context("field", "price_delta");

        assert_eq!(error.code(), ErrorCode::InvalidInput);
        assert_eq!(error.message(), "negative delta");
        assert_eq!(error.context().len(), 1);
    }

    #[test]
    fn test_from_invalid_range() {
        let error = EngineError::from(DomainError::inverted_range("1.1620", "1.1650"));

        assert_eq!(error.code(), ErrorCode::InvalidRange);
        assert_eq!(error.message(), "high must be greater than low");
        assert_eq!(
            error.context(),
            &[
                ("high".to_string(), "1.1620".to_string()),
                ("low".to_string(), "1.1650".to_string())
            ]
        );
    }

    #[test]
    fn test_from_invalid_method() {
        let error = EngineError::from(DomainError::InvalidMethod {
            value: "london".to_string(),
        });
        assert_eq!(error.code(), ErrorCode::InvalidMethod);
        assert!(error.message().contains("london"));
    }

    #[test]
    fn test_to_response() {
        let error = EngineError::from(DomainError::InvalidPair {
            symbol: "EU".to_string(),
            message: "Pair must be two three-letter currency codes".to_string(),
        });
        let response = error.to_response();

        assert_eq!(response.code, "INVALID_PAIR");
        assert!(response.user_facing);
        assert_eq!(response.details.get("pair").map(String::as_str), Some("EU"));
    }

    #[test]
    fn test_from_config_error() {
        let error = EngineError::from(ConfigError::ValidationError(
            "logging.level must be one of trace, debug, info, warn, error".to_string(),
        ));

        assert_eq!(error.code(), ErrorCode::ConfigError);
        assert!(!error.to_response().user_facing);
        assert!(error.message().contains("logging.level"));
    }

    #[test]
    fn test_error_display() {
        let error = EngineError::new(ErrorCode::InvalidInput, "negative delta");
        assert_eq!(error.to_string(), "[INVALID_INPUT] negative delta");
    }

    #[test]
    fn test_error_code_serde() {
        let json = serde_json::to_string(&ErrorCode::InvalidRange).unwrap();
        assert_eq!(json, "\"INVALID_RANGE\"");
    }
}
