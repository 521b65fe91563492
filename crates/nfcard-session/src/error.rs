//! # API Error Type
//!
//! Unified error type for session commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Configurator                       │
//! │                                                                         │
//! │  Storefront                  Rust Session                               │
//! │  ──────────                  ────────────                               │
//! │                                                                         │
//! │  submitOrder()                                                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad input?  ─── ValidationError ──────────────┐                 │  │
//! │  │         │                                      ▼                 │  │
//! │  │  ≥ 50 cards? ─── CoreError::QuoteRequired ── ApiError ──────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  catch (e) {                                                            │
//! │    if (e.code === 'QUOTE_REQUIRED') openQuoteForm();                    │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use nfcard_core::{CoreError, ValidationError};

/// API error returned from session commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "QUOTE_REQUIRED",
///   "message": "Orders of 60 cards require a manual quote"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Order is quote-only; route to the contact flow
    QuoteRequired,

    /// Checkout attempted mid-drag
    GestureInProgress,

    /// Configuration could not be loaded or is invalid
    ConfigError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::QuoteRequired { .. } => ApiError::new(ErrorCode::QuoteRequired, err.to_string()),
            CoreError::GestureInProgress => {
                ApiError::new(ErrorCode::GestureInProgress, err.to_string())
            }
            CoreError::InvalidPriceList { reason } => {
                tracing::error!(%reason, "Price list rejected");
                ApiError::new(ErrorCode::ConfigError, format!("Invalid price list: {}", reason))
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    LoadFailed(String),

    /// Config parsed but breaks a rule.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_required_maps_to_its_own_code() {
        let err: ApiError = CoreError::QuoteRequired { quantity: 60 }.into();
        assert_eq!(err.code, ErrorCode::QuoteRequired);
        assert_eq!(err.message, "Orders of 60 cards require a manual quote");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::validation("name is required");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "name is required");
    }

    #[test]
    fn test_validation_wrapped_in_core_error_keeps_message() {
        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "name".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn test_config_errors_map_to_config_code() {
        let err: ApiError = ConfigError::Invalid("currency symbol must not be empty".into()).into();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert_eq!(err.message, "Invalid configuration: currency symbol must not be empty");

        let err: ApiError = CoreError::InvalidPriceList {
            reason: "all prices must be positive".into(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert_eq!(serde_json::to_value(&err).unwrap()["code"], "CONFIG_ERROR");
    }
}
