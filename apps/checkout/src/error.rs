//! # Checkout Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ValidationError ──► CoreError ──┐                                      │
//! │                                  │                                      │
//! │  toml / io ────────► ConfigError ┼──► CheckoutError ──► main()          │
//! │                                  │                        │             │
//! │  stdin / stdout ───► io::Error ──┘                        ▼             │
//! │                                              error!(..) + exit code 1   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cashier mistakes (unknown codes, bad birth dates, underage customers) are
//! handled inside the session and never become a `CheckoutError`.

use grocer_core::CoreError;
use thiserror::Error;

/// Errors from loading, validating or saving `checkout.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read or write config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("No config path available on this platform")]
    NoConfigPath,
}

/// Result alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error for a checkout run.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode receipt: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<grocer_core::ValidationError> for CheckoutError {
    fn from(err: grocer_core::ValidationError) -> Self {
        CheckoutError::Core(err.into())
    }
}

/// Result alias for checkout operations.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_core::ValidationError;

    #[test]
    fn test_validation_error_reaches_checkout_error() {
        let err: CheckoutError = ValidationError::MustNotBeNegative {
            field: "weight".to_string(),
        }
        .into();
        assert!(matches!(err, CheckoutError::Core(CoreError::Validation(_))));
        assert_eq!(err.to_string(), "Validation error: weight must not be negative");
    }

    #[test]
    fn test_config_error_message() {
        let err: CheckoutError = ConfigError::Invalid("line_items must be at least 1".into()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid configuration: line_items must be at least 1"
        );
    }
}
