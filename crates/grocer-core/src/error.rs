//! # Error Types
//!
//! Domain-specific error types for grocer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  grocer-core errors (this file)                                        │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  grocer-checkout errors (app)                                          │
//! │  ├── ConfigError      - Config file / env problems                     │
//! │  └── CheckoutError    - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CheckoutError → stderr + exit 1   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT An Error
//! - An unknown menu code is a [`Selection::Unknown`](crate::catalog::Selection)
//! - An underage customer is [`AgeVerification::Underage`](crate::item::AgeVerification)
//! - An expired frozen item is just `is_expired() == true`
//!
//! Those are normal checkout outcomes. The cashier keeps going.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A catalog entry's fixed data could not be turned into an item.
    ///
    /// ## When This Occurs
    /// Only if the static catalog table itself is wrong (e.g. an impossible
    /// expiration date). Never caused by cashier input.
    #[error("Catalog entry {code} is invalid: {reason}")]
    InvalidCatalogEntry { code: u8, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when constructing or mutating an item with values that would
/// otherwise produce a nonsensical total (negative prices, negative weights).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., invalid date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidCatalogEntry {
            code: 7,
            reason: "expiration date does not exist".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Catalog entry 7 is invalid: expiration date does not exist"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustNotBeNegative {
            field: "weight".to_string(),
        };
        assert_eq!(err.to_string(), "weight must not be negative");

        let err = ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 100,
        };
        assert_eq!(err.to_string(), "discount must be between 0 and 100");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
