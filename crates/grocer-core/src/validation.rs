//! # Validation Module
//!
//! Input validation for item construction and mutation.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal (grocer-checkout)                                   │
//! │  ├── Menu code parsing (unknown code → Selection::Unknown)              │
//! │  └── Date / weight text parsing                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Item constructors and setters                                │
//! │  └── THIS MODULE: no negative prices, weights, quantities              │
//! │                                                                         │
//! │  Past layer 2 every Item is well-formed, so total_price() never        │
//! │  has an error path.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use grocer_core::money::Money;
//! use grocer_core::validation::{validate_price, validate_quantity};
//!
//! assert!(validate_price(Money::from_cents(75)).is_ok());
//! assert!(validate_quantity(-1).is_err());
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Abv, Weight, FULL_BPS};
use crate::{MAX_ITEM_QUANTITY, MAX_NAME_LENGTH, MAX_UNIT_PRICE, MAX_WEIGHT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use grocer_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Pizza Rolls").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items, 100% discounts)
/// - Must not exceed MAX_UNIT_PRICE ($1,000,000.00)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "unit price".to_string(),
        });
    }

    if price.cents() > MAX_UNIT_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "unit price".to_string(),
            min: 0,
            max: MAX_UNIT_PRICE,
        });
    }

    Ok(())
}

/// Validates a scale reading.
///
/// ## Rules
/// - Must be non-negative (an empty scale reads 0.00)
/// - Must not exceed MAX_WEIGHT (1,000 lbs)
pub fn validate_weight(weight: Weight) -> ValidationResult<()> {
    if weight.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "weight".to_string(),
        });
    }

    if weight.hundredths() > MAX_WEIGHT {
        return Err(ValidationError::OutOfRange {
            field: "weight".to_string(),
            min: 0,
            max: MAX_WEIGHT,
        });
    }

    Ok(())
}

/// Validates a frozen item count.
///
/// ## Rules
/// - Must be non-negative
/// - Must not exceed MAX_ITEM_QUANTITY (999)
///
/// ## User Workflow
/// ```text
/// Cashier: "3 of those TV dinners"
///       │
///       ▼
/// validate_quantity(3) ← THIS FUNCTION
///       │
///       ├── qty < 0?   → Error: "quantity must not be negative"
///       ├── qty > 999? → Error: "quantity must be between 0 and 999"
///       └── OK → Frozen::set_quantity
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates alcohol by volume.
///
/// ## Rules
/// - 0% to 100% inclusive (the type is unsigned, so only the top is checked)
pub fn validate_abv(abv: Abv) -> ValidationResult<()> {
    if abv.hundredths() > FULL_BPS {
        return Err(ValidationError::OutOfRange {
            field: "abv".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Validates a birth date presented at the register.
///
/// ## Rules
/// - Must not be after `today`
pub fn validate_birth_date(birth_date: NaiveDate, today: NaiveDate) -> ValidationResult<()> {
    if birth_date > today {
        return Err(ValidationError::InvalidFormat {
            field: "birth date".to_string(),
            reason: format!("{} is in the future", birth_date),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Ice Cream").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(1200)).is_ok());
        assert_eq!(
            validate_price(Money::from_cents(-1)),
            Err(ValidationError::MustNotBeNegative {
                field: "unit price".to_string()
            })
        );
    }

    #[test]
    fn test_validate_price_upper_limit() {
        assert!(validate_price(Money::from_cents(MAX_UNIT_PRICE)).is_ok());
        assert_eq!(
            validate_price(Money::from_cents(MAX_UNIT_PRICE + 1)),
            Err(ValidationError::OutOfRange {
                field: "unit price".to_string(),
                min: 0,
                max: MAX_UNIT_PRICE,
            })
        );
        assert!(validate_price(Money::from_cents(i64::MAX / 2)).is_err());
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight(Weight::from_hundredths(0)).is_ok());
        assert!(validate_weight(Weight::from_pounds(5)).is_ok());
        assert!(validate_weight(Weight::from_hundredths(-1)).is_err());
    }

    #[test]
    fn test_validate_weight_upper_limit() {
        assert!(validate_weight(Weight::from_hundredths(MAX_WEIGHT)).is_ok());
        assert!(matches!(
            validate_weight(Weight::from_hundredths(MAX_WEIGHT + 1)),
            Err(ValidationError::OutOfRange { max: MAX_WEIGHT, .. })
        ));
        let huge: Weight = "90000000000000000".parse().unwrap();
        assert!(validate_weight(huge).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_abv() {
        assert!(validate_abv(Abv::from_percent(0)).is_ok());
        assert!(validate_abv(Abv::from_percent(100)).is_ok());
        assert!(validate_abv(Abv::from_hundredths(10_001)).is_err());
    }

    #[test]
    fn test_validate_birth_date() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert!(validate_birth_date(today, today).is_ok());
        assert!(validate_birth_date(today.pred_opt().unwrap(), today).is_ok());
        assert!(validate_birth_date(today.succ_opt().unwrap(), today).is_err());
    }
}
