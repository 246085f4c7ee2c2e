//! # grocer-core: Pure Business Logic for Grocer POS
//!
//! This crate holds every pricing and checkout rule as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Grocer POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                grocer-checkout (terminal app)                   │   │
//! │  │    Menu prompt ──► Scale ──► ID check ──► Receipt printout      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ function calls                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ grocer-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   item    │  │  catalog  │  │  receipt  │  │   money   │  │   │
//! │  │   │  Produce  │  │  codes    │  │  totals   │  │  Money    │  │   │
//! │  │   │  Alcohol  │  │  0 – 9    │  │  gift     │  │  TaxRate  │  │   │
//! │  │   │  Frozen   │  │           │  │  copies   │  │  Weight   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO RANDOMNESS • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`] - `Item` and its `Produce` / `Alcohol` / `Frozen` variants
//! - [`catalog`] - The menu: selection codes to item templates
//! - [`receipt`] - Receipts, totals, gift copies
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Tax/discount rates, weights, ABV, categories
//! - [`error`] - Domain error types
//! - [`validation`] - Range checks for item fields
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: "today" is a parameter, never read from the clock
//! 2. **Integer Money**: All monetary values are in cents (i64)
//! 3. **Computed Totals**: item totals are derived on read, never cached
//! 4. **Explicit Outcomes**: unknown codes, underage customers and expired
//!    goods are values the caller inspects, not panics
//!
//! ## Example Usage
//!
//! ```rust
//! use grocer_core::catalog::select;
//! use grocer_core::receipt::Receipt;
//! use grocer_core::types::Weight;
//!
//! let apples = select("1", Some(Weight::from_pounds(3))).unwrap().into_item().unwrap();
//! let beer = select("4", None).unwrap().into_item().unwrap();
//! let tv_dinner = select("8", None).unwrap().into_item().unwrap();
//!
//! let mut receipt = Receipt::new(vec![apples, beer, tv_dinner]);
//! receipt.compute_total();
//! assert_eq!(receipt.to_string(), "Receipt Total: $19.85");
//!
//! let gift = receipt.gift_copy("Gift Receipt");
//! assert_eq!(gift.to_string(), "Receipt Total: Gift Receipt");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod item;
pub mod money;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{CatalogEntry, MenuChoice, Selection};
pub use error::{CoreError, CoreResult, ValidationError};
pub use item::{AgeVerification, Alcohol, Frozen, Item, Produce};
pub use money::Money;
pub use receipt::{Receipt, ReceiptTotal};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum age, in whole years, to buy alcohol.
pub const LEGAL_DRINKING_AGE: u32 = 21;

/// Maximum count of a single frozen item on one line.
///
/// ## Business Reason
/// Catches a fat-fingered 1000 instead of 10.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Highest unit price accepted for any item, in cents ($1,000,000.00).
///
/// Keeps every line total, and any realistic receipt, inside `i64` cents.
pub const MAX_UNIT_PRICE: i64 = 100_000_000;

/// Heaviest scale reading accepted, in hundredths of a pound (1,000 lbs).
pub const MAX_WEIGHT: i64 = 100_000;

/// Maximum length of an item name.
pub const MAX_NAME_LENGTH: usize = 200;
