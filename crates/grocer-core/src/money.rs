//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With f64 prices:                                                       │
//! │    0.65 * 3 = 1.9500000000000002  ❌ WRONG!                             │
//! │                                                                         │
//! │  At the register this shows up as receipts that are off by a cent      │
//! │  depending on the order items were scanned.                             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    65 cents * 3 = 195 cents, always                                     │
//! │    Weighed goods and taxes round to the cent in ONE place (here)       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use grocer_core::money::Money;
//! use grocer_core::types::Weight;
//!
//! let apples = Money::from_cents(75);            // $0.75 / lb
//! let line = apples.multiply_weight(Weight::from_pounds(3));
//! assert_eq!(line.cents(), 225);                 // $2.25
//!
//! let total = line + Money::from_cents(1200);    // + a $12.00 six-pack
//! assert_eq!(total.to_string(), "$14.25");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::types::{DiscountRate, TaxRate, Weight};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Lets validation see and reject negative prices instead
///   of silently wrapping
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  CatalogEntry.unit_price ──► Item.unit_price ──► Item.total_price()     │
/// │                                   ▲                     │               │
/// │                    apply_discount │                     ▼               │
/// │                                                Receipt.compute_total()  │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use grocer_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax on this amount, rounded half-up to the cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use grocer_core::money::Money;
    /// use grocer_core::types::TaxRate;
    ///
    /// let wine = Money::from_cents(3000);      // $30.00
    /// let tax = wine.calculate_tax(TaxRate::from_bps(1000)); // 10%
    /// assert_eq!(tax.cents(), 300);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 so large amounts cannot overflow mid-calculation
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Adds tax to this amount: `amount * (1 + rate)`.
    pub fn with_tax(&self, rate: TaxRate) -> Money {
        *self + self.calculate_tax(rate)
    }

    /// Multiplies a per-unit price by a count.
    ///
    /// ## Example
    /// ```rust
    /// use grocer_core::money::Money;
    ///
    /// let tv_dinner = Money::from_cents(500);
    /// assert_eq!(tv_dinner.multiply_quantity(3).cents(), 1500);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Multiplies a per-pound price by a weight, rounded half-up to the cent.
    ///
    /// ## User Workflow
    /// ```text
    /// Cilantro $0.50 / lb
    /// Scale reads: 1.37 lbs
    ///      │
    ///      ▼
    /// multiply_weight(137 hundredths) ← THIS FUNCTION
    ///      │   (50 * 137 + 50) / 100 = 69
    ///      ▼
    /// Line Total: $0.69
    /// ```
    pub fn multiply_weight(&self, weight: Weight) -> Money {
        let cents = (self.0 as i128 * weight.hundredths() as i128 + 50) / 100;
        Money::from_cents(cents as i64)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// The discount amount is rounded half-up, then subtracted, so a 100%
    /// discount always lands on exactly zero.
    ///
    /// ## Example
    /// ```rust
    /// use grocer_core::money::Money;
    /// use grocer_core::types::DiscountRate;
    ///
    /// let whiskey = Money::from_cents(3900);
    /// let rate = DiscountRate::from_percentage(10.0).unwrap();
    /// assert_eq!(whiskey.apply_percentage_discount(rate).cents(), 3510);
    /// ```
    pub fn apply_percentage_discount(&self, rate: DiscountRate) -> Money {
        let discount_amount = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(self.0 - discount_amount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money the way the receipt prints it: `$12.60`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Lets receipts total with `.map(Item::total_price).sum()`.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!(a.multiply_quantity(3).cents(), 3000);
    }

    #[test]
    fn test_tax_tiers_on_twelve_dollars() {
        let beer = Money::from_cents(1200);
        assert_eq!(beer.calculate_tax(TaxRate::from_bps(500)).cents(), 60);
        assert_eq!(beer.with_tax(TaxRate::from_bps(500)).cents(), 1260);
        assert_eq!(beer.with_tax(TaxRate::zero()).cents(), 1200);
    }

    #[test]
    fn test_tax_calculation_with_rounding() {
        // $0.65 at 5% = 3.25 cents → 3
        assert_eq!(
            Money::from_cents(65).calculate_tax(TaxRate::from_bps(500)).cents(),
            3
        );
        // $0.75 at 10% = 7.5 cents → 8 (half rounds up)
        assert_eq!(
            Money::from_cents(75).calculate_tax(TaxRate::from_bps(1000)).cents(),
            8
        );
    }

    #[test]
    fn test_multiply_weight() {
        let apple = Money::from_cents(75);
        assert_eq!(apple.multiply_weight(Weight::from_pounds(3)).cents(), 225);
        assert_eq!(apple.multiply_weight(Weight::from_hundredths(0)).cents(), 0);
        // 75 * 1.5 = 112.5 → 113
        assert_eq!(apple.multiply_weight(Weight::from_hundredths(150)).cents(), 113);
    }

    #[test]
    fn test_percentage_discount() {
        let subtotal = Money::from_cents(10000);
        let ten = DiscountRate::from_bps(1000).unwrap();
        assert_eq!(subtotal.apply_percentage_discount(ten).cents(), 9000);

        let all = DiscountRate::from_bps(10000).unwrap();
        assert_eq!(Money::from_cents(1999).apply_percentage_discount(all).cents(), 0);
    }

    #[test]
    fn test_sum() {
        let total: Money = [225, 1260, 500]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 1985);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }
}
