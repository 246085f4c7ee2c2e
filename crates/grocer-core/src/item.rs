//! # Items
//!
//! One purchasable unit at the register, in one of three categories.
//!
//! ## Pricing Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Category   Tax rate                     total_price()                 │
//! │  ────────   ─────────────────────────    ───────────────────────────   │
//! │  Produce    0%                           unit × weight × (1 + tax)     │
//! │  Alcohol    ABV ≤ 10%        →  5%       unit × (1 + tax)              │
//! │             10% < ABV ≤ 20%  → 10%                                     │
//! │             ABV > 20%        → 20%                                     │
//! │  Frozen     0%                           unit × quantity × (1 + tax)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Computed Totals
//! `total_price()` is derived from the current fields on every call. Re-weighing
//! produce, recounting frozen goods or applying a discount is reflected in the
//! next total with nothing to refresh.
//!
//! ```rust
//! use grocer_core::item::{Item, Produce};
//! use grocer_core::money::Money;
//! use grocer_core::types::{DiscountRate, Weight};
//!
//! let mut apples = Produce::new("Apple", Money::from_cents(75), Weight::from_pounds(3)).unwrap();
//! assert_eq!(apples.total_price().cents(), 225);
//!
//! apples.set_weight(Weight::from_pounds(4)).unwrap();
//! assert_eq!(apples.total_price().cents(), 300);
//!
//! let mut item = Item::from(apples);
//! item.apply_discount(DiscountRate::from_percentage(50.0).unwrap());
//! assert_eq!(item.unit_price().cents(), 37);    // half of $0.75, discount rounded up
//! assert_eq!(item.total_price().cents(), 148);  // $0.37/lb × 4 lbs
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Abv, Category, DiscountRate, TaxRate, Weight};
use crate::validation::{
    validate_abv, validate_birth_date, validate_item_name, validate_price, validate_quantity,
    validate_weight, ValidationResult,
};
use crate::LEGAL_DRINKING_AGE;

// =============================================================================
// Tax Rules
// =============================================================================

/// Produce is untaxed.
pub const PRODUCE_TAX_RATE: TaxRate = TaxRate::zero();

/// Frozen goods are untaxed.
pub const FROZEN_TAX_RATE: TaxRate = TaxRate::zero();

/// Alcohol tax tiers as `(inclusive ABV ceiling, rate)`, checked in order.
/// Anything above the last ceiling pays [`SPIRITS_TAX_RATE`].
pub const ALCOHOL_TAX_TIERS: [(Abv, TaxRate); 2] = [
    (Abv::from_percent(10), TaxRate::from_bps(500)),
    (Abv::from_percent(20), TaxRate::from_bps(1000)),
];

/// Rate for anything stronger than the last tier (spirits).
pub const SPIRITS_TAX_RATE: TaxRate = TaxRate::from_bps(2000);

/// Looks up the alcohol tax tier for an ABV.
///
/// ## Example
/// ```rust
/// use grocer_core::item::alcohol_tax_rate;
/// use grocer_core::types::Abv;
///
/// assert_eq!(alcohol_tax_rate(Abv::from_hundredths(1000)).bps(), 500);
/// assert_eq!(alcohol_tax_rate(Abv::from_hundredths(1001)).bps(), 1000);
/// ```
pub fn alcohol_tax_rate(abv: Abv) -> TaxRate {
    ALCOHOL_TAX_TIERS
        .iter()
        .find(|(ceiling, _)| abv <= *ceiling)
        .map(|(_, rate)| *rate)
        .unwrap_or(SPIRITS_TAX_RATE)
}

/// Age in whole years on `today`.
///
/// Subtracts calendar years, then takes one off if the birthday has not come
/// around yet this year. A Feb 29 birthday is reached on Mar 1 in common
/// years. Returns 0 for a birth date after `today`.
pub fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

// =============================================================================
// Produce
// =============================================================================

/// Fruit, vegetables, herbs: priced per pound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Produce {
    name: String,
    unit_price: Money,
    weight: Weight,
    /// Kept for reporting (organic sales share); does not affect price.
    is_organic: bool,
}

impl Produce {
    /// Creates a conventional (non-organic) produce item.
    pub fn new(name: impl Into<String>, unit_price: Money, weight: Weight) -> ValidationResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price(unit_price)?;
        validate_weight(weight)?;

        Ok(Produce {
            name,
            unit_price,
            weight,
            is_organic: false,
        })
    }

    /// Marks the item organic or conventional.
    pub fn with_organic(mut self, is_organic: bool) -> Self {
        self.is_organic = is_organic;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn is_organic(&self) -> bool {
        self.is_organic
    }

    /// Re-weighs the item (more added to the bag, scale corrected).
    pub fn set_weight(&mut self, weight: Weight) -> ValidationResult<Weight> {
        validate_weight(weight)?;
        self.weight = weight;
        Ok(self.weight)
    }

    pub fn tax_rate(&self) -> TaxRate {
        PRODUCE_TAX_RATE
    }

    pub fn total_price(&self) -> Money {
        self.unit_price
            .multiply_weight(self.weight)
            .with_tax(self.tax_rate())
    }
}

// =============================================================================
// Alcohol
// =============================================================================

/// Result of checking a customer's ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AgeVerification {
    /// Customer is at least [`LEGAL_DRINKING_AGE`]; sale allowed.
    OfAge { age: u32 },
    /// Customer is too young; sale of this item is blocked.
    Underage { age: u32 },
}

impl AgeVerification {
    pub fn is_of_age(&self) -> bool {
        matches!(self, AgeVerification::OfAge { .. })
    }

    pub fn age(&self) -> u32 {
        match self {
            AgeVerification::OfAge { age } | AgeVerification::Underage { age } => *age,
        }
    }
}

/// Beer, wine and spirits: taxed by strength, sold only after an ID check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alcohol {
    name: String,
    unit_price: Money,
    abv: Abv,
    /// False until [`Alcohol::verify_id`] says otherwise.
    of_age: bool,
}

impl Alcohol {
    pub fn new(name: impl Into<String>, unit_price: Money, abv: Abv) -> ValidationResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price(unit_price)?;
        validate_abv(abv)?;

        Ok(Alcohol {
            name,
            unit_price,
            abv,
            of_age: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn abv(&self) -> Abv {
        self.abv
    }

    /// Whether the last ID check passed.
    pub fn is_of_age(&self) -> bool {
        self.of_age
    }

    /// Checks the customer's birth date against [`LEGAL_DRINKING_AGE`].
    ///
    /// ## User Workflow
    /// ```text
    /// Scan: Whiskey
    ///      │
    ///      ▼
    /// Cashier enters DOB from ID
    ///      │
    ///      ▼
    /// verify_id(dob, today) ← THIS FUNCTION
    ///      │
    ///      ├── age ≥ 21 → OfAge   (of_age = true, item goes on receipt)
    ///      └── age < 21 → Underage (of_age = false, item is refused)
    /// ```
    ///
    /// A birth date after `today` is a typo, not a customer, and is rejected.
    pub fn verify_id(
        &mut self,
        birth_date: NaiveDate,
        today: NaiveDate,
    ) -> ValidationResult<AgeVerification> {
        validate_birth_date(birth_date, today)?;

        let age = age_in_years(birth_date, today);
        let outcome = if age >= LEGAL_DRINKING_AGE {
            AgeVerification::OfAge { age }
        } else {
            AgeVerification::Underage { age }
        };

        self.of_age = outcome.is_of_age();
        Ok(outcome)
    }

    pub fn tax_rate(&self) -> TaxRate {
        alcohol_tax_rate(self.abv)
    }

    pub fn total_price(&self) -> Money {
        self.unit_price.with_tax(self.tax_rate())
    }
}

// =============================================================================
// Frozen
// =============================================================================

/// Frozen goods: sold by count, with an expiration date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frozen {
    name: String,
    unit_price: Money,
    expiration_date: NaiveDate,
    quantity: i64,
}

impl Frozen {
    pub fn new(
        name: impl Into<String>,
        unit_price: Money,
        expiration_date: NaiveDate,
        quantity: i64,
    ) -> ValidationResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price(unit_price)?;
        validate_quantity(quantity)?;

        Ok(Frozen {
            name,
            unit_price,
            expiration_date,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn expiration_date(&self) -> NaiveDate {
        self.expiration_date
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Changes the count instead of scanning the same box again.
    pub fn set_quantity(&mut self, quantity: i64) -> ValidationResult<i64> {
        validate_quantity(quantity)?;
        self.quantity = quantity;
        Ok(self.quantity)
    }

    /// True when `today` is strictly after the expiration date.
    ///
    /// Advisory only: an expired item stays where it is until the caller
    /// decides to swap it.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        today > self.expiration_date
    }

    pub fn tax_rate(&self) -> TaxRate {
        FROZEN_TAX_RATE
    }

    pub fn total_price(&self) -> Money {
        self.unit_price
            .multiply_quantity(self.quantity)
            .with_tax(self.tax_rate())
    }
}

// =============================================================================
// Item
// =============================================================================

/// Any item that can go on a receipt.
///
/// Receipts hold `Vec<Item>` and total it without knowing which variants are
/// inside; the per-category rules stay on the variant structs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Item {
    Produce(Produce),
    Alcohol(Alcohol),
    Frozen(Frozen),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Produce(p) => p.name(),
            Item::Alcohol(a) => a.name(),
            Item::Frozen(f) => f.name(),
        }
    }

    pub fn unit_price(&self) -> Money {
        match self {
            Item::Produce(p) => p.unit_price(),
            Item::Alcohol(a) => a.unit_price(),
            Item::Frozen(f) => f.unit_price(),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Item::Produce(_) => Category::Produce,
            Item::Alcohol(_) => Category::Alcohol,
            Item::Frozen(_) => Category::Frozen,
        }
    }

    pub fn tax_rate(&self) -> TaxRate {
        match self {
            Item::Produce(p) => p.tax_rate(),
            Item::Alcohol(a) => a.tax_rate(),
            Item::Frozen(f) => f.tax_rate(),
        }
    }

    pub fn total_price(&self) -> Money {
        match self {
            Item::Produce(p) => p.total_price(),
            Item::Alcohol(a) => a.total_price(),
            Item::Frozen(f) => f.total_price(),
        }
    }

    /// Takes a percentage off the unit price and returns the new price.
    pub fn apply_discount(&mut self, rate: DiscountRate) -> Money {
        let unit_price = match self {
            Item::Produce(p) => &mut p.unit_price,
            Item::Alcohol(a) => &mut a.unit_price,
            Item::Frozen(f) => &mut f.unit_price,
        };
        *unit_price = unit_price.apply_percentage_discount(rate);
        *unit_price
    }
}

impl From<Produce> for Item {
    fn from(produce: Produce) -> Self {
        Item::Produce(produce)
    }
}

impl From<Alcohol> for Item {
    fn from(alcohol: Alcohol) -> Self {
        Item::Alcohol(alcohol)
    }
}

impl From<Frozen> for Item {
    fn from(frozen: Frozen) -> Self {
        Item::Frozen(frozen)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn beer_with_abv(hundredths: u32) -> Alcohol {
        Alcohol::new("Beer", Money::from_cents(1200), Abv::from_hundredths(hundredths)).unwrap()
    }

    #[test]
    fn test_produce_total_is_price_times_weight() {
        let apples = Produce::new("Apple", Money::from_cents(75), Weight::from_pounds(3)).unwrap();
        assert_eq!(apples.tax_rate(), TaxRate::zero());
        assert_eq!(apples.total_price(), Money::from_cents(225));
        assert!(!apples.is_organic());
    }

    #[test]
    fn test_produce_reweigh_updates_total() {
        let mut potatoes =
            Produce::new("Potato", Money::from_cents(65), Weight::from_pounds(2)).unwrap();
        assert_eq!(potatoes.total_price().cents(), 130);

        potatoes.set_weight(Weight::from_hundredths(250)).unwrap();
        assert_eq!(potatoes.total_price().cents(), 163);

        assert!(potatoes.set_weight(Weight::from_hundredths(-1)).is_err());
        assert_eq!(potatoes.weight(), Weight::from_hundredths(250));
    }

    #[test]
    fn test_produce_organic_flag() {
        let cilantro = Produce::new("Cilantro", Money::from_cents(50), Weight::from_pounds(1))
            .unwrap()
            .with_organic(true);
        assert!(cilantro.is_organic());
        assert_eq!(cilantro.total_price().cents(), 50);
    }

    #[test]
    fn test_alcohol_tax_tier_boundaries() {
        assert_eq!(beer_with_abv(1000).tax_rate().bps(), 500);
        assert_eq!(beer_with_abv(1001).tax_rate().bps(), 1000);
        assert_eq!(beer_with_abv(2000).tax_rate().bps(), 1000);
        assert_eq!(beer_with_abv(2001).tax_rate().bps(), 2000);
        assert_eq!(beer_with_abv(0).tax_rate().bps(), 500);
    }

    #[test]
    fn test_alcohol_total_includes_tax() {
        assert_eq!(beer_with_abv(500).total_price(), Money::from_cents(1260));

        let wine = Alcohol::new("Wine", Money::from_cents(3000), Abv::from_percent(13)).unwrap();
        assert_eq!(wine.total_price(), Money::from_cents(3300));

        let whiskey =
            Alcohol::new("Whiskey", Money::from_cents(3900), Abv::from_percent(40)).unwrap();
        assert_eq!(whiskey.total_price(), Money::from_cents(4680));
    }

    #[test]
    fn test_alcohol_starts_unverified() {
        assert!(!beer_with_abv(500).is_of_age());
    }

    #[test]
    fn test_verify_id_exactly_twenty_one() {
        let mut beer = beer_with_abv(500);
        let outcome = beer.verify_id(date(2003, 6, 15), date(2024, 6, 15)).unwrap();
        assert_eq!(outcome, AgeVerification::OfAge { age: 21 });
        assert!(beer.is_of_age());
    }

    #[test]
    fn test_verify_id_one_day_short() {
        let mut beer = beer_with_abv(500);
        let outcome = beer.verify_id(date(2003, 6, 16), date(2024, 6, 15)).unwrap();
        assert_eq!(outcome, AgeVerification::Underage { age: 20 });
        assert!(!beer.is_of_age());
    }

    #[test]
    fn test_verify_id_rejects_future_birth_date() {
        let mut beer = beer_with_abv(500);
        let err = beer.verify_id(date(2030, 1, 1), date(2024, 6, 15)).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
        assert!(!beer.is_of_age());
    }

    #[test]
    fn test_age_on_leap_day_birthday() {
        let leapling = date(2004, 2, 29);
        assert_eq!(age_in_years(leapling, date(2025, 2, 28)), 20);
        assert_eq!(age_in_years(leapling, date(2025, 3, 1)), 21);
        assert_eq!(age_in_years(leapling, date(2028, 2, 29)), 24);
    }

    #[test]
    fn test_age_in_years_future_is_zero() {
        assert_eq!(age_in_years(date(2030, 1, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_frozen_total_is_price_times_quantity() {
        let mut dinners = Frozen::new("TV Dinner", Money::from_cents(500), date(2020, 8, 2), 3).unwrap();
        assert_eq!(dinners.total_price(), Money::from_cents(1500));

        dinners.set_quantity(1).unwrap();
        assert_eq!(dinners.total_price(), Money::from_cents(500));

        assert!(dinners.set_quantity(-2).is_err());
        assert_eq!(dinners.quantity(), 1);
    }

    #[test]
    fn test_frozen_expiry_is_strictly_after() {
        let ice_cream =
            Frozen::new("Ice Cream", Money::from_cents(800), date(2020, 8, 31), 1).unwrap();
        assert!(!ice_cream.is_expired(date(2020, 8, 30)));
        assert!(!ice_cream.is_expired(date(2020, 8, 31)));
        assert!(ice_cream.is_expired(date(2020, 9, 1)));
    }

    #[test]
    fn test_construction_rejects_bad_values() {
        assert!(Produce::new("Apple", Money::from_cents(-75), Weight::from_pounds(1)).is_err());
        assert!(Produce::new("Apple", Money::from_cents(75), Weight::from_hundredths(-1)).is_err());
        assert!(Produce::new("", Money::from_cents(75), Weight::from_pounds(1)).is_err());
        assert!(Alcohol::new("Everclear", Money::from_cents(2000), Abv::from_hundredths(10_001)).is_err());
        assert!(Frozen::new("Peas", Money::from_cents(199), date(2024, 1, 1), -1).is_err());
    }

    #[test]
    fn test_oversized_price_or_weight_is_rejected() {
        let huge: Weight = "90000000000000000".parse().unwrap();
        assert!(matches!(
            Produce::new("Apple", Money::from_cents(200), huge),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(Frozen::new("Peas", Money::from_cents(i64::MAX / 2), date(2024, 1, 1), 3).is_err());
        assert!(Alcohol::new("Cognac", Money::from_cents(crate::MAX_UNIT_PRICE + 1), Abv::from_percent(40)).is_err());

        let mut apples = Produce::new("Apple", Money::from_cents(75), Weight::from_pounds(1)).unwrap();
        assert!(apples.set_weight(huge).is_err());
        assert_eq!(apples.weight(), Weight::from_pounds(1));
    }

    #[test]
    fn test_largest_valid_items_price_exactly() {
        let price = Money::from_cents(crate::MAX_UNIT_PRICE);

        let produce = Produce::new("Saffron", price, Weight::from_hundredths(crate::MAX_WEIGHT)).unwrap();
        assert_eq!(produce.total_price(), Money::from_cents(100_000_000_000));

        let frozen = Frozen::new("Caviar", price, date(2030, 1, 1), crate::MAX_ITEM_QUANTITY).unwrap();
        assert_eq!(frozen.total_price(), Money::from_cents(99_900_000_000));

        let spirits = Alcohol::new("Cognac", price, Abv::from_percent(40)).unwrap();
        assert_eq!(spirits.total_price(), Money::from_cents(120_000_000));
    }

    #[test]
    fn test_discount_is_reflected_in_total() {
        let mut item: Item = beer_with_abv(500).into();
        let new_price = item.apply_discount(DiscountRate::from_percentage(25.0).unwrap());
        assert_eq!(new_price, Money::from_cents(900));
        assert_eq!(item.unit_price(), Money::from_cents(900));
        assert_eq!(item.total_price(), Money::from_cents(945));
    }

    #[test]
    fn test_item_dispatch() {
        let item: Item = Frozen::new("Pizza Rolls", Money::from_cents(1200), date(2020, 9, 30), 2)
            .unwrap()
            .into();
        assert_eq!(item.name(), "Pizza Rolls");
        assert_eq!(item.category(), Category::Frozen);
        assert_eq!(item.tax_rate(), TaxRate::zero());
        assert_eq!(item.total_price().cents(), 2400);
    }

    #[test]
    fn test_item_serializes_with_category_tag() {
        let item: Item = Produce::new("Apple", Money::from_cents(75), Weight::from_pounds(2))
            .unwrap()
            .into();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["category"], "produce");
        assert_eq!(json["name"], "Apple");
        assert_eq!(json["weight"], 200);
    }
}
