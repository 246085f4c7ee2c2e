//! # Catalog
//!
//! The register menu: a fixed table from selection code to item template.
//!
//! ## Menu
//! ```text
//! ┌──────┬─────────────┬──────────┬────────────┬──────────────────────────┐
//! │ Code │ Name        │ Category │ Unit price │ Parameters               │
//! ├──────┼─────────────┼──────────┼────────────┼──────────────────────────┤
//! │  0   │ (cancel)    │          │            │                          │
//! │  1   │ Apple       │ Produce  │   $0.75/lb │ weighed at the register  │
//! │  2   │ Potato      │ Produce  │   $0.65/lb │ weighed at the register  │
//! │  3   │ Cilantro    │ Produce  │   $0.50/lb │ weighed at the register  │
//! │  4   │ Beer        │ Alcohol  │     $12.00 │ 5% ABV                   │
//! │  5   │ Wine        │ Alcohol  │     $30.00 │ 13% ABV                  │
//! │  6   │ Whiskey     │ Alcohol  │     $39.00 │ 40% ABV                  │
//! │  7   │ Ice Cream   │ Frozen   │      $8.00 │ expires 2020-08-31       │
//! │  8   │ TV Dinner   │ Frozen   │      $5.00 │ expires 2020-08-02       │
//! │  9   │ Pizza Rolls │ Frozen   │     $12.00 │ expires 2020-09-30       │
//! └──────┴─────────────┴──────────┴────────────┴──────────────────────────┘
//! ```
//!
//! ## Selection Flow
//! ```text
//! cashier types "2"
//!      │
//!      ▼
//! resolve("2") ──► MenuChoice::Entry(Potato)
//!      │                   │
//!      │          requires_weight()? ── yes ──► ask the scale
//!      ▼                   │
//! select("2", Some(3 lbs)) ▼
//!      │
//!      ├── Selection::Item(Potato, 3.00 lbs)
//!      ├── Selection::NotWeighed   (produce, no reading)
//!      ├── Selection::Cancelled    (code 0)
//!      └── Selection::Unknown("x") (anything else)
//! ```
//!
//! No input ever panics; every string lands in one of the four outcomes.

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult};
use crate::item::{Alcohol, Frozen, Item, Produce};
use crate::money::Money;
use crate::types::{Abv, Category, Weight};

/// Code that backs out of the menu without picking anything.
pub const CANCEL_CODE: u8 = 0;

// =============================================================================
// Catalog Table
// =============================================================================

/// The category-specific part of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemTemplate {
    /// Priced per pound; needs a scale reading.
    Produce,
    Alcohol {
        abv: Abv,
    },
    /// Expiration as `(year, month, day)`.
    Frozen {
        expires: (i32, u32, u32),
        quantity: i64,
    },
}

/// One line of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub code: u8,
    pub name: &'static str,
    pub unit_price: Money,
    pub template: ItemTemplate,
}

static CATALOG: [CatalogEntry; 9] = [
    CatalogEntry {
        code: 1,
        name: "Apple",
        unit_price: Money::from_cents(75),
        template: ItemTemplate::Produce,
    },
    CatalogEntry {
        code: 2,
        name: "Potato",
        unit_price: Money::from_cents(65),
        template: ItemTemplate::Produce,
    },
    CatalogEntry {
        code: 3,
        name: "Cilantro",
        unit_price: Money::from_cents(50),
        template: ItemTemplate::Produce,
    },
    CatalogEntry {
        code: 4,
        name: "Beer",
        unit_price: Money::from_cents(1200),
        template: ItemTemplate::Alcohol {
            abv: Abv::from_percent(5),
        },
    },
    CatalogEntry {
        code: 5,
        name: "Wine",
        unit_price: Money::from_cents(3000),
        template: ItemTemplate::Alcohol {
            abv: Abv::from_percent(13),
        },
    },
    CatalogEntry {
        code: 6,
        name: "Whiskey",
        unit_price: Money::from_cents(3900),
        template: ItemTemplate::Alcohol {
            abv: Abv::from_percent(40),
        },
    },
    CatalogEntry {
        code: 7,
        name: "Ice Cream",
        unit_price: Money::from_cents(800),
        template: ItemTemplate::Frozen {
            expires: (2020, 8, 31),
            quantity: 1,
        },
    },
    CatalogEntry {
        code: 8,
        name: "TV Dinner",
        unit_price: Money::from_cents(500),
        template: ItemTemplate::Frozen {
            expires: (2020, 8, 2),
            quantity: 1,
        },
    },
    CatalogEntry {
        code: 9,
        name: "Pizza Rolls",
        unit_price: Money::from_cents(1200),
        template: ItemTemplate::Frozen {
            expires: (2020, 9, 30),
            quantity: 1,
        },
    },
];

/// All entries, in code order.
pub fn entries() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Finds the entry for a code. The cancel code has no entry.
pub fn lookup(code: u8) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.code == code)
}

// =============================================================================
// Catalog Entry
// =============================================================================

impl CatalogEntry {
    pub fn category(&self) -> Category {
        match self.template {
            ItemTemplate::Produce => Category::Produce,
            ItemTemplate::Alcohol { .. } => Category::Alcohol,
            ItemTemplate::Frozen { .. } => Category::Frozen,
        }
    }

    /// True when the register has to weigh this item before selling it.
    pub fn requires_weight(&self) -> bool {
        matches!(self.template, ItemTemplate::Produce)
    }

    /// Builds a fresh item from this entry.
    ///
    /// `weight` is the scale reading for produce and is ignored otherwise.
    pub fn build(&self, weight: Weight) -> CoreResult<Item> {
        let item = match self.template {
            ItemTemplate::Produce => Produce::new(self.name, self.unit_price, weight)?.into(),
            ItemTemplate::Alcohol { abv } => Alcohol::new(self.name, self.unit_price, abv)?.into(),
            ItemTemplate::Frozen {
                expires: (year, month, day),
                quantity,
            } => {
                let expiration = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                    CoreError::InvalidCatalogEntry {
                        code: self.code,
                        reason: format!("{}-{:02}-{:02} is not a date", year, month, day),
                    }
                })?;
                Frozen::new(self.name, self.unit_price, expiration, quantity)?.into()
            }
        };
        Ok(item)
    }

    /// Builds the item, or reports [`Selection::NotWeighed`] for produce that
    /// never made it onto the scale.
    pub fn select(&self, weight: Option<Weight>) -> CoreResult<Selection> {
        match weight {
            None if self.requires_weight() => Ok(Selection::NotWeighed { code: self.code }),
            weight => Ok(Selection::Item(self.build(weight.unwrap_or_default())?)),
        }
    }
}

// =============================================================================
// Menu Input
// =============================================================================

/// What a typed code refers to, before any weighing happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice<'a> {
    Cancel,
    Entry(&'static CatalogEntry),
    Unknown(&'a str),
}

/// Interprets the text the cashier typed at the menu prompt.
///
/// ## Example
/// ```rust
/// use grocer_core::catalog::{resolve, MenuChoice};
///
/// assert_eq!(resolve(" 0 "), MenuChoice::Cancel);
/// assert!(matches!(resolve("4"), MenuChoice::Entry(e) if e.name == "Beer"));
/// assert_eq!(resolve("42"), MenuChoice::Unknown("42"));
/// ```
pub fn resolve(input: &str) -> MenuChoice<'_> {
    let trimmed = input.trim();
    match trimmed.parse::<u8>() {
        Ok(CANCEL_CODE) => MenuChoice::Cancel,
        Ok(code) => lookup(code).map_or(MenuChoice::Unknown(trimmed), MenuChoice::Entry),
        Err(_) => MenuChoice::Unknown(trimmed),
    }
}

/// The outcome of picking from the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A fully built item, ready for the receipt.
    Item(Item),
    /// The cashier pressed 0.
    Cancelled,
    /// Produce was picked but not weighed, so there is nothing to sell.
    NotWeighed { code: u8 },
    /// Not a menu code.
    Unknown(String),
}

impl Selection {
    /// The item, if one was produced.
    pub fn into_item(self) -> Option<Item> {
        match self {
            Selection::Item(item) => Some(item),
            _ => None,
        }
    }
}

/// Resolves the typed code and builds the item in one step.
///
/// `weight` is the scale reading, `None` if the cashier declined to weigh.
pub fn select(input: &str, weight: Option<Weight>) -> CoreResult<Selection> {
    match resolve(input) {
        MenuChoice::Cancel => Ok(Selection::Cancelled),
        MenuChoice::Unknown(raw) => Ok(Selection::Unknown(raw.to_string())),
        MenuChoice::Entry(entry) => entry.select(weight),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
