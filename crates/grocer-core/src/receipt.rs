//! # Receipt
//!
//! An ordered list of items plus a total line.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Receipt Lifecycle                                │
//! │                                                                         │
//! │  Receipt::new(items)        total = $0.00                               │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  compute_total()            total = Σ item.total_price()                │
//! │        │                                                                │
//! │        ├──► clone()         independent copy, same items and total      │
//! │        │                                                                │
//! │        └──► gift_copy(..)   independent copy, total = "Gift Receipt"    │
//! │                             items kept for returns                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Copies Share Nothing
//! Items are owned values, so `Clone` is a deep copy: re-weighing produce on a
//! copy, or redacting its total, never reaches the original.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::item::Item;
use crate::money::Money;

// =============================================================================
// Receipt Total
// =============================================================================

/// What the total line of a receipt shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ReceiptTotal {
    /// A real amount.
    Amount(Money),
    /// A placeholder printed instead of the amount (gift receipts).
    Redacted(String),
}

impl ReceiptTotal {
    /// The amount, unless it has been redacted.
    pub fn amount(&self) -> Option<Money> {
        match self {
            ReceiptTotal::Amount(amount) => Some(*amount),
            ReceiptTotal::Redacted(_) => None,
        }
    }

    pub fn is_redacted(&self) -> bool {
        matches!(self, ReceiptTotal::Redacted(_))
    }
}

impl Default for ReceiptTotal {
    fn default() -> Self {
        ReceiptTotal::Amount(Money::zero())
    }
}

impl fmt::Display for ReceiptTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReceiptTotal::Amount(amount) => write!(f, "{}", amount),
            ReceiptTotal::Redacted(placeholder) => write!(f, "{}", placeholder),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A checkout's items and their total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique identifier (UUID v4). Copies keep the id of the receipt they
    /// were made from.
    id: Uuid,
    items: Vec<Item>,
    total: ReceiptTotal,
}

impl Receipt {
    /// Takes ownership of the scanned items, in scan order. The total starts
    /// at zero until [`Receipt::compute_total`] runs.
    pub fn new(items: Vec<Item>) -> Self {
        Receipt {
            id: Uuid::new_v4(),
            items,
            total: ReceiptTotal::default(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Mutable access for corrections (re-weigh, recount, discount). Call
    /// [`Receipt::compute_total`] again afterwards.
    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> &ReceiptTotal {
        &self.total
    }

    /// Sums every item's current total price, in list order.
    pub fn sum_items(&self) -> Money {
        self.items.iter().map(Item::total_price).sum()
    }

    /// Sets the total line to the current sum of the items and returns it.
    ///
    /// Assigns rather than accumulates: calling it twice gives the same
    /// total, and a previously redacted total is replaced by the amount.
    pub fn compute_total(&mut self) -> Money {
        let total = self.sum_items();
        self.total = ReceiptTotal::Amount(total);
        total
    }

    /// Replaces the printed total with a placeholder.
    pub fn redact_total(&mut self, placeholder: impl Into<String>) {
        self.total = ReceiptTotal::Redacted(placeholder.into());
    }

    /// A copy for gift-giving: same items, total hidden behind `placeholder`.
    ///
    /// ## Example
    /// ```rust
    /// use grocer_core::catalog::select;
    /// use grocer_core::receipt::Receipt;
    ///
    /// let beer = select("4", None).unwrap().into_item().unwrap();
    /// let mut receipt = Receipt::new(vec![beer]);
    /// receipt.compute_total();
    ///
    /// let gift = receipt.gift_copy("Gift Receipt");
    /// assert_eq!(gift.to_string(), "Receipt Total: Gift Receipt");
    /// assert_eq!(receipt.to_string(), "Receipt Total: $12.60");
    /// assert_eq!(gift.items(), receipt.items());
    /// ```
    pub fn gift_copy(&self, placeholder: impl Into<String>) -> Receipt {
        let mut gift = self.clone();
        gift.redact_total(placeholder);
        gift
    }

    /// Pretty-printed JSON of the whole receipt.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// `Receipt Total: $29.85` or `Receipt Total: Gift Receipt`
impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Receipt Total: {}", self.total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
