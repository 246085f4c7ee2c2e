//! # Domain Types
//!
//! Small value types shared by items, the catalog and receipts.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Value Types                                     │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │  DiscountRate   │   │     Weight      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  bps (u32)      │   │  hundredths of  │       │
//! │  │  500 = 5%       │   │  0..=10000 only │   │  a pound (i64)  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │      Abv        │   │    Category     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  hundredths of  │   │  Produce        │                             │
//! │  │  a percent      │   │  Alcohol        │                             │
//! │  │  1001 = 10.01%  │   │  Frozen         │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every quantity is a fixed-point integer. Tier boundaries such as
//! "ABV ≤ 10%" compare exactly, with no float epsilon involved.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::validation::ValidationResult;

/// Basis points in 100%.
pub const FULL_BPS: u32 = 10_000;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 500 bps = 5% (the beer tier)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

/// `5%`, `10%`, `8.25%`
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}%", self.0 / 100)
        } else {
            write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
        }
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// A percentage-off discount, guaranteed to lie in [0%, 100%].
///
/// ## Why a Separate Type?
/// A discount outside that range turns into a negative or inflated price.
/// Making the range part of construction means `Item::apply_discount` can
/// never be handed a bad value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount from basis points (1000 = 10% off).
    pub fn from_bps(bps: u32) -> ValidationResult<Self> {
        if bps > FULL_BPS {
            return Err(ValidationError::OutOfRange {
                field: "discount".to_string(),
                min: 0,
                max: 100,
            });
        }
        Ok(DiscountRate(bps))
    }

    /// Creates a discount from a percentage (`10.0` = 10% off).
    ///
    /// ## Example
    /// ```rust
    /// use grocer_core::types::DiscountRate;
    ///
    /// assert_eq!(DiscountRate::from_percentage(12.5).unwrap().bps(), 1250);
    /// assert!(DiscountRate::from_percentage(-5.0).is_err());
    /// assert!(DiscountRate::from_percentage(150.0).is_err());
    /// ```
    pub fn from_percentage(pct: f64) -> ValidationResult<Self> {
        if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
            return Err(ValidationError::OutOfRange {
                field: "discount".to_string(),
                min: 0,
                max: 100,
            });
        }
        Self::from_bps((pct * 100.0).round() as u32)
    }

    /// Returns the discount in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for DiscountRate {
    type Error = ValidationError;

    fn try_from(bps: u32) -> Result<Self, Self::Error> {
        DiscountRate::from_bps(bps)
    }
}

impl From<DiscountRate> for u32 {
    fn from(rate: DiscountRate) -> Self {
        rate.0
    }
}

// =============================================================================
// Weight
// =============================================================================

/// Weight on the scale in hundredths of a pound.
///
/// Signed so that a bad reading reaches validation instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Weight(i64);

impl Weight {
    /// Creates a weight from hundredths of a pound (150 = 1.50 lbs).
    #[inline]
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Weight(hundredths)
    }

    /// Creates a weight from whole pounds.
    #[inline]
    pub const fn from_pounds(pounds: i64) -> Self {
        Weight(pounds * 100)
    }

    /// Returns the weight in hundredths of a pound.
    #[inline]
    pub const fn hundredths(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

/// `3.00`, `1.37` (no unit, the caller adds `lbs.`)
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

/// Parses a decimal pound reading such as `3`, `1.5` or `0.25`.
///
/// More than two decimal places is rejected rather than silently rounded.
impl FromStr for Weight {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "weight".to_string(),
            reason: reason.to_string(),
        };

        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid("expected a number of pounds"));
        }
        if frac.len() > 2 {
            return Err(invalid("at most two decimal places"));
        }
        if !whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected a number of pounds"));
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("value too large"))?
        };
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid("bad fraction"))? * 10,
            _ => frac.parse().map_err(|_| invalid("bad fraction"))?,
        };

        let hundredths = whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(frac))
            .ok_or_else(|| invalid("value too large"))?;

        Ok(Weight(if negative { -hundredths } else { hundredths }))
    }
}

// =============================================================================
// Alcohol By Volume
// =============================================================================

/// Alcohol by volume in hundredths of a percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Abv(u32);

impl Abv {
    /// Creates an ABV from whole percent (`Abv::from_percent(13)` = 13%).
    #[inline]
    pub const fn from_percent(pct: u32) -> Self {
        Abv(pct * 100)
    }

    /// Creates an ABV from hundredths of a percent (1001 = 10.01%).
    #[inline]
    pub const fn from_hundredths(hundredths: u32) -> Self {
        Abv(hundredths)
    }

    #[inline]
    pub const fn hundredths(&self) -> u32 {
        self.0
    }
}

/// One decimal place, as printed on the label: `5.0`, `13.0`.
impl fmt::Display for Abv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0 as f64 / 100.0)
    }
}

// =============================================================================
// Category
// =============================================================================

/// The item category. Each one carries its own tax rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Sold by weight, untaxed.
    Produce,
    /// Sold per unit, taxed by ABV tier, age restricted.
    Alcohol,
    /// Sold by count, untaxed, has an expiration date.
    Frozen,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Produce => write!(f, "produce"),
            Category::Alcohol => write!(f, "alcohol"),
            Category::Frozen => write!(f, "frozen"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
