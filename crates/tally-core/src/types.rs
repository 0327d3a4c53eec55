//! # Domain Types
//!
//! Core domain types for receipt calculation.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │   ReceiptLine   │   │     Receipt     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  name           │   │  jurisdiction   │       │
//! │  │  unit_price     │──►│  line_total     │──►│  subtotal       │       │
//! │  │  quantity       │   │  tax            │   │  sales_tax      │       │
//! │  │  category       │   │  ...            │   │  total          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │    TaxRate      │   97_500 ppm = 9.75%                              │
//! │  │  ppm (u32)      │   88_750 ppm = 8.875%                             │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_item_name, validate_quantity, validate_unit_price};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in parts per million (ppm).
///
/// ## Why Parts Per Million?
/// Statutory rates carry up to five decimal digits (NY state + city is
/// 8.875% = 0.08875), which basis points cannot represent. One ppm =
/// 0.0001% = 1/1_000_000, so every such rate is an exact integer:
/// 0.0975 = 97_500 ppm, 0.08875 = 88_750 ppm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from parts per million.
    #[inline]
    pub const fn from_ppm(ppm: u32) -> Self {
        TaxRate(ppm)
    }

    /// Creates a tax rate from basis points (825 bps = 8.25%).
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps * 100)
    }

    /// Returns the rate in parts per million.
    #[inline]
    pub const fn ppm(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 10_000.0
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

/// Errors from parsing a decimal tax-rate string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseTaxRateError {
    /// Input was empty or contained no digits.
    #[error("rate is empty")]
    Empty,

    /// Input contained something other than digits and one decimal point.
    #[error("rate contains invalid character '{0}'")]
    InvalidCharacter(char),

    /// More fractional digits than ppm granularity supports.
    #[error("rate has more than {max} fractional digits")]
    TooPrecise { max: usize },

    /// Rate does not fit in the internal representation.
    #[error("rate is out of range")]
    OutOfRange,
}

/// Parses a decimal fraction ("0.0975", "0.08875") into an exact `TaxRate`.
/// Negative rates are rejected; never goes through floating point.
impl FromStr for TaxRate {
    type Err = ParseTaxRateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const MAX_FRACTION_DIGITS: usize = 6;

        let s = s.trim();
        let (int_part, frac_part) = match s.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (s, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(ParseTaxRateError::Empty);
        }
        if let Some(bad) = int_part
            .chars()
            .chain(frac_part.chars())
            .find(|c| !c.is_ascii_digit())
        {
            return Err(ParseTaxRateError::InvalidCharacter(bad));
        }
        if frac_part.len() > MAX_FRACTION_DIGITS {
            return Err(ParseTaxRateError::TooPrecise {
                max: MAX_FRACTION_DIGITS,
            });
        }

        let mut ppm: u64 = 0;
        for c in int_part.bytes() {
            ppm = ppm
                .checked_mul(10)
                .and_then(|v| v.checked_add((c - b'0') as u64))
                .ok_or(ParseTaxRateError::OutOfRange)?;
        }
        ppm = ppm
            .checked_mul(1_000_000)
            .ok_or(ParseTaxRateError::OutOfRange)?;

        let mut frac: u64 = 0;
        for c in frac_part.bytes() {
            frac = frac * 10 + (c - b'0') as u64;
        }
        for _ in frac_part.len()..MAX_FRACTION_DIGITS {
            frac *= 10;
        }
        ppm = ppm.checked_add(frac).ok_or(ParseTaxRateError::OutOfRange)?;

        u32::try_from(ppm)
            .map(TaxRate)
            .map_err(|_| ParseTaxRateError::OutOfRange)
    }
}

// =============================================================================
// Item
// =============================================================================

/// One line in the cart: a priced, quantified, categorized product.
///
/// Constructed once from validated input, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name shown on the receipt.
    pub name: String,

    /// Exact unit price (non-negative).
    pub unit_price: Money,

    /// Quantity purchased (positive).
    pub quantity: i64,

    /// Product category, matched case-sensitively against exemption lists
    /// ("food", "clothing", "general", ...).
    pub category: String,
}

impl Item {
    /// Creates a validated item.
    ///
    /// ## Rules
    /// - name must be non-empty (surrounding whitespace is trimmed)
    /// - unit price must be non-negative
    /// - quantity must be positive and within [`crate::MAX_ITEM_QUANTITY`]
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    /// use tally_core::types::Item;
    ///
    /// let item = Item::new("apple", Money::from_cents(199), 3, "food").unwrap();
    /// assert_eq!(item.quantity, 3);
    ///
    /// assert!(Item::new("", Money::from_cents(199), 3, "food").is_err());
    /// assert!(Item::new("apple", Money::from_cents(199), 0, "food").is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_unit_price(unit_price)?;
        validate_quantity(quantity)?;

        Ok(Item {
            name: name.trim().to_string(),
            unit_price,
            quantity,
            category: category.into().trim().to_string(),
        })
    }

    /// Line total before tax (unit price × quantity), exact.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Receipt Line
// =============================================================================

/// Per-item computed values, in the cart's original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    /// Item name (frozen from the input item).
    pub name: String,

    /// Item category (frozen from the input item).
    pub category: String,

    /// Exact unit price.
    pub unit_price: Money,

    /// Quantity purchased.
    pub quantity: i64,

    /// Line total before tax (unit price × quantity).
    pub line_total: Money,

    /// Tax charged on this line, already rounded up to the nearest $0.05.
    /// Zero when the category is exempt or the jurisdiction rate is zero.
    pub tax: Money,
}

// =============================================================================
// Receipt
// =============================================================================

/// The computed receipt for one cart.
///
/// ## Invariant
/// `total = subtotal + sales_tax` exactly, and `sales_tax` is the sum of the
/// per-line taxes in [`Receipt::lines`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Jurisdiction code the receipt was computed for (normalized uppercase).
    pub jurisdiction: String,

    /// Rate applied to non-exempt lines (zero for unknown jurisdictions).
    pub rate: TaxRate,

    /// Per-item detail, in input order.
    pub lines: Vec<ReceiptLine>,

    /// Sum of all line totals, before tax.
    pub subtotal: Money,

    /// Sum of all per-line taxes.
    pub sales_tax: Money,

    /// Grand total: subtotal + sales tax.
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
