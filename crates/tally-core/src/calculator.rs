//! # Receipt Calculator
//!
//! Turns a jurisdiction code and an ordered cart into a [`Receipt`].
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  jurisdiction + items                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  uppercase code, resolve rate ONCE                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  for each item, in input order:                                         │
//! │    line_total = unit_price × quantity            (exact)                │
//! │    tax = 0                 if category exempt OR rate is zero           │
//! │        = round-up-0.05(line_total × rate)        otherwise              │
//! │    subtotal += line_total; sales_tax += tax                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Receipt { subtotal, sales_tax, total = subtotal + sales_tax, lines }   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculator never fails: it assumes validated items, and unknown
//! jurisdictions or categories just mean zero rate / no exemption.

use crate::money::Money;
use crate::tax_table::TaxTable;
use crate::types::{Item, Receipt, ReceiptLine};

/// Computes receipts against a fixed [`TaxTable`].
///
/// Stateless across invocations: the table is read-only, and every call is
/// a pure function of (jurisdiction, items, table).
///
/// ## Example
/// ```rust
/// use tally_core::calculator::ReceiptCalculator;
/// use tally_core::money::Money;
/// use tally_core::types::Item;
///
/// let calc = ReceiptCalculator::with_builtin_table();
/// let items = vec![Item::new("book", Money::from_cents(100), 1, "general").unwrap()];
///
/// let receipt = calc.calculate("CA", &items);
/// assert_eq!(receipt.subtotal, Money::from_cents(100));
/// assert_eq!(receipt.sales_tax, Money::from_cents(10)); // 0.0975 rounds up
/// assert_eq!(receipt.total, Money::from_cents(110));
/// ```
#[derive(Debug, Clone)]
pub struct ReceiptCalculator {
    table: TaxTable,
}

impl ReceiptCalculator {
    /// Creates a calculator over the given table.
    pub fn new(table: TaxTable) -> Self {
        ReceiptCalculator { table }
    }

    /// Creates a calculator over the built-in jurisdiction table.
    pub fn with_builtin_table() -> Self {
        ReceiptCalculator::new(TaxTable::builtin())
    }

    /// Returns the table this calculator resolves against.
    pub fn table(&self) -> &TaxTable {
        &self.table
    }

    /// Computes the receipt for one cart.
    ///
    /// The jurisdiction code is normalized to uppercase once, here; category
    /// matching stays case-sensitive. An empty cart yields an all-zero
    /// receipt.
    pub fn calculate(&self, jurisdiction: &str, items: &[Item]) -> Receipt {
        let jurisdiction = jurisdiction.trim().to_uppercase();
        let rate = self.table.rate_for(&jurisdiction);

        let mut subtotal = Money::zero();
        let mut sales_tax = Money::zero();
        let mut lines = Vec::with_capacity(items.len());

        for item in items {
            let line_total = item.line_total();

            // Two distinct routes to zero tax: an exempt category, or a
            // jurisdiction whose rate is zero (including unknown codes).
            let tax = if self.table.is_exempt(&jurisdiction, &item.category) || rate.is_zero() {
                Money::zero()
            } else {
                line_total.sales_tax(rate)
            };

            subtotal += line_total;
            sales_tax += tax;

            lines.push(ReceiptLine {
                name: item.name.clone(),
                category: item.category.clone(),
                unit_price: item.unit_price,
                quantity: item.quantity,
                line_total,
                tax,
            });
        }

        Receipt {
            jurisdiction,
            rate,
            lines,
            subtotal,
            sales_tax,
            total: subtotal + sales_tax,
        }
    }
}

impl Default for ReceiptCalculator {
    fn default() -> Self {
        ReceiptCalculator::with_builtin_table()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
