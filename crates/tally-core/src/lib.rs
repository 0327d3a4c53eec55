//! # tally-core: Pure Receipt Calculation for Tally
//!
//! This crate is the **heart** of Tally. It computes sales-tax-inclusive
//! receipts as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Tally Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Shell (apps/cli)                             │   │
//! │  │   prompt jurisdiction ──► prompt items ──► print receipt        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ validated Items + jurisdiction         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │ tax_table │  │calculator │  │ validation│  │   │
//! │  │   │   Money   │  │  TaxTable │  │  Receipt  │  │   rules   │  │   │
//! │  │   │  TaxRate* │  │  lookups  │  │Calculator │  │  parsers  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                          (* lives in types)                    │   │
//! │  │   NO I/O • NO FLOATS IN THE MATH • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Exact fixed-point money and the round-up-to-0.05 rule
//! - [`types`] - Domain types (Item, TaxRate, ReceiptLine, Receipt)
//! - [`tax_table`] - Jurisdiction rate and exemption lookup
//! - [`calculator`] - The receipt computation itself
//! - [`validation`] - Input boundary rules and text parsers
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same jurisdiction + items + table = same receipt
//! 2. **No I/O**: terminal, file, and network access are FORBIDDEN here
//! 3. **Exact Money**: ten-thousandths of a dollar in i64, never floats
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{Item, Money, ReceiptCalculator};
//!
//! let calc = ReceiptCalculator::with_builtin_table();
//! let cart = vec![
//!     Item::new("apple", Money::from_cents(75), 4, "food").unwrap(),
//!     Item::new("book", Money::from_cents(1299), 1, "general").unwrap(),
//! ];
//!
//! let receipt = calc.calculate("CA", &cart);
//! assert_eq!(receipt.total, receipt.subtotal + receipt.sales_tax);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod money;
pub mod tax_table;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Money` instead of
// `use tally_core::money::Money`

pub use calculator::ReceiptCalculator;
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use tax_table::TaxTable;
pub use types::{Item, Receipt, ReceiptLine, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable transaction sizes.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single item.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum length of an item display name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum unit price for a single item ($1,000,000.00).
///
/// ## Business Reason
/// No single line item costs a million dollars at a register. The cap also
/// keeps the fixed-point arithmetic closed: even a full cart
/// ([`MAX_CART_ITEMS`] lines at [`MAX_ITEM_QUANTITY`] each) stays far below
/// the representable range, so `unit price × quantity` and the subtotal
/// accumulation can never overflow.
pub const MAX_UNIT_PRICE: Money = Money::from_cents(100_000_000);
