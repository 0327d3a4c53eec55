//! # Error Types
//!
//! Validation errors for tally-core.
//!
//! ## Where Errors Can Happen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  shell input ──► validation (HERE) ──► ReceiptCalculator ──► Receipt   │
//! │                                                                         │
//! │  The calculation itself is infallible: once items pass validation,     │
//! │  every cart produces a receipt. Unknown jurisdictions and unknown      │
//! │  categories are NOT errors; they simply mean "zero rate" and           │
//! │  "not exempt".                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::money::Money;

/// Input validation errors.
///
/// These occur at the input boundary, before the calculation runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Monetary amount exceeds the allowed maximum.
    #[error("{field} must be at most {max}")]
    AmountTooLarge { field: String, max: Money },

    /// Price text is not a valid (non-negative, exact) decimal amount.
    #[error("invalid amount '{value}': {reason}")]
    InvalidAmount { value: String, reason: String },

    /// Quantity text is not a valid positive whole number.
    #[error("invalid quantity '{value}': {reason}")]
    InvalidQuantity { value: String, reason: String },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;
