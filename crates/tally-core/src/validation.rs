//! # Validation Module
//!
//! Input validation for cart line items.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell (terminal / cart file)                                 │
//! │  ├── parse_unit_price / parse_quantity: text → typed values            │
//! │  └── Bad input is rejected (or re-prompted) before the core runs       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Item::new                                                    │
//! │  └── THIS MODULE: field rules enforced at construction                 │
//! │                                                                         │
//! │  The calculator itself assumes validated items and never fails.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::validation::{parse_quantity, parse_unit_price};
//!
//! let price = parse_unit_price("3.99").unwrap();
//! let qty = parse_quantity("2").unwrap();
//! assert!(parse_unit_price("-1").is_err());
//! assert!(parse_quantity("1.5").is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY, MAX_NAME_LENGTH, MAX_UNIT_PRICE};

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an item display name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most [`MAX_NAME_LENGTH`] characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: free items)
/// - Must not exceed [`MAX_UNIT_PRICE`], which keeps line totals and the
///   cart subtotal representable for every valid cart
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "unit price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    if price > MAX_UNIT_PRICE {
        return Err(ValidationError::AmountTooLarge {
            field: "unit price".to_string(),
            max: MAX_UNIT_PRICE,
        });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_ITEM_QUANTITY`]
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates cart size (number of line items).
///
/// ## Rules
/// - Must not exceed [`MAX_CART_ITEMS`]
pub fn validate_cart_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: MAX_CART_ITEMS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Text Parsers
// =============================================================================

/// Parses price text into a validated non-negative `Money`.
///
/// Non-numeric or over-precise text maps to `InvalidAmount`; negative
/// amounts are rejected by [`validate_unit_price`].
pub fn parse_unit_price(text: &str) -> ValidationResult<Money> {
    let price: Money = text
        .parse()
        .map_err(|e: crate::money::ParseMoneyError| ValidationError::InvalidAmount {
            value: text.trim().to_string(),
            reason: e.to_string(),
        })?;

    validate_unit_price(price)?;
    Ok(price)
}

/// Parses quantity text into a validated positive integer.
///
/// Non-integer text maps to `InvalidQuantity`; non-positive or oversized
/// values are rejected by [`validate_quantity`].
pub fn parse_quantity(text: &str) -> ValidationResult<i64> {
    let qty: i64 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidQuantity {
            value: text.trim().to_string(),
            reason: "must be a whole number".to_string(),
        })?;

    validate_quantity(qty)?;
    Ok(qty)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("apple").is_ok());
        assert!(validate_item_name("  shirt  ").is_ok());

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Money::zero()).is_ok());
        assert!(validate_unit_price(Money::from_cents(1099)).is_ok());
        assert!(validate_unit_price(MAX_UNIT_PRICE).is_ok());

        assert!(validate_unit_price(Money::from_cents(-1)).is_err());
        assert!(matches!(
            validate_unit_price(MAX_UNIT_PRICE + Money::from_ten_thousandths(1)),
            Err(ValidationError::AmountTooLarge { .. })
        ));
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_cart_size() {
        assert!(validate_cart_size(0).is_ok());
        assert!(validate_cart_size(99).is_ok());
        assert!(validate_cart_size(100).is_err());
    }

    #[test]
    fn test_parse_unit_price() {
        assert_eq!(parse_unit_price("3.99").unwrap(), Money::from_cents(399));
        assert_eq!(parse_unit_price(" 0 ").unwrap(), Money::zero());

        assert!(matches!(
            parse_unit_price("abc"),
            Err(ValidationError::InvalidAmount { .. })
        ));
        assert!(matches!(
            parse_unit_price("1.00001"),
            Err(ValidationError::InvalidAmount { .. })
        ));
        // Negative is numeric but still rejected
        assert!(parse_unit_price("-1.00").is_err());
        // So is anything over the unit-price cap, even though it parses
        assert!(matches!(
            parse_unit_price("500000000000000"),
            Err(ValidationError::AmountTooLarge { .. })
        ));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("2").unwrap(), 2);
        assert_eq!(parse_quantity(" 10 ").unwrap(), 10);

        assert!(matches!(
            parse_quantity("1.5"),
            Err(ValidationError::InvalidQuantity { .. })
        ));
        assert!(matches!(
            parse_quantity("two"),
            Err(ValidationError::InvalidQuantity { .. })
        ));
        assert!(matches!(
            parse_quantity("0"),
            Err(ValidationError::MustBePositive { .. })
        ));
    }
}
