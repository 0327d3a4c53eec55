//! # Money Module
//!
//! Provides the `Money` type for handling monetary values exactly.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Worse for tax rounding: a raw tax of exactly 0.10 can come back as    │
//! │  0.10000000000000001 and get bumped to 0.15 by the round-up rule.      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Ten-Thousandths                                  │
//! │    $1.0975 = 10975 units. Every amount a customer can type (up to      │
//! │    four fractional digits) is represented exactly, and the round-up    │
//! │    rule operates on exact integers.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! // Create from cents or parse a decimal string (preferred for user input)
//! let price = Money::from_cents(1099);          // $10.99
//! let parsed: Money = "10.99".parse().unwrap(); // $10.99, exactly
//! assert_eq!(price, parsed);
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

use crate::types::TaxRate;

/// Internal scale: units per dollar (four fractional digits).
const UNITS_PER_DOLLAR: i64 = 10_000;

/// Units per cent.
const UNITS_PER_CENT: i64 = 100;

/// One nickel ($0.05) in internal units. The tax round-up rule snaps to
/// multiples of this.
const NICKEL: i64 = 500;

/// Maximum fractional digits a parsed amount may carry.
const MAX_FRACTION_DIGITS: usize = 4;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in ten-thousandths of a dollar.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for adjustments/refunds
/// - **Ten-thousandths, not cents**: unit prices may carry four exact
///   fractional digits, and tax math must not lose them before rounding
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// Item.unit_price ──► ReceiptLine.line_total ──► Receipt.subtotal
///                            │
///                            └──► sales_tax(rate) ──► Receipt.sales_tax
///
/// EVERY monetary value in the system flows through this type
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from ten-thousandths of a dollar (the internal
    /// unit).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_ten_thousandths(10975); // $1.0975
    /// assert_eq!(price.ten_thousandths(), 10975);
    /// ```
    #[inline]
    pub const fn from_ten_thousandths(units: i64) -> Self {
        Money(units)
    }

    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.ten_thousandths(), 109_900);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents * UNITS_PER_CENT)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// For negative amounts, only the major unit should be negative:
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * UNITS_PER_DOLLAR - minor * UNITS_PER_CENT)
        } else {
            Money(major * UNITS_PER_DOLLAR + minor * UNITS_PER_CENT)
        }
    }

    /// Returns the value in ten-thousandths of a dollar.
    #[inline]
    pub const fn ten_thousandths(&self) -> i64 {
        self.0
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total, Money::from_cents(897)); // $8.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Rounds up to the nearest multiple of $0.05 (never down).
    ///
    /// ## The Round-Up Rule
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  ROUND UP TO NEAREST 0.05                                           │
    /// │                                                                     │
    /// │  Any amount strictly between two nickel multiples goes UP,          │
    /// │  no matter how close it is to the lower one:                        │
    /// │    1.13  → 1.15                                                     │
    /// │    1.16  → 1.20                                                     │
    /// │    1.151 → 1.20                                                     │
    /// │    0.001 → 0.05                                                     │
    /// │                                                                     │
    /// │  Exact multiples are left alone:                                    │
    /// │    1.10  → 1.10                                                     │
    /// │    0     → 0                                                        │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let raw: Money = "1.13".parse().unwrap();
    /// assert_eq!(raw.round_up_to_nickel(), "1.15".parse().unwrap());
    /// ```
    #[inline]
    pub const fn round_up_to_nickel(&self) -> Self {
        let quot = self.0.div_euclid(NICKEL);
        let rem = self.0.rem_euclid(NICKEL);
        if rem == 0 {
            Money(quot * NICKEL)
        } else {
            Money((quot + 1) * NICKEL)
        }
    }

    /// Calculates the sales tax on this amount at the given rate, rounded up
    /// to the nearest $0.05.
    ///
    /// ## Why Not `amount × rate` Then `round_up_to_nickel`?
    /// The raw product `amount × rate` can carry more fractional digits than
    /// `Money` holds ($1.01 × 0.0975 = $0.098475). Truncating it into a
    /// `Money` first could land exactly on a nickel multiple and skip the
    /// round-up. This method keeps the full product as an integer numerator
    /// (`ten_thousandths × rate_ppm`) and takes the ceiling in one exact
    /// step, so no precision is lost before rounding.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    /// use tally_core::types::TaxRate;
    ///
    /// let amount = Money::from_cents(100);           // $1.00
    /// let rate: TaxRate = "0.0975".parse().unwrap(); // 9.75%
    ///
    /// // Raw tax $0.0975 → rounds up to $0.10
    /// assert_eq!(amount.sales_tax(rate), Money::from_cents(10));
    /// ```
    pub fn sales_tax(&self, rate: TaxRate) -> Money {
        // Numerator is in (ten-thousandth × ppm) units; one nickel in those
        // units is 500 × 1_000_000. i128 prevents overflow on large carts.
        const NICKEL_SCALED: i128 = NICKEL as i128 * 1_000_000;
        let numerator = self.0 as i128 * rate.ppm() as i128;
        let nickels =
            numerator.div_euclid(NICKEL_SCALED) + (numerator.rem_euclid(NICKEL_SCALED) != 0) as i128;
        Money((nickels * NICKEL as i128) as i64)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Errors from parsing a decimal money string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoneyError {
    /// Input was empty or contained no digits.
    #[error("amount is empty")]
    Empty,

    /// Input contained a character other than digits, one decimal point, and
    /// an optional leading sign.
    #[error("amount contains invalid character '{0}'")]
    InvalidCharacter(char),

    /// More fractional digits than the exact representation supports.
    #[error("amount has more than {max} fractional digits")]
    TooPrecise { max: usize },

    /// Amount does not fit in the internal representation.
    #[error("amount is out of range")]
    OutOfRange,
}

/// Parses a decimal string ("10", "10.99", "1.0975", ".5") into an exact
/// `Money` value. Never goes through floating point.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (int_part, frac_part) = match digits.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (digits, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(ParseMoneyError::Empty);
        }
        if let Some(bad) = int_part
            .chars()
            .chain(frac_part.chars())
            .find(|c| !c.is_ascii_digit())
        {
            return Err(ParseMoneyError::InvalidCharacter(bad));
        }
        if frac_part.len() > MAX_FRACTION_DIGITS {
            return Err(ParseMoneyError::TooPrecise {
                max: MAX_FRACTION_DIGITS,
            });
        }

        let mut units: i64 = 0;
        for c in int_part.bytes() {
            units = units
                .checked_mul(10)
                .and_then(|v| v.checked_add((c - b'0') as i64))
                .ok_or(ParseMoneyError::OutOfRange)?;
        }
        units = units
            .checked_mul(UNITS_PER_DOLLAR)
            .ok_or(ParseMoneyError::OutOfRange)?;

        let mut frac: i64 = 0;
        for c in frac_part.bytes() {
            frac = frac * 10 + (c - b'0') as i64;
        }
        for _ in frac_part.len()..MAX_FRACTION_DIGITS {
            frac *= 10;
        }
        units = units.checked_add(frac).ok_or(ParseMoneyError::OutOfRange)?;

        Ok(Money(if negative { -units } else { units }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money at two fractional digits (half-up), the display-only
/// currency convention. Stored values keep full four-digit precision.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = (self.0.abs() + UNITS_PER_CENT / 2) / UNITS_PER_CENT;
        write!(f, "{}${}.{:02}", sign, cents / 100, cents % 100)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Money::from_cents(1099).ten_thousandths(), 109_900);
        assert_eq!(Money::from_major_minor(10, 99), Money::from_cents(1099));
        assert_eq!(Money::from_major_minor(-5, 50), Money::from_cents(-550));
        assert!(Money::zero().is_zero());
    }

    #[test]
    fn test_parse_exact() {
        assert_eq!(money("10.99"), Money::from_cents(1099));
        assert_eq!(money("10"), Money::from_cents(1000));
        assert_eq!(money("1.0975"), Money::from_ten_thousandths(10975));
        assert_eq!(money(".5"), Money::from_cents(50));
        assert_eq!(money("0.001"), Money::from_ten_thousandths(10));
        assert_eq!(money("-5.50"), Money::from_cents(-550));
        assert_eq!(money("  2.00 "), Money::from_cents(200));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Money>(), Err(ParseMoneyError::Empty));
        assert_eq!(".".parse::<Money>(), Err(ParseMoneyError::Empty));
        assert_eq!(
            "1.00001".parse::<Money>(),
            Err(ParseMoneyError::TooPrecise { max: 4 })
        );
        assert_eq!(
            "12a".parse::<Money>(),
            Err(ParseMoneyError::InvalidCharacter('a'))
        );
        assert_eq!(
            "1,00".parse::<Money>(),
            Err(ParseMoneyError::InvalidCharacter(','))
        );
        assert_eq!(
            "99999999999999999999".parse::<Money>(),
            Err(ParseMoneyError::OutOfRange)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
        // Sub-cent values round half-up for display only
        assert_eq!(format!("{}", money("1.0975")), "$1.10");
        assert_eq!(format!("{}", money("1.0949")), "$1.09");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a + b, Money::from_cents(1500));
        assert_eq!(a - b, Money::from_cents(500));
        assert_eq!(a * 3, Money::from_cents(3000));

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc, Money::from_cents(1500));
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        assert_eq!(unit_price.multiply_quantity(3), Money::from_cents(897));
    }

    #[test]
    fn test_round_up_to_nickel() {
        assert_eq!(money("1.13").round_up_to_nickel(), money("1.15"));
        assert_eq!(money("1.16").round_up_to_nickel(), money("1.20"));
        assert_eq!(money("1.151").round_up_to_nickel(), money("1.20"));
        assert_eq!(money("0.001").round_up_to_nickel(), money("0.05"));
        // Exact multiples stay put
        assert_eq!(money("1.10").round_up_to_nickel(), money("1.10"));
        assert_eq!(Money::zero().round_up_to_nickel(), Money::zero());
    }

    #[test]
    fn test_round_up_never_rounds_down_and_is_idempotent() {
        for units in 0..2_000 {
            let raw = Money::from_ten_thousandths(units);
            let rounded = raw.round_up_to_nickel();
            assert!(rounded >= raw);
            assert!((rounded - raw).ten_thousandths() < NICKEL);
            assert_eq!(rounded.round_up_to_nickel(), rounded);
        }
    }

    #[test]
    fn test_sales_tax_rounds_up() {
        // $1.00 at 9.75%: raw 0.0975 → 0.10
        let rate: TaxRate = "0.0975".parse().unwrap();
        assert_eq!(Money::from_cents(100).sales_tax(rate), money("0.10"));

        // $100.00 at 9.75%: raw 9.75 is an exact multiple, unchanged
        assert_eq!(Money::from_cents(10_000).sales_tax(rate), money("9.75"));
    }

    #[test]
    fn test_sales_tax_exact_on_sub_representable_raw() {
        // $1.01 at 9.75%: raw 0.098475 has six fractional digits. Truncating
        // it to four before rounding would still give 0.10 here, but the
        // point is the ceiling is taken over the exact product.
        let rate: TaxRate = "0.0975".parse().unwrap();
        assert_eq!(Money::from_cents(101).sales_tax(rate), money("0.10"));

        // $1.03 at 8.875%: raw 0.0914125 → 0.10
        let ny: TaxRate = "0.08875".parse().unwrap();
        assert_eq!(Money::from_cents(103).sales_tax(ny), money("0.10"));
    }

    #[test]
    fn test_sales_tax_zero_rate() {
        assert_eq!(
            Money::from_cents(12_345).sales_tax(TaxRate::zero()),
            Money::zero()
        );
    }

    #[test]
    fn test_sales_tax_zero_amount() {
        let rate: TaxRate = "0.0975".parse().unwrap();
        assert_eq!(Money::zero().sales_tax(rate), Money::zero());
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Money::from_cents(1099)).unwrap();
        assert_eq!(json, "109900");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Money::from_cents(1099));
    }
}
