//! Receipt rendering.
//!
//! Fixed-width terminal layout:
//!
//! ```text
//! item                price      qty
//! shirt               $19.99     1
//! gadget              $24.99     2
//! subtotal:              $69.97
//! tax:                   $4.45
//! total:                 $74.42
//! ```
//!
//! All amounts are shown at two fractional digits; the underlying receipt
//! keeps full precision.

use std::fmt::Write as _;

use tally_core::Receipt;

/// Renders the receipt as a fixed-width table with totals footer.
pub fn render_receipt(receipt: &Receipt) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{:<20}{:<11}{:<5}", "item", "price", "qty");
    for line in &receipt.lines {
        let _ = writeln!(
            out,
            "{:<20}{:<11}{:<5}",
            line.name,
            line.unit_price.to_string(),
            line.quantity
        );
    }
    let _ = writeln!(out, "{:<23}{}", "subtotal:", receipt.subtotal);
    let _ = writeln!(out, "{:<23}{}", "tax:", receipt.sales_tax);
    let _ = writeln!(out, "{:<23}{}", "total:", receipt.total);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{Item, Money, ReceiptCalculator};

    fn item(name: &str, price: &str, qty: i64, category: &str) -> Item {
        Item::new(name, price.parse::<Money>().unwrap(), qty, category).unwrap()
    }

    #[test]
    fn test_rendered_layout() {
        let receipt = ReceiptCalculator::with_builtin_table().calculate(
            "NY",
            &[
                item("shirt", "19.99", 1, "clothing"),
                item("gadget", "24.99", 2, "general"),
            ],
        );
        let rendered = render_receipt(&receipt);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "item                price      qty  ");
        assert_eq!(lines[1], "shirt               $19.99     1    ");
        assert_eq!(lines[2], "gadget              $24.99     2    ");
        assert_eq!(lines[3], "subtotal:              $69.97");
        assert_eq!(lines[4], "tax:                   $4.45");
        assert_eq!(lines[5], "total:                 $74.42");
    }

    #[test]
    fn test_empty_cart_renders_zero_totals() {
        let receipt = ReceiptCalculator::with_builtin_table().calculate("CA", &[]);
        let rendered = render_receipt(&receipt);

        assert!(rendered.contains("subtotal:              $0.00"));
        assert!(rendered.contains("tax:                   $0.00"));
        assert!(rendered.contains("total:                 $0.00"));
    }
}
