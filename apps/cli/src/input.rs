//! Interactive item entry.
//!
//! Prompts on the terminal for a jurisdiction and then a sequence of items
//! until the user types "done". Invalid entries print the validation
//! message and re-prompt; end-of-input anywhere finishes the cart.
//!
//! The reader/writer are generic so the whole dialogue is testable with
//! in-memory buffers.

use std::io::{self, BufRead, Write};

use tally_core::error::ValidationResult;
use tally_core::validation::{
    parse_quantity, parse_unit_price, validate_cart_size, validate_item_name,
};
use tally_core::Item;

/// Runs the interactive dialogue and returns the jurisdiction code and the
/// validated items, in entry order.
pub fn read_cart<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<(String, Vec<Item>)> {
    let jurisdiction = prompt(input, output, "Jurisdiction (CA/NY/other): ")?.unwrap_or_default();

    let mut items: Vec<Item> = Vec::new();
    loop {
        if validate_cart_size(items.len()).is_err() {
            writeln!(output, "Cart is full ({} items); totaling up.", items.len())?;
            break;
        }

        let name = match prompt(input, output, "Item name (or 'done' to finish): ")? {
            None => break,
            Some(name) => name,
        };
        if name.eq_ignore_ascii_case("done") {
            break;
        }
        if let Err(e) = validate_item_name(&name) {
            writeln!(output, "{e}")?;
            continue;
        }

        let unit_price = match prompt_parse(input, output, "Unit price: ", parse_unit_price)? {
            None => break,
            Some(price) => price,
        };
        let quantity = match prompt_parse(input, output, "Quantity: ", parse_quantity)? {
            None => break,
            Some(qty) => qty,
        };
        let category = match prompt(input, output, "Category (e.g. food, clothing, general): ")? {
            None => break,
            Some(category) => category,
        };

        // Every field was validated above, so this only fails if the rules
        // drift apart; surface the message and keep going either way.
        match Item::new(name, unit_price, quantity, category) {
            Ok(item) => items.push(item),
            Err(e) => writeln!(output, "{e}")?,
        }
    }

    Ok((jurisdiction, items))
}

/// Writes a prompt and reads one trimmed line. Returns `None` on
/// end-of-input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts until `parse` accepts the entry, printing the validation message
/// on each rejection. Returns `None` on end-of-input.
fn prompt_parse<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    text: &str,
    parse: F,
) -> io::Result<Option<T>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> ValidationResult<T>,
{
    loop {
        let line = match prompt(input, output, text)? {
            None => return Ok(None),
            Some(line) => line,
        };
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}
