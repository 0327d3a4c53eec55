//! Cart-file batch mode.
//!
//! Instead of the interactive prompts, a cart can be supplied as a JSON
//! file (first CLI argument):
//!
//! ```json
//! {
//!   "jurisdiction": "CA",
//!   "items": [
//!     { "name": "apple", "unit_price": "0.75", "quantity": 4, "category": "food" },
//!     { "name": "book", "unit_price": "12.99", "quantity": 1, "category": "general" }
//!   ]
//! }
//! ```
//!
//! Prices travel as decimal strings and are parsed exactly; the same
//! validation rules apply as at the prompts.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tally_core::validation::{parse_unit_price, validate_cart_size};
use tally_core::{Item, ValidationError};

/// One line of a cart file, before validation.
#[derive(Debug, Deserialize)]
pub struct ItemEntry {
    pub name: String,
    /// Decimal string, e.g. "12.99".
    pub unit_price: String,
    pub quantity: i64,
    pub category: String,
}

/// A cart file, before validation.
#[derive(Debug, Deserialize)]
pub struct CartFile {
    pub jurisdiction: String,
    pub items: Vec<ItemEntry>,
}

/// Reads a cart file and validates every line.
pub fn load_cart(path: &Path) -> Result<(String, Vec<Item>), CartError> {
    let text = std::fs::read_to_string(path).map_err(|source| CartError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: CartFile = serde_json::from_str(&text).map_err(|source| CartError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate_cart(file)
}

fn validate_cart(file: CartFile) -> Result<(String, Vec<Item>), CartError> {
    let mut items = Vec::with_capacity(file.items.len());
    for (index, entry) in file.items.into_iter().enumerate() {
        validate_cart_size(items.len()).map_err(|source| CartError::InvalidItem {
            line: index + 1,
            name: entry.name.clone(),
            source,
        })?;
        let unit_price =
            parse_unit_price(&entry.unit_price).map_err(|source| CartError::InvalidItem {
                line: index + 1,
                name: entry.name.clone(),
                source,
            })?;
        let item = Item::new(entry.name.as_str(), unit_price, entry.quantity, entry.category.as_str()).map_err(
            |source| CartError::InvalidItem {
                line: index + 1,
                name: entry.name.clone(),
                source,
            },
        )?;
        items.push(item);
    }
    Ok((file.jurisdiction, items))
}

/// Cart-file error types.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cannot read cart file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cart file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("cart item {line} ('{name}'): {source}")]
    InvalidItem {
        line: usize,
        name: String,
        source: ValidationError,
    },
}
