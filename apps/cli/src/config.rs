//! CLI configuration module.
//!
//! Configuration is loaded from environment variables and command-line
//! arguments with fallback to defaults.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tally_core::types::ParseTaxRateError;
use tally_core::{TaxRate, TaxTable};

/// Usage text printed for `-h`/`--help`.
pub const USAGE: &str = "\
Usage: tally [CART_FILE]

Computes a sales-tax-inclusive receipt for a cart of items.

With no arguments, items are entered interactively at the terminal.
With CART_FILE, the cart is read from a JSON file instead.

Environment:
  TALLY_TAX_TABLE   path to a JSON file replacing the built-in tax table
  RUST_LOG          log filter for diagnostics on stderr (default: warn)
";

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Optional path to a JSON tax-table file that replaces the built-in
    /// jurisdiction table (from `TALLY_TAX_TABLE`).
    pub tax_table_path: Option<PathBuf>,

    /// Optional path to a cart file (positional CLI argument). When present
    /// the shell runs non-interactively.
    pub cart_path: Option<PathBuf>,

    /// Print usage and exit (`-h`/`--help`).
    pub show_help: bool,
}

impl CliConfig {
    /// Load configuration from the environment and argument list.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_parts(
            std::env::var_os("TALLY_TAX_TABLE"),
            std::env::args_os().skip(1),
        )
    }

    /// Flag arguments are recognized before anything is treated as a path,
    /// so `tally --help` never turns into "cannot read cart file --help".
    fn from_parts(
        tax_table: Option<OsString>,
        args: impl Iterator<Item = OsString>,
    ) -> Result<Self, ConfigError> {
        let mut cart_path = None;
        let mut show_help = false;

        for arg in args {
            if let Some(flag) = arg.to_str() {
                if flag == "-h" || flag == "--help" {
                    show_help = true;
                    continue;
                }
                if flag.starts_with('-') {
                    return Err(ConfigError::UnknownFlag {
                        flag: flag.to_string(),
                    });
                }
            }

            if cart_path.is_some() {
                return Err(ConfigError::UnexpectedArgument {
                    arg: arg.to_string_lossy().into_owned(),
                });
            }
            cart_path = Some(PathBuf::from(arg));
        }

        Ok(CliConfig {
            tax_table_path: tax_table.map(PathBuf::from),
            cart_path,
            show_help,
        })
    }

    /// Resolves the tax table: the file from `TALLY_TAX_TABLE` if set,
    /// otherwise the built-in table.
    pub fn tax_table(&self) -> Result<TaxTable, ConfigError> {
        match &self.tax_table_path {
            None => Ok(TaxTable::builtin()),
            Some(path) => load_tax_table(path),
        }
    }
}

/// One jurisdiction in a tax-table file.
///
/// Rates travel as decimal strings ("0.0975") so they stay exact; see the
/// schema below.
#[derive(Debug, Deserialize)]
pub struct JurisdictionEntry {
    /// Decimal rate fraction, e.g. "0.08875" for 8.875%.
    pub rate: String,

    /// Categories exempt from tax in this jurisdiction (exact-match).
    #[serde(default)]
    pub exempt_categories: Vec<String>,
}

/// Tax-table file schema:
///
/// ```json
/// {
///   "jurisdictions": {
///     "CA": { "rate": "0.0975", "exempt_categories": ["food"] },
///     "NY": { "rate": "0.08875", "exempt_categories": ["food", "clothing"] }
///   }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct TaxTableFile {
    pub jurisdictions: HashMap<String, JurisdictionEntry>,
}

/// Reads and parses a tax-table file into a `TaxTable`.
pub fn load_tax_table(path: &Path) -> Result<TaxTable, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadTaxTable {
        path: path.to_path_buf(),
        source,
    })?;
    let file: TaxTableFile =
        serde_json::from_str(&text).map_err(|source| ConfigError::ParseTaxTable {
            path: path.to_path_buf(),
            source,
        })?;
    build_tax_table(file)
}

fn build_tax_table(file: TaxTableFile) -> Result<TaxTable, ConfigError> {
    let mut table = TaxTable::empty();
    for (jurisdiction, entry) in file.jurisdictions {
        let rate: TaxRate =
            entry
                .rate
                .parse()
                .map_err(|source| ConfigError::InvalidRate {
                    jurisdiction: jurisdiction.clone(),
                    source,
                })?;
        table = table
            .with_rate(&jurisdiction, rate)
            .with_exemptions(&jurisdiction, entry.exempt_categories);
    }
    Ok(table)
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown option '{flag}' (try --help)")]
    UnknownFlag { flag: String },

    #[error("unexpected argument '{arg}' (try --help)")]
    UnexpectedArgument { arg: String },

    #[error("cannot read tax table {path}: {source}")]
    ReadTaxTable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("tax table {path} is not valid JSON: {source}")]
    ParseTaxTable {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("tax table has an invalid rate for {jurisdiction}: {source}")]
    InvalidRate {
        jurisdiction: String,
        source: ParseTaxRateError,
    },
}
