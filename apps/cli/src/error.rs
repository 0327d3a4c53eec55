//! CLI error type.
//!
//! Everything `run()` can fail with, flattened for the top-level report.
//! Validation problems during interactive entry never reach this type;
//! they are printed and re-prompted in place.

use thiserror::Error;

use crate::cart::CartError;
use crate::config::ConfigError;

/// Top-level CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration (tax-table file) problems.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Cart-file problems in batch mode.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Terminal I/O failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
