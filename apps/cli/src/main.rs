//! # Tally CLI
//!
//! Terminal shell for the receipt calculator.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          tally (binary)                                 │
//! │                                                                         │
//! │  config (env) ──► tax table ──► ReceiptCalculator                       │
//! │                                      │                                  │
//! │  stdin prompts ──or── cart file ──► calculate ──► rendered receipt     │
//! │                                                       (stdout)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```text
//! tally                       # interactive item entry
//! tally cart.json             # batch mode from a cart file
//! tally --help                # usage
//! TALLY_TAX_TABLE=rates.json tally   # replace the built-in tax table
//! ```
//!
//! Logs go to stderr (filtered by `RUST_LOG`, default "warn") so the
//! receipt on stdout stays clean.

mod cart;
mod config;
mod error;
mod input;
mod render;

use std::io;
use std::process::ExitCode;

use tally_core::ReceiptCalculator;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::error::CliError;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let config = CliConfig::load()?;
    if config.show_help {
        print!("{}", config::USAGE);
        return Ok(());
    }

    let calculator = ReceiptCalculator::new(config.tax_table()?);

    let (jurisdiction, items) = match &config.cart_path {
        Some(path) => cart::load_cart(path)?,
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            input::read_cart(&mut stdin.lock(), &mut stdout)?
        }
    };

    info!(
        jurisdiction = %jurisdiction,
        items = items.len(),
        "computing receipt"
    );
    let receipt = calculator.calculate(&jurisdiction, &items);
    print!("{}", render::render_receipt(&receipt));

    Ok(())
}
