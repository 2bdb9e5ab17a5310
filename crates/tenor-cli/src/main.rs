//! Tenor CLI - bond valuation on Nelson-Siegel-Svensson curves.
//!
//! # Usage
//!
//! ```bash
//! # Value a 5% annual bond off the curve in term.json
//! tenor value --settlement 2024-01-01 --maturity 2025-01-01 --coupon 5
//!
//! # Yield and implied spread for a quoted clean price
//! tenor value --maturity 2030-06-15 --coupon 4.25 -n 2 --quote 98.75
//!
//! # Print a term file to start from
//! tenor template > term.json
//!
//! # Inspect the curve
//! tenor curve --tenors 1,2,5,10,30
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;
mod term_file;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable.
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let format = cli.format;

    match cli.command {
        Commands::Value(args) => commands::value::execute(args, format)?,
        Commands::Template => commands::template::execute()?,
        Commands::Curve(args) => commands::curve::execute(args, format)?,
    }

    Ok(())
}
