//! Curve command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tenor_curves::BPS_PER_UNIT;

use crate::cli::OutputFormat;
use crate::commands::TermFileArg;
use crate::output::{format_percent, format_price, print_header, print_output};
use crate::term_file;

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    #[command(flatten)]
    pub term_file: TermFileArg,

    /// Tenors in years, comma separated
    #[arg(long, value_delimiter = ',', default_value = "0.25,0.5,1,2,3,5,7,10,20,30")]
    pub tenors: Vec<f64>,

    /// Spread over the curve in basis points
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub spread: f64,
}

#[derive(Debug, Serialize, Tabled)]
struct CurvePoint {
    #[tabled(rename = "Tenor")]
    tenor: f64,
    #[tabled(rename = "Zero Rate", display_with = "format_percent")]
    zero_rate: f64,
    #[tabled(rename = "Forward", display_with = "format_percent")]
    forward_rate: f64,
    #[tabled(rename = "DF", display_with = "format_price")]
    discount_factor: f64,
}

/// Execute the curve command.
pub fn execute(args: CurveArgs, format: OutputFormat) -> Result<()> {
    let curve = term_file::load(&args.term_file.path)?;

    let points = args
        .tenors
        .iter()
        .map(|&t| -> Result<CurvePoint> {
            Ok(CurvePoint {
                tenor: t,
                zero_rate: curve.zero_rate(t, args.spread)?,
                forward_rate: curve.forward_rate(t)? + args.spread / BPS_PER_UNIT,
                discount_factor: curve.discount_factor(t, args.spread)?,
            })
        })
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("evaluating the curve at {:?}", args.tenors))?;

    if format == OutputFormat::Table {
        print_header("NSS Term Structure");
    }
    print_output(&points, format)
}
