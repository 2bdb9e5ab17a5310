//! CLI command implementations.

pub mod curve;
pub mod template;
pub mod value;

pub use curve::CurveArgs;
pub use value::ValueArgs;

use std::path::PathBuf;

use clap::Args;

/// Location of the NSS term file, shared by commands that need a curve.
#[derive(Args, Debug, Clone)]
pub struct TermFileArg {
    /// JSON file with the NSS parameters beta0..beta3, tau1, tau2
    #[arg(short = 'f', long = "term-file", env = "TENOR_TERM_FILE", default_value = "term.json")]
    pub path: PathBuf,
}
