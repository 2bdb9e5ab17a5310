//! Template command implementation.

use anyhow::Result;

use crate::term_file;

/// Prints the term file template.
///
/// Always JSON, whatever `--format` says, since the output is meant to be
/// saved as a term file.
pub fn execute() -> Result<()> {
    println!("{}", term_file::template()?);
    Ok(())
}
