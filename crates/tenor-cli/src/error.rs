//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The term file could not be read.
    #[error("Cannot read term file {}: {source}", path.display())]
    TermFileRead {
        /// Path that was tried.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The term file is not a valid set of NSS parameters.
    #[error("Invalid term file {}: {source}", path.display())]
    TermFileParse {
        /// Path that was read.
        path: PathBuf,
        /// Parse or validation error.
        source: serde_json::Error,
    },
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
