//! Loading curve parameters from a JSON term file.

use std::fs;
use std::path::Path;

use tenor_curves::TermStructure;

use crate::error::{CliError, CliResult};

/// Reads and validates NSS parameters.
///
/// Parameter validation runs during deserialization, so a file with a
/// non-positive tau or an unknown field fails here.
pub fn load(path: &Path) -> CliResult<TermStructure> {
    let text = fs::read_to_string(path).map_err(|source| CliError::TermFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let curve = serde_json::from_str(&text).map_err(|source| CliError::TermFileParse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("loaded term structure from {}", path.display());
    Ok(curve)
}

/// JSON template for a term file.
pub fn template() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&TermStructure::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_template_loads_back() {
        let file = write_temp(&template().unwrap());
        let curve = load(file.path()).unwrap();
        assert_eq!(curve, TermStructure::default());
    }

    #[test]
    fn test_missing_file() {
        let err = load(Path::new("/definitely/not/here/term.json")).unwrap_err();
        assert!(matches!(err, CliError::TermFileRead { .. }));
    }

    #[test]
    fn test_invalid_parameters() {
        let file = write_temp(
            r#"{"beta0":0.03,"beta1":0,"beta2":0,"beta3":0,"tau1":0,"tau2":1}"#,
        );
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, CliError::TermFileParse { .. }));
    }
}
