//! Reads the plays and invoices files and hands their contents to the
//! validating parsers in `marquee_core::validation`.

use std::fs;
use std::path::Path;
use tracing::info;

use marquee_core::validation::{parse_catalog_json, parse_invoices_json};
use marquee_core::{Catalog, Invoice};

use crate::error::{CliError, CliResult};

fn read(path: &Path) -> CliResult<String> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the play catalog.
pub fn load_catalog(path: &Path) -> CliResult<Catalog> {
    let catalog = parse_catalog_json(&read(path)?).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), plays = catalog.len(), "Loaded plays");
    Ok(catalog)
}

/// Loads every invoice in the invoices file, in file order.
pub fn load_invoices(path: &Path) -> CliResult<Vec<Invoice>> {
    let invoices = parse_invoices_json(&read(path)?).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), invoices = invoices.len(), "Loaded invoices");
    Ok(invoices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::ValidationError;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn scratch_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_catalog_and_invoices() {
        let dir = tempfile::tempdir().unwrap();
        let plays = scratch_file(
            &dir,
            "plays.json",
            r#"{"hamlet": {"name": "Hamlet", "type": "tragedy"}}"#,
        );
        let invoices = scratch_file(
            &dir,
            "invoices.json",
            r#"[{"customer": "BigCo", "performances": [{"playID": "hamlet", "audience": 55}]}]"#,
        );

        let catalog = load_catalog(&plays).unwrap();
        assert!(catalog.contains("hamlet"));

        let invoices = load_invoices(&invoices).unwrap();
        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].customer, "BigCo");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_catalog(Path::new("/nonexistent/plays.json")).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }

    #[test]
    fn test_invalid_contents_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = scratch_file(&dir, "bad-invoices.json", r#"[{"performances": []}]"#);
        let err = load_invoices(&path).unwrap_err();
        match err {
            CliError::Input { path: failed, source } => {
                assert_eq!(failed, path);
                assert_eq!(
                    source,
                    ValidationError::Required {
                        field: "invoices[0].customer".to_string()
                    }
                );
            }
            other => panic!("expected input error, got {other:?}"),
        }
    }

    #[test]
    fn test_scratch_files_are_removed_with_their_dir() {
        let dir = tempfile::tempdir().unwrap();
        let plays = scratch_file(&dir, "plays.json", "{}");
        assert!(load_catalog(&plays).unwrap().is_empty());

        dir.close().unwrap();
        assert!(!plays.exists());
    }
}
