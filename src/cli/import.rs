//! CLI command handler for JSON import
//!
//! Replaces the whole ledger with the entries in a JSON array read from a
//! file or from stdin.

use std::io::{self, Read};
use std::path::Path;

use crate::error::{CashioError, CashioResult};
use crate::services::Ledger;
use crate::storage::PersistenceAdapter;

/// Handle `cashio import`
///
/// `file` of `None` or `"-"` reads from stdin.
pub fn handle_import<S: PersistenceAdapter>(
    ledger: &mut Ledger<S>,
    file: Option<&str>,
) -> CashioResult<()> {
    let text = match file {
        None | Some("-") => read_stdin()?,
        Some(file) => read_file(file)?,
    };

    let previous = ledger.len();
    let count = ledger.import_json(&text)?;

    println!(
        "Imported {} entries (replaced {} existing).",
        count, previous
    );
    Ok(())
}

fn read_file(file: &str) -> CashioResult<String> {
    let path = Path::new(file);
    if !path.exists() {
        return Err(CashioError::Import(format!("File not found: {}", file)));
    }
    std::fs::read_to_string(path)
        .map_err(|e| CashioError::Import(format!("Failed to read file: {}", e)))
}

fn read_stdin() -> CashioResult<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| CashioError::Import(format!("Failed to read stdin: {}", e)))?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryDraft, EntryKind};
    use crate::storage::MemoryStore;
    use tempfile::TempDir;

    #[test]
    fn test_import_from_file_replaces_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("in.json");
        std::fs::write(
            &path,
            r#"[{"id":"a1","type":"in","amount":100,"category":"Gaji","date":"2025-01-01"}]"#,
        )
        .unwrap();

        let mut ledger = Ledger::open(MemoryStore::new());
        ledger
            .add(EntryDraft::new(EntryKind::Outflow, 5.0, "2024-12-31"))
            .unwrap();

        handle_import(&mut ledger, path.to_str()).unwrap();

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.snapshot()[0].id.as_str(), "a1");
    }

    #[test]
    fn test_missing_file_is_import_error() {
        let mut ledger = Ledger::open(MemoryStore::new());
        let err = handle_import(&mut ledger, Some("/nonexistent/cashio.json")).unwrap_err();
        assert!(err.is_import());
    }

    #[test]
    fn test_rejected_import_keeps_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("in.json");
        std::fs::write(&path, r#"{"id":"a1"}"#).unwrap();

        let mut ledger = Ledger::open(MemoryStore::new());
        ledger
            .add(EntryDraft::new(EntryKind::Inflow, 5.0, "2025-01-01"))
            .unwrap();

        assert!(handle_import(&mut ledger, path.to_str()).is_err());
        assert_eq!(ledger.len(), 1);
    }
}
