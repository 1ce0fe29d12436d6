//! CLI commands for data export
//!
//! Writes the ledger as CSV or JSON to a file or to stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{CashioError, CashioResult};
use crate::export::{csv, json};
use crate::models::{today, Entry};
use crate::services::Ledger;
use crate::storage::PersistenceAdapter;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per entry
    Csv,
    /// JSON array, importable with `cashio import`
    Json,
}

/// Arguments of `cashio export`
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file path, or "-" for stdout (defaults to cashio-<today>.<ext>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle `cashio export`
pub fn handle_export<S: PersistenceAdapter>(ledger: &Ledger<S>, args: ExportArgs) -> CashioResult<()> {
    let entries = ledger.snapshot();

    let output = match args.output {
        Some(path) if path.as_os_str() == "-" => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_export(entries, &mut handle, args.format, args.pretty)?;
            return handle
                .flush()
                .map_err(|e| CashioError::Export(e.to_string()));
        }
        Some(path) => path,
        None => PathBuf::from(default_file_name(args.format, &today())),
    };

    let file = File::create(&output).map_err(|e| {
        CashioError::Export(format!("Failed to create {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    write_export(entries, &mut writer, args.format, args.pretty)?;
    writer
        .flush()
        .map_err(|e| CashioError::Export(e.to_string()))?;

    println!(
        "Exported {} entries to {}",
        entries.len(),
        output.display()
    );
    Ok(())
}

/// File name offered for an export in `format` made on `date`
pub fn default_file_name(format: ExportFormat, date: &str) -> String {
    match format {
        ExportFormat::Csv => csv::export_file_name(date),
        ExportFormat::Json => json::export_file_name(date),
    }
}

fn write_export<W: Write>(
    entries: &[Entry],
    writer: &mut W,
    format: ExportFormat,
    pretty: bool,
) -> CashioResult<()> {
    match format {
        ExportFormat::Csv => csv::export_entries_csv(entries, writer),
        ExportFormat::Json => json::export_entries_json(entries, writer, pretty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryDraft, EntryKind};
    use crate::storage::MemoryStore;
    use tempfile::TempDir;

    #[test]
    fn test_default_file_name() {
        assert_eq!(
            default_file_name(ExportFormat::Csv, "2025-10-03"),
            "cashio-2025-10-03.csv"
        );
        assert_eq!(
            default_file_name(ExportFormat::Json, "2025-10-03"),
            "cashio-2025-10-03.json"
        );
    }

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        let mut ledger = Ledger::open(MemoryStore::new());
        ledger
            .add(EntryDraft::new(EntryKind::Inflow, 1000.0, "2025-01-01").note("a, b"))
            .unwrap();

        handle_export(
            &ledger,
            ExportArgs {
                output: Some(path.clone()),
                format: ExportFormat::Csv,
                pretty: false,
            },
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.starts_with("id,type,amount,category,note,date\n"));
        assert!(content.contains("\"a, b\""));
    }
}
