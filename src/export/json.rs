//! JSON Export functionality
//!
//! Writes the ledger as a plain JSON array in the same shape the importer
//! accepts, so an export can be restored with `cashio import`.

use std::io::Write;

use crate::error::{CashioError, CashioResult};
use crate::models::Entry;

/// File name offered for a JSON export made on `date`
pub fn export_file_name(date: &str) -> String {
    format!("cashio-{}.json", date)
}

/// Export entries as a JSON array in ledger order
pub fn export_entries_json<W: Write>(
    entries: &[Entry],
    writer: &mut W,
    pretty: bool,
) -> CashioResult<()> {
    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, entries)
    } else {
        serde_json::to_writer(&mut *writer, entries)
    };
    written.map_err(|e| CashioError::Export(format!("Failed to serialize JSON: {}", e)))?;

    writeln!(writer).map_err(|e| CashioError::Export(e.to_string()))?;
    Ok(())
}
