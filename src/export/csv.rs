//! CSV Export functionality
//!
//! Columns are fixed: `id,type,amount,category,note,date`. The header is
//! written even for an empty ledger.

use std::io::Write;

use crate::error::{CashioError, CashioResult};
use crate::models::Entry;

/// Column header of the CSV export
pub const CSV_HEADER: [&str; 6] = ["id", "type", "amount", "category", "note", "date"];

/// File name offered for a CSV export made on `date`
pub fn export_file_name(date: &str) -> String {
    format!("cashio-{}.csv", date)
}

/// Export entries to CSV in ledger order
pub fn export_entries_csv<W: Write>(entries: &[Entry], writer: &mut W) -> CashioResult<()> {
    writeln!(writer, "{}", CSV_HEADER.join(","))
        .map_err(|e| CashioError::Export(e.to_string()))?;

    for entry in entries {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            escape_csv(entry.id.as_str()),
            entry.kind.code(),
            entry.amount.units(),
            escape_csv(&entry.category),
            escape_csv(&entry.note),
            escape_csv(&entry.date),
        )
        .map_err(|e| CashioError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export entries to a CSV string
pub fn entries_to_csv(entries: &[Entry]) -> CashioResult<String> {
    let mut buf = Vec::new();
    export_entries_csv(entries, &mut buf)?;
    String::from_utf8(buf).map_err(|e| CashioError::Export(e.to_string()))
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, Money};

    fn sample() -> Vec<Entry> {
        vec![
            Entry::new(EntryKind::Outflow, Money::from_units(35000), "Makan", "2025-01-02")
                .with_note("nasi, teh")
                .with_id("b2"),
            Entry::new(EntryKind::Inflow, Money::from_units(150000), "Gaji", "2025-01-01")
                .with_id("a1"),
        ]
    }

    #[test]
    fn test_header_only_for_empty_ledger() {
        let csv = entries_to_csv(&[]).unwrap();
        assert_eq!(csv.lines().collect::<Vec<_>>(), vec!["id,type,amount,category,note,date"]);
    }

    #[test]
    fn test_one_line_per_entry() {
        let csv = entries_to_csv(&sample()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "b2,out,35000,Makan,\"nasi, teh\",2025-01-02");
        assert_eq!(lines[2], "a1,in,150000,Gaji,,2025-01-01");
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn test_output_parses_back_with_csv_reader() {
        let entries = vec![Entry::new(
            EntryKind::Outflow,
            Money::from_units(5),
            "Hiburan, \"bioskop\"",
            "2025-02-14",
        )
        .with_note("tiket\n2 orang")
        .with_id("x")];
        let csv_text = entries_to_csv(&entries).unwrap();

        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][3], "Hiburan, \"bioskop\"");
        assert_eq!(&records[0][4], "tiket\n2 orang");
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("2025-10-15"), "cashio-2025-10-15.csv");
    }
}
