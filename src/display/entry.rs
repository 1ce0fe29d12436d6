//! Entry display formatting
//!
//! Renders filtered entries as a table, followed by the count line and the
//! In/Out/Saldo badges.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Entry;
use crate::reports::Summary;

use super::format_money;

/// Shown when a listing has no entries
pub const EMPTY_STATE: &str =
    "Belum ada data. Tambahkan transaksi pertama kamu dengan 'cashio add'.";

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Note")]
    note: String,
}

impl EntryRow {
    fn new(entry: &Entry, settings: &Settings) -> Self {
        Self {
            id: entry.id.to_string(),
            date: entry.date.clone(),
            kind: entry.kind.to_string(),
            amount: format_money(entry.amount, settings),
            category: entry.category.clone(),
            note: if entry.note.is_empty() {
                "-".to_string()
            } else {
                entry.note.clone()
            },
        }
    }
}

/// Format entries as a table
pub fn format_entry_table(entries: &[&Entry], settings: &Settings) -> String {
    if entries.is_empty() {
        return format!("{}\n", EMPTY_STATE);
    }

    let rows: Vec<EntryRow> = entries.iter().map(|e| EntryRow::new(e, settings)).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format a listing: table, count and totals of the whole ledger
pub fn format_entry_listing(entries: &[&Entry], summary: &Summary, settings: &Settings) -> String {
    let mut output = format_entry_table(entries, settings);
    output.push_str(&format!("{} transaksi\n", entries.len()));
    output.push_str(&format!(
        "In: {}  Out: {}  Saldo: {}\n",
        format_money(summary.total_in, settings),
        format_money(summary.total_out, settings),
        format_money(summary.balance, settings),
    ));
    output
}

/// Format a single entry on one line
pub fn format_entry_line(entry: &Entry, settings: &Settings) -> String {
    let note = if entry.note.is_empty() { "-" } else { entry.note.as_str() };
    format!(
        "{} {:<3} {} {} • {} [{}]",
        entry.date,
        entry.kind,
        format_money(entry.amount, settings),
        entry.category,
        note,
        entry.id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, Money};

    fn sample() -> Entry {
        Entry::new(EntryKind::Outflow, Money::from_units(35000), "Makan", "2025-01-02")
            .with_id("b2")
    }

    #[test]
    fn test_empty_table() {
        let output = format_entry_table(&[], &Settings::default());
        assert!(output.contains("Belum ada data"));
    }

    #[test]
    fn test_table_contains_fields() {
        let entry = sample();
        let output = format_entry_table(&[&entry], &Settings::default());

        assert!(output.contains("b2"));
        assert!(output.contains("2025-01-02"));
        assert!(output.contains("OUT"));
        assert!(output.contains("Rp 35.000"));
        assert!(output.contains("Makan"));
    }

    #[test]
    fn test_listing_has_count_and_badges() {
        let entry = sample();
        let summary = Summary::from_entries(std::slice::from_ref(&entry));
        let output = format_entry_listing(&[&entry], &summary, &Settings::default());

        assert!(output.contains("1 transaksi"));
        assert!(output.contains("Out: Rp 35.000"));
        assert!(output.contains("Saldo: -Rp 35.000"));
    }

    #[test]
    fn test_entry_line() {
        let entry = sample().with_note("bakso");
        let line = format_entry_line(&entry, &Settings::default());
        assert!(line.contains("bakso"));
        assert!(line.contains("[b2]"));
    }
}
