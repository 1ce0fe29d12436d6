//! Summary display formatting

use crate::config::Settings;
use crate::reports::Summary;

use super::format_money;

/// Format the balance cards
pub fn format_summary(summary: &Summary, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("Saldo:       {}\n", format_money(summary.balance, settings)));
    output.push_str(&format!("Pemasukan:   {}\n", format_money(summary.total_in, settings)));
    output.push_str(&format!("Pengeluaran: {}\n", format_money(summary.total_out, settings)));
    output
}

/// Format the category set, one per line
pub fn format_categories(summary: &Summary) -> String {
    summary
        .categories
        .iter()
        .map(|c| format!("  {}\n", c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entry, EntryKind, Money};

    #[test]
    fn test_format_summary() {
        let entries = vec![
            Entry::new(EntryKind::Inflow, Money::from_units(150000), "Gaji", "2025-10-03"),
            Entry::new(EntryKind::Outflow, Money::from_units(20000), "Makan", "2025-10-04"),
        ];
        let output = format_summary(&Summary::from_entries(&entries), &Settings::default());

        assert!(output.contains("Saldo:       Rp 130.000"));
        assert!(output.contains("Pemasukan:   Rp 150.000"));
        assert!(output.contains("Pengeluaran: Rp 20.000"));
    }

    #[test]
    fn test_format_categories() {
        let output = format_categories(&Summary::from_entries(&[]));
        assert_eq!(output.lines().count(), 8);
        assert!(output.starts_with("  Umum\n"));
    }
}
