//! Ledger summary
//!
//! Balance, totals and the category set, recomputed from scratch on every
//! call.

use std::collections::HashSet;

use crate::models::{Entry, EntryKind, Money, BUILTIN_CATEGORIES, FALLBACK_CATEGORY};

/// Aggregate view of a ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Total in minus total out
    pub balance: Money,
    /// Sum of all inflows
    pub total_in: Money,
    /// Sum of all outflows
    pub total_out: Money,
    /// Built-in categories followed by any others seen in the ledger
    pub categories: Vec<String>,
}

impl Summary {
    /// Compute the summary of a collection
    pub fn from_entries(entries: &[Entry]) -> Self {
        let total_in = total_of(entries, EntryKind::Inflow);
        let total_out = total_of(entries, EntryKind::Outflow);

        Self {
            balance: total_in - total_out,
            total_in,
            total_out,
            categories: categories(entries),
        }
    }
}

/// Sum the amounts of every entry of one kind
pub fn total_of(entries: &[Entry], kind: EntryKind) -> Money {
    entries
        .iter()
        .filter(|e| e.kind == kind)
        .map(|e| e.amount)
        .sum()
}

/// Built-in categories plus every distinct category in the ledger
///
/// Built-ins come first in their fixed order, then new labels in the order
/// they first appear. A blank category counts as "Lainnya" here, even though
/// new entries default to "Umum".
pub fn categories(entries: &[Entry]) -> Vec<String> {
    let mut seen: HashSet<&str> = BUILTIN_CATEGORIES.iter().copied().collect();
    let mut result: Vec<String> = BUILTIN_CATEGORIES.iter().map(|c| c.to_string()).collect();

    for entry in entries {
        let label = if entry.category.is_empty() {
            FALLBACK_CATEGORY
        } else {
            entry.category.as_str()
        };
        if seen.insert(label) {
            result.push(label.to_string());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: EntryKind, amount: i64, category: &str) -> Entry {
        Entry::new(kind, Money::from_units(amount), category, "2025-01-01")
    }

    #[test]
    fn test_empty_ledger() {
        let summary = Summary::from_entries(&[]);
        assert_eq!(summary.balance, Money::zero());
        assert_eq!(summary.total_in, Money::zero());
        assert_eq!(summary.total_out, Money::zero());
        assert_eq!(summary.categories.len(), BUILTIN_CATEGORIES.len());
    }

    #[test]
    fn test_balance_identity() {
        let entries = vec![
            entry(EntryKind::Inflow, 1000, "Gaji"),
            entry(EntryKind::Outflow, 50, "Makan"),
            entry(EntryKind::Outflow, 1200, "Tagihan"),
            entry(EntryKind::Inflow, 300, "Penjualan"),
        ];
        let summary = Summary::from_entries(&entries);

        assert_eq!(summary.total_in, Money::from_units(1300));
        assert_eq!(summary.total_out, Money::from_units(1250));
        assert_eq!(summary.balance, summary.total_in - summary.total_out);
        assert_eq!(summary.balance, Money::from_units(50));
    }

    #[test]
    fn test_negative_balance() {
        let entries = vec![entry(EntryKind::Outflow, 500, "Makan")];
        let summary = Summary::from_entries(&entries);

        assert_eq!(summary.balance, Money::from_units(-500));
        assert!(!summary.total_out.is_negative());
    }

    #[test]
    fn test_categories_builtins_first_then_new() {
        let entries = vec![
            entry(EntryKind::Outflow, 1, "Kopi"),
            entry(EntryKind::Outflow, 1, "Makan"),
            entry(EntryKind::Outflow, 1, "Buku"),
            entry(EntryKind::Outflow, 1, "Kopi"),
        ];
        let cats = categories(&entries);

        assert_eq!(&cats[..8], &BUILTIN_CATEGORIES.map(String::from)[..]);
        assert_eq!(&cats[8..], &["Kopi".to_string(), "Buku".to_string()]);
    }

    #[test]
    fn test_blank_category_falls_back_to_lainnya() {
        let entries = vec![entry(EntryKind::Inflow, 1, "")];
        let cats = categories(&entries);

        assert!(!cats.contains(&String::new()));
        assert_eq!(cats.iter().filter(|c| *c == "Lainnya").count(), 1);
    }
}
