//! Entry filtering
//!
//! A filter is a conjunction of optional predicates. Results come back newest
//! date first; entries sharing a date keep their ledger order.

use crate::models::{Entry, EntryKind};

/// Options for filtering entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Only entries of this kind
    pub kind: Option<EntryKind>,
    /// Only entries in exactly this category (case-sensitive)
    pub category: Option<String>,
    /// Only entries on or after this date
    pub date_from: Option<String>,
    /// Only entries on or before this date
    pub date_to: Option<String>,
    /// Case-insensitive substring of "category note"
    pub text: Option<String>,
}

impl EntryFilter {
    /// Create a new empty filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by kind
    pub fn kind(mut self, kind: EntryKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by earliest date
    pub fn from(mut self, date: impl Into<String>) -> Self {
        self.date_from = Some(date.into());
        self
    }

    /// Filter by latest date
    pub fn to(mut self, date: impl Into<String>) -> Self {
        self.date_to = Some(date.into());
        self
    }

    /// Filter by free text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Check whether a single entry passes every predicate
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(kind) = self.kind {
            if entry.kind != kind {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &entry.category != category {
                return false;
            }
        }
        // Dates are zero-padded ISO strings, so string order is date order
        if let Some(from) = &self.date_from {
            if entry.date.as_str() < from.as_str() {
                return false;
            }
        }
        if let Some(to) = &self.date_to {
            if entry.date.as_str() > to.as_str() {
                return false;
            }
        }
        if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
            let haystack = format!("{} {}", entry.category, entry.note).to_lowercase();
            if !haystack.contains(&text.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

/// Apply a filter and sort the survivors by date, newest first
pub fn query<'a>(entries: &'a [Entry], filter: &EntryFilter) -> Vec<&'a Entry> {
    let mut matched: Vec<&Entry> = entries.iter().filter(|e| filter.matches(e)).collect();
    // sort_by is stable: same-date entries keep ledger order
    matched.sort_by(|a, b| b.date.cmp(&a.date));
    matched
}
