//! Ledger entry model
//!
//! An entry is a single cash movement. Entries are immutable once created:
//! the ledger supports adding and removing them, never editing.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::DEFAULT_CATEGORY;
use super::ids::EntryId;
use super::money::Money;

/// Direction of a cash movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    /// Cash in
    #[serde(rename = "in")]
    Inflow,
    /// Cash out
    #[serde(rename = "out")]
    Outflow,
}

impl EntryKind {
    /// Short wire code (`in` / `out`) used by CSV and JSON
    pub fn code(&self) -> &'static str {
        match self {
            Self::Inflow => "in",
            Self::Outflow => "out",
        }
    }

    /// Map a wire code to a kind; only `"out"` is an outflow
    pub fn from_code(code: &str) -> Self {
        if code == "out" {
            Self::Outflow
        } else {
            Self::Inflow
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Inflow => "IN",
            Self::Outflow => "OUT",
        })
    }
}

/// A recorded cash inflow or outflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier
    pub id: EntryId,

    /// Direction of the movement
    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// Amount, never negative
    pub amount: Money,

    /// Free-text category label
    pub category: String,

    /// Optional annotation
    #[serde(default)]
    pub note: String,

    /// Calendar date as `YYYY-MM-DD`, compared as a plain string
    pub date: String,
}

impl Entry {
    /// Create an entry with a fresh id and no note
    pub fn new(
        kind: EntryKind,
        amount: Money,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: EntryId::generate(),
            kind,
            amount,
            category: category.into(),
            note: String::new(),
            date: date.into(),
        }
    }

    /// Set the note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Replace the id
    pub fn with_id(mut self, id: impl Into<EntryId>) -> Self {
        self.id = id.into();
        self
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.date, self.kind, self.category, self.amount)
    }
}

/// Today's local date as `YYYY-MM-DD`
pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// User input for a new entry, before validation
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub kind: EntryKind,
    /// Raw amount as typed; validated and rounded by the ledger
    pub amount: f64,
    pub category: String,
    pub note: String,
    pub date: String,
}

impl EntryDraft {
    /// Create a draft in the default category with an empty note
    pub fn new(kind: EntryKind, amount: f64, date: impl Into<String>) -> Self {
        Self {
            kind,
            amount,
            category: DEFAULT_CATEGORY.to_string(),
            note: String::new(),
            date: date.into(),
        }
    }

    /// Set the category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}
