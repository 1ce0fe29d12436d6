//! Audit record data structures
//!
//! Defines the structure of audit log records: which ledger operation ran,
//! which entry it touched, and the entry state before/after.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Entry;

/// Ledger operations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// An entry was added
    Add,
    /// An entry was removed
    Remove,
    /// The whole ledger was emptied
    Clear,
    /// The whole ledger was replaced by an import
    Import,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "ADD"),
            Operation::Remove => write!(f, "REMOVE"),
            Operation::Clear => write!(f, "CLEAR"),
            Operation::Import => write!(f, "IMPORT"),
        }
    }
}

/// A single audit log record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Operation performed
    pub operation: Operation,

    /// Id of the affected entry, for single-entry operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<String>,

    /// Ledger size after the operation
    pub entry_count: usize,

    /// Entry state before the operation (removals)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Entry state after the operation (additions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    fn base(operation: Operation, entry_count: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entry_id: None,
            entry_count,
            before: None,
            after: None,
        }
    }

    /// Record for an added entry
    pub fn add(entry: &Entry, entry_count: usize) -> Self {
        Self {
            entry_id: Some(entry.id.to_string()),
            after: serde_json::to_value(entry).ok(),
            ..Self::base(Operation::Add, entry_count)
        }
    }

    /// Record for a removed entry
    pub fn remove(entry: &Entry, entry_count: usize) -> Self {
        Self {
            entry_id: Some(entry.id.to_string()),
            before: serde_json::to_value(entry).ok(),
            ..Self::base(Operation::Remove, entry_count)
        }
    }

    /// Record for clearing the ledger
    pub fn clear(removed: usize) -> Self {
        Self {
            before: Some(serde_json::json!({ "removed": removed })),
            ..Self::base(Operation::Clear, 0)
        }
    }

    /// Record for replacing the ledger with imported entries
    pub fn import(previous: usize, entry_count: usize) -> Self {
        Self {
            before: Some(serde_json::json!({ "replaced": previous })),
            ..Self::base(Operation::Import, entry_count)
        }
    }

    /// Format the record for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
        );

        if let Some(id) = &self.entry_id {
            output.push_str(&format!(" {}", id));
        }

        let summary = self
            .after
            .as_ref()
            .or(self.before.as_ref())
            .and_then(|v| serde_json::from_value::<Entry>(v.clone()).ok());
        if let Some(entry) = summary {
            output.push_str(&format!(" ({})", entry));
        }

        output.push_str(&format!(" -> {} entries", self.entry_count));
        output
    }
}
