//! Audit logging for CashIO
//!
//! Records every ledger mutation (add, remove, clear, import) in an
//! append-only JSONL log next to the settings file.
//!
//! # Example
//!
//! ```rust,ignore
//! use cashio::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::add(&entry, ledger.len()))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
