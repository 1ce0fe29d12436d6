//! CashIO - personal cash-flow ledger
//!
//! This library provides the core functionality for the CashIO ledger: a
//! single collection of cash-in/cash-out entries, derived totals, filtered
//! views and JSON/CSV import/export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries, amounts, categories)
//! - `storage`: Persistence adapters for the ledger slot
//! - `import`: Normalization of imported and persisted JSON
//! - `export`: CSV and JSON export
//! - `audit`: Audit logging system
//! - `services`: Ledger and query logic
//! - `reports`: Totals and category aggregation
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use cashio::models::{EntryDraft, EntryKind};
//! use cashio::services::Ledger;
//! use cashio::storage::MemoryStore;
//!
//! let mut ledger = Ledger::open(MemoryStore::new());
//! ledger.add(EntryDraft::new(EntryKind::Inflow, 150000.0, "2025-10-03").category("Gaji"))?;
//! assert_eq!(ledger.summary().balance.units(), 150000);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{CashioError, CashioResult};
