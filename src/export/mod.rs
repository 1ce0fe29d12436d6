//! Export module for CashIO
//!
//! - CSV: spreadsheet-friendly, one row per entry
//! - JSON: the importable array form of the ledger

pub mod csv;
pub mod json;

pub use csv::{entries_to_csv, export_entries_csv, CSV_HEADER};
pub use json::export_entries_json;
