//! Reports module for CashIO
//!
//! Derived views over the ledger. Reports never mutate entries.

pub mod summary;

pub use summary::{categories, total_of, Summary};
