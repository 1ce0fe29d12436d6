//! Service layer for CashIO
//!
//! The ledger service owns the entries and their persistence; the query
//! service filters and orders them for display.

pub mod ledger;
pub mod query;

pub use ledger::{Ledger, AMOUNT_NOT_POSITIVE};
pub use query::{query, EntryFilter};
