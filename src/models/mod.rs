//! Core data models for CashIO
//!
//! The ledger has a single entity, the entry. Everything else here is a value
//! type that entries are built from.

pub mod category;
pub mod entry;
pub mod ids;
pub mod money;

pub use category::{BUILTIN_CATEGORIES, DEFAULT_CATEGORY, FALLBACK_CATEGORY};
pub use entry::{today, Entry, EntryDraft, EntryKind};
pub use ids::EntryId;
pub use money::Money;
