//! Storage layer for CashIO
//!
//! The ledger is persisted as a single JSON array in a namespaced slot.
//! Storage is reached only through [`PersistenceAdapter`], so the ledger does
//! not care whether the slot is a file or a buffer in memory.

pub mod file_io;
pub mod slot;

pub use file_io::{read_text_if_exists, write_json_atomic};
pub use slot::{decode_blob, JsonFileStore, MemoryStore};

use crate::error::CashioResult;
use crate::models::Entry;

/// Namespace key of the ledger slot
pub const STORAGE_KEY: &str = "cashio.transactions.v1";

/// Entries read from a slot
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadedSlot {
    pub entries: Vec<Entry>,
    /// Elements stored without an id, which got a fresh one on this load
    pub minted_ids: usize,
}

/// Load/save contract between the ledger and its durable slot
pub trait PersistenceAdapter {
    /// Read the slot
    ///
    /// Never fails: missing or corrupt data yields an empty slot.
    fn load_slot(&self) -> LoadedSlot;

    /// Read every entry from the slot
    fn load(&self) -> Vec<Entry> {
        self.load_slot().entries
    }

    /// Overwrite the slot with the full collection
    fn save(&mut self, entries: &[Entry]) -> CashioResult<()>;
}
