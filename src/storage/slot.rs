//! Ledger slots
//!
//! A slot holds the whole ledger as one JSON array. Reading a slot never
//! fails: a missing, unreadable or malformed slot is an empty ledger.

use std::path::PathBuf;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{CashioError, CashioResult};
use crate::import::normalize_persisted;
use crate::models::Entry;

use super::file_io::{read_text_if_exists, write_json_atomic};
use super::{LoadedSlot, PersistenceAdapter};

/// Decode a slot blob into entries, recovering silently from bad data
pub fn decode_blob(blob: &str) -> LoadedSlot {
    match serde_json::from_str::<Value>(blob) {
        Ok(Value::Array(items)) => LoadedSlot {
            entries: items.iter().map(normalize_persisted).collect(),
            minted_ids: items.iter().filter(|item| !has_usable_id(item)).count(),
        },
        Ok(_) => {
            warn!("ledger slot does not hold a JSON array, starting empty");
            LoadedSlot::default()
        }
        Err(e) => {
            warn!(error = %e, "ledger slot is not valid JSON, starting empty");
            LoadedSlot::default()
        }
    }
}

fn has_usable_id(item: &Value) -> bool {
    matches!(
        item.get("id"),
        Some(Value::String(_)) | Some(Value::Number(_))
    )
}

/// Slot backed by a JSON file on disk
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the given slot file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

}

impl PersistenceAdapter for JsonFileStore {
    fn load_slot(&self) -> LoadedSlot {
        match read_text_if_exists(&self.path) {
            Ok(Some(blob)) => {
                let slot = decode_blob(&blob);
                debug!(count = slot.entries.len(), path = %self.path.display(), "loaded ledger");
                slot
            }
            Ok(None) => LoadedSlot::default(),
            Err(e) => {
                warn!(error = %e, "could not read ledger slot, starting empty");
                LoadedSlot::default()
            }
        }
    }

    fn save(&mut self, entries: &[Entry]) -> CashioResult<()> {
        write_json_atomic(&self.path, entries)?;
        debug!(count = entries.len(), path = %self.path.display(), "saved ledger");
        Ok(())
    }
}

/// In-memory slot, for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Option<String>,
    fail_writes: bool,
}

impl MemoryStore {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot that already holds `blob`
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
            fail_writes: false,
        }
    }

    /// Create a slot whose writes always fail, as a full disk would
    pub fn failing() -> Self {
        Self {
            blob: None,
            fail_writes: true,
        }
    }

    /// Current raw content of the slot
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl PersistenceAdapter for MemoryStore {
    fn load_slot(&self) -> LoadedSlot {
        self.blob.as_deref().map(decode_blob).unwrap_or_default()
    }

    fn save(&mut self, entries: &[Entry]) -> CashioResult<()> {
        if self.fail_writes {
            return Err(CashioError::Storage("storage quota exceeded".into()));
        }
        self.blob = Some(serde_json::to_string(entries)?);
        Ok(())
    }
}
