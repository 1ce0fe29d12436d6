//! Ledger service
//!
//! The ledger owns the entry collection for the session. It is loaded once
//! from its persistence adapter, and every successful mutation writes the full
//! collection back and appends an audit record.
//!
//! A failed write is returned as an error *after* the in-memory change has
//! been applied: the in-memory ledger stays authoritative for the rest of the
//! session.

use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{CashioError, CashioResult};
use crate::import::parse_import;
use crate::models::{category, Entry, EntryDraft, EntryId, Money};
use crate::reports::Summary;
use crate::storage::PersistenceAdapter;

use super::query::{query, EntryFilter};

/// Message shown when an entry is added without a positive amount
pub const AMOUNT_NOT_POSITIVE: &str = "Nominal harus > 0";

/// In-memory ledger with write-through persistence
pub struct Ledger<S: PersistenceAdapter> {
    entries: Vec<Entry>,
    store: S,
    audit: Option<AuditLogger>,
}

impl<S: PersistenceAdapter> Ledger<S> {
    /// Load the ledger from its store
    ///
    /// Entries stored without an id get a fresh one; the slot is rewritten
    /// right away so those ids stay stable across sessions.
    pub fn open(store: S) -> Self {
        let slot = store.load_slot();
        debug!(count = slot.entries.len(), "opened ledger");
        let mut ledger = Self {
            entries: slot.entries,
            store,
            audit: None,
        };

        if slot.minted_ids > 0 {
            info!(minted = slot.minted_ids, "assigned ids to stored entries");
            if let Err(e) = ledger.store.save(&ledger.entries) {
                warn!(error = %e, "failed to save assigned ids");
            }
        }
        ledger
    }

    /// Record every mutation in an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Read-only view of the entries in ledger order (newest additions first)
    pub fn snapshot(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the ledger is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an entry by id
    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Get the persistence adapter
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Balance, totals and categories of the current ledger
    pub fn summary(&self) -> Summary {
        Summary::from_entries(&self.entries)
    }

    /// Filtered, date-sorted view of the ledger
    pub fn query(&self, filter: &EntryFilter) -> Vec<&Entry> {
        query(&self.entries, filter)
    }

    /// Add a new entry at the front of the ledger
    ///
    /// Rejects drafts whose amount is not a positive number. The amount is
    /// rounded to whole units and an empty category becomes "Umum".
    pub fn add(&mut self, draft: EntryDraft) -> CashioResult<Entry> {
        let amount = Money::positive_rounded(draft.amount)
            .ok_or_else(|| CashioError::Validation(AMOUNT_NOT_POSITIVE.into()))?;

        let entry = Entry {
            id: EntryId::generate(),
            kind: draft.kind,
            amount,
            category: category::or_default(&draft.category),
            note: draft.note,
            date: draft.date,
        };

        self.entries.insert(0, entry.clone());
        debug!(id = %entry.id, amount = entry.amount.units(), "added entry");
        self.commit(AuditEntry::add(&entry, self.entries.len()))?;

        Ok(entry)
    }

    /// Remove an entry by id
    ///
    /// Removing an unknown id is a no-op and returns `Ok(None)`.
    pub fn remove(&mut self, id: &EntryId) -> CashioResult<Option<Entry>> {
        let Some(pos) = self.entries.iter().position(|e| &e.id == id) else {
            debug!(%id, "remove of unknown entry ignored");
            return Ok(None);
        };

        let removed = self.entries.remove(pos);
        debug!(%id, "removed entry");
        self.commit(AuditEntry::remove(&removed, self.entries.len()))?;

        Ok(Some(removed))
    }

    /// Remove every entry, returning how many were removed
    ///
    /// Callers are expected to have asked the user for confirmation.
    pub fn clear(&mut self) -> CashioResult<usize> {
        let removed = self.entries.len();
        self.entries.clear();
        info!(removed, "cleared ledger");
        self.commit(AuditEntry::clear(removed))?;
        Ok(removed)
    }

    /// Replace the whole collection
    pub fn replace_all(&mut self, entries: Vec<Entry>) -> CashioResult<()> {
        let previous = self.entries.len();
        self.entries = entries;
        info!(previous, count = self.entries.len(), "replaced ledger");
        self.commit(AuditEntry::import(previous, self.entries.len()))
    }

    /// Parse import text and replace the ledger with it
    ///
    /// If the text is not a JSON array the ledger is left untouched.
    pub fn import_json(&mut self, text: &str) -> CashioResult<usize> {
        let entries = parse_import(text)?;
        let count = entries.len();
        self.replace_all(entries)?;
        Ok(count)
    }

    fn commit(&mut self, record: AuditEntry) -> CashioResult<()> {
        self.store.save(&self.entries)?;
        if let Some(audit) = &self.audit {
            if let Err(e) = audit.log(&record) {
                warn!(error = %e, "failed to write audit record");
            }
        }
        Ok(())
    }
}
