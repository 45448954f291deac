//! Entry store for the performance journal.
//!
//! [`EntryStore`] owns the journal's single source of truth: the full entry
//! collection, serialized as one JSON array under [`STORAGE_KEY`] in a
//! [`KeyValueStore`]. Every operation is a synchronous read-modify-write of
//! that blob.
//!
//! # Failure Handling
//!
//! Persistence failures never reach the caller:
//! - A missing blob, a failed read, or a blob that is not a JSON array loads
//!   as an empty collection.
//! - A stored record that does not decode as an entry is logged and skipped;
//!   the remaining records still load. The next write drops the skipped record.
//! - A rejected write is logged and dropped; the in-memory result of the
//!   operation is still returned.
//!
//! Looking up an absent ID in `update` or `delete` is a silent no-op.
//!
//! # Numbering
//!
//! The `no` field of every stored entry is its 1-based position in storage
//! order. `add` appends with `no = len + 1`; `delete` renumbers everything
//! that remains before writing.

mod storage;

use chrono::{DateTime, SubsecRound, Utc};
use pj_core::{EntryId, EntryUpdate, JournalEntry, NewEntry};

pub use storage::{KeyValueStore, MemoryStore, SqliteStore, StorageError};

/// Key under which the entry collection is stored.
pub const STORAGE_KEY: &str = "performance-journal-entries";

/// Result of writing the collection back to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Dropped,
}

/// CRUD over the persisted entry collection.
pub struct EntryStore<S> {
    storage: S,
}

impl<S: KeyValueStore> EntryStore<S> {
    /// Creates a store over the given storage backend.
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the storage backend.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the store, returning the storage backend.
    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Loads the full collection in storage order.
    pub fn load(&self) -> Vec<JournalEntry> {
        let blob = match self.storage.read(STORAGE_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read entries; treating as empty");
                return Vec::new();
            }
        };

        let records: Vec<serde_json::Value> = match serde_json::from_str(&blob) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse stored entries; treating as empty");
                return Vec::new();
            }
        };

        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping unreadable stored entry");
                    None
                }
            })
            .collect()
    }

    /// Finds an entry by ID.
    pub fn get(&self, id: &EntryId) -> Option<JournalEntry> {
        self.load().into_iter().find(|entry| &entry.id == id)
    }

    /// Appends a new entry, assigning its ID, number and creation time.
    pub fn add(&mut self, fields: NewEntry) -> JournalEntry {
        self.add_at(fields, Utc::now())
    }

    /// Appends a new entry created at `now`.
    ///
    /// The timestamp is truncated to milliseconds, the precision it is stored at.
    pub fn add_at(&mut self, fields: NewEntry, now: DateTime<Utc>) -> JournalEntry {
        let now = now.trunc_subsecs(3);
        let mut entries = self.load();

        let mut id = EntryId::generate();
        while entries.iter().any(|entry| entry.id == id) {
            id = EntryId::generate();
        }

        let entry = JournalEntry::from_new(id, entries.len() + 1, fields, now);
        entries.push(entry.clone());
        self.save(&entries);

        tracing::debug!(id = %entry.id, no = entry.no, "added entry");
        entry
    }

    /// Merges `changes` into the entry with `id`. Does nothing if it is absent.
    pub fn update(&mut self, id: &EntryId, changes: &EntryUpdate) {
        let mut entries = self.load();
        let Some(entry) = entries.iter_mut().find(|entry| &entry.id == id) else {
            tracing::debug!(%id, "update skipped; entry not found");
            return;
        };

        changes.apply_to(entry);
        self.save(&entries);
        tracing::debug!(%id, "updated entry");
    }

    /// Removes the entry with `id` and renumbers the remaining entries.
    pub fn delete(&mut self, id: &EntryId) {
        let mut entries = self.load();
        let before = entries.len();
        entries.retain(|entry| &entry.id != id);
        if entries.len() == before {
            tracing::debug!(%id, "delete found no matching entry");
        }

        renumber(&mut entries);
        self.save(&entries);
        tracing::debug!(%id, remaining = entries.len(), "deleted entry");
    }

    /// Writes the full collection, replacing the previous blob.
    fn save(&mut self, entries: &[JournalEntry]) -> SaveOutcome {
        let blob = match serde_json::to_string(entries) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize entries; write dropped");
                return SaveOutcome::Dropped;
            }
        };

        match self.storage.write(STORAGE_KEY, &blob) {
            Ok(()) => SaveOutcome::Saved,
            Err(e) => {
                tracing::warn!(error = %e, "failed to save entries; write dropped");
                SaveOutcome::Dropped
            }
        }
    }
}

/// Sets each entry's `no` to its 1-based position.
fn renumber(entries: &mut [JournalEntry]) {
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.no = index + 1;
    }
}
