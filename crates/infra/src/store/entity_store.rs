use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use stockbook_core::Entity;

use super::config::StoreConfig;
use super::error::{StoreError, StoreResult};
use super::persistence::{self, Document, LoadOutcome};
use super::stats::StoreStatistics;

/// In-memory entity set keyed by id, persisted to a single JSON file on demand.
///
/// At most one entity per id. Read operations return clones so callers can
/// never reach the stored values. The backing file may be stale or absent
/// until `save_to_file` runs.
///
/// Not synchronized: wrap it in a `Mutex` or keep a single owner if it must be
/// shared between threads.
#[derive(Debug, Clone)]
pub struct EntityStore<E: Entity> {
    entries: HashMap<E::Id, E>,
    config: StoreConfig,
}

impl<E: Entity> EntityStore<E> {
    /// Create an empty store backed by `path` (pretty JSON layout).
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self::with_config(StoreConfig::new(path))
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            entries: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn path(&self) -> &Path {
        self.config.path()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: E::Id) -> bool {
        self.entries.contains_key(&id)
    }

    /// Insert `entity`; fails with `DuplicateKey` if its id is already present.
    pub fn add(&mut self, entity: E) -> StoreResult<()> {
        let id = entity.id();
        match self.entries.entry(id) {
            Entry::Occupied(_) => Err(StoreError::duplicate_key(id)),
            Entry::Vacant(slot) => {
                slot.insert(entity);
                tracing::debug!(%id, count = self.entries.len(), "entity added");
                Ok(())
            }
        }
    }

    /// Remove the entity with `id`. Returns whether one was present.
    pub fn remove_by_id(&mut self, id: E::Id) -> bool {
        let removed = self.entries.remove(&id).is_some();
        if removed {
            tracing::debug!(%id, count = self.entries.len(), "entity removed");
        }
        removed
    }

    /// Discard every entry. The backing file is left alone.
    pub fn clear(&mut self) {
        let cleared = self.entries.len();
        self.entries.clear();
        tracing::debug!(cleared, "store cleared");
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &E> {
        self.entries.values()
    }

    pub fn statistics(&self) -> StoreStatistics<E::Id> {
        StoreStatistics::from_ids(self.entries.keys().copied())
    }

    /// First match in ascending id order.
    fn first_matching_ref(&self, predicate: impl Fn(&E) -> bool) -> Option<&E> {
        self.entries
            .values()
            .filter(|e| predicate(*e))
            .min_by_key(|e| e.id())
    }
}

impl<E: Entity + Clone> EntityStore<E> {
    /// Snapshot of every entry, sorted by id.
    pub fn get_all(&self) -> Vec<E> {
        let mut all: Vec<E> = self.entries.values().cloned().collect();
        all.sort_by_key(|e| e.id());
        all
    }

    pub fn find_by_id(&self, id: E::Id) -> Option<E> {
        self.entries.get(&id).cloned()
    }

    /// Linear scan; returns the lowest-id entity satisfying `predicate`.
    pub fn find_first_matching(&self, predicate: impl Fn(&E) -> bool) -> Option<E> {
        self.first_matching_ref(predicate).cloned()
    }

    /// Remove and return the lowest-id entity satisfying `predicate`.
    pub fn remove_first_matching(&mut self, predicate: impl Fn(&E) -> bool) -> Option<E> {
        let id = self.first_matching_ref(predicate)?.id();
        let removed = self.entries.remove(&id);
        tracing::debug!(%id, count = self.entries.len(), "entity removed");
        removed
    }

    /// Swap in a new value for an already stored id and return the old one.
    ///
    /// This is how a copy-with-change reaches the store: build the new value
    /// with the entity's `with_*` method, then `replace` it.
    pub fn replace(&mut self, entity: E) -> StoreResult<E> {
        let id = entity.id();
        match self.entries.get_mut(&id) {
            Some(slot) => {
                let previous = std::mem::replace(slot, entity);
                tracing::debug!(%id, "entity replaced");
                Ok(previous)
            }
            None => Err(StoreError::not_found(id)),
        }
    }
}

impl<E: Entity + Serialize> EntityStore<E> {
    /// Write every entry to the backing path, creating parent directories.
    ///
    /// Entries are written as a JSON array in ascending id order. On failure
    /// the in-memory entries are unchanged and the error is returned as is.
    pub fn save_to_file(&self) -> StoreResult<()> {
        let mut records: Vec<&E> = self.entries.values().collect();
        records.sort_by_key(|e| e.id());

        persistence::write_document(self.path(), &records, self.config.layout())?;
        tracing::info!(
            count = records.len(),
            path = %self.path().display(),
            "store saved"
        );
        Ok(())
    }
}

impl<E: Entity + DeserializeOwned> EntityStore<E> {
    /// Replace the entries wholesale with the backing file's content.
    ///
    /// A missing or blank file is not an error and leaves the entries as they
    /// are. Unparseable content, invalid records and repeated ids fail with
    /// `Malformed`; nothing is replaced unless the whole document is valid.
    pub fn load_from_file(&mut self) -> StoreResult<LoadOutcome> {
        let path = self.path();
        let records = match persistence::read_document::<E>(path)? {
            Document::Missing => {
                tracing::debug!(path = %path.display(), "no backing file; entries untouched");
                return Ok(LoadOutcome::Missing);
            }
            Document::Empty => {
                tracing::debug!(path = %path.display(), "backing file empty; entries untouched");
                return Ok(LoadOutcome::Empty);
            }
            Document::Records(records) => records,
        };

        let mut loaded = HashMap::with_capacity(records.len());
        for record in records {
            let id = record.id();
            if loaded.insert(id, record).is_some() {
                return Err(StoreError::malformed(
                    path,
                    format!("duplicate id {id} in persisted data"),
                ));
            }
        }

        let count = loaded.len();
        tracing::info!(count, path = %path.display(), "store loaded");
        self.entries = loaded;
        Ok(LoadOutcome::Loaded(count))
    }
}
