//! Generic CRUD over named record collections.
//!
//! DESIGN
//! ======
//! A collection is one JSON array stored under its own name. Every mutation
//! loads the array, edits it in memory and writes the whole array back, so
//! cost is linear in collection size. Collections here are bounded demo
//! data, which keeps that acceptable.
//!
//! ERROR HANDLING
//! ==============
//! Lookups never fail: an absent collection is empty and a missing id is
//! `None`/`false`. Storage and serialization failures on writes propagate as
//! [`StorageError`]; this layer does not try to recover them.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::record::{Record, is_system_field, now_iso, now_millis};
use super::{KeyValueStore, StorageError, load_json, save_json};

/// CRUD facade over a shared key-value store.
#[derive(Clone)]
pub struct LocalCrudStore {
    storage: Arc<dyn KeyValueStore>,
}

impl LocalCrudStore {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Append a new record built from `data` and return it.
    ///
    /// The id is the current epoch milliseconds, bumped past any id already
    /// taken in the collection. `createdAt` and `updatedAt` are set to now.
    /// Keys in `data` that collide with system fields are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or written back.
    pub fn create(&self, collection: &str, data: Map<String, Value>) -> Result<Record, StorageError> {
        let mut items = self.load(collection)?;
        let id = next_id(&items, now_millis());
        let now = now_iso();
        let record = Record { id, fields: user_fields(data), created_at: now.clone(), updated_at: now };

        items.push(record.clone());
        save_json(self.storage.as_ref(), collection, &items)?;
        debug!(collection, id = %record.id, "record created");
        Ok(record)
    }

    /// All records in insertion order. Absent or unreadable collections are empty.
    #[must_use]
    pub fn get_all(&self, collection: &str) -> Vec<Record> {
        self.load(collection).unwrap_or_else(|e| {
            warn!(collection, error = %e, "collection unreadable, treating as empty");
            Vec::new()
        })
    }

    /// First record with a matching id.
    #[must_use]
    pub fn get_by_id(&self, collection: &str, id: &str) -> Option<Record> {
        self.get_all(collection).into_iter().find(|item| item.id == id)
    }

    /// Shallow-merge `data` over the record with `id` and refresh `updatedAt`.
    ///
    /// Returns `Ok(None)` without writing when no record matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or written back.
    pub fn update(&self, collection: &str, id: &str, data: Map<String, Value>) -> Result<Option<Record>, StorageError> {
        let mut items = self.load(collection)?;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            debug!(collection, id, "update skipped, record not found");
            return Ok(None);
        };

        item.fields.extend(user_fields(data));
        item.updated_at = now_iso();
        let updated = item.clone();

        save_json(self.storage.as_ref(), collection, &items)?;
        debug!(collection, id, "record updated");
        Ok(Some(updated))
    }

    /// Remove the record with `id`. Returns whether anything was removed.
    ///
    /// The filtered collection is written back even when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or written back.
    pub fn delete(&self, collection: &str, id: &str) -> Result<bool, StorageError> {
        let items = self.load(collection)?;
        let before = items.len();
        let remaining: Vec<Record> = items.into_iter().filter(|item| item.id != id).collect();
        save_json(self.storage.as_ref(), collection, &remaining)?;

        let removed = remaining.len() < before;
        debug!(collection, id, removed, "record delete");
        Ok(removed)
    }

    /// Records whose field values contain `term`, case-insensitively.
    #[must_use]
    pub fn search(&self, collection: &str, term: &str) -> Vec<Record> {
        self.get_all(collection).into_iter().filter(|item| item.matches(term)).collect()
    }

    fn load(&self, collection: &str) -> Result<Vec<Record>, StorageError> {
        Ok(load_json(self.storage.as_ref(), collection)?.unwrap_or_default())
    }
}

fn user_fields(data: Map<String, Value>) -> Map<String, Value> {
    data.into_iter().filter(|(key, _)| !is_system_field(key)).collect()
}

/// Smallest id `>= candidate` not already used in `items`.
fn next_id(items: &[Record], candidate: i64) -> String {
    let mut id = candidate;
    while items.iter().any(|item| item.id == id.to_string()) {
        id += 1;
    }
    id.to_string()
}

#[cfg(test)]
#[path = "crud_test.rs"]
mod tests;
