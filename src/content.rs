//! Content store: CRUD over the single collection of entries kept under one key.
//!
//! Every mutation reads the whole collection, changes it and writes it back.
//! Concurrent writers race and the last write wins. Lookups are linear scans
//! returning the first match in stored order.

use std::sync::Arc;

use chrono::Utc;

use crate::error::StorageError;
use crate::models::Entry;
use crate::seed::bootstrap_entries;
use crate::storage::KeyValueStore;

pub const CONTENT_KEY: &str = "folio.entries";

pub struct ContentStore<S> {
    store: Arc<S>,
}

impl<S> Clone for ContentStore<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore> ContentStore<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// All entries in stored order, newest insert first.
    ///
    /// Seeds the bootstrap collection when the key is absent. An unreadable or
    /// malformed value is logged and reported as an empty collection.
    pub async fn list(&self) -> Vec<Entry> {
        match self.load().await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::error!(error = %err, "failed to load entries, serving none");
                Vec::new()
            }
        }
    }

    pub async fn get_by_slug(&self, slug: &str) -> Option<Entry> {
        self.list().await.into_iter().find(|e| e.slug == slug)
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Entry> {
        self.list().await.into_iter().find(|e| e.id == id)
    }

    /// Replaces the entry with the same id in place, or prepends it if the id is new.
    ///
    /// Returns the record as stored, with its timestamps refreshed. A failed
    /// read aborts the save so the stored collection is never overwritten.
    pub async fn save(&self, mut entry: Entry) -> Result<Entry, StorageError> {
        let mut entries = self.load().await?;
        let now = Utc::now();

        match entries.iter().position(|e| e.id == entry.id) {
            Some(index) => {
                entry.updated_at = now;
                tracing::debug!(id = %entry.id, index, "updating entry");
                entries[index] = entry.clone();
            }
            None => {
                entry.created_at = now;
                entry.updated_at = now;
                tracing::debug!(id = %entry.id, "inserting entry");
                entries.insert(0, entry.clone());
            }
        }

        self.persist(&entries).await?;
        Ok(entry)
    }

    /// Removes the entry with `id`. Unknown ids leave the collection untouched.
    pub async fn delete(&self, id: &str) -> Result<(), StorageError> {
        let mut entries = self.load().await?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        tracing::debug!(%id, removed = before - entries.len(), "deleting entry");
        self.persist(&entries).await
    }

    async fn load(&self) -> Result<Vec<Entry>, StorageError> {
        match self.store.get(CONTENT_KEY).await? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => Ok(entries),
                Err(err) => {
                    tracing::warn!(error = %err, "stored entries are malformed");
                    Ok(Vec::new())
                }
            },
            None => {
                let seed = bootstrap_entries(Utc::now());
                tracing::info!(count = seed.len(), "seeding bootstrap content");
                self.persist(&seed).await?;
                Ok(seed)
            }
        }
    }

    async fn persist(&self, entries: &[Entry]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(entries)?;
        self.store.set(CONTENT_KEY, &raw).await
    }
}
