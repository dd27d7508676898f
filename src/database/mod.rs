//! Persistence of vocabulary review state.
//!
//! The scheduler talks to storage only through [`ReviewStore`]. Three backends are provided:
//! an in-memory map, SQLite and a JSON file.

pub mod db;
pub mod json_store;

pub use db::SqliteStore;
pub use json_store::JsonFileStore;

use crate::error::{Error, Result};
use crate::models::VocabularyItem;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Store of vocabulary items keyed by item id.
pub trait ReviewStore {
    /// Fails with [`Error::ItemNotFound`] when the id is unknown.
    fn get(&self, id: &str) -> Result<VocabularyItem>;

    /// Inserts or replaces the item with the same id.
    fn put(&mut self, item: &VocabularyItem) -> Result<()>;

    fn remove(&mut self, id: &str) -> Result<()>;

    fn items(&self) -> Result<Vec<VocabularyItem>>;

    fn contains(&self, id: &str) -> Result<bool> {
        match self.get(id) {
            Ok(_) => Ok(true),
            Err(Error::ItemNotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Items due at `as_of`, oldest due date first.
    fn due(&self, as_of: DateTime<Utc>) -> Result<Vec<VocabularyItem>> {
        let mut due: Vec<_> = self
            .items()?
            .into_iter()
            .filter(|item| item.review.is_due(as_of))
            .collect();
        due.sort_by(|a, b| a.review.due_date.cmp(&b.review.due_date).then_with(|| a.id.cmp(&b.id)));
        Ok(due)
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: BTreeMap<String, VocabularyItem>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ReviewStore for MemoryStore {
    fn get(&self, id: &str) -> Result<VocabularyItem> {
        self.items
            .get(id)
            .cloned()
            .ok_or_else(|| Error::ItemNotFound(id.to_string()))
    }

    fn put(&mut self, item: &VocabularyItem) -> Result<()> {
        self.items.insert(item.id.clone(), item.clone());
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        self.items
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::ItemNotFound(id.to_string()))
    }

    fn items(&self) -> Result<Vec<VocabularyItem>> {
        Ok(self.items.values().cloned().collect())
    }
}
