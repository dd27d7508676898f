//! Review store kept in a single JSON file.
//!
//! The file holds an object keyed by item id and is rewritten after every mutation.
//! A change only reaches memory once the file write has succeeded.
//! ```json
//! { "word_001": { "id": "word_001", "bashkir": "бал", "english": "honey", "review": { ... } } }
//! ```

use super::{MemoryStore, ReviewStore};
use crate::error::Result;
use crate::models::VocabularyItem;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub struct JsonFileStore {
    path: PathBuf,
    items: MemoryStore,
}

impl JsonFileStore {
    /// Loads the file if it exists, otherwise starts empty. Nothing is written until the first change.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut items = MemoryStore::new();

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let saved: BTreeMap<String, VocabularyItem> = serde_json::from_str(&contents)?;
            for item in saved.values() {
                items.put(item)?;
            }
            log::debug!("Loaded {} items from {}", items.len(), path.display());
        }

        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `items` to the file, then makes them the current state.
    fn commit(&mut self, items: MemoryStore) -> Result<()> {
        let saved: BTreeMap<String, VocabularyItem> = items
            .items()?
            .into_iter()
            .map(|item| (item.id.clone(), item))
            .collect();
        fs::write(&self.path, serde_json::to_string_pretty(&saved)?)?;
        self.items = items;
        Ok(())
    }
}

impl ReviewStore for JsonFileStore {
    fn get(&self, id: &str) -> Result<VocabularyItem> {
        self.items.get(id)
    }

    fn put(&mut self, item: &VocabularyItem) -> Result<()> {
        let mut next = self.items.clone();
        next.put(item)?;
        self.commit(next)
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        let mut next = self.items.clone();
        next.remove(id)?;
        self.commit(next)
    }

    fn items(&self) -> Result<Vec<VocabularyItem>> {
        self.items.items()
    }
}
