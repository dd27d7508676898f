//! JSON import/export of vocabulary items and curriculum word lists.

use crate::error::Result;
use crate::models::{VocabularyItem, WordEntry};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// Exports items with their review state to a JSON array at the specified path.
pub fn export_json_to_path(items: &[VocabularyItem], path: impl AsRef<Path>) -> Result<()> {
    let json_string = serde_json::to_string_pretty(items)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    Ok(())
}

/// Imports items previously written by [`export_json_to_path`].
pub fn import_json(path: impl AsRef<Path>) -> Result<Vec<VocabularyItem>> {
    let items: Vec<VocabularyItem> = read_json(path.as_ref())?;
    log::info!("Imported {} items from '{}'", items.len(), path.as_ref().display());
    Ok(items)
}

/// Reads a curriculum: a JSON array of `{ "id"?, "bashkir", "english" }` entries.
pub fn import_words(path: impl AsRef<Path>) -> Result<Vec<WordEntry>> {
    read_json(path.as_ref())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
