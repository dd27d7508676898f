//! Store-backed SM-2 review engine.
//!
//! [`Scheduler`] owns a [`ReviewStore`] and a [`Clock`]. Every review reads one item,
//! runs the pure SM-2 transition from [`crate::models::sm2`] and writes the item back.
//! A rejected rating never touches the store.

use crate::clock::Clock;
use crate::database::ReviewStore;
use crate::error::{Error, Result};
use crate::models::sm2::calculate_next_review;
use crate::models::{ItemStatus, Quality, ReviewStats, VocabularyItem, WordEntry};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::slice;

pub struct Scheduler<S, C> {
    store: S,
    clock: C,
}

impl<S: ReviewStore, C: Clock> Scheduler<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Introduces a word, due immediately. A word that is already known is returned unchanged.
    pub fn add_word(&mut self, id: &str, bashkir: &str, english: &str) -> Result<VocabularyItem> {
        match self.store.get(id) {
            Ok(existing) => return Ok(existing),
            Err(Error::ItemNotFound(_)) => {}
            Err(e) => return Err(e),
        }

        let item = VocabularyItem::new(id, bashkir, english, self.clock.now());
        self.store.put(&item)?;
        log::info!("Added word '{}' ({} = {})", id, bashkir, english);
        Ok(item)
    }

    /// Removes a word from the curriculum together with its review history.
    pub fn remove_word(&mut self, id: &str) -> Result<()> {
        self.store.remove(id)?;
        log::info!("Removed word '{}'", id);
        Ok(())
    }

    /// Records a recall rating in `0..=5` for the item and returns its new due date
    /// as stored (SQLite keeps whole seconds).
    pub fn record_review(&mut self, item_id: &str, quality: i64) -> Result<DateTime<Utc>> {
        let quality = Quality::new(quality)?;
        Ok(self.review(item_id, quality)?.review.due_date)
    }

    /// Applies one SM-2 review and returns the updated item as the store persisted it.
    pub fn review(&mut self, item_id: &str, quality: Quality) -> Result<VocabularyItem> {
        let mut item = self.store.get(item_id)?;
        item.review = calculate_next_review(&item.review, quality, self.clock.now())?;
        self.store.put(&item)?;
        let item = self.store.get(item_id)?;

        if quality.is_pass() {
            log::debug!(
                "Reviewed '{}' with quality {}: next in {} days, ease {:.2}",
                item.id,
                quality,
                item.review.interval_days,
                item.review.ease_factor
            );
        } else {
            log::info!("Lapse on '{}' (quality {}), schedule restarted", item.id, quality);
        }
        Ok(item)
    }

    /// Items due at `as_of`, oldest due date first.
    pub fn due_items(&self, as_of: DateTime<Utc>) -> Result<Vec<VocabularyItem>> {
        self.store.due(as_of)
    }

    /// Items due right now according to the scheduler's clock.
    pub fn due_now(&self) -> Result<Vec<VocabularyItem>> {
        self.due_items(self.clock.now())
    }

    /// The first `limit` curriculum entries that have not been introduced yet, in curriculum order.
    /// Entries repeating an earlier word id are skipped.
    pub fn new_words<'a>(&self, entries: &'a [WordEntry], limit: usize) -> Result<Vec<&'a WordEntry>> {
        let mut picked: HashSet<&str> = HashSet::new();
        let mut new_words = Vec::new();
        for entry in entries {
            if new_words.len() >= limit {
                break;
            }
            let id = entry.word_id();
            if picked.contains(id) || self.store.contains(id)? {
                continue;
            }
            picked.insert(id);
            new_words.push(entry);
        }
        Ok(new_words)
    }

    pub fn item_status(&self, id: &str) -> Result<ItemStatus> {
        match self.store.get(id) {
            Ok(item) => Ok(ItemStatus::of(Some(&item))),
            Err(Error::ItemNotFound(_)) => Ok(ItemStatus::Unseen),
            Err(e) => Err(e),
        }
    }

    /// Learner-wide statistics, counting items due at `as_of`.
    pub fn statistics(&self, as_of: DateTime<Utc>) -> Result<ReviewStats> {
        Ok(ReviewStats::from_items(&self.store.items()?, as_of))
    }
}

/// Lazily yields the items whose due date is at or before `as_of`.
///
/// The iterator is `Clone`, so the same selection can be walked again.
pub fn due_items(items: &[VocabularyItem], as_of: DateTime<Utc>) -> DueItems<'_> {
    DueItems {
        items: items.iter(),
        as_of,
    }
}

#[derive(Clone, Debug)]
pub struct DueItems<'a> {
    items: slice::Iter<'a, VocabularyItem>,
    as_of: DateTime<Utc>,
}

impl<'a> Iterator for DueItems<'a> {
    type Item = &'a VocabularyItem;

    fn next(&mut self) -> Option<Self::Item> {
        let as_of = self.as_of;
        self.items.find(|item| item.review.is_due(as_of))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.items.size_hint().1)
    }
}
