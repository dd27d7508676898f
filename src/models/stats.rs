//! Learning progress summaries: per-word status and learner-wide statistics.
use super::VocabularyItem;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Interval at which a word counts as mastered.
pub const MASTERED_INTERVAL_DAYS: u32 = 21;
/// Interval at which a word has left the short learning steps.
pub const REVIEWING_INTERVAL_DAYS: u32 = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Not in the review store yet
    Unseen,
    /// Introduced but never reviewed
    New,
    Learning,
    Reviewing,
    Mastered,
}

impl ItemStatus {
    pub fn of(item: Option<&VocabularyItem>) -> Self {
        let Some(item) = item else {
            return ItemStatus::Unseen;
        };
        let review = &item.review;
        if !review.has_been_reviewed() {
            ItemStatus::New
        } else if review.interval_days >= MASTERED_INTERVAL_DAYS {
            ItemStatus::Mastered
        } else if review.interval_days >= REVIEWING_INTERVAL_DAYS {
            ItemStatus::Reviewing
        } else {
            ItemStatus::Learning
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemStatus::Unseen => "unseen",
            ItemStatus::New => "new",
            ItemStatus::Learning => "learning",
            ItemStatus::Reviewing => "reviewing",
            ItemStatus::Mastered => "mastered",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ReviewStats {
    pub total_words: usize,
    pub mastered: usize,
    pub learning: usize,
    pub new: usize,
    pub due: usize,
    /// Mean ease factor rounded to two decimals
    pub average_ease: f64,
    /// Percentage of correct reviews rounded to one decimal
    pub retention_rate: f64,
}

impl ReviewStats {
    pub fn from_items(items: &[VocabularyItem], as_of: DateTime<Utc>) -> Self {
        if items.is_empty() {
            return Self::default();
        }

        let mut stats = Self {
            total_words: items.len(),
            ..Self::default()
        };
        let mut ease_sum = 0.0;
        let mut total_correct = 0u64;
        let mut total_reviews = 0u64;

        for item in items {
            let review = &item.review;
            ease_sum += review.ease_factor;
            total_correct += review.correct_count as u64;
            total_reviews += review.total_reviews as u64;

            if review.interval_days >= MASTERED_INTERVAL_DAYS {
                stats.mastered += 1;
            } else if review.has_been_reviewed() {
                stats.learning += 1;
            }

            if review.is_due(as_of) {
                stats.due += 1;
            }
        }

        stats.new = stats.total_words - stats.mastered - stats.learning;
        stats.average_ease = round_to(ease_sum / items.len() as f64, 2);
        if total_reviews > 0 {
            stats.retention_rate = round_to(total_correct as f64 / total_reviews as f64 * 100.0, 1);
        }
        stats
    }
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
