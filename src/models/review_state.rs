//! Per-word SM-2 scheduling state.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ease factor assigned to a freshly introduced word.
pub const INITIAL_EASE_FACTOR: f64 = 2.5;
/// SM-2 never lets the ease factor fall below this.
pub const MIN_EASE_FACTOR: f64 = 1.3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewState {
    /// Consecutive successful recalls
    pub repetitions: u32,
    pub ease_factor: f64,
    pub interval_days: u32,
    pub due_date: DateTime<Utc>,
    pub last_reviewed_date: DateTime<Utc>,
    #[serde(default)]
    pub total_reviews: u32,
    #[serde(default)]
    pub correct_count: u32,
    #[serde(default)]
    pub incorrect_count: u32,
}

impl ReviewState {
    /// State of a word introduced at `now`. It is due immediately.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            repetitions: 0,
            ease_factor: INITIAL_EASE_FACTOR,
            interval_days: 0,
            due_date: now,
            last_reviewed_date: now,
            total_reviews: 0,
            correct_count: 0,
            incorrect_count: 0,
        }
    }

    pub fn is_due(&self, as_of: DateTime<Utc>) -> bool {
        self.due_date <= as_of
    }

    pub fn has_been_reviewed(&self) -> bool {
        self.total_reviews > 0
    }
}
