//! Review session management for spaced repetition practice.
//! Combines due words with a few newly introduced curriculum words and walks through them once.

use super::stats::round_to;
use super::{Quality, VocabularyItem, WordEntry};
use crate::clock::Clock;
use crate::config::SessionLimits;
use crate::database::ReviewStore;
use crate::error::{Error, Result};
use crate::scheduler::Scheduler;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Result of grading one item in a session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReviewOutcome {
    pub passed: bool,
    pub new_interval: u32,
    pub new_ease: f64,
    pub next_review: DateTime<Utc>,
    /// "completed/total"
    pub progress: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SessionSummary {
    pub completed: usize,
    pub remaining: usize,
    pub correct: usize,
    pub incorrect: usize,
    /// Percentage of correct answers rounded to one decimal
    pub accuracy: f64,
}

/// A single pass over due and new words.
/// The session holds no store handle; each grading call borrows the scheduler.
pub struct ReviewSession {
    items: Vec<VocabularyItem>,
    current_index: usize,
    correct: usize,
    incorrect: usize,
}

impl ReviewSession {
    /// Collects up to `limits.review_words` due words (oldest first), then introduces
    /// up to `limits.new_words` unseen curriculum words.
    pub fn start<S: ReviewStore, C: Clock>(
        scheduler: &mut Scheduler<S, C>,
        curriculum: &[WordEntry],
        limits: SessionLimits,
    ) -> Result<Self> {
        let mut items = scheduler.due_now()?;
        items.truncate(limits.review_words);

        let new_words = scheduler.new_words(curriculum, limits.new_words)?;
        for word in &new_words {
            items.push(scheduler.add_word(word.word_id(), &word.bashkir, &word.english)?);
        }

        log::info!(
            "Started review session: {} due, {} new",
            items.len() - new_words.len(),
            new_words.len()
        );

        Ok(Self {
            items,
            current_index: 0,
            correct: 0,
            incorrect: 0,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_completed(&self) -> bool {
        self.current_index >= self.items.len()
    }

    pub fn current_item(&self) -> Option<&VocabularyItem> {
        self.items.get(self.current_index)
    }

    /// Grades the current item, stores its new schedule and moves on to the next one.
    /// An invalid rating is rejected without advancing.
    pub fn submit_answer<S: ReviewStore, C: Clock>(
        &mut self,
        scheduler: &mut Scheduler<S, C>,
        quality: i64,
    ) -> Result<ReviewOutcome> {
        let item_id = match self.current_item() {
            Some(item) => item.id.clone(),
            None => return Err(Error::SessionFinished),
        };
        let quality = Quality::new(quality)?;

        let updated = scheduler.review(&item_id, quality)?;
        let passed = quality.is_pass();
        if passed {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }

        let outcome = ReviewOutcome {
            passed,
            new_interval: updated.review.interval_days,
            new_ease: updated.review.ease_factor,
            next_review: updated.review.due_date,
            progress: format!("{}/{}", self.current_index + 1, self.items.len()),
        };
        self.items[self.current_index] = updated;
        self.current_index += 1;
        Ok(outcome)
    }

    pub fn summary(&self) -> SessionSummary {
        let completed = self.current_index.min(self.items.len());
        SessionSummary {
            completed,
            remaining: self.items.len() - completed,
            correct: self.correct,
            incorrect: self.incorrect,
            accuracy: if completed > 0 {
                round_to(self.correct as f64 / completed as f64 * 100.0, 1)
            } else {
                0.0
            },
        }
    }

    pub fn phase_message(&self) -> String {
        format!(
            "Card {} of {}",
            (self.current_index + 1).min(self.items.len()),
            self.items.len()
        )
    }
}
