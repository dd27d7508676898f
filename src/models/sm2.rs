//! SM-2 (SuperMemo 2) spaced repetition algorithm implementation.
//!
//! The SM-2 algorithm calculates review intervals based on recall quality:
//! - Each word has an ease factor (EF) that adjusts after every review
//! - Quality grades 0-2: lapse, repetitions reset and the word comes back tomorrow
//! - Quality grades 3-5: interval grows progressively (1 day → 6 days → interval × EF)
//! - EF has a minimum value of 1.3
//! - Subsequent intervals are multiplied by the EF already updated for this review
//! - Intervals never exceed [`MAX_INTERVAL_DAYS`]

use super::review_state::MIN_EASE_FACTOR;
use super::{Quality, ReviewState};
use crate::error::{Error, Result};
use chrono::{DateTime, Duration, Utc};

/// Interval given to the first successful recall and to every lapse.
pub const FIRST_INTERVAL_DAYS: u32 = 1;
/// Interval given to the second consecutive successful recall.
pub const SECOND_INTERVAL_DAYS: u32 = 6;
/// Upper bound on any interval, roughly one hundred years.
pub const MAX_INTERVAL_DAYS: u32 = 36_500;

/// EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)), never below 1.3.
pub fn next_ease_factor(ease_factor: f64, quality: Quality) -> f64 {
    let miss = (Quality::MAX - quality.value()) as f64;
    let ef = ease_factor + (0.1 - miss * (0.08 + miss * 0.02));
    ef.max(MIN_EASE_FACTOR)
}

/// round(interval × EF), clamped to `0..=MAX_INTERVAL_DAYS`.
fn grown_interval(interval_days: u32, ease_factor: f64) -> u32 {
    let grown = (interval_days as f64 * ease_factor).round();
    grown.clamp(0.0, MAX_INTERVAL_DAYS as f64) as u32
}

/// Calculates the review state that follows `state` after a review of `quality` at `now`.
///
/// Fails with [`Error::DateOutOfRange`] when the next due date cannot be represented.
pub fn calculate_next_review(state: &ReviewState, quality: Quality, now: DateTime<Utc>) -> Result<ReviewState> {
    let ease_factor = next_ease_factor(state.ease_factor, quality);

    let (interval_days, repetitions) = if quality.is_pass() {
        let repetitions = state.repetitions.saturating_add(1);
        let interval = match repetitions {
            1 => FIRST_INTERVAL_DAYS,
            2 => SECOND_INTERVAL_DAYS,
            _ => grown_interval(state.interval_days, ease_factor),
        };
        (interval, repetitions)
    } else {
        // Lapse: restart the schedule
        (FIRST_INTERVAL_DAYS, 0)
    };

    let (correct_count, incorrect_count) = if quality.is_pass() {
        (state.correct_count.saturating_add(1), state.incorrect_count)
    } else {
        (state.correct_count, state.incorrect_count.saturating_add(1))
    };

    let due_date = now
        .checked_add_signed(Duration::days(interval_days as i64))
        .ok_or(Error::DateOutOfRange {
            from: now,
            interval_days,
        })?;

    Ok(ReviewState {
        repetitions,
        ease_factor,
        interval_days,
        due_date,
        last_reviewed_date: now,
        total_reviews: state.total_reviews.saturating_add(1),
        correct_count,
        incorrect_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn state(repetitions: u32, interval_days: u32, ease_factor: f64) -> ReviewState {
        ReviewState {
            repetitions,
            interval_days,
            ease_factor,
            ..ReviewState::new(now())
        }
    }

    fn q(value: i64) -> Quality {
        Quality::new(value).unwrap()
    }

    #[test]
    fn test_first_review() {
        let next = calculate_next_review(&state(0, 0, 2.5), q(5), now()).unwrap();

        assert_eq!(next.repetitions, 1);
        assert_eq!(next.interval_days, 1);
        assert!((next.ease_factor - 2.6).abs() < 1e-9);
        assert_eq!(next.due_date, now() + Duration::days(1));
        assert_eq!(next.last_reviewed_date, now());
    }

    #[test]
    fn test_second_review() {
        let next = calculate_next_review(&state(1, 1, 2.6), q(4), now()).unwrap();

        assert_eq!(next.repetitions, 2);
        assert_eq!(next.interval_days, 6);
        assert!((next.ease_factor - 2.6).abs() < 1e-9);
    }

    #[test]
    fn test_subsequent_review_uses_updated_ease() {
        // q=5 raises EF to 2.6 before the multiplication: 6 * 2.6 = 15.6
        let next = calculate_next_review(&state(2, 6, 2.5), q(5), now()).unwrap();

        assert_eq!(next.repetitions, 3);
        assert_eq!(next.interval_days, 16);
    }

    #[test]
    fn test_quality_below_3_resets() {
        let next = calculate_next_review(&state(2, 6, 2.6), q(2), now()).unwrap();

        assert_eq!(next.repetitions, 0);
        assert_eq!(next.interval_days, 1);
        // EF should still be updated
        assert!((next.ease_factor - 2.28).abs() < 1e-9);
        assert_eq!(next.incorrect_count, 1);
        assert_eq!(next.correct_count, 0);
    }

    #[test]
    fn test_lapse_resets_regardless_of_prior_state() {
        for (reps, interval) in [(0, 0), (1, 1), (5, 40), (12, 300)] {
            for quality in 0..3 {
                let next = calculate_next_review(&state(reps, interval, 2.1), q(quality), now()).unwrap();
                assert_eq!(next.repetitions, 0);
                assert_eq!(next.interval_days, 1);
            }
        }
    }

    #[test]
    fn test_ef_floor() {
        let next = calculate_next_review(&state(1, 1, 1.3), q(0), now()).unwrap();
        assert_eq!(next.ease_factor, MIN_EASE_FACTOR);
    }

    #[test]
    fn test_ef_never_below_floor_for_any_sequence() {
        let mut current = ReviewState::new(now());
        let mut at = now();
        for i in 0..500u32 {
            let quality = q(((i * 7 + i / 3) % 6) as i64);
            current = calculate_next_review(&current, quality, at).unwrap();
            at = current.due_date;
            assert!(current.ease_factor >= MIN_EASE_FACTOR);
            assert!(current.due_date >= current.last_reviewed_date);
        }
        assert_eq!(current.total_reviews, 500);
        assert_eq!(current.correct_count + current.incorrect_count, 500);
    }

    #[test]
    fn test_passing_reviews_grow_interval() {
        let mut current = ReviewState::new(now());
        let mut previous_interval = 0;
        for round in 1..=8 {
            let next = calculate_next_review(&current, q(3), now()).unwrap();
            assert_eq!(next.repetitions, current.repetitions + 1);
            if round > 2 {
                assert!(next.interval_days > previous_interval);
            }
            previous_interval = next.interval_days;
            current = next;
        }
    }

    #[test]
    fn test_long_perfect_streak_is_capped() {
        let mut current = ReviewState::new(now());
        for _ in 0..100 {
            current = calculate_next_review(&current, q(5), now()).unwrap();
            assert!(current.interval_days <= MAX_INTERVAL_DAYS);
        }
        assert_eq!(current.interval_days, MAX_INTERVAL_DAYS);
        assert_eq!(current.repetitions, 100);
        assert_eq!(current.due_date, now() + Duration::days(MAX_INTERVAL_DAYS as i64));
    }

    #[test]
    fn test_unrepresentable_due_date_is_an_error() {
        let end_of_time = DateTime::<Utc>::MAX_UTC;
        let result = calculate_next_review(&state(0, 0, 2.5), q(5), end_of_time);

        assert!(matches!(
            result,
            Err(Error::DateOutOfRange { interval_days: 1, .. })
        ));
    }

    #[test]
    fn test_ease_deltas() {
        assert!((next_ease_factor(2.5, q(5)) - 2.6).abs() < 1e-9);
        assert!((next_ease_factor(2.5, q(4)) - 2.5).abs() < 1e-9);
        assert!((next_ease_factor(2.5, q(3)) - 2.36).abs() < 1e-9);
        assert!((next_ease_factor(2.5, q(0)) - 1.7).abs() < 1e-9);
    }
}
