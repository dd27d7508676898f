//! Error type shared by the scheduler, the stores and the review session.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid rating {0}: quality must be between 0 and 5")]
    InvalidRating(i64),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Review session has no more items")]
    SessionFinished,

    #[error("Due date out of range: {interval_days} days after {from}")]
    DateOutOfRange {
        from: DateTime<Utc>,
        interval_days: u32,
    },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
