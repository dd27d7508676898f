pub mod clock;
pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod models;
pub mod scheduler;

pub use clock::{Clock, FixedClock, SystemClock};
pub use database::{JsonFileStore, MemoryStore, ReviewStore, SqliteStore};
pub use error::{Error, Result};
pub use models::{ItemStatus, Quality, ReviewSession, ReviewState, ReviewStats, VocabularyItem, WordEntry};
pub use scheduler::{Scheduler, due_items};
