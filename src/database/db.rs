//! SQLite backed review store
//!
//! Keeps one row per vocabulary item with its SM-2 review data.
//! Timestamps are stored as Unix seconds; anything finer is dropped on write.

use super::ReviewStore;
use crate::error::{Error, Result};
use crate::models::{ReviewState, VocabularyItem};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;

const SELECT_ITEM: &str = "SELECT id, bashkir, english, repetitions, ease_factor, interval_days,
        due_date, last_reviewed_date, total_reviews, correct_count, incorrect_count
 FROM review_items";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database file and makes sure the schema exists
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    pub fn from_connection(conn: Connection) -> Result<Self> {
        init_schema(&conn)?;
        Ok(Self { conn })
    }
}

/// Creates the review_items table
fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS review_items (
            id TEXT PRIMARY KEY,
            bashkir TEXT NOT NULL,
            english TEXT NOT NULL,
            repetitions INTEGER NOT NULL DEFAULT 0,
            ease_factor REAL NOT NULL DEFAULT 2.5,
            interval_days INTEGER NOT NULL DEFAULT 0,
            due_date INTEGER NOT NULL,
            last_reviewed_date INTEGER NOT NULL,
            total_reviews INTEGER NOT NULL DEFAULT 0,
            correct_count INTEGER NOT NULL DEFAULT 0,
            incorrect_count INTEGER NOT NULL DEFAULT 0
        )",
        (),
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_review_items_due ON review_items (due_date)",
        (),
    )?;

    Ok(())
}

fn timestamp_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let secs: i64 = row.get(idx)?;
    DateTime::from_timestamp(secs, 0).ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, secs))
}

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<VocabularyItem> {
    Ok(VocabularyItem {
        id: row.get(0)?,
        bashkir: row.get(1)?,
        english: row.get(2)?,
        review: ReviewState {
            repetitions: row.get(3)?,
            ease_factor: row.get(4)?,
            interval_days: row.get(5)?,
            due_date: timestamp_at(row, 6)?,
            last_reviewed_date: timestamp_at(row, 7)?,
            total_reviews: row.get(8)?,
            correct_count: row.get(9)?,
            incorrect_count: row.get(10)?,
        },
    })
}

impl ReviewStore for SqliteStore {
    fn get(&self, id: &str) -> Result<VocabularyItem> {
        self.conn
            .query_row(&format!("{SELECT_ITEM} WHERE id = ?1"), params![id], item_from_row)
            .optional()?
            .ok_or_else(|| Error::ItemNotFound(id.to_string()))
    }

    /// Inserts the item or overwrites its review data in a single statement
    fn put(&mut self, item: &VocabularyItem) -> Result<()> {
        let review = &item.review;
        self.conn.execute(
            "INSERT INTO review_items (id, bashkir, english, repetitions, ease_factor, interval_days,
                                       due_date, last_reviewed_date, total_reviews, correct_count, incorrect_count)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
             ON CONFLICT(id) DO UPDATE SET
                bashkir = excluded.bashkir,
                english = excluded.english,
                repetitions = excluded.repetitions,
                ease_factor = excluded.ease_factor,
                interval_days = excluded.interval_days,
                due_date = excluded.due_date,
                last_reviewed_date = excluded.last_reviewed_date,
                total_reviews = excluded.total_reviews,
                correct_count = excluded.correct_count,
                incorrect_count = excluded.incorrect_count",
            params![
                item.id,
                item.bashkir,
                item.english,
                review.repetitions,
                review.ease_factor,
                review.interval_days,
                review.due_date.timestamp(),
                review.last_reviewed_date.timestamp(),
                review.total_reviews,
                review.correct_count,
                review.incorrect_count
            ],
        )?;

        Ok(())
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM review_items WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(Error::ItemNotFound(id.to_string()));
        }
        Ok(())
    }

    fn items(&self) -> Result<Vec<VocabularyItem>> {
        let mut stmt = self.conn.prepare(&format!("{SELECT_ITEM} ORDER BY id"))?;
        let items = stmt
            .query_map([], item_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    /// Returns items where due_date <= as_of, ordered by due_date (oldest first)
    fn due(&self, as_of: DateTime<Utc>) -> Result<Vec<VocabularyItem>> {
        let mut stmt = self.conn.prepare(&format!(
            "{SELECT_ITEM} WHERE due_date <= ?1 ORDER BY due_date ASC, id ASC"
        ))?;
        let items = stmt
            .query_map(params![as_of.timestamp()], item_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }
}
