//! Defaults for the review store location and session sizes.
use serde::{Deserialize, Serialize};

/// SQLite file used when no `--db` path is given.
pub const DEFAULT_DB_PATH: &str = "db.sqlite3";

/// How many words a single review session may hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionLimits {
    /// Unseen curriculum words introduced per session
    pub new_words: usize,
    /// Due words reviewed per session
    pub review_words: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            new_words: 5,
            review_words: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let limits: SessionLimits = serde_json::from_str(r#"{ "new_words": 2 }"#).unwrap();
        assert_eq!(limits.new_words, 2);
        assert_eq!(limits.review_words, 20);
    }
}
