//! A vocabulary item is a Bashkir word, its English translation and its review state.
use super::ReviewState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VocabularyItem {
    pub id: String,
    pub bashkir: String,
    pub english: String,
    pub review: ReviewState,
}

impl VocabularyItem {
    pub fn new(id: &str, bashkir: &str, english: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            bashkir: bashkir.to_string(),
            english: english.to_string(),
            review: ReviewState::new(now),
        }
    }
}

/// A word from the curriculum that may not have been introduced yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub bashkir: String,
    pub english: String,
}

impl WordEntry {
    /// Falls back to the Bashkir spelling when the entry has no explicit id.
    pub fn word_id(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.bashkir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_item_creation() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let item = VocabularyItem::new("word_001", "бал", "honey", now);

        assert_eq!(item.id, "word_001");
        assert_eq!(item.bashkir, "бал");
        assert_eq!(item.english, "honey");
        assert_eq!(item.review.due_date, now);
    }

    #[test]
    fn test_word_id_fallback() {
        let with_id = WordEntry {
            id: Some("word_002".to_string()),
            bashkir: "тау".to_string(),
            english: "mountain".to_string(),
        };
        let without_id: WordEntry =
            serde_json::from_str(r#"{"bashkir": "ат", "english": "horse"}"#).unwrap();

        assert_eq!(with_id.word_id(), "word_002");
        assert_eq!(without_id.word_id(), "ат");
    }
}
