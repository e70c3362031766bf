//! Persisted history of recent exchanges.
//!
//! Stored as one JSON array under [`HISTORY_KEY`], most recent first, never
//! longer than [`MAX_HISTORY`].

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::storage::Storage;
use crate::utils::truncate_with_ellipsis;

pub const HISTORY_KEY: &str = "agrismart_chats";
pub const MAX_HISTORY: usize = 10;
/// Characters of the question kept for the history list.
pub const QUESTION_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistoryEntry {
    /// Epoch milliseconds at save time.
    pub id: i64,
    /// Question shortened for display.
    pub question: String,
    /// Local date/time for display.
    pub timestamp: String,
    pub full_question: String,
    pub full_response: String,
}

impl ChatHistoryEntry {
    pub fn new(question: &str, response: &str, saved_at: DateTime<Local>) -> Self {
        Self {
            id: saved_at.timestamp_millis(),
            question: truncate_with_ellipsis(question, QUESTION_PREVIEW_CHARS),
            timestamp: saved_at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
            full_question: question.to_string(),
            full_response: response.to_string(),
        }
    }
}

/// History list over a [`Storage`] backend.
pub struct HistoryStore {
    storage: Box<dyn Storage>,
}

impl HistoryStore {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Saved entries, most recent first. Empty when nothing was stored yet.
    pub fn load(&self) -> Result<Vec<ChatHistoryEntry>> {
        let Some(raw) = self.storage.get_item(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", HISTORY_KEY))
    }

    /// Prepend an exchange and rewrite the list, dropping anything past the cap.
    ///
    /// An unparsable stored list is replaced rather than blocking every save.
    pub fn save_exchange(
        &self,
        question: &str,
        response: &str,
        saved_at: DateTime<Local>,
    ) -> Result<ChatHistoryEntry> {
        let entry = ChatHistoryEntry::new(question, response, saved_at);

        let mut entries: Vec<ChatHistoryEntry> = match self.storage.get_item(HISTORY_KEY)? {
            None => Vec::new(),
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("Discarding unreadable {}: {}", HISTORY_KEY, e);
                Vec::new()
            }),
        };
        entries.insert(0, entry.clone());
        entries.truncate(MAX_HISTORY);

        let json = serde_json::to_string(&entries).context("Failed to serialize chat history")?;
        self.storage.set_item(HISTORY_KEY, &json)?;

        tracing::debug!("Saved chat to history ({} entries)", entries.len());
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::storage::MemoryStorage;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, hour, 7, 9).unwrap()
    }

    #[test]
    fn test_entry_fields() {
        let question = "How do I improve clay soil for better yields in the Salem district?";
        let entry = ChatHistoryEntry::new(question, "<p>answer</p>", at(14));

        assert_eq!(entry.question.chars().count(), 53);
        assert!(entry.question.ends_with("..."));
        assert_eq!(entry.full_question, question);
        assert_eq!(entry.timestamp, "3/5/2024, 2:07:09 PM");
    }

    #[test]
    fn test_camel_case_keys() {
        let entry = ChatHistoryEntry::new("q", "r", at(9));
        let json = serde_json::to_value(&entry).unwrap();
        for key in ["id", "question", "timestamp", "fullQuestion", "fullResponse"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_bounded_most_recent_first() {
        let store = HistoryStore::new(Box::new(MemoryStorage::new()));
        for i in 0..11 {
            store
                .save_exchange(&format!("question {}", i), "answer", at(8))
                .unwrap();
        }

        let entries = store.load().unwrap();
        assert_eq!(entries.len(), MAX_HISTORY);
        assert_eq!(entries[0].full_question, "question 10");
        assert_eq!(entries[9].full_question, "question 1");
    }

    #[test]
    fn test_corrupt_history_is_replaced_on_save() {
        let storage = MemoryStorage::new();
        storage.set_item(HISTORY_KEY, "{not json").unwrap();
        let store = HistoryStore::new(Box::new(storage));
        assert!(store.load().is_err());

        store.save_exchange("clay soil", "answer", at(10)).unwrap();
        let entries = store.load().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].full_question, "clay soil");
    }
}
