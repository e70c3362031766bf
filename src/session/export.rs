//! Conversation export as a downloadable JSON document.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::message::ChatMessage;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatExport {
    /// ISO-8601 UTC export time.
    pub timestamp: String,
    pub location: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatExport {
    pub fn new(location: &str, messages: &[ChatMessage], exported_at: DateTime<Utc>) -> Self {
        Self {
            timestamp: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            location: location.to_string(),
            messages: messages.to_vec(),
        }
    }

    /// `agrismart_chat_<YYYY-MM-DD>.json`, dated from the export timestamp.
    pub fn file_name(exported_at: DateTime<Utc>) -> String {
        format!("agrismart_chat_{}.json", exported_at.format("%Y-%m-%d"))
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize chat export")
    }

    /// Write the export into `dir` and return the file path.
    pub fn write_to(&self, dir: &Path, exported_at: DateTime<Utc>) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;
        let path = dir.join(Self::file_name(exported_at));
        fs::write(&path, self.to_json()?)
            .with_context(|| format!("Failed to write chat export: {}", path.display()))?;
        tracing::info!("Exported {} messages to {}", self.messages.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn exported_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_file_name() {
        assert_eq!(ChatExport::file_name(exported_at()), "agrismart_chat_2024-07-01.json");
    }

    #[test]
    fn test_json_layout() {
        let messages = vec![ChatMessage::user("soil pH?", 1), ChatMessage::assistant("<p>6.5</p>", 2)];
        let export = ChatExport::new("Salem, Tamil Nadu, India", &messages, exported_at());
        let json = export.to_json().unwrap();

        assert!(json.starts_with("{\n  \"timestamp\": \"2024-07-01T09:30:00.000Z\""));
        assert!(json.contains("\n  \"location\": \"Salem, Tamil Nadu, India\""));
        assert!(json.contains("\"type\": \"assistant\""));
    }

    #[test]
    fn test_write_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let messages = vec![ChatMessage::user("q", 1).with_image(Some("leaf.png".into()))];
        let export = ChatExport::new("Pune", &messages, exported_at());

        let path = export.write_to(tmp.path(), exported_at()).unwrap();
        let back: ChatExport = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(back, export);
    }
}
