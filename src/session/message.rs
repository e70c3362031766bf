//! Chat transcript entries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Message text shown when only an image was attached.
pub const IMAGE_UPLOAD_TEXT: &str = "I've uploaded an image for analysis.";

/// One message in the current conversation.
///
/// Assistant content is the rendered HTML of the reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(rename = "type")]
    pub role: Role,
    pub content: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Image reference (path or data URL) attached to a user message.
    pub image: Option<String>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>, timestamp: i64) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp,
            image: None,
        }
    }

    pub fn assistant(content: impl Into<String>, timestamp: i64) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp,
            image: None,
        }
    }

    pub fn with_image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let message = ChatMessage::user("hello", 1_700_000_000_000);
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["type"], "user");
        assert_eq!(json["content"], "hello");
        assert_eq!(json["timestamp"], 1_700_000_000_000i64);
        assert!(json["image"].is_null());
    }

    #[test]
    fn test_image_attachment() {
        let message = ChatMessage::user(IMAGE_UPLOAD_TEXT, 0).with_image(Some("leaf.jpg".into()));
        let back: ChatMessage =
            serde_json::from_str(&serde_json::to_string(&message).unwrap()).unwrap();
        assert_eq!(back, message);
    }
}
