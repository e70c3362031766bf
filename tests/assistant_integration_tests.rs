//! Assistant Integration Tests
//!
//! Full message path: session turns, bounded history on disk, export, and
//! stale replies after a new chat.

use agrismart::session::{ChatExport, FileStorage, Role, IMAGE_UPLOAD_TEXT, MAX_HISTORY};
use agrismart::{AssistantError, ChatSession, Config, ThinkingDelay, Topic};

fn config(dir: &std::path::Path) -> Config {
    let mut config = Config::default().with_thinking_delay(ThinkingDelay::none());
    config.data_dir = dir.to_path_buf();
    config
}

#[tokio::test]
async fn test_history_keeps_ten_most_recent() {
    let tmp = tempfile::tempdir().unwrap();
    let mut session = ChatSession::with_file_storage(config(tmp.path()));

    for i in 0..11 {
        session
            .send_message(&format!("question {} about wheat", i), None)
            .await
            .unwrap();
    }

    let history = session.history().unwrap();
    assert_eq!(history.len(), MAX_HISTORY);
    assert_eq!(history[0].full_question, "question 10 about wheat");
    assert_eq!(history[9].full_question, "question 1 about wheat");
    assert!(history[0].full_response.contains("analysis-section"));

    // A fresh session over the same directory sees the same list.
    let reopened = ChatSession::new(config(tmp.path()), Box::new(FileStorage::new(tmp.path())));
    assert_eq!(reopened.history().unwrap(), history);
}

#[tokio::test]
async fn test_export_reproduces_messages() {
    let tmp = tempfile::tempdir().unwrap();
    let mut session = ChatSession::in_memory(config(tmp.path()).with_location("Nashik, Maharashtra"));
    session.send_message("How do I manage aphids?", None).await.unwrap();
    session
        .send_message("", Some("leaf.jpg".to_string()))
        .await
        .unwrap();

    let path = session.export_to(tmp.path()).unwrap();
    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("agrismart_chat_") && name.ends_with(".json"));

    let raw = std::fs::read_to_string(&path).unwrap();
    let export: ChatExport = serde_json::from_str(&raw).unwrap();
    assert_eq!(export.location, "Nashik, Maharashtra");
    assert_eq!(export.messages, session.messages());
    assert!(raw.contains("\n  \"messages\": ["));
}

#[tokio::test]
async fn test_image_only_message() {
    let mut session = ChatSession::in_memory(config(std::path::Path::new(".")));
    let response = session
        .send_message("  ", Some("data:image/png;base64,AAAA".to_string()))
        .await
        .unwrap();

    assert_eq!(response.topic, None);
    let messages = session.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].content, IMAGE_UPLOAD_TEXT);
    assert_eq!(messages[0].image.as_deref(), Some("data:image/png;base64,AAAA"));
    assert_eq!(messages[1].role, Role::Assistant);
}

#[tokio::test]
async fn test_stale_reply_after_new_chat() {
    let mut session = ChatSession::in_memory(config(std::path::Path::new(".")));
    let pending = session.begin_turn("fertilizer for maize", None).unwrap();
    assert!(matches!(
        session.begin_turn("another", None),
        Err(AssistantError::Busy)
    ));

    session.new_chat();
    assert!(!session.is_busy());

    let fresh = session.send_message("pest control", None).await.unwrap();
    assert_eq!(fresh.topic, Some(Topic::Pests));

    assert!(session.complete_turn(pending.run().await).is_none());
    assert_eq!(session.messages().len(), 2);
    assert_eq!(session.history().unwrap().len(), 1);
}

#[tokio::test]
async fn test_load_from_history_starts_new_chat() {
    let mut session = ChatSession::in_memory(config(std::path::Path::new(".")));
    session.send_message("clay soil drainage", None).await.unwrap();
    session.send_message("monsoon preparation", None).await.unwrap();

    let entry = session.history().unwrap().remove(1);
    session.load_from_history(&entry);

    let messages = session.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].content, "clay soil drainage");
    assert_eq!(messages[1].content, entry.full_response);
}
