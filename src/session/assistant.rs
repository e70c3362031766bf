//! Chat session: the conversational message path.
//!
//! A turn runs in three steps so a caller can keep the session usable while
//! a reply is pending:
//!
//! 1. [`ChatSession::begin_turn`] validates input, records the user message and
//!    marks the session busy.
//! 2. [`PendingTurn::run`] waits out the thinking delay and generates the reply on
//!    the blocking pool. It owns everything it needs and borrows nothing.
//! 3. [`ChatSession::complete_turn`] appends the reply and saves the exchange,
//!    unless a new chat started in the meantime.
//!
//! [`ChatSession::send_message`] does all three in one call.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{Local, Utc};

use super::export::ChatExport;
use super::history::{ChatHistoryEntry, HistoryStore};
use super::message::{ChatMessage, IMAGE_UPLOAD_TEXT};
use super::storage::{FileStorage, MemoryStorage, Storage};
use crate::config::{Config, ThinkingDelay};
use crate::error::AssistantError;
use crate::response::{HtmlFormatter, Response};
use crate::router::{self, ResponseContext, ResponseGenerator};

/// Produces the reply for a query. Runs on the blocking pool.
pub type GenerateFn = fn(&str, &ResponseContext) -> Response;

fn generate_reply(query: &str, context: &ResponseContext) -> Response {
    ResponseGenerator::new().respond(query, context)
}

/// A user turn waiting for its reply.
pub struct PendingTurn {
    generation: u64,
    query: String,
    context: ResponseContext,
    delay: ThinkingDelay,
    generate: GenerateFn,
}

/// Reply produced for a [`PendingTurn`].
#[derive(Debug, Clone)]
pub struct CompletedTurn {
    generation: u64,
    pub query: String,
    pub response: Response,
    /// Generation failed and `response` is the "Temporary Issue" substitute.
    pub failed: bool,
}

impl PendingTurn {
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Wait out the thinking delay, then generate the reply.
    ///
    /// Never fails: a generation fault is logged and replaced by the fixed
    /// "Temporary Issue" response.
    pub async fn run(self) -> CompletedTurn {
        let pause = self.delay.sample();
        if !pause.is_zero() {
            tracing::debug!("Thinking for {} ms", pause.as_millis());
            tokio::time::sleep(pause).await;
        }

        let generate = self.generate;
        let query = self.query.clone();
        let context = self.context;

        let result = tokio::task::spawn_blocking(move || generate(&query, &context))
            .await
            .map_err(|e| AssistantError::TransientFailure(format!("Task join error: {}", e)));

        match result {
            Ok(response) => CompletedTurn {
                generation: self.generation,
                query: self.query,
                response,
                failed: false,
            },
            Err(e) => {
                tracing::warn!("{}", e);
                CompletedTurn {
                    generation: self.generation,
                    query: self.query,
                    response: ResponseGenerator::temporary_issue(),
                    failed: true,
                }
            }
        }
    }
}

/// One conversation with the assistant.
pub struct ChatSession {
    config: Config,
    generate: GenerateFn,
    history: HistoryStore,
    messages: Vec<ChatMessage>,
    selected_crop: Option<String>,
    busy: bool,
    /// Bumped by every new chat; replies from older generations are stale.
    generation: u64,
}

impl ChatSession {
    pub fn new(config: Config, storage: Box<dyn Storage>) -> Self {
        tracing::info!("Starting chat session for {}", config.location);
        Self {
            config,
            generate: generate_reply,
            history: HistoryStore::new(storage),
            messages: Vec::new(),
            selected_crop: None,
            busy: false,
            generation: 0,
        }
    }

    /// History persisted as files under `config.data_dir`.
    pub fn with_file_storage(config: Config) -> Self {
        let storage = FileStorage::new(config.data_dir.clone());
        Self::new(config, Box::new(storage))
    }

    /// History kept in memory only.
    pub fn in_memory(config: Config) -> Self {
        Self::new(config, Box::new(MemoryStorage::new()))
    }

    /// Replace the reply generator.
    pub fn with_generator(mut self, generate: GenerateFn) -> Self {
        self.generate = generate;
        self
    }

    pub fn location(&self) -> &str {
        &self.config.location
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn selected_crop(&self) -> Option<&str> {
        self.selected_crop.as_deref()
    }

    /// Crop selector; `None` clears it.
    pub fn set_crop(&mut self, crop: Option<String>) {
        self.selected_crop = crop.filter(|c| !c.trim().is_empty());
    }

    /// Draft with " in <location>" appended.
    pub fn append_location(&self, draft: &str) -> String {
        router::append_location(draft, &self.config.location)
    }

    /// Record the user's message and mark the session busy.
    pub fn begin_turn(
        &mut self,
        text: &str,
        image: Option<String>,
    ) -> Result<PendingTurn, AssistantError> {
        if self.busy {
            return Err(AssistantError::Busy);
        }
        let query = text.trim();
        if query.is_empty() && image.is_none() {
            return Err(AssistantError::EmptyMessage);
        }

        let now = Utc::now().timestamp_millis();
        if !query.is_empty() {
            self.messages.push(ChatMessage::user(query, now));
        }
        if image.is_some() {
            self.messages
                .push(ChatMessage::user(IMAGE_UPLOAD_TEXT, now).with_image(image));
        }
        self.busy = true;

        let context = ResponseContext::new(self.config.location.clone(), Local::now().naive_local())
            .with_crop(self.selected_crop.clone())
            .opening(self.messages.len() <= 2);

        tracing::info!("Answering: {}", query);
        Ok(PendingTurn {
            generation: self.generation,
            query: query.to_string(),
            context,
            delay: self.config.thinking_delay,
            generate: self.generate,
        })
    }

    /// Deliver a reply. Returns `None` when a new chat started since the turn
    /// began; the reply is dropped.
    pub fn complete_turn(&mut self, turn: CompletedTurn) -> Option<Response> {
        if turn.generation != self.generation {
            tracing::debug!("Discarding stale reply to: {}", turn.query);
            return None;
        }

        let html = HtmlFormatter::format_response(&turn.response);
        self.messages
            .push(ChatMessage::assistant(html.clone(), Utc::now().timestamp_millis()));
        self.busy = false;

        if !turn.failed {
            if let Err(e) = self.history.save_exchange(&turn.query, &html, Local::now()) {
                tracing::warn!("Failed to save chat history: {:#}", e);
            }
        }
        Some(turn.response)
    }

    /// Send a message and wait for the reply.
    pub async fn send_message(
        &mut self,
        text: &str,
        image: Option<String>,
    ) -> Result<Response, AssistantError> {
        let turn = self.begin_turn(text, image)?;
        let completed = turn.run().await;
        self.complete_turn(completed).ok_or_else(|| {
            AssistantError::TransientFailure("reply superseded by a new chat".to_string())
        })
    }

    /// Clear the conversation. A reply still pending becomes stale.
    pub fn new_chat(&mut self) {
        self.messages.clear();
        self.generation += 1;
        self.busy = false;
        tracing::info!("Started new chat");
    }

    /// Saved exchanges, most recent first.
    pub fn history(&self) -> Result<Vec<ChatHistoryEntry>> {
        self.history.load()
    }

    /// Start a new chat showing a saved exchange.
    pub fn load_from_history(&mut self, entry: &ChatHistoryEntry) {
        self.new_chat();
        let now = Utc::now().timestamp_millis();
        self.messages.push(ChatMessage::user(&entry.full_question, now));
        self.messages
            .push(ChatMessage::assistant(&entry.full_response, now));
    }

    pub fn export(&self) -> ChatExport {
        ChatExport::new(&self.config.location, &self.messages, Utc::now())
    }

    /// Write the export into `dir`.
    pub fn export_to(&self, dir: &Path) -> Result<PathBuf> {
        let now = Utc::now();
        ChatExport::new(&self.config.location, &self.messages, now).write_to(dir, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Section;
    use crate::session::message::Role;
    use std::time::Duration;

    fn session() -> ChatSession {
        ChatSession::in_memory(Config::default().with_thinking_delay(ThinkingDelay::none()))
    }

    #[tokio::test]
    async fn test_send_message_records_both_sides() {
        let mut session = session();
        let response = session.send_message("How do I test soil pH?", None).await.unwrap();

        assert_eq!(response.topic, Some(router::Topic::Soil));
        assert!(response.has_section("greeting"));
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[0].role, Role::User);
        assert_eq!(session.messages()[1].role, Role::Assistant);
        assert!(session.messages()[1].content.contains("analysis-section"));
        assert!(!session.is_busy());
        assert_eq!(session.history().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_greeting_only_on_opening_turn() {
        let mut session = session();
        session.send_message("wheat sowing", None).await.unwrap();
        let second = session.send_message("wheat harvest", None).await.unwrap();
        assert!(!second.has_section("greeting"));
    }

    #[tokio::test]
    async fn test_generation_fault_substitutes_temporary_issue() {
        fn failing(_: &str, _: &ResponseContext) -> Response {
            panic!("knowledge table unavailable");
        }

        let mut session = session().with_generator(failing);
        let pending = session.begin_turn("soil ph", None).unwrap();
        let completed = pending.run().await;
        assert!(completed.failed);

        let response = session.complete_turn(completed).unwrap();
        assert!(matches!(
            &response.sections[..],
            [Section::Warning(c)] if c.title == "Temporary Issue"
        ));
        assert!(!session.is_busy());
        assert_eq!(session.messages().len(), 2);
        assert!(session.messages()[1].content.contains("Temporary Issue"));
        assert!(session.history().unwrap().is_empty());

        // The session stays usable after the failure.
        assert!(session.begin_turn("pests", None).is_ok());
    }

    #[tokio::test]
    async fn test_sub_millisecond_jitter_completes() {
        let config = Config::default()
            .with_thinking_delay(ThinkingDelay::new(Duration::ZERO, Duration::from_micros(500)));
        let mut session = ChatSession::in_memory(config);
        session.send_message("soil ph", None).await.unwrap();
        assert!(!session.is_busy());
    }

    #[test]
    fn test_rejects_empty_and_busy() {
        let mut session = session();
        assert!(matches!(
            session.begin_turn("   ", None),
            Err(AssistantError::EmptyMessage)
        ));

        let _pending = session.begin_turn("soil", None).unwrap();
        assert!(session.is_busy());
        assert!(matches!(session.begin_turn("pests", None), Err(AssistantError::Busy)));
    }

    #[tokio::test]
    async fn test_new_chat_makes_pending_reply_stale() {
        let mut session = session();
        let pending = session.begin_turn("irrigation plan", None).unwrap();
        session.new_chat();

        let completed = pending.run().await;
        assert!(session.complete_turn(completed).is_none());
        assert!(session.messages().is_empty());
        assert!(session.history().unwrap().is_empty());
    }

    #[test]
    fn test_load_from_history_replays_exchange() {
        let mut session = session();
        let entry = ChatHistoryEntry::new("q", "<p>a</p>", Local::now());
        session.load_from_history(&entry);

        let contents: Vec<&str> = session.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["q", "<p>a</p>"]);
    }

    #[test]
    fn test_set_crop_ignores_blank() {
        let mut session = session();
        session.set_crop(Some("  ".to_string()));
        assert_eq!(session.selected_crop(), None);
        session.set_crop(Some("rice".to_string()));
        assert_eq!(session.selected_crop(), Some("rice"));
    }
}
