//! Chat session state, persisted history and export
//!
//! - [`ChatSession`]: message path with busy and stale-reply handling
//! - [`HistoryStore`]: last ten exchanges over a [`Storage`] backend
//! - [`ChatExport`]: JSON export of the current conversation

pub mod assistant;
pub mod export;
pub mod history;
pub mod message;
pub mod storage;

pub use assistant::{ChatSession, CompletedTurn, GenerateFn, PendingTurn};
pub use export::ChatExport;
pub use history::{ChatHistoryEntry, HistoryStore, HISTORY_KEY, MAX_HISTORY};
pub use message::{ChatMessage, Role, IMAGE_UPLOAD_TEXT};
pub use storage::{FileStorage, MemoryStorage, Storage};
