//! AgriSmart agricultural assistant
//!
//! Keyword-routed farming advice with templated responses, plus six farm
//! calculators.
//!
//! - `router/`: topic classification and response composition
//! - `response/`: structured response model and HTML/Markdown/JSON formatters
//! - `knowledge/`: static crop, soil, pest, disease and nutrient tables
//! - `calculators/`: fertilizer, irrigation, calendar, profit, GDD, seed rate
//! - `session/`: chat session, bounded history, export

pub mod calculators;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod response;
pub mod router;
pub mod session;
pub mod utils;

// Re-export commonly used types
pub use calculators::{run_report, run_tool, Crop, FarmTool, FormFields};
pub use config::{Config, ThinkingDelay};
pub use error::{AssistantError, ValidationError};
pub use knowledge::KnowledgeBase;
pub use response::{HtmlFormatter, JsonFormatter, MarkdownFormatter, Response, Section};
pub use router::{classify, ResponseContext, ResponseGenerator, Topic};
pub use session::{ChatExport, ChatHistoryEntry, ChatMessage, ChatSession};
