//! Response router
//!
//! Classifies a free-text query into a [`Topic`] and composes the matching
//! templated [`Response`](crate::response::Response).

pub mod classify;
pub mod framing;
pub mod generator;
pub mod suggestions;
mod topics;

pub use classify::{classify, Topic, TopicRule, TOPIC_RULES};
pub use generator::{ResponseContext, ResponseGenerator};
pub use suggestions::{
    append_location, random_thinking_message, suggest, INITIAL_THINKING_MESSAGE,
    THINKING_MESSAGES,
};
