//! Domain error types.
//!
//! Two kinds cover the whole surface:
//! - [`ValidationError`]: a calculator rejected its input. Reported inline, no partial result.
//! - [`AssistantError`]: the message path could not produce a response. The assistant
//!   substitutes the fixed "Temporary Issue" message and the turn still completes.
//!
//! IO-bearing paths (history storage, export) use `anyhow::Result` instead.

use thiserror::Error;

/// Rejected calculator input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid {field}.")]
    Missing { field: &'static str },

    #[error("Please enter a valid {field} (must be greater than zero).")]
    NotPositive { field: &'static str },

    #[error("Please enter a valid {field} (cannot be negative).")]
    Negative { field: &'static str },

    #[error("{field} must be between {min} and {max}.")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{tool} has no data for crop '{crop}'.")]
    UnsupportedCrop { tool: &'static str, crop: String },

    #[error("Unknown {field}: '{value}'.")]
    UnknownOption { field: &'static str, value: String },

    #[error("No planting calendar is available for {category}.")]
    NoCalendar { category: String },
}

/// Failure on the chat message path.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// Anything that went wrong while generating a response.
    #[error("temporary issue generating response: {0}")]
    TransientFailure(String),

    /// A previous message is still being answered; input is disabled.
    #[error("a response is already being prepared")]
    Busy,

    /// Neither text nor an image was supplied.
    #[error("nothing to send")]
    EmptyMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_user_facing() {
        let err = ValidationError::NotPositive { field: "area" };
        assert_eq!(err.to_string(), "Please enter a valid area (must be greater than zero).");

        let err = ValidationError::UnsupportedCrop {
            tool: "Fertilizer Calculator",
            crop: "maize".to_string(),
        };
        assert!(err.to_string().contains("maize"));
    }
}
