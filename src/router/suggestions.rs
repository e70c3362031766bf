//! Canned input suggestions and waiting-status texts.

use rand::seq::SliceRandom;

/// Inputs shorter than this get no suggestions.
pub const MIN_SUGGESTION_INPUT: usize = 3;
pub const MAX_SUGGESTIONS: usize = 5;

static SUGGESTIONS: &[&str] = &[
    "How to test soil pH and improve soil health?",
    "Best crops for current season in my region",
    "Organic pest control methods for vegetables",
    "Irrigation schedule for wheat crop",
    "Fertilizer recommendations for tomato plants",
    "How to identify plant diseases from symptoms?",
    "Market prices and profitable crops",
    "Weather-based farming recommendations",
    "Seed rate calculation for different crops",
    "Post-harvest storage techniques",
];

/// Status line shown as soon as a message is sent.
pub const INITIAL_THINKING_MESSAGE: &str = "Analyzing your question step by step...";

/// Rotating status lines shown while the reply is being prepared.
pub static THINKING_MESSAGES: &[&str] = &[
    "Analyzing your question...",
    "Consulting agricultural database...",
    "Evaluating crop conditions...",
    "Generating personalized recommendations...",
    "Cross-referencing best practices...",
    "Preparing detailed analysis...",
];

/// Suggestions containing the draft input, case-insensitively.
pub fn suggest(input: &str) -> Vec<&'static str> {
    let query = input.to_lowercase();
    if query.chars().count() < MIN_SUGGESTION_INPUT {
        return Vec::new();
    }

    SUGGESTIONS
        .iter()
        .filter(|s| s.to_lowercase().contains(&query))
        .take(MAX_SUGGESTIONS)
        .copied()
        .collect()
}

pub fn random_thinking_message() -> &'static str {
    THINKING_MESSAGES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(INITIAL_THINKING_MESSAGE)
}

/// Append the configured location to a draft query.
pub fn append_location(draft: &str, location: &str) -> String {
    if draft.is_empty() {
        format!("in {}", location)
    } else {
        format!("{} in {}", draft, location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_has_no_suggestions() {
        assert!(suggest("so").is_empty());
        assert_eq!(suggest("soi").len(), 1);
    }

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(
            suggest("WHEAT"),
            vec!["Irrigation schedule for wheat crop"]
        );
    }

    #[test]
    fn test_matches_keep_table_order() {
        let hits = suggest("ion");
        assert!(hits.len() <= MAX_SUGGESTIONS);
        assert_eq!(hits.len(), 5);
        assert_eq!(hits[0], "Best crops for current season in my region");
        assert_eq!(hits[4], "Seed rate calculation for different crops");
    }

    #[test]
    fn test_thinking_message_is_known() {
        assert!(THINKING_MESSAGES.contains(&random_thinking_message()));
    }

    #[test]
    fn test_append_location() {
        assert_eq!(append_location("rice pests", "Salem"), "rice pests in Salem");
        assert_eq!(append_location("", "Salem"), "in Salem");
    }
}
