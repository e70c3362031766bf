//! Response Generator
//!
//! Composes a complete [`Response`] from the shared framing and a topic body.
//!
//! Section order:
//! greeting (opening turn only), analysis steps, topic body, crop info grid
//! (when a known crop is selected), seasonal guidance, next steps,
//! personalized recommendations.

use chrono::{Datelike, NaiveDateTime, Timelike};

use super::classify::{classify, Topic};
use super::{framing, topics};
use crate::knowledge::KnowledgeBase;
use crate::response::Response;

/// Everything a response may be parameterized by besides the query.
#[derive(Debug, Clone)]
pub struct ResponseContext {
    pub location: String,
    /// Crop selector value; unknown names are ignored.
    pub selected_crop: Option<String>,
    /// Local wall-clock time of the request.
    pub now: NaiveDateTime,
    /// Lead with a greeting.
    pub opening_turn: bool,
}

impl ResponseContext {
    pub fn new(location: impl Into<String>, now: NaiveDateTime) -> Self {
        Self {
            location: location.into(),
            selected_crop: None,
            now,
            opening_turn: false,
        }
    }

    pub fn with_crop(mut self, crop: Option<String>) -> Self {
        self.selected_crop = crop;
        self
    }

    pub fn opening(mut self, opening_turn: bool) -> Self {
        self.opening_turn = opening_turn;
        self
    }
}

/// Response generator - stateless over the static knowledge base.
#[derive(Clone, Copy)]
pub struct ResponseGenerator {
    kb: &'static KnowledgeBase,
}

impl ResponseGenerator {
    pub fn new() -> Self {
        Self {
            kb: KnowledgeBase::global(),
        }
    }

    /// Classify and answer a query. An empty query is an image-only message.
    pub fn respond(&self, query: &str, ctx: &ResponseContext) -> Response {
        let query = query.trim();
        if query.is_empty() {
            return Self::image_analysis();
        }
        self.generate(classify(query), query, ctx)
    }

    /// Build the response for an already classified query.
    pub fn generate(&self, topic: Topic, query: &str, ctx: &ResponseContext) -> Response {
        let month = ctx.now.month();
        let lower = query.to_lowercase();
        let mut response = Response::new(Some(topic));

        if ctx.opening_turn {
            response.push(framing::greeting(ctx.now.hour()));
        }

        response.push(framing::analysis_steps(query, &ctx.location));
        response.extend(topics::body(topic, &lower, month));

        if let Some(crop) = ctx.selected_crop.as_deref().and_then(|name| self.kb.crop(name)) {
            response.push(framing::crop_info_grid(crop));
        }

        response.push(framing::seasonal_guidance(month));
        response.push(framing::next_steps());
        response.push(framing::personalized(&ctx.location, month));

        response
    }

    pub fn image_analysis() -> Response {
        let mut response = Response::new(None);
        response.push(framing::image_analysis());
        response
    }

    /// Substitute reply when generation fails.
    pub fn temporary_issue() -> Response {
        let mut response = Response::new(None);
        response.push(framing::temporary_issue());
        response
    }
}

impl Default for ResponseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Section;
    use chrono::NaiveDate;

    fn at(month: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, month, 15)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn kinds(response: &Response) -> Vec<&'static str> {
        response.sections.iter().map(|s| s.kind()).collect()
    }

    #[test]
    fn test_section_order_with_greeting_and_crop() {
        let ctx = ResponseContext::new("Salem", at(7, 9))
            .with_crop(Some("rice".to_string()))
            .opening(true);
        let response = ResponseGenerator::new().respond("best crop for clay soil", &ctx);

        assert_eq!(response.topic, Some(Topic::Crops));
        assert_eq!(
            kinds(&response),
            vec![
                "greeting",
                "analysis",
                "recommendation",
                "info_grid",
                "seasonal_guidance",
                "next_steps",
                "personalized",
            ]
        );
        assert!(matches!(&response.sections[0], Section::Greeting { salutation } if salutation == "Good morning"));
    }

    #[test]
    fn test_no_greeting_after_opening_turn() {
        let ctx = ResponseContext::new("Salem", at(7, 20));
        let response = ResponseGenerator::new().respond("monsoon prep", &ctx);
        assert!(!response.has_section("greeting"));
        assert_eq!(response.topic, Some(Topic::Weather));
    }

    #[test]
    fn test_unknown_crop_adds_no_grid() {
        let ctx = ResponseContext::new("Salem", at(1, 10)).with_crop(Some("quinoa".to_string()));
        let response = ResponseGenerator::new().respond("harvest tips", &ctx);
        assert!(!response.has_section("info_grid"));
    }

    #[test]
    fn test_empty_query_is_image_analysis() {
        let ctx = ResponseContext::new("Salem", at(1, 10)).opening(true);
        let response = ResponseGenerator::new().respond("   ", &ctx);
        assert_eq!(response.topic, None);
        assert_eq!(kinds(&response), vec!["analysis"]);
    }

    #[test]
    fn test_analysis_step_keeps_original_case() {
        let ctx = ResponseContext::new("Salem", at(1, 10));
        let response = ResponseGenerator::new().respond("Wheat Sowing", &ctx);
        match &response.sections[0] {
            Section::Analysis(a) => assert_eq!(a.steps[0].text, "Analyzing \"Wheat Sowing\""),
            other => panic!("unexpected section {:?}", other),
        }
    }

    #[test]
    fn test_temporary_issue() {
        let response = ResponseGenerator::temporary_issue();
        assert!(matches!(&response.sections[..], [Section::Warning(c)] if c.title == "Temporary Issue"));
    }
}
