//! Topic body generators.
//!
//! Each generator receives the lowercased query and the current month and
//! returns the sections that sit between the analysis steps and the shared
//! closing framing. Secondary keyword checks pick among fixed fragments.

mod crops;
mod diseases;
mod fertilizers;
mod general;
mod irrigation;
mod market;
mod pests;
mod soil;
mod weather;

use super::Topic;
use crate::response::{AnalysisSection, Block, Bullet, Section};

/// Topic-specific body sections.
pub fn body(topic: Topic, query: &str, month: u32) -> Vec<Section> {
    match topic {
        Topic::Crops => crops::generate(query, month),
        Topic::Soil => soil::generate(query),
        Topic::Pests => pests::generate(query),
        Topic::Diseases => diseases::generate(query),
        Topic::Fertilizers => fertilizers::generate(query),
        Topic::Weather => weather::generate(month),
        Topic::Irrigation => irrigation::generate(),
        Topic::Market => market::generate(),
        Topic::General => general::generate(query),
    }
}

/// Icon-headed analysis block with an intro line and unlabeled steps.
pub(crate) fn analysis(icon: &str, title: &str, intro: &str, steps: &[&str]) -> Section {
    Section::Analysis(AnalysisSection {
        icon: icon.to_string(),
        title: title.to_string(),
        intro: Some(intro.to_string()),
        steps: steps.iter().map(|s| Bullet::plain(*s)).collect(),
        follow_up: None,
    })
}

/// Headed block of `(label, text)` bullets.
pub(crate) fn labeled(heading: &str, items: &[(&str, &str)]) -> Block {
    Block::new(
        heading,
        items
            .iter()
            .map(|(label, text)| Bullet::labeled(*label, *text))
            .collect(),
    )
}
