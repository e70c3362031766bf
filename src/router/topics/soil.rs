use super::{analysis, labeled};
use crate::response::{Block, Callout, InfoCard, Section};

pub(super) fn generate(query: &str) -> Vec<Section> {
    let mut sections = vec![analysis(
        "🌱",
        "Soil Analysis and Recommendations",
        "Based on your query about soil management, here's my comprehensive analysis:",
        &[
            "Identifying soil type and characteristics from your description",
            "Analyzing current soil conditions and potential issues",
            "Recommending specific soil improvement strategies",
            "Providing testing methods for soil health assessment",
            "Suggesting suitable crops for your soil type",
        ],
    )];

    if query.contains("test") || query.contains("ph") {
        sections.push(testing_protocol());
    }

    if query.contains("improve") || query.contains("fertility") {
        sections.push(improvement_plan());
    }

    sections.push(Section::InfoGrid {
        cards: vec![
            InfoCard::new("🧪 Ideal pH Range", "6.0-7.5 for most crops"),
            InfoCard::new("🍃 Organic Matter", "3-5% is optimal"),
            InfoCard::new("💧 Water Holding", "Should retain but not waterlog"),
            InfoCard::new("🌬️ Aeration", "Good pore space essential"),
        ],
    });

    sections
}

fn testing_protocol() -> Section {
    Section::Recommendation(Callout::new(
        "Soil Testing Protocol",
        vec![
            labeled(
                "Essential Soil Tests:",
                &[
                    ("pH Test", "Use digital meter or test strips (₹500-2000)"),
                    ("NPK Analysis", "Professional lab testing (₹300-800)"),
                    ("Organic Matter", "Walkley-Black method"),
                    ("Micronutrients", "DTPA extraction method"),
                ],
            ),
            labeled(
                "DIY Testing Methods:",
                &[
                    ("Jar Test", "Shake soil with water, let settle to see layers"),
                    ("Percolation Test", "Dig hole, fill with water, time drainage"),
                    ("pH Indicator Plants", "Hydrangeas change color based on pH"),
                ],
            ),
        ],
    ))
}

fn improvement_plan() -> Section {
    Section::Recommendation(Callout::new(
        "Soil Improvement Action Plan",
        vec![
            Block::plain(
                "Phase 1: Assessment (Week 1-2)",
                &[
                    "Conduct comprehensive soil testing",
                    "Identify main limiting factors",
                    "Determine organic matter content",
                ],
            ),
            Block::plain(
                "Phase 2: Amendment (Week 3-8)",
                &[
                    "Add compost (2-3 inches annually)",
                    "Apply lime if pH < 6.0, sulfur if pH > 7.5",
                    "Incorporate organic amendments before planting",
                ],
            ),
            Block::plain(
                "Phase 3: Maintenance (Ongoing)",
                &[
                    "Regular organic matter additions",
                    "Cover cropping during off-season",
                    "Minimize soil compaction",
                    "Monitor and adjust based on crop performance",
                ],
            ),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(sections: &[Section]) -> Vec<String> {
        sections
            .iter()
            .filter_map(|s| match s {
                Section::Recommendation(c) => Some(c.title.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_plain_soil_query() {
        let sections = generate("my loam is hard");
        assert_eq!(sections.len(), 2);
        assert!(titles(&sections).is_empty());
        assert_eq!(sections[1].kind(), "info_grid");
    }

    #[test]
    fn test_ph_and_fertility_add_both_boxes() {
        let sections = generate("soil ph and fertility");
        assert_eq!(
            titles(&sections),
            vec!["Soil Testing Protocol", "Soil Improvement Action Plan"]
        );
    }
}
