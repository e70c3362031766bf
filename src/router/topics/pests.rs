use super::analysis;
use crate::response::{Block, Bullet, Callout, InfoCard, Section};

pub(super) fn generate(query: &str) -> Vec<Section> {
    let mut sections = vec![analysis(
        "🛡",
        "Integrated Pest Management Analysis",
        "Analyzing pest-related concerns using IPM principles:",
        &[
            "Identifying pest species and lifecycle stage",
            "Assessing economic threshold and damage level",
            "Evaluating biological, cultural, and chemical controls",
            "Developing integrated management strategy",
            "Planning monitoring and follow-up actions",
        ],
    )];

    if query.contains("identify") || query.contains("what") {
        sections.push(identification_guide());
    }

    sections.push(Section::Recommendation(Callout::new(
        "Integrated Pest Management Strategy",
        vec![
            Block::plain(
                "Prevention (First Priority):",
                &[
                    "Crop rotation to break pest cycles",
                    "Resistant varieties when available",
                    "Proper field sanitation",
                    "Beneficial insect habitat creation",
                ],
            ),
            Block::plain(
                "Monitoring (Continuous):",
                &[
                    "Weekly field scouting",
                    "Pheromone traps for early detection",
                    "Economic threshold assessment",
                    "Weather-based pest prediction",
                ],
            ),
            Block::plain(
                "Control (When Needed):",
                &[
                    "Biological: Release beneficial insects",
                    "Mechanical: Traps, barriers, hand-picking",
                    "Chemical: Selective pesticides as last resort",
                ],
            ),
        ],
    )));

    sections.push(Section::Warning(Callout::new(
        "Important Precautions",
        vec![Block::untitled(
            [
                "Always read and follow pesticide labels",
                "Use protective equipment during application",
                "Respect pre-harvest intervals",
                "Avoid spraying during bee activity periods",
                "Rotate pesticide modes of action to prevent resistance",
            ]
            .iter()
            .map(|s| Bullet::plain(*s))
            .collect(),
        )],
    )));

    sections
}

fn identification_guide() -> Section {
    Section::InfoGrid {
        cards: vec![
            InfoCard::new(
                "🐛 Aphids",
                "Small, soft-bodied, green/black insects on young shoots and leaves. Cause leaf curling and honeydew secretion.",
            ),
            InfoCard::new(
                "🦋 Whiteflies",
                "Tiny white flying insects on leaf undersides. Cause yellowing and virus transmission.",
            ),
            InfoCard::new(
                "🐛 Thrips",
                "Tiny, slender insects causing silver streaks on leaves. Most active during hot, dry weather.",
            ),
            InfoCard::new(
                "🐛 Caterpillars",
                "Various species bore into fruits, stems, or eat leaves. Look for entry holes and frass.",
            ),
        ],
    }
}
