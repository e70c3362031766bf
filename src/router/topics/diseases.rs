use super::analysis;
use crate::response::{Block, Callout, InfoCard, Section};

pub(super) fn generate(query: &str) -> Vec<Section> {
    let mut sections = vec![analysis(
        "🦠",
        "Disease Diagnosis and Management",
        "Systematic approach to disease identification and control:",
        &[
            "Symptom analysis and pattern recognition",
            "Environmental factor assessment",
            "Pathogen identification (fungal, bacterial, or viral)",
            "Disease triangle evaluation (host, pathogen, environment)",
            "Integrated disease management planning",
        ],
    )];

    if query.contains("spots") || query.contains("blight") {
        sections.push(Section::InfoGrid {
            cards: vec![
                InfoCard::new(
                    "🟤 Blight",
                    "Dark spots with concentric rings, often with yellow halos. Spreads rapidly in humid conditions.",
                ),
                InfoCard::new(
                    "🟠 Rust",
                    "Orange-brown pustules on leaves, stems. Most common in cool, moist weather.",
                ),
                InfoCard::new(
                    "⚪ Powdery Mildew",
                    "White, powdery coating on leaves. Thrives in warm, dry days and cool nights.",
                ),
                InfoCard::new(
                    "🟫 Wilt",
                    "Sudden wilting despite adequate moisture. Vascular discoloration visible in stems.",
                ),
            ],
        });
    }

    sections.push(Section::Recommendation(Callout::new(
        "Disease Management Protocol",
        vec![
            Block::plain(
                "Prevention Strategies:",
                &[
                    "Use certified, disease-free seeds",
                    "Implement crop rotation (3-4 year cycle)",
                    "Ensure proper plant spacing for air circulation",
                    "Avoid overhead irrigation when possible",
                    "Remove and destroy infected plant debris",
                ],
            ),
            Block::plain(
                "Cultural Practices:",
                &[
                    "Plant resistant varieties when available",
                    "Optimize planting time to avoid disease-favorable conditions",
                    "Maintain proper nutrition (avoid excess nitrogen)",
                    "Improve soil drainage",
                ],
            ),
            Block::plain(
                "Treatment Options:",
                &[
                    "Organic: Neem oil, copper fungicides, beneficial microbes",
                    "Chemical: Systemic and contact fungicides (rotate modes of action)",
                    "Biological: Trichoderma, Bacillus species applications",
                ],
            ),
        ],
    )));

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blight_adds_identification_grid() {
        assert!(generate("leaf blight").iter().any(|s| s.kind() == "info_grid"));
        assert!(!generate("root rot").iter().any(|s| s.kind() == "info_grid"));
    }
}
