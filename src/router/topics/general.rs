use super::labeled;
use crate::response::{Block, Callout, InfoCard, Section};

pub(super) fn generate(query: &str) -> Vec<Section> {
    let guidance = Callout::new(
        "Comprehensive Agricultural Guidance",
        vec![
            labeled(
                "Key Areas to Consider:",
                &[
                    ("Crop Selection", "Choose varieties suited to your soil and climate"),
                    ("Soil Health", "Regular testing and organic matter enhancement"),
                    ("Water Management", "Efficient irrigation and conservation"),
                    ("Pest Control", "Integrated approach with regular monitoring"),
                    ("Market Planning", "Research demand and price trends"),
                ],
            ),
            Block::plain(
                "Best Practices for Success:",
                &[
                    "Keep detailed farm records",
                    "Stay updated with agricultural research",
                    "Network with successful farmers",
                    "Consider sustainable farming practices",
                    "Plan for climate variability",
                ],
            ),
        ],
    )
    .with_lead(format!(
        "I understand you're asking about \"{}\". Let me provide you with comprehensive guidance:",
        query
    ));

    vec![
        Section::Recommendation(guidance),
        Section::InfoGrid {
            cards: vec![
                InfoCard::new(
                    "📚 Learn More",
                    "Access agricultural extension services, attend farmer training programs",
                ),
                InfoCard::new(
                    "🤝 Connect",
                    "Join farmer producer organizations, cooperatives for better market access",
                ),
                InfoCard::new("💡 Innovate", "Adopt new technologies, precision farming techniques"),
                InfoCard::new(
                    "🌱 Sustain",
                    "Focus on long-term soil health and environmental conservation",
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_quotes_query() {
        let sections = generate("hello there");
        match &sections[0] {
            Section::Recommendation(c) => {
                assert!(c.lead.as_deref().unwrap().contains("\"hello there\""));
            }
            other => panic!("unexpected section {:?}", other),
        }
    }
}
