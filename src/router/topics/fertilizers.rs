use super::{analysis, labeled};
use crate::response::{Block, Callout, InfoCard, Section};

pub(super) fn generate(query: &str) -> Vec<Section> {
    let program = if query.contains("organic") {
        organic_program()
    } else {
        balanced_program()
    };

    vec![
        analysis(
            "🧪",
            "Nutrient Management Analysis",
            "Comprehensive fertilizer recommendation based on crop needs and soil conditions:",
            &[
                "Soil nutrient analysis and deficiency identification",
                "Crop-specific nutrient requirement calculation",
                "Fertilizer source selection and timing optimization",
                "Application method and rate determination",
                "Monitoring and adjustment planning",
            ],
        ),
        Section::Recommendation(program),
        deficiency_guide(),
    ]
}

fn organic_program() -> Callout {
    Callout::new(
        "Organic Fertilizer Program",
        vec![
            Block::plain(
                "Compost Preparation (3-6 months):",
                &[
                    "Mix green (3 parts) and brown (1 part) materials",
                    "Maintain moisture at 50-60%",
                    "Turn every 2-3 weeks",
                    "Ready when dark, crumbly, and earthy-smelling",
                ],
            ),
            labeled(
                "Application Schedule:",
                &[
                    ("Basal", "Apply 5-10 tons compost per hectare before planting"),
                    ("Top Dress", "Apply liquid organic fertilizer every 15 days"),
                    ("Foliar", "Seaweed extract spray during vegetative growth"),
                ],
            ),
            labeled(
                "Specialized Organic Sources:",
                &[
                    ("Nitrogen", "Neem cake, fish emulsion, blood meal"),
                    ("Phosphorus", "Bone meal, rock phosphate"),
                    ("Potassium", "Wood ash, kelp meal, granite dust"),
                ],
            ),
        ],
    )
}

fn balanced_program() -> Callout {
    Callout::new(
        "Balanced Fertilizer Program",
        vec![
            Block::plain(
                "Soil Test-Based Application:",
                &[
                    "Get soil tested every 2-3 years",
                    "Apply fertilizers based on soil nutrient status",
                    "Consider crop removal rates",
                ],
            ),
            labeled(
                "Split Application Strategy:",
                &[
                    ("Basal (50%)", "Apply before or at planting"),
                    ("First Top Dress (30%)", "At active tillering/branching"),
                    ("Second Top Dress (20%)", "At flowering/fruit development"),
                ],
            ),
            labeled(
                "Common NPK Ratios:",
                &[
                    ("Leafy Vegetables", "4:2:3 (high N for foliage)"),
                    ("Fruiting Crops", "2:3:4 (high P & K for fruits)"),
                    ("Root Crops", "2:4:3 (high P for root development)"),
                ],
            ),
        ],
    )
}

fn deficiency_guide() -> Section {
    Section::InfoGrid {
        cards: vec![
            InfoCard::new(
                "🟡 Nitrogen Deficiency",
                "Yellowing of older leaves, stunted growth, poor tillering. Apply urea or ammonium sulfate.",
            ),
            InfoCard::new(
                "🟣 Phosphorus Deficiency",
                "Purple discoloration, poor root growth, delayed maturity. Apply DAP or SSP.",
            ),
            InfoCard::new(
                "🟤 Potassium Deficiency",
                "Brown leaf margins, weak stems, poor fruit quality. Apply MOP or SOP.",
            ),
            InfoCard::new(
                "🟡 Iron Deficiency",
                "Yellowing between leaf veins (young leaves). Apply iron chelate or ferrous sulfate.",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_choice() {
        let organic = generate("organic fertilizer options");
        assert!(matches!(&organic[1], Section::Recommendation(c) if c.title == "Organic Fertilizer Program"));

        let balanced = generate("npk dose");
        assert!(matches!(&balanced[1], Section::Recommendation(c) if c.title == "Balanced Fertilizer Program"));
        assert_eq!(balanced.len(), 3);
    }
}
