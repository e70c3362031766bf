use super::{analysis, labeled};
use crate::response::{Block, Callout, InfoCard, Section};

pub(super) fn generate() -> Vec<Section> {
    vec![
        analysis(
            "💧",
            "Smart Irrigation Planning",
            "Water management optimization based on crop needs and efficiency:",
            &[
                "Crop water requirement calculation",
                "Soil water holding capacity assessment",
                "Irrigation system efficiency evaluation",
                "Scheduling optimization for maximum efficiency",
                "Water conservation strategy development",
            ],
        ),
        Section::Recommendation(Callout::new(
            "Efficient Irrigation Schedule",
            vec![
                labeled(
                    "Daily Water Requirements (mm/day):",
                    &[
                        ("Rice", "8-10 mm (standing water maintained)"),
                        ("Wheat", "4-6 mm (depending on growth stage)"),
                        ("Vegetables", "5-8 mm (higher during fruit development)"),
                        ("Cotton", "5-7 mm (critical during flowering)"),
                    ],
                ),
                labeled(
                    "Optimal Irrigation Timing:",
                    &[
                        ("Early Morning (6-8 AM)", "Minimal evaporation losses"),
                        ("Evening (4-6 PM)", "Good for foliar applications"),
                        ("Avoid Midday", "High evaporation and leaf burning"),
                    ],
                ),
                Block::plain(
                    "Irrigation Indicators:",
                    &[
                        "Soil moisture at 2-3 inch depth",
                        "Plant stress symptoms (wilting, leaf color)",
                        "Tensiometer readings (if available)",
                        "Weather forecast consideration",
                    ],
                ),
            ],
        )),
        Section::InfoGrid {
            cards: vec![
                InfoCard::new(
                    "💧 Drip Irrigation",
                    "Efficiency: 90-95%. Best for: Row crops, orchards. Water saving: 30-50%. Cost: ₹40,000-80,000/acre",
                ),
                InfoCard::new(
                    "🚿 Sprinkler System",
                    "Efficiency: 75-85%. Best for: Field crops, vegetables. Water saving: 20-40%. Cost: ₹25,000-50,000/acre",
                ),
                InfoCard::new(
                    "🌊 Surface Irrigation",
                    "Efficiency: 60-70%. Best for: Paddy, large fields. Traditional method. Cost: ₹5,000-15,000/acre",
                ),
                InfoCard::new(
                    "💦 Micro-sprinklers",
                    "Efficiency: 80-90%. Best for: Orchards, nurseries. Good coverage. Cost: ₹35,000-70,000/acre",
                ),
            ],
        },
    ]
}
