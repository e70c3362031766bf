use super::{analysis, labeled};
use crate::response::{Block, Callout, InfoCard, Section};

pub(super) fn generate() -> Vec<Section> {
    vec![
        analysis(
            "📈",
            "Market Intelligence and Economics",
            "Agricultural market analysis and profit optimization:",
            &[
                "Current market price trend analysis",
                "Demand-supply pattern evaluation",
                "Seasonal price variation assessment",
                "Value addition opportunity identification",
                "Marketing strategy development",
            ],
        ),
        Section::Recommendation(Callout::new(
            "Market-Driven Crop Planning",
            vec![
                labeled(
                    "High-Value Crops (Current Market Trends):",
                    &[
                        ("Exotic Vegetables", "Broccoli, Capsicum, Cherry tomatoes"),
                        ("Spices", "Turmeric, Ginger, Cardamom"),
                        ("Medicinal Plants", "Aloe vera, Ashwagandha, Tulsi"),
                        ("Fruits", "Dragon fruit, Avocado, Blueberries"),
                    ],
                ),
                Block::plain(
                    "Value Addition Opportunities:",
                    &[
                        "Processing: Dehydration, juicing, pickling",
                        "Direct marketing: Farmer's markets, online sales",
                        "Certification: Organic, GAP certification",
                        "Contract farming: Tie-ups with food companies",
                    ],
                ),
                Block::plain(
                    "Market Intelligence Sources:",
                    &[
                        "eNAM (National Agriculture Market)",
                        "AGMARKNET portal",
                        "Local mandi price updates",
                        "Export-import data analysis",
                    ],
                ),
            ],
        )),
        Section::InfoGrid {
            cards: vec![
                InfoCard::new(
                    "🌾 Cereals",
                    "Investment: ₹25,000/acre. Returns: ₹40,000/acre. Net Profit: ₹15,000. ROI: 60%",
                ),
                InfoCard::new(
                    "🥬 Vegetables",
                    "Investment: ₹50,000/acre. Returns: ₹120,000/acre. Net Profit: ₹70,000. ROI: 140%",
                ),
                InfoCard::new(
                    "🌿 Spices",
                    "Investment: ₹40,000/acre. Returns: ₹100,000/acre. Net Profit: ₹60,000. ROI: 150%",
                ),
                InfoCard::new(
                    "🍇 Fruits",
                    "Investment: ₹80,000/acre. Returns: ₹150,000/acre. Net Profit: ₹70,000. ROI: 88%",
                ),
            ],
        },
    ]
}
