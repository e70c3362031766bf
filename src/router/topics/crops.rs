use super::labeled;
use crate::response::{Block, Callout, Section};
use crate::utils::Season;

pub(super) fn generate(query: &str, month: u32) -> Vec<Section> {
    let mut sections = Vec::new();

    if query.contains("best") && (query.contains("crop") || query.contains("plant")) {
        sections.push(Section::Recommendation(Callout::new(
            "Crop Selection Strategy",
            selection_blocks(query, month),
        )));
    }

    sections
}

/// Soil-specific picks when the query names clay or sandy soil, otherwise
/// the crops of the current season.
fn selection_blocks(query: &str, month: u32) -> Vec<Block> {
    if query.contains("clay") {
        return vec![
            labeled(
                "For Clay Soil:",
                &[
                    ("Rice", "Excellent water retention matches rice needs"),
                    ("Wheat", "Deep roots can penetrate clay effectively"),
                    ("Cotton", "Thrives in black cotton soil"),
                    ("Sugarcane", "Benefits from high nutrient retention"),
                ],
            ),
            Block::plain(
                "Clay Soil Management Tips:",
                &[
                    "Add organic compost to improve structure",
                    "Create raised beds for better drainage",
                    "Avoid working when soil is wet",
                ],
            ),
        ];
    }

    if query.contains("sandy") {
        return vec![
            labeled(
                "For Sandy Soil:",
                &[
                    ("Root Vegetables", "Carrots, radishes, potatoes"),
                    ("Melons", "Watermelon, muskmelon"),
                    ("Groundnut", "Prefers well-drained conditions"),
                    ("Early Vegetables", "Quick-growing leafy greens"),
                ],
            ),
            Block::plain(
                "Sandy Soil Management:",
                &[
                    "Frequent, light irrigation",
                    "Heavy mulching to retain moisture",
                    "Regular organic matter additions",
                ],
            ),
        ];
    }

    let season = Season::from_month(month);
    let crops: &[&str] = match season {
        Season::Kharif => &[
            "Rice, Maize, Cotton, Sugarcane",
            "Pulses: Arhar, Moong, Urad",
            "Oilseeds: Soybean, Sunflower",
            "Fodder crops for livestock",
        ],
        Season::Rabi => &[
            "Wheat, Barley, Oats",
            "Gram, Lentil, Pea",
            "Mustard, Safflower",
            "Winter vegetables",
        ],
        Season::Zaid => &[
            "Fodder crops",
            "Summer vegetables",
            "Watermelon, Muskmelon",
            "Green fodder for animals",
        ],
    };

    vec![Block::plain(
        format!("Current Season ({}):", season.name()),
        crops,
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy(query: &str, month: u32) -> Callout {
        match generate(query, month).into_iter().next() {
            Some(Section::Recommendation(callout)) => callout,
            other => panic!("expected a recommendation, got {:?}", other),
        }
    }

    #[test]
    fn test_no_strategy_without_best() {
        assert!(generate("when to harvest rice", 7).is_empty());
        assert!(generate("best time to sell", 7).is_empty());
    }

    #[test]
    fn test_clay_beats_season() {
        let callout = strategy("best crops for clay soil", 7);
        assert_eq!(callout.title, "Crop Selection Strategy");
        assert_eq!(callout.blocks[0].heading.as_deref(), Some("For Clay Soil:"));
    }

    #[test]
    fn test_sandy() {
        let callout = strategy("best plants for sandy land", 1);
        assert_eq!(callout.blocks[0].heading.as_deref(), Some("For Sandy Soil:"));
    }

    #[test]
    fn test_seasonal_fallback() {
        let kharif = strategy("best crop now", 8);
        assert_eq!(kharif.blocks[0].heading.as_deref(), Some("Current Season (Kharif):"));
        let rabi = strategy("best crop now", 12);
        assert_eq!(rabi.blocks[0].bullets[0].text, "Wheat, Barley, Oats");
        let zaid = strategy("best crop now", 5);
        assert_eq!(zaid.blocks[0].heading.as_deref(), Some("Current Season (Zaid):"));
    }
}
