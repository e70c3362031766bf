//! Framing sections shared by every topic response.
//!
//! Greeting, analysis steps, crop info grid, seasonal guidance, next steps and
//! personalized recommendations. Also the two out-of-band replies: image
//! analysis and the "Temporary Issue" substitute.

use crate::knowledge::CropProfile;
use crate::response::{
    AnalysisSection, Block, Bullet, Callout, FollowUp, InfoCard, Personalized, Section,
};
use crate::utils::{salutation_for_hour, truncate_with_ellipsis, Season};

/// Characters of the query quoted in the first analysis step.
pub const QUERY_PREVIEW_CHARS: usize = 50;

pub fn greeting(hour: u32) -> Section {
    Section::Greeting {
        salutation: salutation_for_hour(hour).to_string(),
    }
}

/// The five-step "Step-by-Step Analysis Process" block.
pub fn analysis_steps(query: &str, location: &str) -> Section {
    Section::Analysis(AnalysisSection {
        icon: "🔍".to_string(),
        title: "Step-by-Step Analysis Process".to_string(),
        intro: None,
        steps: vec![
            Bullet::labeled(
                "Query Understanding",
                format!(
                    "Analyzing \"{}\"",
                    truncate_with_ellipsis(query, QUERY_PREVIEW_CHARS)
                ),
            ),
            Bullet::labeled(
                "Context Assessment",
                format!("Considering your location ({}) and current season", location),
            ),
            Bullet::labeled(
                "Database Search",
                "Consulting agricultural research and best practices",
            ),
            Bullet::labeled(
                "Personalization",
                "Tailoring recommendations to your specific needs",
            ),
            Bullet::labeled(
                "Solution Generation",
                "Creating actionable step-by-step guidance",
            ),
        ],
        follow_up: None,
    })
}

/// Attribute cards for the crop picked in the crop selector.
pub fn crop_info_grid(crop: &CropProfile) -> Section {
    Section::InfoGrid {
        cards: vec![
            InfoCard::new("🌱 Planting Season", crop.season),
            InfoCard::new("🌍 Soil Type", crop.soil_type),
            InfoCard::new("💧 Water Need", crop.water_requirement),
            InfoCard::new("⏱️ Duration", crop.duration),
            InfoCard::new("📊 Expected Yield", crop.expected_yield),
            InfoCard::new("💰 Market Price", crop.market_price),
        ],
    }
}

pub fn seasonal_guidance(month: u32) -> Section {
    let focus = match Season::from_month(month) {
        Season::Kharif => Block::plain(
            "Monsoon Season (Kharif) - Current Focus:",
            &[
                "Monitor rainfall and adjust planting accordingly",
                "Ensure proper drainage to prevent waterlogging",
                "Apply pre-emergence herbicides for weed control",
                "Regular pest monitoring due to high humidity",
            ],
        ),
        Season::Rabi => Block::plain(
            "Winter Season (Rabi) - Current Focus:",
            &[
                "Take advantage of cool weather for optimal growth",
                "Monitor for frost warnings and protect sensitive crops",
                "Reduce watering frequency but maintain soil moisture",
                "Plan for harvest and post-harvest storage",
            ],
        ),
        Season::Zaid => Block::plain(
            "Summer Season (Zaid) - Current Focus:",
            &[
                "Focus on heat-tolerant and quick-maturing crops",
                "Implement efficient irrigation systems",
                "Use shade nets and mulching to reduce heat stress",
                "Plan for next season's crop preparation",
            ],
        ),
    };

    Section::SeasonalGuidance { focus }
}

pub fn next_steps() -> Section {
    Section::NextSteps {
        steps: [
            "Monitor your crop conditions daily",
            "Implement the recommended practices gradually",
            "Keep records of what works best for your conditions",
            "Consult local agricultural experts for specific guidance",
            "Plan for the next growing season based on results",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    }
}

pub fn personalized(location: &str, month: u32) -> Section {
    Section::Personalized(Personalized {
        location: location.to_string(),
        season: Season::from_month(month).display().to_string(),
        tips: [
            "Consider local climate patterns and rainfall distribution",
            "Connect with nearby agricultural universities for research updates",
            "Join local farmer WhatsApp groups for real-time market information",
            "Visit nearby KVK (Krishi Vigyan Kendra) for hands-on training",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        follow_ups: vec![
            FollowUp {
                label: "Implementation Steps".to_string(),
                question: "How do I implement this advice step by step?".to_string(),
            },
            FollowUp {
                label: "Cost Analysis".to_string(),
                question: "What are the costs involved?".to_string(),
            },
            FollowUp {
                label: "Seasonal Considerations".to_string(),
                question: "Any seasonal variations to consider?".to_string(),
            },
        ],
    })
}

/// Reply to an image sent without any text.
pub fn image_analysis() -> Section {
    Section::Analysis(AnalysisSection {
        icon: "📸".to_string(),
        title: "Image Analysis Process".to_string(),
        intro: Some("I can help you analyze agricultural images! Here's how:".to_string()),
        steps: [
            "Upload a clear, well-lit image of your crop, soil, or pest issue",
            "I'll analyze the visual symptoms and patterns",
            "Compare with agricultural databases for identification",
            "Provide specific diagnosis and treatment recommendations",
            "Suggest follow-up monitoring and preventive measures",
        ]
        .iter()
        .map(|s| Bullet::plain(*s))
        .collect(),
        follow_up: Some(Block::plain(
            "For best results, please describe:",
            &[
                "What crop or plant is shown",
                "What specific problem you're seeing",
                "When you first noticed the issue",
                "Any recent weather or treatment history",
            ],
        )),
    })
}

/// Fixed substitute shown when response generation fails.
pub fn temporary_issue() -> Section {
    Section::Warning(
        Callout::new("Temporary Issue", Vec::new()).with_lead(
            "I'm experiencing a temporary issue processing your request. Please try again, \
             or rephrase your question. I'm here to help with all your agricultural needs!",
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_steps_truncate_long_query() {
        let query = "x".repeat(80);
        match analysis_steps(&query, "Salem") {
            Section::Analysis(a) => {
                assert_eq!(a.steps.len(), 5);
                assert_eq!(a.steps[0].text, format!("Analyzing \"{}...\"", "x".repeat(50)));
                assert!(a.steps[1].text.contains("Salem"));
            }
            other => panic!("unexpected section {:?}", other),
        }
    }

    #[test]
    fn test_personalized_uses_season_display() {
        match personalized("Salem, Tamil Nadu, India", 7) {
            Section::Personalized(p) => {
                assert_eq!(p.season, "Kharif (Monsoon)");
                assert_eq!(p.follow_ups.len(), 3);
            }
            other => panic!("unexpected section {:?}", other),
        }
    }

    #[test]
    fn test_seasonal_guidance_by_month() {
        match seasonal_guidance(4) {
            Section::SeasonalGuidance { focus } => {
                assert_eq!(focus.heading.as_deref(), Some("Summer Season (Zaid) - Current Focus:"));
            }
            other => panic!("unexpected section {:?}", other),
        }
    }
}
