use super::analysis;
use crate::response::{Block, Callout, Section, WeatherImpact};
use crate::utils::WeatherWindow;

pub(super) fn generate(month: u32) -> Vec<Section> {
    let mut sections = vec![analysis(
        "🌤️",
        "Weather-Based Agricultural Planning",
        "Weather impact assessment and adaptive farming strategies:",
        &[
            "Current weather pattern analysis",
            "Short and long-term forecast evaluation",
            "Crop-specific weather requirement matching",
            "Risk assessment for weather-related challenges",
            "Adaptive management strategy development",
        ],
    )];

    if let Some(window) = WeatherWindow::from_month(month) {
        sections.push(Section::WeatherImpact(impact(window)));
    }

    sections.push(Section::Recommendation(Callout::new(
        "Weather-Adaptive Farming Strategies",
        vec![
            Block::plain(
                "Monsoon Management:",
                &[
                    "Ensure proper field drainage systems",
                    "Apply fungicides preventively during high humidity",
                    "Harvest mature crops before heavy rains",
                    "Store seeds and fertilizers in moisture-proof containers",
                ],
            ),
            Block::plain(
                "Drought Preparedness:",
                &[
                    "Install efficient irrigation systems (drip/sprinkler)",
                    "Use mulching to conserve soil moisture",
                    "Select drought-tolerant varieties",
                    "Implement rainwater harvesting",
                ],
            ),
            Block::plain(
                "Extreme Weather Response:",
                &[
                    "Monitor weather forecasts daily",
                    "Have emergency action plans ready",
                    "Maintain crop insurance coverage",
                    "Diversify crops to spread risk",
                ],
            ),
        ],
    )));

    sections
}

fn impact(window: WeatherWindow) -> WeatherImpact {
    match window {
        WeatherWindow::Monsoon => WeatherImpact {
            icon: "🌧️".to_string(),
            heading: "Current Monsoon Impact Analysis".to_string(),
            positives: "Good soil moisture for kharif crops, reduced irrigation costs, favorable for rice cultivation".to_string(),
            challenges: "Risk of waterlogging, increased pest and disease pressure, delayed field operations".to_string(),
            actions: "Monitor drainage, apply preventive fungicides, ensure proper plant spacing".to_string(),
        },
        WeatherWindow::Winter => WeatherImpact {
            icon: "❄️".to_string(),
            heading: "Current Winter Impact Analysis".to_string(),
            positives: "Cool weather favors rabi crops, lower pest pressure, good for crop quality".to_string(),
            challenges: "Risk of frost damage, slower growth rates, limited water availability".to_string(),
            actions: "Monitor frost warnings, adjust irrigation, plan harvest timing".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_by_month() {
        let july = generate(7);
        assert!(matches!(&july[1], Section::WeatherImpact(w) if w.icon == "🌧️"));

        let january = generate(1);
        assert!(matches!(&january[1], Section::WeatherImpact(w) if w.icon == "❄️"));

        // March has no impact note
        let march = generate(3);
        assert_eq!(march.len(), 2);
        assert!(!march.iter().any(|s| s.kind() == "weather_impact"));
    }
}
