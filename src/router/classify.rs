//! Keyword topic classification.
//!
//! A query is lowercased and tested against [`TOPIC_RULES`] in order; the first
//! rule with any keyword contained in the query wins. Containment is plain
//! substring matching, so "phosphorus" hits the Soil keyword "ph" and "seed rate"
//! hits Crops before anything more specific. The rule order is a contract.

use serde::{Deserialize, Serialize};

/// Query category selecting the response template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Crops,
    Soil,
    Pests,
    Diseases,
    Fertilizers,
    Weather,
    Irrigation,
    Market,
    General,
}

impl Topic {
    pub fn display_name(&self) -> &'static str {
        match self {
            Topic::Crops => "Crops",
            Topic::Soil => "Soil",
            Topic::Pests => "Pests",
            Topic::Diseases => "Diseases",
            Topic::Fertilizers => "Fertilizers",
            Topic::Weather => "Weather",
            Topic::Irrigation => "Irrigation",
            Topic::Market => "Market",
            Topic::General => "General",
        }
    }
}

/// One classification rule: any keyword contained in the query selects the topic.
#[derive(Debug)]
pub struct TopicRule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
}

impl TopicRule {
    /// `query` must already be lowercase.
    pub fn matches(&self, query: &str) -> bool {
        self.keywords.iter().any(|keyword| query.contains(keyword))
    }
}

/// Ordered rules, highest priority first. General is the implicit fallback.
pub static TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        topic: Topic::Crops,
        keywords: &["crop", "plant", "grow", "variety", "seed", "harvest", "yield", "cultivation"],
    },
    TopicRule {
        topic: Topic::Soil,
        keywords: &["soil", "ph", "fertility", "nutrients", "clay", "sandy", "loam", "compost"],
    },
    TopicRule {
        topic: Topic::Pests,
        keywords: &["pest", "insect", "bug", "aphid", "caterpillar", "control", "infestation"],
    },
    TopicRule {
        topic: Topic::Diseases,
        keywords: &["disease", "blight", "fungus", "virus", "infection", "rot", "wilt", "spots"],
    },
    TopicRule {
        topic: Topic::Fertilizers,
        keywords: &["fertilizer", "nutrient", "nitrogen", "phosphorus", "potassium", "npk", "feed"],
    },
    TopicRule {
        topic: Topic::Weather,
        keywords: &["weather", "rain", "drought", "temperature", "climate", "season", "monsoon"],
    },
    TopicRule {
        topic: Topic::Irrigation,
        keywords: &["water", "irrigation", "drip", "sprinkler", "schedule", "watering"],
    },
    TopicRule {
        topic: Topic::Market,
        keywords: &["price", "market", "sell", "profit", "cost", "economics", "income"],
    },
];

/// Classify a free-text query.
pub fn classify(query: &str) -> Topic {
    let lower = query.to_lowercase();
    TOPIC_RULES
        .iter()
        .find(|rule| rule.matches(&lower))
        .map(|rule| rule.topic)
        .unwrap_or(Topic::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order_is_fixed() {
        let order: Vec<Topic> = TOPIC_RULES.iter().map(|r| r.topic).collect();
        assert_eq!(
            order,
            vec![
                Topic::Crops,
                Topic::Soil,
                Topic::Pests,
                Topic::Diseases,
                Topic::Fertilizers,
                Topic::Weather,
                Topic::Irrigation,
                Topic::Market,
            ]
        );
    }

    #[test]
    fn test_each_topic_reachable() {
        assert_eq!(classify("Which variety should I choose?"), Topic::Crops);
        assert_eq!(classify("my loam feels hard"), Topic::Soil);
        assert_eq!(classify("caterpillar infestation"), Topic::Pests);
        assert_eq!(classify("leaf blight on tomato"), Topic::Diseases);
        assert_eq!(classify("how much urea? npk advice"), Topic::Fertilizers);
        assert_eq!(classify("monsoon forecast"), Topic::Weather);
        assert_eq!(classify("drip or sprinkler?"), Topic::Irrigation);
        assert_eq!(classify("where to sell at a good price"), Topic::Market);
        assert_eq!(classify("hello there"), Topic::General);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("HARVEST TIME"), Topic::Crops);
    }

    #[test]
    fn test_priority_crops_over_soil() {
        assert_eq!(classify("How can I improve my clay soil for better crop yield?"), Topic::Crops);
    }

    #[test]
    fn test_substring_false_positives_preserved() {
        // "phosphorus" contains "ph"
        assert_eq!(classify("phosphorus deficiency"), Topic::Soil);
        // "seed rate" hits the Crops keyword before anything else
        assert_eq!(classify("seed rate calculation"), Topic::Crops);
        // "control" sends disease control to Pests
        assert_eq!(classify("disease control"), Topic::Pests);
        // "aphids" contains "ph" as well
        assert_eq!(classify("aphids everywhere"), Topic::Soil);
        // "growth" contains "grow"
        assert_eq!(classify("slow growth in rain"), Topic::Crops);
    }

    #[test]
    fn test_empty_query_is_general() {
        assert_eq!(classify(""), Topic::General);
    }
}
