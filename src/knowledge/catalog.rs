//! Knowledge catalog pages.
//!
//! Browsable per-category pages built from the knowledge-base records, plus
//! two static pages (irrigation methods, farm equipment) with no backing table.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::KnowledgeBase;
use crate::error::ValidationError;
use crate::response::Bullet;
use crate::utils::capitalize;

/// Catalog category tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogCategory {
    Crops,
    Soil,
    Pests,
    Irrigation,
    Fertilizers,
    Equipment,
}

impl FromStr for CatalogCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "crops" => Ok(CatalogCategory::Crops),
            "soil" => Ok(CatalogCategory::Soil),
            "pests" => Ok(CatalogCategory::Pests),
            "irrigation" => Ok(CatalogCategory::Irrigation),
            "fertilizers" => Ok(CatalogCategory::Fertilizers),
            "equipment" => Ok(CatalogCategory::Equipment),
            other => Err(ValidationError::UnknownOption {
                field: "catalog category",
                value: other.to_string(),
            }),
        }
    }
}

/// One record on a catalog page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub heading: String,
    pub details: Vec<Bullet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub icon: String,
    pub title: String,
    pub entries: Vec<CatalogEntry>,
}

/// Headline counts shown on the catalog landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub crop_varieties: usize,
    pub pests_and_diseases: usize,
    pub soil_types: usize,
}

impl CatalogStats {
    pub fn from_knowledge_base(kb: &KnowledgeBase) -> Self {
        Self {
            crop_varieties: kb.crops().len(),
            pests_and_diseases: kb.pests().len() + kb.diseases().len(),
            soil_types: kb.soils().len(),
        }
    }
}

/// Build the page for a category.
pub fn build_page(kb: &KnowledgeBase, category: CatalogCategory) -> CatalogPage {
    match category {
        CatalogCategory::Crops => crops_page(kb),
        CatalogCategory::Soil => soil_page(kb),
        CatalogCategory::Pests => pests_page(kb),
        CatalogCategory::Irrigation => irrigation_page(),
        CatalogCategory::Fertilizers => fertilizers_page(kb),
        CatalogCategory::Equipment => equipment_page(),
    }
}

fn crops_page(kb: &KnowledgeBase) -> CatalogPage {
    let entries = kb
        .crops()
        .iter()
        .map(|crop| CatalogEntry {
            heading: capitalize(crop.key),
            details: vec![
                Bullet::labeled("Season", crop.season),
                Bullet::labeled("Duration", crop.duration),
                Bullet::labeled("Soil", crop.soil_type),
                Bullet::labeled("Water", crop.water_requirement),
                Bullet::labeled("Expected Yield", crop.expected_yield),
                Bullet::labeled("Market Price", crop.market_price),
            ],
        })
        .collect();

    CatalogPage {
        icon: "🌾".to_string(),
        title: "Crops & Varieties".to_string(),
        entries,
    }
}

fn soil_page(kb: &KnowledgeBase) -> CatalogPage {
    let entries = kb
        .soils()
        .iter()
        .map(|soil| CatalogEntry {
            heading: format!("{} Soil", capitalize(soil.key)),
            details: vec![
                Bullet::labeled("Characteristics", soil.characteristics),
                Bullet::labeled("Advantages", soil.advantages.join(", ")),
                Bullet::labeled("Challenges", soil.challenges.join(", ")),
                Bullet::labeled("Suitable Crops", soil.suitable_crops.join(", ")),
                Bullet::labeled("Improvements", soil.improvements.join(", ")),
            ],
        })
        .collect();

    CatalogPage {
        icon: "🌱".to_string(),
        title: "Soil Management".to_string(),
        entries,
    }
}

fn pests_page(kb: &KnowledgeBase) -> CatalogPage {
    let entries = kb
        .pests()
        .iter()
        .map(|pest| CatalogEntry {
            heading: capitalize(pest.key),
            details: vec![
                Bullet::labeled("Identification", pest.identification),
                Bullet::labeled("Symptoms", pest.symptoms.join(", ")),
                Bullet::labeled("Treatment", pest.treatment.join(", ")),
                Bullet::labeled("Prevention", pest.prevention.join(", ")),
                Bullet::labeled("Severity", pest.severity),
            ],
        })
        .collect();

    CatalogPage {
        icon: "🛡".to_string(),
        title: "Pest & Disease Control".to_string(),
        entries,
    }
}

fn fertilizers_page(kb: &KnowledgeBase) -> CatalogPage {
    let entries = kb
        .nutrients()
        .iter()
        .map(|nutrient| CatalogEntry {
            heading: capitalize(nutrient.key),
            details: vec![
                Bullet::labeled("Role", nutrient.role),
                Bullet::labeled("Deficiency Signs", nutrient.deficiency_symptoms.join(", ")),
                Bullet::labeled("Sources", nutrient.sources.join(", ")),
                Bullet::labeled("Application", nutrient.application.join(", ")),
                Bullet::labeled("Timing", nutrient.timing.join(", ")),
            ],
        })
        .collect();

    CatalogPage {
        icon: "🧪".to_string(),
        title: "Nutrition & Fertilizers".to_string(),
        entries,
    }
}

fn irrigation_page() -> CatalogPage {
    CatalogPage {
        icon: "💧".to_string(),
        title: "Water Management".to_string(),
        entries: vec![
            CatalogEntry {
                heading: "Irrigation Methods".to_string(),
                details: vec![
                    Bullet::labeled("Drip Irrigation", "Most efficient, 90-95% efficiency, suitable for row crops"),
                    Bullet::labeled("Sprinkler System", "Good coverage, 75-85% efficiency, suitable for field crops"),
                    Bullet::labeled("Surface Irrigation", "Traditional method, 60-70% efficiency, suitable for paddy"),
                    Bullet::labeled("Micro-sprinklers", "Good for orchards, 80-90% efficiency"),
                ],
            },
            CatalogEntry {
                heading: "Water Requirements".to_string(),
                details: vec![
                    Bullet::labeled("Rice", "1200-1500mm (high water requirement)"),
                    Bullet::labeled("Wheat", "450-600mm (moderate requirement)"),
                    Bullet::labeled("Cotton", "600-1000mm (moderate to high)"),
                    Bullet::labeled("Vegetables", "400-800mm (varies by crop)"),
                ],
            },
        ],
    }
}

fn equipment_page() -> CatalogPage {
    CatalogPage {
        icon: "🚜".to_string(),
        title: "Farm Equipment".to_string(),
        entries: vec![
            CatalogEntry {
                heading: "Essential Farm Tools".to_string(),
                details: vec![
                    Bullet::labeled("Tractors", "25-75 HP for small to medium farms"),
                    Bullet::labeled("Tillers", "For soil preparation and cultivation"),
                    Bullet::labeled("Seed Drills", "For precise seed placement"),
                    Bullet::labeled("Sprayers", "For pesticide and fertilizer application"),
                    Bullet::labeled("Harvesters", "For efficient crop harvesting"),
                ],
            },
            CatalogEntry {
                heading: "Maintenance Tips".to_string(),
                details: vec![
                    Bullet::labeled("Regular Service", "Follow manufacturer's schedule"),
                    Bullet::labeled("Proper Storage", "Clean and store in dry place"),
                    Bullet::labeled("Lubrication", "Regular greasing of moving parts"),
                    Bullet::labeled("Seasonal Check", "Pre-season equipment inspection"),
                ],
            },
        ],
    }
}
