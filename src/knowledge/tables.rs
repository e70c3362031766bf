//! Embedded knowledge-base records.
//!
//! Order within each table is the display order of the catalog pages.

use super::types::*;

// ============================================================================
// CROPS
// ============================================================================

pub static CROPS: &[CropProfile] = &[
    CropProfile {
        key: "rice",
        season: "Kharif (June-July)",
        soil_type: "Clay-loam, well-drained",
        water_requirement: "High (1200-1500mm)",
        duration: "90-120 days",
        ph_range: "5.5-6.5",
        temperature: "20-35°C",
        spacing: "20cm x 15cm",
        fertilizer: "N:P:K = 120:60:40 kg/ha",
        common_pests: &["Brown planthopper", "Stem borer", "Leaf folder"],
        common_diseases: &["Blast", "Bacterial blight", "Sheath blight"],
        expected_yield: "4-6 tons/ha",
        market_price: "₹20-25/kg",
    },
    CropProfile {
        key: "wheat",
        season: "Rabi (October-December)",
        soil_type: "Well-drained loamy soil",
        water_requirement: "Moderate (450-600mm)",
        duration: "110-130 days",
        ph_range: "6.0-7.5",
        temperature: "15-25°C",
        spacing: "22.5cm row spacing",
        fertilizer: "N:P:K = 120:60:40 kg/ha",
        common_pests: &["Aphids", "Termites", "Army worm"],
        common_diseases: &["Rust", "Smut", "Bunt"],
        expected_yield: "3.5-5 tons/ha",
        market_price: "₹22-28/kg",
    },
    CropProfile {
        key: "tomato",
        season: "Year-round (avoid extreme weather)",
        soil_type: "Well-drained sandy loam",
        water_requirement: "Moderate-High (600-800mm)",
        duration: "70-100 days",
        ph_range: "6.0-7.0",
        temperature: "18-25°C",
        spacing: "60cm x 45cm",
        fertilizer: "N:P:K = 150:75:75 kg/ha",
        common_pests: &["Whitefly", "Thrips", "Fruit borer"],
        common_diseases: &["Early blight", "Late blight", "Mosaic virus"],
        expected_yield: "25-40 tons/ha",
        market_price: "₹15-30/kg",
    },
    CropProfile {
        key: "cotton",
        season: "Kharif (May-June)",
        soil_type: "Deep black cotton soil",
        water_requirement: "Moderate (600-1000mm)",
        duration: "150-180 days",
        ph_range: "5.8-8.0",
        temperature: "21-35°C",
        spacing: "90cm x 45cm",
        fertilizer: "N:P:K = 120:60:60 kg/ha",
        common_pests: &["Bollworm", "Aphids", "Whitefly"],
        common_diseases: &["Wilt", "Root rot", "Leaf curl virus"],
        expected_yield: "15-20 quintals/ha",
        market_price: "₹50-65/kg",
    },
];

// ============================================================================
// SOIL TYPES
// ============================================================================

pub static SOILS: &[SoilProfile] = &[
    SoilProfile {
        key: "clay",
        characteristics: "Heavy texture, high water retention, nutrient-rich",
        advantages: &["Excellent nutrient retention", "Good water storage", "Rich in minerals"],
        challenges: &["Poor drainage", "Hard when dry", "Slow warming", "Compaction issues"],
        suitable_crops: &["Rice", "Wheat", "Cotton", "Sugarcane"],
        improvements: &["Add organic matter", "Create raised beds", "Install drainage tiles", "Avoid working when wet"],
        testing_methods: &["Jar test", "Feel method", "Professional soil analysis"],
    },
    SoilProfile {
        key: "loam",
        characteristics: "Balanced texture, ideal for most crops",
        advantages: &["Good drainage and retention", "Easy to work", "Excellent for root development"],
        challenges: &["May need regular organic matter", "Can vary in fertility"],
        suitable_crops: &["Most vegetables", "Fruits", "Cereals", "Pulses"],
        improvements: &["Regular compost addition", "Cover cropping", "Balanced fertilization"],
        testing_methods: &["Standard soil test", "pH testing", "Organic matter analysis"],
    },
    SoilProfile {
        key: "sandy",
        characteristics: "Light texture, excellent drainage, quick warming",
        advantages: &["Easy cultivation", "Good aeration", "Quick warming", "Low disease pressure"],
        challenges: &["Poor water retention", "Nutrient leaching", "Low organic matter"],
        suitable_crops: &["Root vegetables", "Melons", "Groundnut", "Early vegetables"],
        improvements: &["Frequent irrigation", "Organic matter addition", "Mulching", "Slow-release fertilizers"],
        testing_methods: &["Percolation test", "Water holding capacity", "Nutrient analysis"],
    },
];

// ============================================================================
// PESTS
// ============================================================================

pub static PESTS: &[PestProfile] = &[
    PestProfile {
        key: "aphids",
        identification: "Small, soft-bodied insects, green/black color",
        symptoms: &["Curled leaves", "Yellowing", "Honeydew secretion", "Sooty mold"],
        lifecycle: "7-10 days, multiple generations per year",
        treatment: &["Neem oil spray", "Insecticidal soap", "Predatory insects", "Reflective mulch"],
        prevention: &["Regular monitoring", "Companion planting", "Avoid over-fertilization"],
        severity: "Medium to High",
    },
    PestProfile {
        key: "whitefly",
        identification: "Tiny white flying insects, found on leaf undersides",
        symptoms: &["Yellow sticky honeydew", "Leaf yellowing", "Stunted growth", "Virus transmission"],
        lifecycle: "15-30 days depending on temperature",
        treatment: &["Yellow sticky traps", "Neem oil", "Beneficial insects", "Reflective mulch"],
        prevention: &["Early detection", "Crop rotation", "Remove infected plants"],
        severity: "High",
    },
    PestProfile {
        key: "bollworm",
        identification: "Caterpillars with stripes, bore into fruits/bolls",
        symptoms: &["Entry holes in fruits", "Frass around holes", "Damaged bolls", "Premature fruit drop"],
        lifecycle: "30-45 days, 4-6 generations per year",
        treatment: &["Pheromone traps", "Bt spray", "Nuclear polyhedrosis virus", "Hand picking"],
        prevention: &["Proper field sanitation", "Destroy crop residue", "Early planting"],
        severity: "Very High",
    },
];

// ============================================================================
// DISEASES
// ============================================================================

pub static DISEASES: &[DiseaseProfile] = &[
    DiseaseProfile {
        key: "blight",
        pathogen: "Fungal",
        identification: "Dark spots with concentric rings on leaves",
        symptoms: &["Brown/black spots", "Yellowing around spots", "Defoliation", "Fruit lesions"],
        conditions: "High humidity, moderate temperatures (20-25°C)",
        treatment: &["Copper fungicide", "Chlorothalonil", "Mancozeb", "Remove affected parts"],
        prevention: &["Crop rotation", "Proper spacing", "Drip irrigation", "Resistant varieties"],
        severity: "High",
    },
    DiseaseProfile {
        key: "rust",
        pathogen: "Fungal",
        identification: "Orange/reddish pustules on leaves",
        symptoms: &["Rust-colored spots", "Leaf yellowing", "Premature defoliation", "Reduced yield"],
        conditions: "Cool, moist weather with dew",
        treatment: &["Systemic fungicides", "Sulfur spray", "Remove affected leaves"],
        prevention: &["Resistant varieties", "Good air circulation", "Avoid overhead irrigation"],
        severity: "Medium to High",
    },
    DiseaseProfile {
        key: "wilt",
        pathogen: "Fungal/Bacterial",
        identification: "Sudden wilting despite adequate moisture",
        symptoms: &["Wilting leaves", "Yellowing", "Stunted growth", "Vascular browning"],
        conditions: "Soil-borne, favored by high temperature and moisture",
        treatment: &["Soil drenching with fungicide", "Remove infected plants", "Soil solarization"],
        prevention: &["Resistant varieties", "Crop rotation", "Well-drained soil", "Seed treatment"],
        severity: "Very High",
    },
];

// ============================================================================
// FERTILIZER NUTRIENTS
// ============================================================================

pub static NUTRIENTS: &[NutrientProfile] = &[
    NutrientProfile {
        key: "nitrogen",
        role: "Promotes vegetative growth and leaf development",
        deficiency_symptoms: &["Yellowing of older leaves", "Stunted growth", "Poor tillering"],
        sources: &["Urea (46% N)", "Ammonium sulfate (21% N)", "CAN (25% N)", "Organic compost"],
        application: &["Split application", "Basal + top dressing", "Foliar spray for quick effect"],
        timing: &["Basal at planting", "Top dress at active growth stages"],
        precautions: &["Avoid over-application", "Don't apply during flowering for some crops"],
    },
    NutrientProfile {
        key: "phosphorus",
        role: "Root development, flowering, and fruit formation",
        deficiency_symptoms: &["Purple discoloration", "Poor root growth", "Delayed flowering"],
        sources: &["DAP (46% P2O5)", "SSP (16% P2O5)", "Rock phosphate", "Bone meal"],
        application: &["Full dose at planting", "Band placement near roots"],
        timing: &["Apply at sowing/transplanting", "Before flowering stage"],
        precautions: &["Less mobile in soil", "Apply near root zone"],
    },
    NutrientProfile {
        key: "potassium",
        role: "Disease resistance, water regulation, fruit quality",
        deficiency_symptoms: &["Brown leaf margins", "Weak stems", "Poor fruit quality"],
        sources: &["MOP (60% K2O)", "SOP (50% K2O)", "Wood ash", "Potassium nitrate"],
        application: &["Split application", "Soil application", "Foliar spray"],
        timing: &["Basal + fruit development stage", "During stress periods"],
        precautions: &["High chloride content in MOP may affect some crops"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(CROPS.len(), 4);
        assert_eq!(SOILS.len(), 3);
        assert_eq!(PESTS.len(), 3);
        assert_eq!(DISEASES.len(), 3);
        assert_eq!(NUTRIENTS.len(), 3);
    }

    #[test]
    fn test_keys_are_lowercase_and_unique() {
        let mut keys: Vec<&str> = CROPS.iter().map(|c| c.key).collect();
        keys.extend(SOILS.iter().map(|s| s.key));
        keys.extend(PESTS.iter().map(|p| p.key));
        keys.extend(DISEASES.iter().map(|d| d.key));
        keys.extend(NUTRIENTS.iter().map(|n| n.key));

        for key in &keys {
            assert_eq!(*key, key.to_lowercase());
        }
        let mut deduped = keys.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), keys.len());
    }
}
