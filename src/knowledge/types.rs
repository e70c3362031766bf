//! Record types for the static agricultural knowledge base.
//!
//! Every record is `'static` and lives in [`super::tables`]; nothing here is mutable.

/// Agronomic profile of a field crop.
#[derive(Debug, Clone)]
pub struct CropProfile {
    pub key: &'static str,
    pub season: &'static str,
    pub soil_type: &'static str,
    pub water_requirement: &'static str,
    pub duration: &'static str,
    pub ph_range: &'static str,
    pub temperature: &'static str,
    pub spacing: &'static str,
    pub fertilizer: &'static str,
    pub common_pests: &'static [&'static str],
    pub common_diseases: &'static [&'static str],
    pub expected_yield: &'static str,
    pub market_price: &'static str,
}

/// Soil texture class and how to manage it.
#[derive(Debug, Clone)]
pub struct SoilProfile {
    pub key: &'static str,
    pub characteristics: &'static str,
    pub advantages: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub suitable_crops: &'static [&'static str],
    pub improvements: &'static [&'static str],
    pub testing_methods: &'static [&'static str],
}

/// Insect pest record.
#[derive(Debug, Clone)]
pub struct PestProfile {
    pub key: &'static str,
    pub identification: &'static str,
    pub symptoms: &'static [&'static str],
    pub lifecycle: &'static str,
    pub treatment: &'static [&'static str],
    pub prevention: &'static [&'static str],
    pub severity: &'static str,
}

/// Plant disease record.
#[derive(Debug, Clone)]
pub struct DiseaseProfile {
    pub key: &'static str,
    /// Pathogen class ("Fungal", "Fungal/Bacterial").
    pub pathogen: &'static str,
    pub identification: &'static str,
    pub symptoms: &'static [&'static str],
    pub conditions: &'static str,
    pub treatment: &'static [&'static str],
    pub prevention: &'static [&'static str],
    pub severity: &'static str,
}

/// Macronutrient record (N, P, K).
#[derive(Debug, Clone)]
pub struct NutrientProfile {
    pub key: &'static str,
    pub role: &'static str,
    pub deficiency_symptoms: &'static [&'static str],
    pub sources: &'static [&'static str],
    pub application: &'static [&'static str],
    pub timing: &'static [&'static str],
    pub precautions: &'static [&'static str],
}
