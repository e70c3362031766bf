//! Agricultural Knowledge Base
//!
//! Static, read-only records for crops, soil types, pests, diseases and
//! fertilizer nutrients, indexed once per process.
//!
//! - `types`: record structs
//! - `tables`: embedded data
//! - `catalog`: browsable category pages built from the records

pub mod types;
pub mod tables;
pub mod catalog;

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

pub use catalog::{CatalogCategory, CatalogEntry, CatalogPage, CatalogStats};
pub use types::{CropProfile, DiseaseProfile, NutrientProfile, PestProfile, SoilProfile};

/// Static tables plus a lowercase-name index over crops for the crop selector.
pub struct KnowledgeBase {
    crops: FxHashMap<&'static str, &'static CropProfile>,
}

static KNOWLEDGE_BASE: OnceLock<KnowledgeBase> = OnceLock::new();

impl KnowledgeBase {
    /// Process-wide instance, built on first use.
    pub fn global() -> &'static KnowledgeBase {
        KNOWLEDGE_BASE.get_or_init(|| {
            let kb = KnowledgeBase::build();
            tracing::debug!("Knowledge base indexed: {} crops", kb.crops.len());
            kb
        })
    }

    fn build() -> Self {
        Self {
            crops: tables::CROPS.iter().map(|c| (c.key, c)).collect(),
        }
    }

    pub fn crop(&self, name: &str) -> Option<&'static CropProfile> {
        self.crops.get(name.trim().to_lowercase().as_str()).copied()
    }

    /// Crops in display order.
    pub fn crops(&self) -> &'static [CropProfile] {
        tables::CROPS
    }

    pub fn soils(&self) -> &'static [SoilProfile] {
        tables::SOILS
    }

    pub fn pests(&self) -> &'static [PestProfile] {
        tables::PESTS
    }

    pub fn diseases(&self) -> &'static [DiseaseProfile] {
        tables::DISEASES
    }

    pub fn nutrients(&self) -> &'static [NutrientProfile] {
        tables::NUTRIENTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let kb = KnowledgeBase::global();
        assert_eq!(kb.crop("Rice").map(|c| c.key), Some("rice"));
        assert_eq!(kb.crop(" WHEAT ").map(|c| c.key), Some("wheat"));
        assert!(kb.crop("quinoa").is_none());
    }

    #[test]
    fn test_every_crop_indexed() {
        let kb = KnowledgeBase::global();
        for crop in kb.crops() {
            assert_eq!(kb.crop(crop.key).map(|c| c.key), Some(crop.key));
        }
    }

    #[test]
    fn test_global_is_shared() {
        let a = KnowledgeBase::global() as *const KnowledgeBase;
        let b = KnowledgeBase::global() as *const KnowledgeBase;
        assert_eq!(a, b);
    }
}
