//! Seed requirement adjusted for germination rate.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{lookup, require_positive, Crop, FormFields, HECTARES_PER_ACRE};
use crate::error::ValidationError;
use crate::response::{Bullet, CalculatorReport, ReportExtra, ResultItem};
use crate::utils::{format_amount, format_number};

const TOOL: &str = "Seed Rate Calculator";

pub const DEFAULT_GERMINATION_PCT: f64 = 85.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantingMethod {
    Broadcasting,
    Drilling,
    Transplanting,
}

impl PlantingMethod {
    pub fn key(&self) -> &'static str {
        match self {
            PlantingMethod::Broadcasting => "broadcasting",
            PlantingMethod::Drilling => "drilling",
            PlantingMethod::Transplanting => "transplanting",
        }
    }
}

impl FromStr for PlantingMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "broadcasting" => Ok(PlantingMethod::Broadcasting),
            "drilling" => Ok(PlantingMethod::Drilling),
            "transplanting" => Ok(PlantingMethod::Transplanting),
            other => Err(ValidationError::UnknownOption {
                field: "planting method",
                value: other.to_string(),
            }),
        }
    }
}

/// Seed coefficients for one crop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedProfile {
    /// kg/ha by method: broadcasting, drilling, transplanting.
    pub rates: [f64; 3],
    /// Thousand-grain weight, g.
    pub tgw_grams: f64,
    /// ₹/kg
    pub price: f64,
}

impl SeedProfile {
    fn rate(&self, method: PlantingMethod) -> f64 {
        match method {
            PlantingMethod::Broadcasting => self.rates[0],
            PlantingMethod::Drilling => self.rates[1],
            PlantingMethod::Transplanting => self.rates[2],
        }
    }
}

static PROFILES: &[(Crop, SeedProfile)] = &[
    (Crop::Wheat, SeedProfile { rates: [40.0, 35.0, 30.0], tgw_grams: 40.0, price: 25.0 }),
    (Crop::Rice, SeedProfile { rates: [60.0, 25.0, 20.0], tgw_grams: 22.0, price: 40.0 }),
    (Crop::Maize, SeedProfile { rates: [25.0, 20.0, 15.0], tgw_grams: 300.0, price: 300.0 }),
    (Crop::Cotton, SeedProfile { rates: [5.0, 3.0, 2.0], tgw_grams: 100.0, price: 500.0 }),
    (Crop::Soybean, SeedProfile { rates: [80.0, 70.0, 60.0], tgw_grams: 150.0, price: 80.0 }),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeedRateInput {
    pub crop: Crop,
    pub area_acres: f64,
    pub method: PlantingMethod,
    /// Percent in 1..=100; `None` or 0 uses [`DEFAULT_GERMINATION_PCT`].
    pub germination_pct: Option<f64>,
}

impl SeedRateInput {
    pub fn from_fields(fields: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            crop: fields.choice("crop")?,
            area_acres: fields.number("area"),
            method: fields.choice_or("method", PlantingMethod::Drilling)?,
            germination_pct: fields.optional_number("germination"),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeedRatePlan {
    pub input: SeedRateInput,
    pub germination_pct: f64,
    pub seed_rate_kg_per_acre: f64,
    pub total_seed_kg: f64,
    pub total_seeds: f64,
    pub plants_per_acre: f64,
    /// ₹
    pub total_cost: f64,
}

pub fn calculate(input: &SeedRateInput) -> Result<SeedRatePlan, ValidationError> {
    let area = require_positive(input.area_acres, "area")?;
    let germination = input
        .germination_pct
        .filter(|pct| *pct != 0.0)
        .unwrap_or(DEFAULT_GERMINATION_PCT);
    if !(1.0..=100.0).contains(&germination) {
        return Err(ValidationError::OutOfRange {
            field: "germination",
            min: 1.0,
            max: 100.0,
        });
    }

    let profile = lookup(PROFILES, input.crop, TOOL)?;

    let adjusted_per_ha = profile.rate(input.method) * 100.0 / germination;
    let per_acre = adjusted_per_ha * HECTARES_PER_ACRE;
    let total_seed_kg = per_acre * area;
    let seeds_per_kg = 1_000_000.0 / profile.tgw_grams;
    let total_seeds = total_seed_kg * seeds_per_kg;

    Ok(SeedRatePlan {
        input: *input,
        germination_pct: germination,
        seed_rate_kg_per_acre: per_acre,
        total_seed_kg,
        total_seeds,
        plants_per_acre: total_seeds / area * (germination / 100.0),
        total_cost: total_seed_kg * profile.price,
    })
}

pub fn report(plan: &SeedRatePlan) -> CalculatorReport {
    let area = format_number(plan.input.area_acres);

    CalculatorReport {
        title: format!("Seed Rate Calculation for {} acres of {}:", area, plan.input.crop),
        items: vec![
            ResultItem::new(
                "Seed Rate",
                format!("{:.1} kg/acre", plan.seed_rate_kg_per_acre),
                format!("Method: {}", plan.input.method.key()),
            ),
            ResultItem::new(
                "Total Seed Required",
                format!("{:.1} kg", plan.total_seed_kg),
                format!("For {} acres", area),
            ),
            ResultItem::new(
                "Plant Population",
                format!("{:.0}/acre", plan.plants_per_acre),
                format!("At {}% germination", format_number(plan.germination_pct)),
            ),
            ResultItem::new(
                "Estimated Cost",
                format!("₹{}", format_amount(plan.total_cost)),
                "Based on average seed prices",
            ),
        ],
        extras: vec![ReportExtra::Checklist {
            heading: "Recommendations:".to_string(),
            items: vec![
                Bullet::labeled("Seed Treatment", "Use fungicide seed treatment before sowing"),
                Bullet::labeled("Storage", "Store seeds in dry, cool place before planting"),
                Bullet::labeled("Quality", "Use certified seeds with >80% germination rate"),
                Bullet::labeled("Backup", "Keep 10% extra seeds for gap filling"),
            ],
        }],
    }
}
