//! Fertilizer dose from per-crop N:P:K recommendations.
//!
//! Product quantities assume Urea 46% N, DAP 46% P and MOP 60% K.

use serde::{Deserialize, Serialize};

use super::{lookup, require_positive, Crop, FormFields, HECTARES_PER_ACRE};
use crate::error::ValidationError;
use crate::response::{CalculatorReport, ReportExtra, ResultItem};
use crate::utils::{format_amount, format_number};

const TOOL: &str = "Fertilizer Calculator";

/// Recommended dose in kg/ha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientRate {
    pub n: f64,
    pub p: f64,
    pub k: f64,
}

static RATES: &[(Crop, NutrientRate)] = &[
    (Crop::Wheat, NutrientRate { n: 120.0, p: 60.0, k: 40.0 }),
    (Crop::Rice, NutrientRate { n: 120.0, p: 60.0, k: 40.0 }),
    (Crop::Cotton, NutrientRate { n: 120.0, p: 60.0, k: 60.0 }),
    (Crop::Vegetables, NutrientRate { n: 150.0, p: 75.0, k: 75.0 }),
];

const UREA_N: f64 = 0.46;
const DAP_P: f64 = 0.46;
const MOP_K: f64 = 0.60;

/// ₹/kg
const UREA_PRICE: u64 = 6;
const DAP_PRICE: u64 = 25;
const MOP_PRICE: u64 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FertilizerInput {
    pub crop: Crop,
    pub area_acres: f64,
}

impl FertilizerInput {
    pub fn from_fields(fields: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            crop: fields.choice("crop")?,
            area_acres: fields.number("area"),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FertilizerPlan {
    pub crop: Crop,
    pub area_acres: f64,
    pub urea_kg: u64,
    pub dap_kg: u64,
    pub mop_kg: u64,
    /// ₹
    pub total_cost: u64,
}

pub fn calculate(input: &FertilizerInput) -> Result<FertilizerPlan, ValidationError> {
    let area = require_positive(input.area_acres, "area")?;
    let rate = lookup(RATES, input.crop, TOOL)?;
    let hectares = area * HECTARES_PER_ACRE;

    let urea_kg = (rate.n * hectares / UREA_N).round() as u64;
    let dap_kg = (rate.p * hectares / DAP_P).round() as u64;
    let mop_kg = (rate.k * hectares / MOP_K).round() as u64;

    Ok(FertilizerPlan {
        crop: input.crop,
        area_acres: area,
        urea_kg,
        dap_kg,
        mop_kg,
        total_cost: urea_kg * UREA_PRICE + dap_kg * DAP_PRICE + mop_kg * MOP_PRICE,
    })
}

pub fn report(plan: &FertilizerPlan) -> CalculatorReport {
    CalculatorReport {
        title: format!(
            "Fertilizer Requirements for {} acres of {}:",
            format_number(plan.area_acres),
            plan.crop
        ),
        items: vec![
            ResultItem::new("Urea (46% N)", format!("{} kg", plan.urea_kg), "Apply in 2-3 splits"),
            ResultItem::new("DAP (46% P)", format!("{} kg", plan.dap_kg), "Apply at planting"),
            ResultItem::new(
                "MOP (60% K)",
                format!("{} kg", plan.mop_kg),
                "Apply at planting & flowering",
            ),
            ResultItem::new(
                "Estimated Cost",
                format!("₹{}", format_amount(plan.total_cost as f64)),
                "Based on current market rates",
            ),
        ],
        extras: vec![ReportExtra::Note {
            text: "Adjust quantities based on soil test results. Consider organic sources like compost for long-term soil health.".to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheat_ten_acres() {
        let plan = calculate(&FertilizerInput {
            crop: Crop::Wheat,
            area_acres: 10.0,
        })
        .unwrap();

        assert_eq!(plan.urea_kg, 1056);
        assert_eq!(plan.dap_kg, 528);
        assert_eq!(plan.mop_kg, 270);
        assert_eq!(plan.total_cost, 24126);
    }

    #[test]
    fn test_vegetables_use_higher_rate() {
        let plan = calculate(&FertilizerInput {
            crop: Crop::Vegetables,
            area_acres: 1.0,
        })
        .unwrap();
        // 150 * 0.4047 / 0.46 = 131.97
        assert_eq!(plan.urea_kg, 132);
        // 75 * 0.4047 / 0.6 = 50.59
        assert_eq!(plan.mop_kg, 51);
    }

    #[test]
    fn test_rejects_bad_area() {
        let err = calculate(&FertilizerInput {
            crop: Crop::Rice,
            area_acres: 0.0,
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::NotPositive { field: "area" });

        let err = calculate(&FertilizerInput {
            crop: Crop::Rice,
            area_acres: f64::NAN,
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "area" });
    }

    #[test]
    fn test_unsupported_crop() {
        let err = calculate(&FertilizerInput {
            crop: Crop::Soybean,
            area_acres: 1.0,
        })
        .unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedCrop { .. }));
    }

    #[test]
    fn test_report_headline() {
        let plan = calculate(&FertilizerInput {
            crop: Crop::Wheat,
            area_acres: 10.0,
        })
        .unwrap();
        let report = report(&plan);
        assert_eq!(report.title, "Fertilizer Requirements for 10 acres of wheat:");
        assert_eq!(report.items[3].value, "₹24,126");
    }
}
