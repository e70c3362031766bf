//! Weekly irrigation plan from crop stage water need and soil type.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{lookup, Crop, FormFields};
use crate::error::ValidationError;
use crate::response::{CalculatorReport, ReportExtra, ResultItem, ScheduleDay};

const TOOL: &str = "Irrigation Planner";

pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilKind {
    Clay,
    Loam,
    Sandy,
}

impl SoilKind {
    /// Multiplier applied to the base water requirement.
    pub fn factor(&self) -> f64 {
        match self {
            SoilKind::Clay => 1.2,
            SoilKind::Loam => 1.0,
            SoilKind::Sandy => 0.8,
        }
    }

    /// Days between irrigations.
    pub fn frequency_days(&self) -> usize {
        match self {
            SoilKind::Clay => 5,
            SoilKind::Loam => 3,
            SoilKind::Sandy => 2,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SoilKind::Clay => "clay",
            SoilKind::Loam => "loam",
            SoilKind::Sandy => "sandy",
        }
    }
}

impl FromStr for SoilKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clay" => Ok(SoilKind::Clay),
            "loam" => Ok(SoilKind::Loam),
            "sandy" => Ok(SoilKind::Sandy),
            other => Err(ValidationError::UnknownOption {
                field: "soil",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStage {
    Germination,
    Vegetative,
    Flowering,
    Maturity,
}

impl GrowthStage {
    pub fn key(&self) -> &'static str {
        match self {
            GrowthStage::Germination => "germination",
            GrowthStage::Vegetative => "vegetative",
            GrowthStage::Flowering => "flowering",
            GrowthStage::Maturity => "maturity",
        }
    }
}

impl FromStr for GrowthStage {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "germination" => Ok(GrowthStage::Germination),
            "vegetative" => Ok(GrowthStage::Vegetative),
            "flowering" => Ok(GrowthStage::Flowering),
            "maturity" => Ok(GrowthStage::Maturity),
            other => Err(ValidationError::UnknownOption {
                field: "stage",
                value: other.to_string(),
            }),
        }
    }
}

/// mm/week by stage.
#[derive(Debug, Clone, Copy)]
struct StageWater {
    germination: f64,
    vegetative: f64,
    flowering: f64,
    maturity: f64,
}

impl StageWater {
    fn at(&self, stage: GrowthStage) -> f64 {
        match stage {
            GrowthStage::Germination => self.germination,
            GrowthStage::Vegetative => self.vegetative,
            GrowthStage::Flowering => self.flowering,
            GrowthStage::Maturity => self.maturity,
        }
    }
}

static WATER: &[(Crop, StageWater)] = &[
    (Crop::Wheat, StageWater { germination: 25.0, vegetative: 35.0, flowering: 45.0, maturity: 20.0 }),
    (Crop::Rice, StageWater { germination: 50.0, vegetative: 60.0, flowering: 70.0, maturity: 40.0 }),
    (Crop::Vegetables, StageWater { germination: 20.0, vegetative: 30.0, flowering: 40.0, maturity: 25.0 }),
    (Crop::Cotton, StageWater { germination: 30.0, vegetative: 40.0, flowering: 60.0, maturity: 30.0 }),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrrigationInput {
    pub crop: Crop,
    pub soil: SoilKind,
    pub stage: GrowthStage,
}

impl IrrigationInput {
    pub fn from_fields(fields: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            crop: fields.choice("crop")?,
            soil: fields.choice("soil")?,
            stage: fields.choice("stage")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrrigationPlan {
    pub input: IrrigationInput,
    /// mm/week after the soil adjustment.
    pub water_mm_per_week: u32,
    pub frequency_days: usize,
    /// Monday..Sunday; `true` means irrigate.
    pub week: [bool; 7],
    pub critical_stage: bool,
}

pub fn calculate(input: &IrrigationInput) -> Result<IrrigationPlan, ValidationError> {
    let water = lookup(WATER, input.crop, TOOL)?;
    let adjusted = (water.at(input.stage) * input.soil.factor()).round() as u32;
    let frequency = input.soil.frequency_days();

    Ok(IrrigationPlan {
        input: *input,
        water_mm_per_week: adjusted,
        frequency_days: frequency,
        week: weekly_pattern(frequency),
        critical_stage: input.stage == GrowthStage::Flowering,
    })
}

/// Day index `i` (Monday = 0) is an irrigation day when `i % frequency == 0`.
pub fn weekly_pattern(frequency: usize) -> [bool; 7] {
    let mut week = [false; 7];
    for (i, day) in week.iter_mut().enumerate() {
        *day = frequency > 0 && i % frequency == 0;
    }
    week
}

pub fn report(plan: &IrrigationPlan) -> CalculatorReport {
    let critical = if plan.critical_stage {
        "Current stage is critical!"
    } else {
        "Monitor flowering stage"
    };

    let days = WEEKDAYS
        .iter()
        .zip(plan.week.iter())
        .map(|(day, irrigate)| ScheduleDay {
            day: day.to_string(),
            irrigate: *irrigate,
        })
        .collect();

    CalculatorReport {
        title: format!(
            "Irrigation Schedule for {} ({} stage):",
            plan.input.crop,
            plan.input.stage.key()
        ),
        items: vec![
            ResultItem::new(
                "Water Requirement",
                format!("{} mm/week", plan.water_mm_per_week),
                format!("Adjusted for {} soil", plan.input.soil.key()),
            ),
            ResultItem::new(
                "Irrigation Frequency",
                format!("Every {} days", plan.frequency_days),
                "Based on soil water holding capacity",
            ),
            ResultItem::new("Best Timing", "Early morning (6-8 AM)", "Minimal evaporation losses"),
            ResultItem::new("Critical Periods", critical, "Never skip irrigation during flowering"),
        ],
        extras: vec![ReportExtra::Schedule { days }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(crop: Crop, soil: SoilKind, stage: GrowthStage) -> IrrigationPlan {
        calculate(&IrrigationInput { crop, soil, stage }).unwrap()
    }

    #[test]
    fn test_sandy_always_every_two_days() {
        for crop in [Crop::Wheat, Crop::Rice, Crop::Vegetables, Crop::Cotton] {
            for stage in [
                GrowthStage::Germination,
                GrowthStage::Vegetative,
                GrowthStage::Flowering,
                GrowthStage::Maturity,
            ] {
                let p = plan(crop, SoilKind::Sandy, stage);
                assert_eq!(p.frequency_days, 2);
                assert_eq!(p.week, [true, false, true, false, true, false, true]);
            }
        }
    }

    #[test]
    fn test_soil_adjustment() {
        // 45 * 1.2 = 54
        assert_eq!(plan(Crop::Wheat, SoilKind::Clay, GrowthStage::Flowering).water_mm_per_week, 54);
        // 25 * 0.8 = 20
        assert_eq!(plan(Crop::Wheat, SoilKind::Sandy, GrowthStage::Germination).water_mm_per_week, 20);
        assert_eq!(plan(Crop::Rice, SoilKind::Loam, GrowthStage::Vegetative).water_mm_per_week, 60);
    }

    #[test]
    fn test_clay_pattern() {
        let p = plan(Crop::Cotton, SoilKind::Clay, GrowthStage::Maturity);
        assert_eq!(p.week, [true, false, false, false, false, true, false]);
        assert!(!p.critical_stage);
    }

    #[test]
    fn test_flowering_flagged_critical() {
        let p = plan(Crop::Rice, SoilKind::Loam, GrowthStage::Flowering);
        assert!(p.critical_stage);
        let report = report(&p);
        assert_eq!(report.items[3].value, "Current stage is critical!");
    }

    #[test]
    fn test_unsupported_crop() {
        let err = calculate(&IrrigationInput {
            crop: Crop::Maize,
            soil: SoilKind::Loam,
            stage: GrowthStage::Vegetative,
        })
        .unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedCrop { .. }));
    }
}
