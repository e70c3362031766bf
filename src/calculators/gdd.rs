//! Growing degree days and growth-stage estimate.
//!
//! `daily = max(0, avg_temp - base)`, `accumulated = daily * days`. The stage
//! is the highest threshold reached; progress is measured within the band
//! leading to the next threshold.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{lookup, Crop, FormFields};
use crate::error::ValidationError;
use crate::response::{CalculatorReport, ReportExtra, ResultItem, StageMarker};
use crate::utils::format_number;

const TOOL: &str = "Growing Degree Days";

/// Base temperature (°C) and cumulative GDD thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GddProfile {
    pub base_temp: f64,
    pub germination: f64,
    pub flowering: f64,
    pub maturity: f64,
}

static PROFILES: &[(Crop, GddProfile)] = &[
    (Crop::Wheat, GddProfile { base_temp: 0.0, germination: 150.0, flowering: 1400.0, maturity: 2000.0 }),
    (Crop::Rice, GddProfile { base_temp: 10.0, germination: 200.0, flowering: 1200.0, maturity: 1800.0 }),
    (Crop::Maize, GddProfile { base_temp: 10.0, germination: 100.0, flowering: 800.0, maturity: 1400.0 }),
    (Crop::Cotton, GddProfile { base_temp: 15.0, germination: 150.0, flowering: 1000.0, maturity: 1600.0 }),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Germination,
    Vegetative,
    Flowering,
    Maturity,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Germination => "Germination",
            Stage::Vegetative => "Vegetative",
            Stage::Flowering => "Flowering",
            Stage::Maturity => "Maturity",
        }
    }

    /// Milestone the progress figure counts toward.
    ///
    /// Germination counts toward the germination threshold (labelled
    /// "Vegetative"), not toward flowering.
    pub fn next_label(&self) -> &'static str {
        match self {
            Stage::Germination => "Vegetative",
            Stage::Vegetative => "Flowering",
            Stage::Flowering => "Maturity",
            Stage::Maturity => "Harvest Ready",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DaysToNextStage {
    Days(u32),
    ReadyNow,
    /// No heat accumulates at the current temperature.
    Indeterminate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GddInput {
    pub crop: Crop,
    pub planting_date: Option<NaiveDate>,
    /// °C; NaN means not entered.
    pub avg_temp: f64,
    pub days_since_planting: u32,
}

impl GddInput {
    pub fn from_fields(fields: &FormFields) -> Result<Self, ValidationError> {
        let days = fields.number("days");
        Ok(Self {
            crop: fields.choice("crop")?,
            planting_date: fields.date("planting_date"),
            avg_temp: fields.number("avg_temp"),
            days_since_planting: if days.is_finite() && days > 0.0 {
                days.trunc() as u32
            } else {
                0
            },
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GddResult {
    pub crop: Crop,
    pub base_temp: f64,
    pub daily_gdd: f64,
    pub accumulated_gdd: f64,
    pub days_since_planting: u32,
    pub stage: Stage,
    pub progress_percent: f64,
    pub days_to_next: DaysToNextStage,
    /// (germination, flowering, maturity)
    pub thresholds: (f64, f64, f64),
}

pub fn calculate(input: &GddInput) -> Result<GddResult, ValidationError> {
    if input.planting_date.is_none() {
        return Err(ValidationError::Missing { field: "planting date" });
    }
    if !input.avg_temp.is_finite() {
        return Err(ValidationError::Missing { field: "average temperature" });
    }
    if input.days_since_planting == 0 {
        return Err(ValidationError::Missing { field: "days since planting" });
    }

    let profile = lookup(PROFILES, input.crop, TOOL)?;
    let daily = (input.avg_temp - profile.base_temp).max(0.0);
    let accumulated = daily * input.days_since_planting as f64;

    let (stage, progress, target) = if accumulated >= profile.maturity {
        (Stage::Maturity, 100.0, None)
    } else if accumulated >= profile.flowering {
        (
            Stage::Flowering,
            band_progress(accumulated, profile.flowering, profile.maturity),
            Some(profile.maturity),
        )
    } else if accumulated >= profile.germination {
        (
            Stage::Vegetative,
            band_progress(accumulated, profile.germination, profile.flowering),
            Some(profile.flowering),
        )
    } else {
        (
            Stage::Germination,
            band_progress(accumulated, 0.0, profile.germination),
            Some(profile.germination),
        )
    };

    let days_to_next = match target {
        None => DaysToNextStage::ReadyNow,
        Some(_) if daily == 0.0 => DaysToNextStage::Indeterminate,
        Some(threshold) => DaysToNextStage::Days(((threshold - accumulated) / daily).ceil() as u32),
    };

    Ok(GddResult {
        crop: input.crop,
        base_temp: profile.base_temp,
        daily_gdd: daily,
        accumulated_gdd: accumulated,
        days_since_planting: input.days_since_planting,
        stage,
        progress_percent: progress,
        days_to_next,
        thresholds: (profile.germination, profile.flowering, profile.maturity),
    })
}

fn band_progress(value: f64, start: f64, end: f64) -> f64 {
    (value - start) / (end - start) * 100.0
}

pub fn report(result: &GddResult) -> CalculatorReport {
    let next = result.stage.next_label();
    let days = match result.days_to_next {
        DaysToNextStage::Days(days) => format!("{} days", days),
        DaysToNextStage::ReadyNow => "Ready now".to_string(),
        DaysToNextStage::Indeterminate => "Not reachable at this temperature".to_string(),
    };
    let (germination, flowering, maturity) = result.thresholds;
    let marker = |label: &str, threshold: f64| StageMarker {
        label: label.to_string(),
        threshold,
        reached: result.accumulated_gdd >= threshold,
    };

    CalculatorReport {
        title: format!("Growing Degree Days Analysis for {}:", result.crop),
        items: vec![
            ResultItem::new(
                "Accumulated GDD",
                format!("{:.0} units", result.accumulated_gdd),
                format!("Over {} days", result.days_since_planting),
            ),
            ResultItem::new(
                "Current Stage",
                result.stage.label(),
                format!("Progress to {}: {:.1}%", next, result.progress_percent),
            ),
            ResultItem::new(
                "Daily GDD",
                format!("{:.1} units", result.daily_gdd),
                format!("Base temperature: {}°C", format_number(result.base_temp)),
            ),
            ResultItem::new(format!("Days to {}", next), days, "At current temperature"),
        ],
        extras: vec![ReportExtra::Progress {
            percent: result.progress_percent.min(100.0),
            markers: vec![
                marker("Germination", germination),
                marker("Flowering", flowering),
                marker("Maturity", maturity),
            ],
        }],
    }
}
