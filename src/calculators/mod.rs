//! Farm Calculators
//!
//! Six independent, stateless calculations over fixed per-crop coefficient
//! tables. Each tool module exposes a typed input, a `calculate` function
//! returning a typed result or a [`ValidationError`], and a `report` that
//! turns the result into a [`CalculatorReport`] for the formatters.
//!
//! [`run_tool`] is the form-level entry point: named fields in, HTML out.
//! Invalid input becomes an inline error fragment, never a fault.

pub mod calendar;
pub mod fertilizer;
pub mod form;
pub mod gdd;
pub mod irrigation;
pub mod profit;
pub mod seed_rate;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::response::{CalculatorReport, HtmlFormatter};

pub use form::FormFields;

/// Acres to hectares.
pub const HECTARES_PER_ACRE: f64 = 0.4047;

/// Crops offered by the calculator forms. Each tool supports a subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Wheat,
    Rice,
    Maize,
    Cotton,
    Soybean,
    Vegetables,
}

impl Crop {
    /// Form value, also used in result headlines ("10 acres of wheat").
    pub fn key(&self) -> &'static str {
        match self {
            Crop::Wheat => "wheat",
            Crop::Rice => "rice",
            Crop::Maize => "maize",
            Crop::Cotton => "cotton",
            Crop::Soybean => "soybean",
            Crop::Vegetables => "vegetables",
        }
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Crop {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wheat" => Ok(Crop::Wheat),
            "rice" => Ok(Crop::Rice),
            "maize" => Ok(Crop::Maize),
            "cotton" => Ok(Crop::Cotton),
            "soybean" => Ok(Crop::Soybean),
            "vegetables" => Ok(Crop::Vegetables),
            other => Err(ValidationError::UnknownOption {
                field: "crop",
                value: other.to_string(),
            }),
        }
    }
}

/// Find a crop's row in a per-tool coefficient table.
pub(crate) fn lookup<T: Copy>(
    table: &[(Crop, T)],
    crop: Crop,
    tool: &'static str,
) -> Result<T, ValidationError> {
    table
        .iter()
        .find(|(c, _)| *c == crop)
        .map(|(_, row)| *row)
        .ok_or_else(|| ValidationError::UnsupportedCrop {
            tool,
            crop: crop.key().to_string(),
        })
}

/// Reject missing (NaN) and non-positive values.
pub(crate) fn require_positive(value: f64, field: &'static str) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::Missing { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field });
    }
    Ok(value)
}

// ============================================================================
// Tool dispatch
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FarmTool {
    Fertilizer,
    Irrigation,
    Calendar,
    Profit,
    Gdd,
    SeedRate,
}

impl FarmTool {
    pub const ALL: [FarmTool; 6] = [
        FarmTool::Fertilizer,
        FarmTool::Irrigation,
        FarmTool::Calendar,
        FarmTool::Profit,
        FarmTool::Gdd,
        FarmTool::SeedRate,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FarmTool::Fertilizer => "fertilizer",
            FarmTool::Irrigation => "irrigation",
            FarmTool::Calendar => "calendar",
            FarmTool::Profit => "profit",
            FarmTool::Gdd => "gdd",
            FarmTool::SeedRate => "seedrate",
        }
    }

    /// Modal title of the tool.
    pub fn title(&self) -> &'static str {
        match self {
            FarmTool::Fertilizer => "Fertilizer Calculator",
            FarmTool::Irrigation => "Irrigation Planner",
            FarmTool::Calendar => "Planting Calendar",
            FarmTool::Profit => "Profit Calculator",
            FarmTool::Gdd => "Growing Degree Days",
            FarmTool::SeedRate => "Seed Rate Calculator",
        }
    }

    /// Form field names, in form order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            FarmTool::Fertilizer => &["crop", "area"],
            FarmTool::Irrigation => &["crop", "soil", "stage"],
            FarmTool::Calendar => &["region", "category"],
            FarmTool::Profit => &["crop", "area", "input_cost", "price"],
            FarmTool::Gdd => &["crop", "planting_date", "avg_temp", "days"],
            FarmTool::SeedRate => &["crop", "area", "method", "germination"],
        }
    }
}

impl FromStr for FarmTool {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        FarmTool::ALL
            .iter()
            .copied()
            .find(|tool| tool.key() == key)
            .ok_or(ValidationError::UnknownOption {
                field: "tool",
                value: key,
            })
    }
}

/// Parse the form, run the calculation and build its report.
pub fn run_report(tool: FarmTool, fields: &FormFields) -> Result<CalculatorReport, ValidationError> {
    let report = match tool {
        FarmTool::Fertilizer => {
            let input = fertilizer::FertilizerInput::from_fields(fields)?;
            fertilizer::report(&fertilizer::calculate(&input)?)
        }
        FarmTool::Irrigation => {
            let input = irrigation::IrrigationInput::from_fields(fields)?;
            irrigation::report(&irrigation::calculate(&input)?)
        }
        FarmTool::Calendar => {
            let input = calendar::CalendarInput::from_fields(fields)?;
            calendar::report(&calendar::calculate(&input)?)
        }
        FarmTool::Profit => {
            let input = profit::ProfitInput::from_fields(fields)?;
            profit::report(&profit::calculate(&input)?)
        }
        FarmTool::Gdd => {
            let input = gdd::GddInput::from_fields(fields)?;
            gdd::report(&gdd::calculate(&input)?)
        }
        FarmTool::SeedRate => {
            let input = seed_rate::SeedRateInput::from_fields(fields)?;
            seed_rate::report(&seed_rate::calculate(&input)?)
        }
    };
    Ok(report)
}

/// Form-level entry point: a result card, or an inline error fragment.
pub fn run_tool(tool: FarmTool, fields: &FormFields) -> String {
    match run_report(tool, fields) {
        Ok(report) => HtmlFormatter::format_report(&report),
        Err(err) => {
            tracing::debug!(tool = tool.key(), error = %err, "calculator input rejected");
            HtmlFormatter::format_error(&err)
        }
    }
}
