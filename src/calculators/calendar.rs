//! Regional planting calendar lookup.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::FormFields;
use crate::error::ValidationError;
use crate::response::{Bullet, CalculatorReport, CalendarCard, ReportExtra};
use crate::utils::capitalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    North,
    South,
    West,
    East,
}

impl Region {
    pub fn key(&self) -> &'static str {
        match self {
            Region::North => "north",
            Region::South => "south",
            Region::West => "west",
            Region::East => "east",
        }
    }
}

impl FromStr for Region {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "north" => Ok(Region::North),
            "south" => Ok(Region::South),
            "west" => Ok(Region::West),
            "east" => Ok(Region::East),
            other => Err(ValidationError::UnknownOption {
                field: "region",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropCategory {
    Cereals,
    Vegetables,
    Pulses,
    Oilseeds,
}

impl CropCategory {
    pub fn key(&self) -> &'static str {
        match self {
            CropCategory::Cereals => "cereals",
            CropCategory::Vegetables => "vegetables",
            CropCategory::Pulses => "pulses",
            CropCategory::Oilseeds => "oilseeds",
        }
    }
}

impl FromStr for CropCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cereals" => Ok(CropCategory::Cereals),
            "vegetables" => Ok(CropCategory::Vegetables),
            "pulses" => Ok(CropCategory::Pulses),
            "oilseeds" => Ok(CropCategory::Oilseeds),
            other => Err(ValidationError::UnknownOption {
                field: "category",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlantingWindow {
    pub crop: &'static str,
    pub planting: &'static str,
    pub harvest: &'static str,
    pub season: &'static str,
}

const fn window(
    crop: &'static str,
    planting: &'static str,
    harvest: &'static str,
    season: &'static str,
) -> PlantingWindow {
    PlantingWindow {
        crop,
        planting,
        harvest,
        season,
    }
}

/// Category → region → windows. Regions without a row fall back to north.
static CALENDARS: &[(CropCategory, Region, &[PlantingWindow])] = &[
    (
        CropCategory::Cereals,
        Region::North,
        &[
            window("Wheat", "Nov-Dec", "Apr-May", "Rabi"),
            window("Rice", "Jun-Jul", "Oct-Nov", "Kharif"),
            window("Maize", "Jun-Jul", "Sep-Oct", "Kharif"),
            window("Barley", "Nov-Dec", "Apr-May", "Rabi"),
        ],
    ),
    (
        CropCategory::Cereals,
        Region::South,
        &[
            window("Rice", "Jun-Jul & Dec-Jan", "Oct-Nov & Apr-May", "Kharif & Rabi"),
            window("Maize", "Jun-Jul", "Sep-Oct", "Kharif"),
            window("Pearl Millet", "Jun-Jul", "Sep-Oct", "Kharif"),
            window("Finger Millet", "Jun-Jul", "Oct-Nov", "Kharif"),
        ],
    ),
    (
        CropCategory::Vegetables,
        Region::North,
        &[
            window("Tomato", "Feb-Mar & Jul-Aug", "May-Jun & Oct-Nov", "Summer & Kharif"),
            window("Onion", "Nov-Dec", "Apr-May", "Rabi"),
            window("Potato", "Oct-Nov", "Feb-Mar", "Rabi"),
            window("Cabbage", "Aug-Sep", "Nov-Dec", "Winter"),
        ],
    ),
    (
        CropCategory::Vegetables,
        Region::South,
        &[
            window("Tomato", "Sep-Oct & Jan-Feb", "Dec-Jan & Apr-May", "Post-monsoon & Summer"),
            window("Brinjal", "Jun-Jul & Sep-Oct", "Sep-Oct & Dec-Jan", "Kharif & Post-monsoon"),
            window("Okra", "Feb-Mar & Jun-Jul", "May-Jun & Sep-Oct", "Summer & Kharif"),
            window("Chilli", "Jun-Jul", "Oct-Dec", "Kharif"),
        ],
    ),
];

pub static CALENDAR_NOTES: &[&str] = &[
    "Timing may vary by 2-3 weeks based on local climate conditions",
    "Consider weather forecasts before final planting decisions",
    "Adjust planting dates for high-altitude or coastal areas",
    "Follow recommended varieties for your specific region",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarInput {
    pub region: Region,
    pub category: CropCategory,
}

impl CalendarInput {
    pub fn from_fields(fields: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            region: fields.choice_or("region", Region::North)?,
            category: fields.choice("category")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlantingCalendar {
    /// Region as requested, which may differ from the table row used.
    pub region: Region,
    pub category: CropCategory,
    pub windows: &'static [PlantingWindow],
}

pub fn calculate(input: &CalendarInput) -> Result<PlantingCalendar, ValidationError> {
    let rows = |region: Region| {
        CALENDARS
            .iter()
            .find(|(category, r, _)| *category == input.category && *r == region)
            .map(|(_, _, windows)| *windows)
    };

    let windows = rows(input.region)
        .or_else(|| rows(Region::North))
        .ok_or_else(|| ValidationError::NoCalendar {
            category: input.category.key().to_string(),
        })?;

    Ok(PlantingCalendar {
        region: input.region,
        category: input.category,
        windows,
    })
}

pub fn report(calendar: &PlantingCalendar) -> CalculatorReport {
    CalculatorReport {
        title: format!(
            "{} Planting Calendar - {} India",
            capitalize(calendar.category.key()),
            capitalize(calendar.region.key())
        ),
        items: Vec::new(),
        extras: vec![
            ReportExtra::Calendar {
                cards: calendar
                    .windows
                    .iter()
                    .map(|w| CalendarCard {
                        crop: w.crop.to_string(),
                        planting: w.planting.to_string(),
                        harvest: w.harvest.to_string(),
                        season: w.season.to_string(),
                    })
                    .collect(),
            },
            ReportExtra::Checklist {
                heading: "Important Notes:".to_string(),
                items: CALENDAR_NOTES.iter().map(|n| Bullet::plain(*n)).collect(),
            },
        ],
    }
}
