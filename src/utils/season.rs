//! Indian cropping-season classification keyed off the calendar month.
//!
//! - Kharif (monsoon): June to September
//! - Rabi (winter): October to March
//! - Zaid (summer): April and May

use serde::{Deserialize, Serialize};

/// Cropping season for a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
}

impl Season {
    /// Classify a 1-based month (1 = January).
    pub fn from_month(month: u32) -> Self {
        match month {
            6..=9 => Season::Kharif,
            4 | 5 => Season::Zaid,
            _ => Season::Rabi,
        }
    }

    /// Label used in personalized recommendations, e.g. "Kharif (Monsoon)".
    pub fn display(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif (Monsoon)",
            Season::Rabi => "Rabi (Winter)",
            Season::Zaid => "Zaid (Summer)",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Zaid => "Zaid",
        }
    }
}

/// Weather-impact window. Narrower than [`Season`]: March, April and May carry no impact note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherWindow {
    Monsoon,
    Winter,
}

impl WeatherWindow {
    pub fn from_month(month: u32) -> Option<Self> {
        match month {
            6..=9 => Some(WeatherWindow::Monsoon),
            10..=12 | 1 | 2 => Some(WeatherWindow::Winter),
            _ => None,
        }
    }
}

/// Time-of-day salutation for the opening greeting.
pub fn salutation_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 17 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}
