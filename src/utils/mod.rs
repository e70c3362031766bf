//! Utility modules shared across the router, calculators and session
//!
//! - Text: truncation, capitalization, amount formatting
//! - Season: month-keyed cropping season and greeting helpers

pub mod text;
pub mod season;

// Re-export commonly used types
pub use text::{capitalize, format_amount, format_number, truncate_with_ellipsis};
pub use season::{salutation_for_hour, Season, WeatherWindow};
