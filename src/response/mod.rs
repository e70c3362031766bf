//! Structured response content and its renderers.
//!
//! Content selection (router, calculators, catalog) builds these types;
//! presentation lives entirely in `formatters`.

pub mod types;
pub mod formatters;

pub use types::{
    AnalysisSection, Block, Bullet, CalendarCard, CalculatorReport, Callout, FollowUp, InfoCard,
    Personalized, ReportExtra, Response, ResultItem, ScheduleDay, Section, StageMarker, Tone,
    WeatherImpact,
};

pub use formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter};
