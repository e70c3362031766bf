//! Calculator Integration Tests
//!
//! Drives each farm tool through its form entry point and checks the rendered
//! result card or inline error fragment.

use agrismart::calculators::{run_report, run_tool, FarmTool, FormFields};
use agrismart::{MarkdownFormatter, ValidationError};

fn form(pairs: &str) -> FormFields {
    FormFields::parse_pairs(pairs)
}

#[test]
fn test_fertilizer_card() {
    let html = run_tool(FarmTool::Fertilizer, &form("crop=wheat area=10"));

    assert!(html.starts_with("<div class=\"calculation-result\">"));
    assert!(html.contains("<h5>Fertilizer Requirements for 10 acres of wheat:</h5>"));
    assert!(html.contains("1056"));
    assert!(html.contains("₹24,126"));
}

#[test]
fn test_missing_area_is_inline_error() {
    let html = run_tool(FarmTool::Fertilizer, &form("crop=wheat"));
    assert_eq!(html, "<p style=\"color: red;\">Please enter a valid area.</p>");

    let html = run_tool(FarmTool::Profit, &form("crop=rice area=abc price=20"));
    assert_eq!(html, "<p style=\"color: red;\">Please enter a valid area.</p>");
}

#[test]
fn test_irrigation_schedule_days() {
    let html = run_tool(FarmTool::Irrigation, &form("crop=cotton soil=sandy stage=flowering"));

    assert!(html.contains("Every 2 days"));
    assert!(html.contains("Current stage is critical!"));
    assert_eq!(html.matches("irrigate-day").count(), 4);
}

#[test]
fn test_profit_card_tones() {
    let html = run_tool(
        FarmTool::Profit,
        &form("crop=rice area=5 input_cost=10000 price=22"),
    );

    assert!(html.contains("₹390,000"));
    assert!(html.contains("ROI: 243."));
    assert!(html.contains("result-item negative"));
    assert!(html.contains("Sensitivity Analysis:"));
}

#[test]
fn test_calendar_default_region() {
    let report = run_report(FarmTool::Calendar, &form("category=cereals")).unwrap();
    assert_eq!(report.title, "Cereals Planting Calendar - North India");

    let html = run_tool(FarmTool::Calendar, &form("region=south category=vegetables"));
    assert!(html.contains("Brinjal"));
    assert!(html.contains("Important Notes:"));
}

#[test]
fn test_gdd_progress() {
    let report = run_report(
        FarmTool::Gdd,
        &form("crop=maize planting_date=2024-06-15 avg_temp=25 days=30"),
    )
    .unwrap();

    assert_eq!(report.items[1].value, "Vegetative");
    assert_eq!(report.items[1].note, "Progress to Flowering: 50.0%");
    assert_eq!(report.items[3].value, "24 days");

    let md = MarkdownFormatter::format_report(&report);
    assert!(md.contains("Growing Degree Days Analysis for maize"));
}

#[test]
fn test_seed_rate_defaults() {
    let report = run_report(FarmTool::SeedRate, &form("crop=wheat area=2")).unwrap();
    assert_eq!(report.items[0].note, "Method: drilling");
    assert_eq!(report.items[2].note, "At 85% germination");
}

#[test]
fn test_unsupported_crop_and_option() {
    let err = run_report(FarmTool::Gdd, &form("crop=soybean planting_date=2024-06-15 avg_temp=25 days=30"))
        .unwrap_err();
    assert!(matches!(err, ValidationError::UnsupportedCrop { .. }));

    let err = run_report(FarmTool::Irrigation, &form("crop=rice soil=peat stage=vegetative")).unwrap_err();
    assert!(matches!(err, ValidationError::UnknownOption { field: "soil", .. }));
}

#[test]
fn test_every_tool_rejects_empty_form() {
    for tool in FarmTool::ALL {
        let html = run_tool(tool, &FormFields::new());
        assert!(
            html.starts_with("<p style=\"color: red;\">"),
            "{} accepted an empty form",
            tool.title()
        );
    }
}
