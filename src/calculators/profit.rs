//! Profitability estimate with a yield sensitivity band.

use serde::{Deserialize, Serialize};

use super::{lookup, require_positive, Crop, FormFields};
use crate::error::ValidationError;
use crate::response::{Bullet, CalculatorReport, ReportExtra, ResultItem, Tone};
use crate::utils::{format_amount, format_number};

const TOOL: &str = "Profit Calculator";

/// Yield in tons/acre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldRange {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

static YIELDS: &[(Crop, YieldRange)] = &[
    (Crop::Wheat, YieldRange { min: 3.5, max: 5.0, avg: 4.25 }),
    (Crop::Rice, YieldRange { min: 4.0, max: 6.0, avg: 5.0 }),
    (Crop::Vegetables, YieldRange { min: 25.0, max: 40.0, avg: 32.5 }),
    (Crop::Cotton, YieldRange { min: 15.0, max: 20.0, avg: 17.5 }),
];

/// Base cultivation cost, ₹/acre.
static BASE_COST: &[(Crop, f64)] = &[
    (Crop::Wheat, 25000.0),
    (Crop::Rice, 30000.0),
    (Crop::Vegetables, 50000.0),
    (Crop::Cotton, 35000.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitInput {
    pub crop: Crop,
    pub area_acres: f64,
    /// Extra inputs on top of the base cost, ₹. Blank means 0.
    pub input_cost: f64,
    /// ₹/kg
    pub market_price: f64,
}

impl ProfitInput {
    pub fn from_fields(fields: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            crop: fields.choice("crop")?,
            area_acres: fields.number("area"),
            input_cost: fields.optional_number("input_cost").unwrap_or(0.0),
            market_price: fields.number("price"),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitEstimate {
    pub input: ProfitInput,
    pub yield_range: (f64, f64, f64),
    pub total_yield_kg: f64,
    pub gross_income: f64,
    pub total_cost: f64,
    pub net_profit: f64,
    /// Percent; `None` when the total cost is zero.
    pub roi_percent: Option<f64>,
    /// ₹/kg
    pub break_even_price: f64,
    pub profit_at_min_yield: f64,
    pub profit_at_max_yield: f64,
}

pub fn calculate(input: &ProfitInput) -> Result<ProfitEstimate, ValidationError> {
    let area = require_positive(input.area_acres, "area")?;
    let price = require_positive(input.market_price, "market price")?;
    if !input.input_cost.is_finite() || input.input_cost < 0.0 {
        return Err(ValidationError::Negative { field: "input cost" });
    }

    let yields = lookup(YIELDS, input.crop, TOOL)?;
    let base_cost = lookup(BASE_COST, input.crop, TOOL)?;

    let total_yield_kg = yields.avg * 1000.0 * area;
    let total_cost = base_cost * area + input.input_cost;
    let gross_income = total_yield_kg * price;
    let net_profit = gross_income - total_cost;
    let roi_percent = (total_cost != 0.0).then(|| net_profit / total_cost * 100.0);

    Ok(ProfitEstimate {
        input: *input,
        yield_range: (yields.min, yields.max, yields.avg),
        total_yield_kg,
        gross_income,
        total_cost,
        net_profit,
        roi_percent,
        break_even_price: total_cost / total_yield_kg,
        profit_at_min_yield: yields.min * 1000.0 * area * price - total_cost,
        profit_at_max_yield: yields.max * 1000.0 * area * price - total_cost,
    })
}

pub fn report(estimate: &ProfitEstimate) -> CalculatorReport {
    let (min, max, avg) = estimate.yield_range;
    let roi = match estimate.roi_percent {
        Some(roi) => format!("ROI: {:.1}%", roi),
        None => "ROI: n/a".to_string(),
    };
    let net_tone = if estimate.net_profit > 0.0 {
        Tone::Positive
    } else {
        Tone::Negative
    };

    CalculatorReport {
        title: format!(
            "Profitability Analysis for {} acres of {}:",
            format_number(estimate.input.area_acres),
            estimate.input.crop
        ),
        items: vec![
            ResultItem::new(
                "Expected Yield",
                format!("{:.1} tons", estimate.total_yield_kg / 1000.0),
                format!("{} tons/acre average", format_number(avg)),
            )
            .with_tone(Tone::Positive),
            ResultItem::new(
                "Gross Income",
                format!("₹{}", format_amount(estimate.gross_income)),
                format!("At ₹{}/kg market price", format_number(estimate.input.market_price)),
            )
            .with_tone(Tone::Positive),
            ResultItem::new(
                "Total Investment",
                format!("₹{}", format_amount(estimate.total_cost)),
                "Including all input costs",
            )
            .with_tone(Tone::Negative),
            ResultItem::new(
                "Net Profit",
                format!("₹{}", format_amount(estimate.net_profit)),
                roi,
            )
            .with_tone(net_tone),
        ],
        extras: vec![ReportExtra::Checklist {
            heading: "Sensitivity Analysis:".to_string(),
            items: vec![
                Bullet::labeled(
                    "Break-even price",
                    format!("₹{:.2}/kg", estimate.break_even_price),
                ),
                Bullet::labeled(
                    format!("Low yield ({} tons/acre)", format_number(min)),
                    format!("₹{}", format_amount(estimate.profit_at_min_yield)),
                ),
                Bullet::labeled(
                    format!("High yield ({} tons/acre)", format_number(max)),
                    format!("₹{}", format_amount(estimate.profit_at_max_yield)),
                ),
            ],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rice() -> ProfitInput {
        ProfitInput {
            crop: Crop::Rice,
            area_acres: 5.0,
            input_cost: 10000.0,
            market_price: 22.0,
        }
    }

    #[test]
    fn test_rice_five_acres() {
        let estimate = calculate(&rice()).unwrap();

        assert_relative_eq!(estimate.total_yield_kg, 25000.0);
        assert_relative_eq!(estimate.gross_income, 550000.0);
        assert_relative_eq!(estimate.total_cost, 160000.0);
        assert_relative_eq!(estimate.net_profit, 390000.0);
        assert_relative_eq!(estimate.roi_percent.unwrap(), 243.75);
        assert_relative_eq!(estimate.break_even_price, 6.4);
        assert_relative_eq!(estimate.profit_at_min_yield, 280000.0);
        assert_relative_eq!(estimate.profit_at_max_yield, 500000.0);
    }

    #[test]
    fn test_blank_input_cost_is_zero() {
        let fields = FormFields::new()
            .with("crop", "wheat")
            .with("area", "1")
            .with("price", "20");
        let input = ProfitInput::from_fields(&fields).unwrap();
        assert_eq!(input.input_cost, 0.0);

        let estimate = calculate(&input).unwrap();
        // 4250 kg * 20 - 25000
        assert_relative_eq!(estimate.net_profit, 60000.0);
    }

    #[test]
    fn test_validation() {
        let mut input = rice();
        input.market_price = 0.0;
        assert_eq!(
            calculate(&input).unwrap_err(),
            ValidationError::NotPositive { field: "market price" }
        );

        let mut input = rice();
        input.area_acres = f64::NAN;
        assert_eq!(
            calculate(&input).unwrap_err(),
            ValidationError::Missing { field: "area" }
        );

        let mut input = rice();
        input.input_cost = -5.0;
        assert_eq!(
            calculate(&input).unwrap_err(),
            ValidationError::Negative { field: "input cost" }
        );
    }

    #[test]
    fn test_loss_is_negative_tone() {
        let mut input = rice();
        input.market_price = 1.0;
        let estimate = calculate(&input).unwrap();
        assert!(estimate.net_profit < 0.0);
        assert_eq!(report(&estimate).items[3].tone, Tone::Negative);
    }

    #[test]
    fn test_report_amounts() {
        let report = report(&calculate(&rice()).unwrap());
        assert_eq!(report.items[3].value, "₹390,000");
        assert_eq!(report.items[0].value, "25.0 tons");
    }
}
