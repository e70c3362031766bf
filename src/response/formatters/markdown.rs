use super::html::GREETING_TEXT;
use crate::error::ValidationError;
use crate::knowledge::CatalogPage;
use crate::response::types::*;

/// Markdown formatter for terminal output
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format an assistant reply as markdown
    pub fn format_response(response: &Response) -> String {
        let mut md = String::with_capacity(2048);

        for section in &response.sections {
            match section {
                Section::Greeting { salutation } => {
                    md.push_str(&format!("**{}!** {}\n\n", salutation, GREETING_TEXT));
                }
                Section::Analysis(analysis) => {
                    md.push_str(&format!("## {} {}\n\n", analysis.icon, analysis.title));
                    if let Some(intro) = &analysis.intro {
                        md.push_str(&format!("{}\n\n", intro));
                    }
                    Self::push_numbered(&mut md, &analysis.steps);
                    if let Some(follow_up) = &analysis.follow_up {
                        Self::push_block(&mut md, follow_up);
                    }
                }
                Section::Recommendation(callout) => Self::push_callout(&mut md, "🎯", callout),
                Section::Warning(callout) => Self::push_callout(&mut md, "⚠️", callout),
                Section::InfoGrid { cards } => {
                    for card in cards {
                        md.push_str(&format!("- **{}**: {}\n", card.header, card.content));
                    }
                    md.push('\n');
                }
                Section::SeasonalGuidance { focus } => {
                    md.push_str("### 🗓️ Current Seasonal Recommendations\n\n");
                    Self::push_block(&mut md, focus);
                }
                Section::WeatherImpact(impact) => {
                    md.push_str(&format!("### {} {}\n\n", impact.icon, impact.heading));
                    md.push_str(&format!("**Positive Impacts:** {}  \n", impact.positives));
                    md.push_str(&format!("**Challenges:** {}  \n", impact.challenges));
                    md.push_str(&format!("**Immediate Actions:** {}\n\n", impact.actions));
                }
                Section::NextSteps { steps } => {
                    md.push_str("### 📋 Your Action Plan - Next Steps\n\n");
                    for (i, step) in steps.iter().enumerate() {
                        md.push_str(&format!("{}. {}\n", i + 1, step));
                    }
                    md.push('\n');
                }
                Section::Personalized(p) => {
                    md.push_str(&format!("### 🎯 Personalized for {}\n\n", p.location));
                    md.push_str(&format!("**Current Season:** {}\n\n", p.season));
                    md.push_str("**Location-Specific Tips:**\n\n");
                    for tip in &p.tips {
                        md.push_str(&format!("- {}\n", tip));
                    }
                    md.push_str("\n**Need More Help?** Ask me follow-up questions about:\n\n");
                    for follow_up in &p.follow_ups {
                        md.push_str(&format!("- {}: *{}*\n", follow_up.label, follow_up.question));
                    }
                    md.push('\n');
                }
            }
        }

        md
    }

    /// Format a calculator result as markdown
    pub fn format_report(report: &CalculatorReport) -> String {
        let mut md = String::with_capacity(1024);
        md.push_str(&format!("### {}\n\n", report.title));

        for item in &report.items {
            let marker = match item.tone {
                Tone::Neutral => "",
                Tone::Positive => " ▲",
                Tone::Negative => " ▼",
            };
            md.push_str(&format!(
                "- **{}:** {}{} _({})_\n",
                item.label, item.value, marker, item.note
            ));
        }
        if !report.items.is_empty() {
            md.push('\n');
        }

        for extra in &report.extras {
            match extra {
                ReportExtra::Note { text } => md.push_str(&format!("> **Note:** {}\n\n", text)),
                ReportExtra::Schedule { days } => {
                    md.push_str("**7-Day Schedule:**\n\n| Day | Action |\n|---|---|\n");
                    for day in days {
                        let action = if day.irrigate { "💧 Irrigate" } else { "🌱 Monitor" };
                        md.push_str(&format!("| {} | {} |\n", day.day, action));
                    }
                    md.push('\n');
                }
                ReportExtra::Calendar { cards } => {
                    md.push_str("| Crop | Plant | Harvest | Season |\n|---|---|---|---|\n");
                    for card in cards {
                        md.push_str(&format!(
                            "| {} | {} | {} | {} |\n",
                            card.crop, card.planting, card.harvest, card.season
                        ));
                    }
                    md.push('\n');
                }
                ReportExtra::Checklist { heading, items } => {
                    md.push_str(&format!("**{}**\n\n", heading));
                    for item in items {
                        md.push_str("- ");
                        Self::push_bullet_text(&mut md, item);
                        md.push('\n');
                    }
                    md.push('\n');
                }
                ReportExtra::Progress { percent, markers } => {
                    let filled = (percent.clamp(0.0, 100.0) / 5.0).round() as usize;
                    md.push_str(&format!(
                        "**Growth Stage Progress:** `{}{}` {:.1}%\n\n",
                        "█".repeat(filled),
                        "░".repeat(20 - filled),
                        percent
                    ));
                    for marker in markers {
                        let check = if marker.reached { "x" } else { " " };
                        md.push_str(&format!("- [{}] {} ({})\n", check, marker.label, marker.threshold));
                    }
                    md.push('\n');
                }
            }
        }

        md
    }

    pub fn format_error(error: &ValidationError) -> String {
        format!("**Error:** {}\n", error)
    }

    /// Format a knowledge catalog page as markdown
    pub fn format_catalog(page: &CatalogPage) -> String {
        let mut md = format!("## {} {}\n\n", page.icon, page.title);
        for entry in &page.entries {
            md.push_str(&format!("### {}\n\n", entry.heading));
            for detail in &entry.details {
                md.push_str("- ");
                Self::push_bullet_text(&mut md, detail);
                md.push('\n');
            }
            md.push('\n');
        }
        md
    }

    fn push_callout(md: &mut String, icon: &str, callout: &Callout) {
        md.push_str(&format!("### {} {}\n\n", icon, callout.title));
        if let Some(lead) = &callout.lead {
            md.push_str(&format!("{}\n\n", lead));
        }
        for block in &callout.blocks {
            Self::push_block(md, block);
        }
    }

    fn push_block(md: &mut String, block: &Block) {
        if let Some(heading) = &block.heading {
            md.push_str(&format!("**{}**\n\n", heading));
        }
        for bullet in &block.bullets {
            md.push_str("- ");
            Self::push_bullet_text(md, bullet);
            md.push('\n');
        }
        md.push('\n');
    }

    fn push_numbered(md: &mut String, steps: &[Bullet]) {
        for (i, step) in steps.iter().enumerate() {
            md.push_str(&format!("{}. ", i + 1));
            Self::push_bullet_text(md, step);
            md.push('\n');
        }
        md.push('\n');
    }

    fn push_bullet_text(md: &mut String, bullet: &Bullet) {
        match &bullet.label {
            Some(label) => md.push_str(&format!("**{}:** {}", label, bullet.text)),
            None => md.push_str(&bullet.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callout_with_labeled_block() {
        let mut response = Response::new(None);
        response.push(Section::Recommendation(Callout::new(
            "Soil Testing Protocol",
            vec![Block::new(
                "Essential Soil Tests:",
                vec![Bullet::labeled("pH Test", "Use digital meter")],
            )],
        )));

        let md = MarkdownFormatter::format_response(&response);
        assert!(md.contains("### 🎯 Soil Testing Protocol"));
        assert!(md.contains("**Essential Soil Tests:**"));
        assert!(md.contains("- **pH Test:** Use digital meter"));
    }

    #[test]
    fn test_progress_bar_width() {
        let report = CalculatorReport {
            title: "Growing Degree Days Analysis for maize:".to_string(),
            items: vec![],
            extras: vec![ReportExtra::Progress {
                percent: 50.0,
                markers: vec![StageMarker {
                    label: "Germination".to_string(),
                    threshold: 100.0,
                    reached: true,
                }],
            }],
        };
        let md = MarkdownFormatter::format_report(&report);
        assert!(md.contains(&format!("`{}{}`", "█".repeat(10), "░".repeat(10))));
        assert!(md.contains("- [x] Germination (100)"));
    }
}
