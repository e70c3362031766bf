use crate::error::ValidationError;
use crate::knowledge::{CatalogPage, CatalogStats};
use crate::response::types::*;

/// Opening line following the salutation.
pub const GREETING_TEXT: &str =
    "I'm excited to help you with your farming question. Let me provide you with a comprehensive analysis.";

/// HTML formatter producing the chat widget's fragments.
///
/// Every piece of text is escaped; markup comes only from the formatter.
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Format an assistant reply as a sequence of widget blocks.
    pub fn format_response(response: &Response) -> String {
        let mut html = String::with_capacity(4096);
        for section in &response.sections {
            Self::format_section(&mut html, section);
        }
        html
    }

    /// Format a calculator result card.
    pub fn format_report(report: &CalculatorReport) -> String {
        let mut html = String::with_capacity(2048);
        html.push_str("<div class=\"calculation-result\">\n");
        html.push_str(&format!("<h5>{}</h5>\n", escape(&report.title)));

        if !report.items.is_empty() {
            html.push_str("<div class=\"result-grid\">\n");
            for item in &report.items {
                let class = match item.tone {
                    Tone::Neutral => "result-item",
                    Tone::Positive => "result-item positive",
                    Tone::Negative => "result-item negative",
                };
                html.push_str(&format!(
                    "<div class=\"{}\"><strong>{}:</strong> {}<br><small>{}</small></div>\n",
                    class,
                    escape(&item.label),
                    escape(&item.value),
                    escape(&item.note)
                ));
            }
            html.push_str("</div>\n");
        }

        for extra in &report.extras {
            Self::format_extra(&mut html, extra);
        }

        html.push_str("</div>\n");
        html
    }

    /// Inline form error. Never a fault, never a partial result.
    pub fn format_error(error: &ValidationError) -> String {
        format!("<p style=\"color: red;\">{}</p>", escape(&error.to_string()))
    }

    /// Format a knowledge catalog page.
    pub fn format_catalog(page: &CatalogPage) -> String {
        let mut html = String::with_capacity(2048);
        html.push_str(&format!(
            "<div class=\"knowledge-category\"><h3>{} {}</h3>\n",
            page.icon,
            escape(&page.title)
        ));
        for entry in &page.entries {
            html.push_str("<div class=\"knowledge-item\">\n");
            html.push_str(&format!("<h4>{}</h4>\n", escape(&entry.heading)));
            html.push_str("<div class=\"knowledge-details\">\n");
            for detail in &entry.details {
                html.push_str("<div>");
                push_bullet_text(&mut html, detail);
                html.push_str("</div>\n");
            }
            html.push_str("</div>\n</div>\n");
        }
        html.push_str("</div>\n");
        html
    }

    /// Catalog landing-page counters.
    pub fn format_stats(stats: &CatalogStats) -> String {
        let mut html = String::from("<div class=\"knowledge-stats\">\n");
        for (number, label) in [
            (stats.crop_varieties, "Crop Varieties"),
            (stats.pests_and_diseases, "Pest & Diseases"),
            (stats.soil_types, "Soil Types"),
        ] {
            html.push_str(&format!(
                "<div class=\"stat-item\"><div class=\"stat-number\">{}</div><div class=\"stat-label\">{}</div></div>\n",
                number,
                escape(label)
            ));
        }
        html.push_str("</div>\n");
        html
    }

    // ========================================================================
    // Sections
    // ========================================================================

    fn format_section(html: &mut String, section: &Section) {
        match section {
            Section::Greeting { salutation } => {
                html.push_str(&format!(
                    "<div class=\"greeting-section\">\n<p><strong>{}!</strong> {}</p>\n</div>\n",
                    escape(salutation),
                    escape(GREETING_TEXT)
                ));
            }
            Section::Analysis(analysis) => {
                html.push_str("<div class=\"analysis-section\">\n");
                html.push_str(&format!(
                    "<div class=\"analysis-header\"><span class=\"analysis-icon\">{}</span> {}</div>\n",
                    analysis.icon,
                    escape(&analysis.title)
                ));
                if let Some(intro) = &analysis.intro {
                    html.push_str(&format!("<p>{}</p>\n", escape(intro)));
                }
                push_step_list(html, &analysis.steps);
                if let Some(follow_up) = &analysis.follow_up {
                    if let Some(heading) = &follow_up.heading {
                        html.push_str(&format!("<p><strong>{}</strong></p>\n", escape(heading)));
                    }
                    push_list(html, &follow_up.bullets);
                }
                html.push_str("</div>\n");
            }
            Section::Recommendation(callout) => push_callout(html, "recommendation", "🎯", callout),
            Section::Warning(callout) => push_callout(html, "warning", "⚠️", callout),
            Section::InfoGrid { cards } => {
                html.push_str("<div class=\"info-grid\">\n");
                for card in cards {
                    html.push_str(&format!(
                        "<div class=\"info-card\"><div class=\"info-card-header\">{}</div><div class=\"info-card-content\">{}</div></div>\n",
                        escape(&card.header),
                        escape(&card.content)
                    ));
                }
                html.push_str("</div>\n");
            }
            Section::SeasonalGuidance { focus } => {
                html.push_str("<div class=\"seasonal-guidance\">\n");
                html.push_str("<h4>🗓️ Current Seasonal Recommendations</h4>\n");
                html.push_str("<div class=\"season-info\">");
                push_block(html, focus);
                html.push_str("</div>\n</div>\n");
            }
            Section::WeatherImpact(impact) => {
                html.push_str("<div class=\"weather-impact\">\n");
                html.push_str(&format!("<h4>{} {}</h4>\n", impact.icon, escape(&impact.heading)));
                html.push_str(&format!(
                    "<p><strong>Positive Impacts:</strong> {}</p>\n",
                    escape(&impact.positives)
                ));
                html.push_str(&format!(
                    "<p><strong>Challenges:</strong> {}</p>\n",
                    escape(&impact.challenges)
                ));
                html.push_str(&format!(
                    "<p><strong>Immediate Actions:</strong> {}</p>\n",
                    escape(&impact.actions)
                ));
                html.push_str("</div>\n");
            }
            Section::NextSteps { steps } => {
                html.push_str("<div class=\"next-steps-section\">\n");
                html.push_str("<h4>📋 Your Action Plan - Next Steps</h4>\n");
                let bullets: Vec<Bullet> = steps.iter().map(|s| Bullet::plain(s.as_str())).collect();
                push_step_list(html, &bullets);
                html.push_str("</div>\n");
            }
            Section::Personalized(p) => {
                html.push_str("<div class=\"personalized-recommendations\">\n");
                html.push_str(&format!("<h4>🎯 Personalized for {}</h4>\n", escape(&p.location)));
                html.push_str(&format!(
                    "<p><strong>Current Season:</strong> {}</p>\n",
                    escape(&p.season)
                ));
                html.push_str("<p><strong>Location-Specific Tips:</strong></p>\n<ul>\n");
                for tip in &p.tips {
                    html.push_str(&format!("<li>{}</li>\n", escape(tip)));
                }
                html.push_str("</ul>\n");
                html.push_str("<div class=\"follow-up\">\n");
                html.push_str("<p><strong>Need More Help?</strong> Ask me follow-up questions about:</p>\n");
                html.push_str("<div class=\"follow-up-topics\">\n");
                for follow_up in &p.follow_ups {
                    html.push_str(&format!(
                        "<button class=\"topic-suggestion\" data-question=\"{}\">{}</button>\n",
                        escape(&follow_up.question),
                        escape(&follow_up.label)
                    ));
                }
                html.push_str("</div>\n</div>\n</div>\n");
            }
        }
    }

    fn format_extra(html: &mut String, extra: &ReportExtra) {
        match extra {
            ReportExtra::Note { text } => {
                html.push_str(&format!(
                    "<div class=\"result-note\"><strong>Note:</strong> {}</div>\n",
                    escape(text)
                ));
            }
            ReportExtra::Schedule { days } => {
                html.push_str("<div class=\"weekly-schedule\">\n<h6>7-Day Schedule:</h6>\n");
                html.push_str("<div class=\"schedule-days\">\n");
                for day in days {
                    let (class, action) = if day.irrigate {
                        ("schedule-day irrigate-day", "💧 Irrigate")
                    } else {
                        ("schedule-day", "🌱 Monitor")
                    };
                    html.push_str(&format!(
                        "<div class=\"{}\"><strong>{}</strong><br>{}</div>\n",
                        class,
                        escape(&day.day),
                        action
                    ));
                }
                html.push_str("</div>\n</div>\n");
            }
            ReportExtra::Calendar { cards } => {
                html.push_str("<div class=\"calendar-grid\">\n");
                for card in cards {
                    html.push_str(&format!(
                        "<div class=\"calendar-item\"><strong>{}</strong><br><span class=\"planting-time\">🌱 Plant: {}</span><br><span class=\"harvest-time\">🌾 Harvest: {}</span><br><span class=\"season-tag\">{}</span></div>\n",
                        escape(&card.crop),
                        escape(&card.planting),
                        escape(&card.harvest),
                        escape(&card.season)
                    ));
                }
                html.push_str("</div>\n");
            }
            ReportExtra::Checklist { heading, items } => {
                html.push_str("<div class=\"result-list\">\n");
                html.push_str(&format!("<h6>{}</h6>\n", escape(heading)));
                push_list(html, items);
                html.push_str("</div>\n");
            }
            ReportExtra::Progress { percent, markers } => {
                html.push_str("<div class=\"gdd-progress\">\n<h6>Growth Stage Progress:</h6>\n");
                html.push_str(&format!(
                    "<div class=\"progress-bar\"><div class=\"progress-fill\" style=\"width: {}%\"></div></div>\n",
                    percent.clamp(0.0, 100.0)
                ));
                html.push_str("<div class=\"stage-markers\">\n");
                for marker in markers {
                    let class = if marker.reached { "completed" } else { "" };
                    html.push_str(&format!(
                        "<span class=\"{}\">{} ({})</span>\n",
                        class,
                        escape(&marker.label),
                        marker.threshold
                    ));
                }
                html.push_str("</div>\n</div>\n");
            }
        }
    }
}

// ============================================================================
// Fragments
// ============================================================================

fn push_callout(html: &mut String, kind: &str, icon: &str, callout: &Callout) {
    html.push_str(&format!("<div class=\"{}-box\">\n", kind));
    html.push_str(&format!(
        "<div class=\"{}-header\">{} {}</div>\n",
        kind,
        icon,
        escape(&callout.title)
    ));
    html.push_str(&format!("<div class=\"{}-content\">", kind));
    let mut first = true;
    if let Some(lead) = &callout.lead {
        html.push_str(&escape(lead));
        first = false;
    }
    for block in &callout.blocks {
        if !first {
            html.push_str("<br><br>");
        }
        push_block(html, block);
        first = false;
    }
    html.push_str("</div>\n</div>\n");
}

/// Bold heading then one "•" line per bullet.
fn push_block(html: &mut String, block: &Block) {
    let mut lines = Vec::with_capacity(block.bullets.len() + 1);
    if let Some(heading) = &block.heading {
        lines.push(format!("<strong>{}</strong>", escape(heading)));
    }
    for bullet in &block.bullets {
        let mut line = String::from("• ");
        push_bullet_text(&mut line, bullet);
        lines.push(line);
    }
    html.push_str(&lines.join("<br>"));
}

fn push_bullet_text(html: &mut String, bullet: &Bullet) {
    if let Some(label) = &bullet.label {
        html.push_str(&format!("<strong>{}:</strong> ", escape(label)));
    }
    html.push_str(&escape(&bullet.text));
}

fn push_step_list(html: &mut String, steps: &[Bullet]) {
    html.push_str("<div class=\"step-list\">\n");
    for (index, step) in steps.iter().enumerate() {
        html.push_str(&format!(
            "<div class=\"step-item\"><div class=\"step-number\">{}</div><div class=\"step-content\">",
            index + 1
        ));
        push_bullet_text(html, step);
        html.push_str("</div></div>\n");
    }
    html.push_str("</div>\n");
}

fn push_list(html: &mut String, items: &[Bullet]) {
    html.push_str("<ul>\n");
    for item in items {
        html.push_str("<li>");
        push_bullet_text(html, item);
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n");
}

/// Escape text for element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
