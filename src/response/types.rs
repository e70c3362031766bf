use serde::{Deserialize, Serialize};

use crate::router::Topic;

/// Complete assistant reply, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Topic the query was routed to. `None` for image-analysis and error replies.
    pub topic: Option<Topic>,
    pub sections: Vec<Section>,
}

impl Response {
    pub fn new(topic: Option<Topic>) -> Self {
        Self {
            topic,
            sections: Vec::new(),
        }
    }

    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn extend(&mut self, sections: impl IntoIterator<Item = Section>) {
        self.sections.extend(sections);
    }

    /// True if any section has the given kind tag ("greeting", "info_grid", ...).
    pub fn has_section(&self, kind: &str) -> bool {
        self.sections.iter().any(|s| s.kind() == kind)
    }
}

/// One tagged block of a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    /// Opening line on the first turn of a session.
    Greeting { salutation: String },

    /// Numbered reasoning steps under an icon header.
    Analysis(AnalysisSection),

    /// Green advice box.
    Recommendation(Callout),

    /// Amber caution box.
    Warning(Callout),

    /// Grid of attribute cards.
    InfoGrid { cards: Vec<InfoCard> },

    /// Month-keyed seasonal focus points.
    SeasonalGuidance { focus: Block },

    /// Month-keyed weather impact note.
    WeatherImpact(WeatherImpact),

    /// Closing action plan.
    NextSteps { steps: Vec<String> },

    /// Location-specific closing block with follow-up questions.
    Personalized(Personalized),
}

impl Section {
    /// Serde tag of this variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Section::Greeting { .. } => "greeting",
            Section::Analysis(_) => "analysis",
            Section::Recommendation(_) => "recommendation",
            Section::Warning(_) => "warning",
            Section::InfoGrid { .. } => "info_grid",
            Section::SeasonalGuidance { .. } => "seasonal_guidance",
            Section::WeatherImpact(_) => "weather_impact",
            Section::NextSteps { .. } => "next_steps",
            Section::Personalized(_) => "personalized",
        }
    }
}

/// Inline text item, optionally led by a bold label ("Rice: ...").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub label: Option<String>,
    pub text: String,
}

impl Bullet {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            label: None,
            text: text.into(),
        }
    }

    pub fn labeled(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            text: text.into(),
        }
    }
}

/// Headed bullet group inside a callout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub heading: Option<String>,
    pub bullets: Vec<Bullet>,
}

impl Block {
    pub fn new(heading: impl Into<String>, bullets: Vec<Bullet>) -> Self {
        Self {
            heading: Some(heading.into()),
            bullets,
        }
    }

    pub fn untitled(bullets: Vec<Bullet>) -> Self {
        Self {
            heading: None,
            bullets,
        }
    }

    /// Headed block of unlabeled bullets.
    pub fn plain(heading: impl Into<String>, items: &[&str]) -> Self {
        Self::new(heading, items.iter().map(|s| Bullet::plain(*s)).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSection {
    pub icon: String,
    pub title: String,
    pub intro: Option<String>,
    pub steps: Vec<Bullet>,
    /// Trailing prompt list (image analysis asks the user for context).
    pub follow_up: Option<Block>,
}

/// Recommendation or warning box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Callout {
    pub title: String,
    pub lead: Option<String>,
    pub blocks: Vec<Block>,
}

impl Callout {
    pub fn new(title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            title: title.into(),
            lead: None,
            blocks,
        }
    }

    pub fn with_lead(mut self, lead: impl Into<String>) -> Self {
        self.lead = Some(lead.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoCard {
    pub header: String,
    pub content: String,
}

impl InfoCard {
    pub fn new(header: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherImpact {
    pub icon: String,
    pub heading: String,
    pub positives: String,
    pub challenges: String,
    pub actions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personalized {
    pub location: String,
    pub season: String,
    pub tips: Vec<String>,
    pub follow_ups: Vec<FollowUp>,
}

/// Suggested follow-up question button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUp {
    pub label: String,
    pub question: String,
}

// ============================================================================
// Calculator reports
// ============================================================================

/// Colour hint for a result card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Neutral,
    Positive,
    Negative,
}

/// One headline figure of a calculator result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub label: String,
    pub value: String,
    pub note: String,
    pub tone: Tone,
}

impl ResultItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            note: note.into(),
            tone: Tone::Neutral,
        }
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub day: String,
    pub irrigate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarCard {
    pub crop: String,
    pub planting: String,
    pub harvest: String,
    pub season: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageMarker {
    pub label: String,
    pub threshold: f64,
    pub reached: bool,
}

/// Supplementary block below a report's result grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportExtra {
    Note { text: String },
    Schedule { days: Vec<ScheduleDay> },
    Calendar { cards: Vec<CalendarCard> },
    Checklist { heading: String, items: Vec<Bullet> },
    Progress { percent: f64, markers: Vec<StageMarker> },
}

/// Structured output of a farm calculator, rendered by the formatters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorReport {
    pub title: String,
    pub items: Vec<ResultItem>,
    pub extras: Vec<ReportExtra>,
}
