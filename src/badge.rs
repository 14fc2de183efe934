use colored::Colorize;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::{DisplayConfig, NoEvidenceDisplay};
use crate::schema::DetectionResult;

/// What a caller should show for a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    MadeInIndia,
    NotMadeInIndia,
    Unknown,
}

impl Badge {
    /// Apply the display policy to a scored result.
    ///
    /// Indian verdicts need a confidence strictly above the threshold. A
    /// foreign verdict with any confidence is shown as such; the zero-confidence
    /// "no evidence" state follows `config.no_evidence`.
    pub fn for_result(result: &DetectionResult, config: &DisplayConfig) -> Self {
        if result.is_indian {
            if result.confidence > config.threshold {
                Badge::MadeInIndia
            } else {
                Badge::Unknown
            }
        } else if result.confidence > 0.0 {
            Badge::NotMadeInIndia
        } else {
            match config.no_evidence {
                NoEvidenceDisplay::Unknown => Badge::Unknown,
                NoEvidenceDisplay::NotMadeInIndia => Badge::NotMadeInIndia,
            }
        }
    }

    pub fn is_made_in_india(self) -> bool {
        self == Badge::MadeInIndia
    }

    /// Plain label without decoration.
    pub fn label(self) -> &'static str {
        match self {
            Badge::MadeInIndia => "MADE IN INDIA",
            Badge::NotMadeInIndia => "NOT MADE IN INDIA",
            Badge::Unknown => "ORIGIN UNKNOWN",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Badge::MadeInIndia => "🇮🇳",
            Badge::NotMadeInIndia => "🚫",
            Badge::Unknown => "❔",
        }
    }

    /// One-line badge, e.g. "🇮🇳 MADE IN INDIA (88%)".
    pub fn render(self, result: &DetectionResult, color: bool) -> String {
        let text = match self {
            Badge::MadeInIndia => format!("{} ({}%)", self.label(), result.percent()),
            _ => self.label().to_string(),
        };
        let text = if color {
            match self {
                Badge::MadeInIndia => text.green().bold().to_string(),
                Badge::NotMadeInIndia => text.red().bold().to_string(),
                Badge::Unknown => text.yellow().to_string(),
            }
        } else {
            text
        };
        format!("{} {}", self.icon(), text)
    }
}
