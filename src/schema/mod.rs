use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::badge::Badge;

// Schema version constants
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Which branch of the scoring decision produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// Country of Origin names an excluded country.
    CountryExclusion,
    /// Manufacturer address names an excluded country.
    ForeignManufacturer,
    /// "Manufactured in <excluded country>" in the page text.
    ForeignStatement,
    /// "Made in India" or an equivalent phrase.
    ExplicitStatement,
    CountryAndManufacturer,
    CountryOfOrigin,
    ManufacturerAddress,
    OriginLabel,
    StrongPhrase,
    WeakKeyword,
    Geography,
    NoEvidence,
}

/// Verdict for one product page.
///
/// `confidence` reflects the strongest single signal that fired; signals are
/// not summed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DetectionResult {
    pub is_indian: bool,
    pub confidence: f32,
    pub indicator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    pub signal: Signal,
}

impl DetectionResult {
    /// Evidence that the product is made in India.
    pub fn indian(confidence: f32, indicator: impl Into<String>, signal: Signal) -> Self {
        Self {
            is_indian: true,
            confidence,
            indicator: indicator.into(),
            manufacturer: None,
            signal,
        }
    }

    /// Definitive evidence of foreign manufacture.
    pub fn foreign(confidence: f32, indicator: impl Into<String>, signal: Signal) -> Self {
        Self {
            is_indian: false,
            confidence,
            indicator: indicator.into(),
            manufacturer: None,
            signal,
        }
    }

    /// Nothing pointed either way. Confidence is 0.0; whether this shows as
    /// "unknown" or "not made in India" is up to the presenter.
    pub fn no_evidence() -> Self {
        Self {
            is_indian: false,
            confidence: 0.0,
            indicator: "No Indian origin indicators found".to_string(),
            manufacturer: None,
            signal: Signal::NoEvidence,
        }
    }

    pub fn with_manufacturer(mut self, manufacturer: Option<String>) -> Self {
        self.manufacturer = manufacturer;
        self
    }

    pub fn has_evidence(&self) -> bool {
        self.signal != Signal::NoEvidence
    }

    /// Confidence as a whole percentage, for display.
    pub fn percent(&self) -> u32 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

/// Field values found on a page before scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_of_origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
}

/// JSON document printed by `originsense detect --json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DetectionReport {
    pub version: String,
    #[serde(flatten)]
    pub result: DetectionResult,
    pub badge: Badge,
    /// Present with `--explain`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<ExtractedFields>,
}

impl DetectionReport {
    pub fn new(result: DetectionResult, badge: Badge) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            result,
            badge,
            fields: None,
        }
    }

    pub fn with_fields(mut self, fields: ExtractedFields) -> Self {
        self.fields = Some(fields);
        self
    }
}
