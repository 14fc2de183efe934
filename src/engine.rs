use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

use crate::config::Config;
use crate::extract::{self, HtmlDocument, StructuredDocument, text};
use crate::geography::GeographyKb;
use crate::normalize::normalize_lines;
use crate::scorer::Scorer;
use crate::schema::{DetectionResult, ExtractedFields};

/// Extracted fields together with the verdict they produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Analysis {
    pub fields: ExtractedFields,
    pub result: DetectionResult,
}

/// Runs extraction and scoring for one page at a time.
///
/// Holds only immutable compiled tables, so one detector can serve any number
/// of threads.
#[derive(Debug, Clone)]
pub struct OriginDetector {
    kb: Cow<'static, GeographyKb>,
}

impl OriginDetector {
    pub fn new() -> Self {
        Self {
            kb: Cow::Borrowed(GeographyKb::shared()),
        }
    }

    pub fn with_kb(kb: GeographyKb) -> Self {
        Self { kb: Cow::Owned(kb) }
    }

    /// Detector using the built-in geography plus any configured extras.
    pub fn from_config(config: &Config) -> Self {
        let geography = &config.geography;
        if geography.is_empty() {
            return Self::new();
        }
        Self::with_kb(
            GeographyKb::builder()
                .cities(geography.extra_cities.iter().cloned())
                .states(geography.extra_states.iter().cloned())
                .industrial_areas(geography.extra_industrial_areas.iter().cloned())
                .build(),
        )
    }

    pub fn kb(&self) -> &GeographyKb {
        &self.kb
    }

    pub fn score(&self, fields: &ExtractedFields, page_text: &str) -> DetectionResult {
        Scorer::new(&self.kb).score(
            fields.country_of_origin.as_deref(),
            fields.manufacturer.as_deref(),
            page_text,
        )
    }

    /// Analyze plain page text.
    pub fn analyze_text(&self, raw: &str) -> Analysis {
        let page_text = normalize_lines(raw);
        let fields = ExtractedFields {
            country_of_origin: text::country_of_origin(&page_text),
            manufacturer: text::manufacturer_address(&page_text),
        };
        self.finish(fields, &page_text)
    }

    /// Analyze a structured document. Fields missing from the structure are
    /// looked for in the document text.
    pub fn analyze_document<D>(&self, doc: &D) -> Analysis
    where
        D: StructuredDocument + ?Sized,
    {
        let page_text = doc.full_text();
        let fields = ExtractedFields {
            country_of_origin: extract::country_of_origin(doc)
                .or_else(|| text::country_of_origin(&page_text)),
            manufacturer: extract::manufacturer(doc)
                .or_else(|| text::manufacturer_address(&page_text)),
        };
        self.finish(fields, &page_text)
    }

    pub fn analyze_html(&self, html: &str) -> Analysis {
        self.analyze_document(&HtmlDocument::parse(html))
    }

    pub fn detect_text(&self, raw: &str) -> DetectionResult {
        self.analyze_text(raw).result
    }

    pub fn detect_document<D>(&self, doc: &D) -> DetectionResult
    where
        D: StructuredDocument + ?Sized,
    {
        self.analyze_document(doc).result
    }

    pub fn detect_html(&self, html: &str) -> DetectionResult {
        self.analyze_html(html).result
    }

    fn finish(&self, fields: ExtractedFields, page_text: &str) -> Analysis {
        debug!(
            country_of_origin = ?fields.country_of_origin,
            manufacturer = ?fields.manufacturer,
            "extracted fields"
        );
        let result = self.score(&fields, page_text);
        Analysis { fields, result }
    }
}

impl Default for OriginDetector {
    fn default() -> Self {
        Self::new()
    }
}
