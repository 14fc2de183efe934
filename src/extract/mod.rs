//! Pull labeled field values (country of origin, manufacturer) out of product
//! pages.
//!
//! Structured documents are scanned through [`StructuredDocument`]; plain text
//! goes through the line-oriented patterns in [`text`].

pub mod document;
pub mod html;
pub mod text;

pub use document::{ContainerShape, StructuredDocument};
pub use html::HtmlDocument;

use once_cell::sync::Lazy;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

// Pattern literals below always compile.
static COUNTRY_OF_ORIGIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bcountry\s+of\s+origin\b").unwrap());
static MANUFACTURER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bmanufacturer(?:'s)?\b|\bmanufactured\s+by\b").unwrap()
});
static VALUE_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\s:\-–|=]+").unwrap());

/// A label element's own text may carry its value inline; anything much
/// longer than the value bound is prose, not a label.
const LABEL_SLACK: usize = 64;
const LABEL_QUALIFIER: usize = 30;

/// A value found for a labeled field, and how it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExtractionCandidate {
    pub value: String,
    /// Character count of `value`.
    pub length: usize,
    pub method: String,
}

impl ExtractionCandidate {
    pub fn new(value: impl Into<String>, method: &str) -> Self {
        let value = value.into();
        Self {
            length: value.chars().count(),
            value,
            method: method.to_string(),
        }
    }
}

/// Longest candidate; the earliest one wins ties.
pub fn select_longest(candidates: Vec<ExtractionCandidate>) -> Option<ExtractionCandidate> {
    candidates
        .into_iter()
        .fold(None, |best: Option<ExtractionCandidate>, candidate| match best {
            Some(current) if current.length >= candidate.length => Some(current),
            _ => Some(candidate),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Stop at the first acceptable value.
    FirstFound,
    /// Collect every acceptable value and keep the longest.
    Longest,
}

/// What to look for and which values to accept.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub label: Regex,
    /// Accepted values are strictly shorter than this many characters.
    pub max_chars: usize,
    pub selection: Selection,
    /// Values that mention one of these words are other labels, not data.
    pub rejected_words: &'static [&'static str],
}

impl FieldSpec {
    pub fn country_of_origin() -> Self {
        Self {
            label: COUNTRY_OF_ORIGIN.clone(),
            max_chars: 50,
            selection: Selection::FirstFound,
            rejected_words: &["manufacturer", "importer", "packer"],
        }
    }

    pub fn manufacturer() -> Self {
        Self {
            label: MANUFACTURER.clone(),
            max_chars: 500,
            selection: Selection::Longest,
            rejected_words: &[],
        }
    }

    /// Whether `text` reads as this field's label, i.e. starts with it.
    /// Returns where the label ends; a short qualifier before a colon
    /// ("Manufacturer's Details:") belongs to the label.
    fn labels(&self, text: &str) -> Option<usize> {
        if text.chars().count() > self.max_chars + LABEL_SLACK {
            return None;
        }
        let m = self
            .label
            .find(text)
            .filter(|m| text[..m.start()].trim().is_empty())?;
        let end = match text[m.end()..].find(':') {
            Some(offset) if offset <= LABEL_QUALIFIER => m.end() + offset,
            _ => m.end(),
        };
        Some(end)
    }

    /// Whether `raw` is this field's label again rather than a value, e.g.
    /// "Country of Origin" or "Manufacturer's Details:". Values that merely
    /// contain the label ("Manufactured by Hindware Ltd, ...") are data.
    fn echoes_label(&self, raw: &str) -> bool {
        let raw = raw.trim();
        let Some(m) = self.label.find(raw).filter(|m| m.start() == 0) else {
            return false;
        };
        let rest = raw[m.end()..].trim();
        rest.is_empty()
            || (rest.ends_with(':') && rest.chars().count() <= LABEL_QUALIFIER)
    }

    fn accept(&self, raw: &str, method: &str) -> Option<ExtractionCandidate> {
        let value = text::tidy_value(raw);
        if value.is_empty() || value.chars().count() >= self.max_chars {
            return None;
        }
        let lower = value.to_lowercase();
        if self.echoes_label(raw) || self.rejected_words.iter().any(|word| lower.contains(word)) {
            return None;
        }
        trace!(method, value, "field candidate");
        Some(ExtractionCandidate::new(value, method))
    }

    /// Value written in the label element itself ("Country of Origin: India").
    fn inline(&self, own_text: &str, label_end: usize) -> Option<ExtractionCandidate> {
        let rest = &own_text[label_end..];
        let separator = VALUE_SEPARATOR.find(rest).map_or(0, |m| m.end());
        if separator == 0 {
            return None;
        }
        self.accept(text::truncate_at_label(&rest[separator..]), "inline")
    }
}

/// Every acceptable value for `spec` in document order.
///
/// Grid-style label/value pairs are scanned first, then label elements by
/// [`ContainerShape::SCAN_ORDER`]. For each label element the value is taken
/// from the element itself, the adjacent table cell, the next sibling, or a
/// nested value element, in that order. With [`Selection::FirstFound`] the
/// scan stops at the first value.
pub fn extract_candidates<D>(doc: &D, spec: &FieldSpec) -> Vec<ExtractionCandidate>
where
    D: StructuredDocument + ?Sized,
{
    let mut found = Vec::new();
    let done = |found: &Vec<ExtractionCandidate>| {
        spec.selection == Selection::FirstFound && !found.is_empty()
    };

    for (label, value) in doc.grid_pairs() {
        if spec.labels(&doc.own_text(label)).is_some() {
            found.extend(spec.accept(&doc.text(value), "grid"));
            if done(&found) {
                return found;
            }
        }
    }

    for shape in ContainerShape::SCAN_ORDER {
        for node in doc.elements(shape) {
            let own = doc.own_text(node);
            let Some(label_end) = spec.labels(&own) else {
                continue;
            };
            let candidate = spec
                .inline(&own, label_end)
                .or_else(|| {
                    doc.is_header_cell(node)
                        .then(|| doc.adjacent_cell(node))
                        .flatten()
                        .and_then(|cell| spec.accept(&doc.text(cell), "adjacent_cell"))
                })
                .or_else(|| {
                    doc.next_sibling(node)
                        .and_then(|sibling| spec.accept(&doc.text(sibling), "next_sibling"))
                })
                .or_else(|| {
                    doc.nested_value(node)
                        .and_then(|nested| spec.accept(&doc.text(nested), "nested_value"))
                });
            found.extend(candidate);
            if done(&found) {
                return found;
            }
        }
    }

    found
}

/// Value for `spec`, or `None` when no label yields an acceptable value.
pub fn extract_labeled_field<D>(doc: &D, spec: &FieldSpec) -> Option<String>
where
    D: StructuredDocument + ?Sized,
{
    let candidates = extract_candidates(doc, spec);
    debug!(
        label = spec.label.as_str(),
        candidates = candidates.len(),
        "labeled field scan"
    );
    let chosen = match spec.selection {
        Selection::FirstFound => candidates.into_iter().next(),
        Selection::Longest => select_longest(candidates),
    };
    chosen.map(|candidate| candidate.value)
}

pub fn country_of_origin<D>(doc: &D) -> Option<String>
where
    D: StructuredDocument + ?Sized,
{
    extract_labeled_field(doc, &FieldSpec::country_of_origin())
}

pub fn manufacturer<D>(doc: &D) -> Option<String>
where
    D: StructuredDocument + ?Sized,
{
    extract_labeled_field(doc, &FieldSpec::manufacturer())
}
