//! Indian geography knowledge base.
//!
//! Answers one question: does a piece of address text point at India, and
//! which kind of evidence (country, PIN code, industrial zone, city, state)
//! says so.

pub mod data;

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use data::{INDUSTRIAL_AREAS, MAJOR_CITIES, PIN_CODE_MAX, PIN_CODE_MIN, STATES};

static INDIA_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bindia\b").unwrap());
static PIN_CANDIDATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[1-8][0-9]{5}\b").unwrap());
static SHARED: Lazy<GeographyKb> = Lazy::new(GeographyKb::default);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Country,
    PinCode,
    IndustrialArea,
    City,
    State,
}

impl MatchType {
    /// Confidence a free-text geography hit of this kind earns on its own.
    pub fn fallback_confidence(self) -> f32 {
        match self {
            MatchType::Country => 0.95,
            MatchType::State => 0.92,
            MatchType::City => 0.88,
            MatchType::IndustrialArea => 0.85,
            MatchType::PinCode => 0.75,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchType::Country => "Country",
            MatchType::PinCode => "PIN Code",
            MatchType::IndustrialArea => "Industrial Area",
            MatchType::City => "City",
            MatchType::State => "State",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of classifying one piece of text. At most one match is reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GeographyMatch {
    pub is_indian: bool,
    pub match_type: Option<MatchType>,
    pub match_value: Option<String>,
}

impl GeographyMatch {
    pub fn none() -> Self {
        Self {
            is_indian: false,
            match_type: None,
            match_value: None,
        }
    }

    fn found(match_type: MatchType, value: impl Into<String>) -> Self {
        Self {
            is_indian: true,
            match_type: Some(match_type),
            match_value: Some(value.into()),
        }
    }
}

/// A list of place names compiled into one word-bounded pattern set.
#[derive(Debug, Clone)]
struct PlaceTable {
    entries: Vec<String>,
    set: RegexSet,
}

impl PlaceTable {
    fn build(entries: Vec<String>) -> Self {
        let patterns: Vec<String> = entries.iter().map(|e| place_pattern(e)).collect();
        // Every pattern is escaped literal text joined by `\s+`.
        let set = RegexSet::new(&patterns).unwrap();
        Self { entries, set }
    }

    /// Earliest entry (in list order) that occurs in `text`.
    fn first_match(&self, text: &str) -> Option<&str> {
        self.set
            .matches(text)
            .iter()
            .next()
            .map(|index| self.entries[index].as_str())
    }
}

/// `\b` + words escaped and joined by `\s+` + `\b`, case-insensitive.
fn place_pattern(place: &str) -> String {
    let words: Vec<String> = place.split_whitespace().map(regex::escape).collect();
    format!(r"(?i)\b{}\b", words.join(r"\s+"))
}

fn merge(base: &[&str], extra: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = base.iter().map(|s| s.to_string()).collect();
    for entry in extra {
        let entry = entry.trim().to_lowercase();
        if !entry.is_empty() && !merged.contains(&entry) {
            merged.push(entry);
        }
    }
    merged
}

/// Compiled geography tables.
///
/// [`GeographyKb::shared`] gives the built-in tables; [`GeographyKb::builder`]
/// appends extra names without touching the matching logic.
#[derive(Debug, Clone)]
pub struct GeographyKb {
    industrial_areas: PlaceTable,
    cities: PlaceTable,
    states: PlaceTable,
}

impl Default for GeographyKb {
    fn default() -> Self {
        GeographyKbBuilder::default().build()
    }
}

impl GeographyKb {
    /// Process-wide instance built from the reference lists.
    pub fn shared() -> &'static GeographyKb {
        &SHARED
    }

    pub fn builder() -> GeographyKbBuilder {
        GeographyKbBuilder::default()
    }

    /// Classify address text in fixed priority order:
    /// country mention, PIN code, industrial area, city, state.
    pub fn classify_location(&self, text: &str) -> GeographyMatch {
        if text.trim().is_empty() {
            return GeographyMatch::none();
        }
        let order = [
            MatchType::Country,
            MatchType::PinCode,
            MatchType::IndustrialArea,
            MatchType::City,
            MatchType::State,
        ];
        self.first_in_order(text, &order)
    }

    /// Classification used when only free text is available: categories are
    /// ranked by the confidence they carry (country, state, city, industrial
    /// area, PIN code), so "Bangalore 560001" reports the city.
    pub fn strongest_match(&self, text: &str) -> GeographyMatch {
        if text.trim().is_empty() {
            return GeographyMatch::none();
        }
        let order = [
            MatchType::Country,
            MatchType::State,
            MatchType::City,
            MatchType::IndustrialArea,
            MatchType::PinCode,
        ];
        self.first_in_order(text, &order)
    }

    pub fn is_indian_address(&self, text: &str) -> bool {
        self.classify_location(text).is_indian
    }

    fn first_in_order(&self, text: &str, order: &[MatchType]) -> GeographyMatch {
        for match_type in order {
            if let Some(value) = self.find(*match_type, text) {
                trace!(%match_type, %value, "geography match");
                return GeographyMatch::found(*match_type, value);
            }
        }
        GeographyMatch::none()
    }

    fn find(&self, match_type: MatchType, text: &str) -> Option<String> {
        match match_type {
            MatchType::Country => INDIA_WORD.is_match(text).then(|| "India".to_string()),
            MatchType::PinCode => find_pin_code(text),
            MatchType::IndustrialArea => self.industrial_areas.first_match(text).map(String::from),
            MatchType::City => self.cities.first_match(text).map(String::from),
            MatchType::State => self.states.first_match(text).map(String::from),
        }
    }
}

/// First six-digit sequence inside the Indian PIN range.
fn find_pin_code(text: &str) -> Option<String> {
    PIN_CANDIDATE
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|digits| {
            digits
                .parse::<u32>()
                .is_ok_and(|pin| (PIN_CODE_MIN..=PIN_CODE_MAX).contains(&pin))
        })
        .map(String::from)
}

/// Extra names appended after the reference lists.
#[derive(Debug, Clone, Default)]
pub struct GeographyKbBuilder {
    extra_industrial_areas: Vec<String>,
    extra_cities: Vec<String>,
    extra_states: Vec<String>,
}

impl GeographyKbBuilder {
    pub fn industrial_areas(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.extra_industrial_areas
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn cities(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.extra_cities.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn states(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.extra_states.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> GeographyKb {
        GeographyKb {
            industrial_areas: PlaceTable::build(merge(
                INDUSTRIAL_AREAS,
                &self.extra_industrial_areas,
            )),
            cities: PlaceTable::build(merge(MAJOR_CITIES, &self.extra_cities)),
            states: PlaceTable::build(merge(STATES, &self.extra_states)),
        }
    }
}

/// Classify with the built-in tables. See [`GeographyKb::classify_location`].
pub fn classify_location(text: &str) -> GeographyMatch {
    GeographyKb::shared().classify_location(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(text: &str) -> (Option<MatchType>, Option<String>) {
        let m = classify_location(text);
        (m.match_type, m.match_value)
    }

    #[test]
    fn explicit_country_wins() {
        let m = classify_location("Plot 4, MIDC, Pune 411001, India");
        assert!(m.is_indian);
        assert_eq!(m.match_type, Some(MatchType::Country));
        assert_eq!(m.match_value.as_deref(), Some("India"));
    }

    #[test]
    fn indian_is_not_a_country_mention() {
        assert_ne!(
            classify_location("Indian Spices Co").match_type,
            Some(MatchType::Country)
        );
    }

    #[test]
    fn pin_code_range() {
        assert_eq!(
            kind("123 Main Road 560001"),
            (Some(MatchType::PinCode), Some("560001".into()))
        );
        assert_eq!(kind("Code 100000").1.as_deref(), Some("100000"));
        assert_eq!(kind("Code 855999").1.as_deref(), Some("855999"));
        assert!(!classify_location("Code 856000").is_indian);
        assert!(!classify_location("Code 999999").is_indian);
        assert!(!classify_location("Code 099999").is_indian);
    }

    #[test]
    fn later_pin_candidate_is_used_when_first_is_out_of_range() {
        assert_eq!(kind("Ref 860001, PO 400001").1.as_deref(), Some("400001"));
    }

    #[test]
    fn pin_inside_longer_number_is_ignored() {
        assert!(!classify_location("Phone 9876543210").is_indian);
    }

    #[test]
    fn pin_precedes_city() {
        assert_eq!(kind("Bangalore 560001").0, Some(MatchType::PinCode));
    }

    #[test]
    fn industrial_areas() {
        assert_eq!(
            kind("Plot 12, SIPCOT Phase II"),
            (Some(MatchType::IndustrialArea), Some("sipcot".into()))
        );
        assert_eq!(
            kind("Unit 3, Special   Economic  Zone"),
            (
                Some(MatchType::IndustrialArea),
                Some("special economic zone".into())
            )
        );
        // Word boundaries: "sez" inside another word does not count.
        assert!(!classify_location("Sezanne Road").is_indian);
    }

    #[test]
    fn cities_and_variants() {
        assert_eq!(kind("Bengaluru").1.as_deref(), Some("bengaluru"));
        assert_eq!(kind("Cochin port").1.as_deref(), Some("cochin"));
        assert_eq!(kind("Navi   Mumbai").0, Some(MatchType::City));
    }

    #[test]
    fn states_and_fragments() {
        assert_eq!(
            kind("Some Town, Tamil Nadu"),
            (Some(MatchType::State), Some("tamil nadu".into()))
        );
        assert_eq!(kind("Leh, Ladakh").0, Some(MatchType::State));
        assert_eq!(kind("Anantnag, Kashmir").1.as_deref(), Some("kashmir"));
    }

    #[test]
    fn empty_and_foreign_text() {
        assert_eq!(classify_location(""), GeographyMatch::none());
        assert_eq!(classify_location("   "), GeographyMatch::none());
        assert!(!classify_location("Shenzhen, Guangdong, China").is_indian);
    }

    #[test]
    fn strongest_match_prefers_city_over_pin() {
        let m = GeographyKb::shared().strongest_match("Address: 123 Main Road, Bangalore 560001");
        assert_eq!(m.match_type, Some(MatchType::City));
        assert_eq!(m.match_value.as_deref(), Some("bangalore"));
    }

    #[test]
    fn strongest_match_prefers_state_over_city() {
        let m = GeographyKb::shared().strongest_match("Pune, Maharashtra");
        assert_eq!(m.match_type, Some(MatchType::State));
    }

    #[test]
    fn builder_adds_names() {
        let kb = GeographyKb::builder()
            .cities(["Sricity Phase 2", "  KUNDLI "])
            .industrial_areas(["imt"])
            .build();
        assert!(!classify_location("Kundli").is_indian);
        assert_eq!(
            kb.classify_location("Kundli Estate").match_value.as_deref(),
            Some("kundli")
        );
        assert_eq!(
            kb.classify_location("IMT Manesar").match_type,
            Some(MatchType::IndustrialArea)
        );
    }

    #[test]
    fn fallback_confidence_ranking() {
        assert!(MatchType::Country.fallback_confidence() > MatchType::State.fallback_confidence());
        assert!(MatchType::State.fallback_confidence() > MatchType::City.fallback_confidence());
        assert!(MatchType::City.fallback_confidence() > MatchType::IndustrialArea.fallback_confidence());
        assert!(
            MatchType::IndustrialArea.fallback_confidence() > MatchType::PinCode.fallback_confidence()
        );
    }
}
