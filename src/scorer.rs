//! Turns extracted fields and page text into a [`DetectionResult`].
//!
//! The decision is an ordered list of checks; the first one that fires ends
//! the evaluation. Confidence is the confidence of that single check, never a
//! sum.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::country::{display_name, find_non_indian_country};
use crate::extract::text::{origin_label, origin_statement};
use crate::geography::GeographyKb;
use crate::schema::{DetectionResult, Signal};

/// Confidence levels used by the scorer.
pub mod confidence {
    /// Explicit statements, excluded countries, country plus manufacturer.
    pub const DEFINITIVE: f32 = 1.0;
    /// "Made in India"-style phrase found only in loose page text.
    pub const STRONG_PHRASE: f32 = 0.9;
    pub const COUNTRY_FIELD: f32 = 0.70;
    pub const ORIGIN_LABEL: f32 = 0.70;
    pub const WEAK_KEYWORD: f32 = 0.6;
    pub const MANUFACTURER_ONLY: f32 = 0.50;
    pub const NONE: f32 = 0.0;
}

use confidence::*;

// Pattern literals below always compile.
static INDIA_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bindia\b").unwrap());
static COUNTRY_IS_INDIA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bcountry(?:\s+of\s+origin)?\s*[:\-–]?\s*india\b").unwrap()
});

/// Phrases that settle the question on their own.
const EXPLICIT_PHRASES: &[&str] = &[
    "made in india",
    "manufactured in india",
    "मेड इन इंडिया",
    "भारत में निर्मित",
];

const WEAK_KEYWORDS: &[&str] = &["indian", "desi", "swadeshi", "bharati"];

/// Whitespace-tolerant pattern for a phrase. Word boundaries are only added
/// for ASCII phrases; Devanagari combining marks do not sit well with `\b`.
fn phrase_pattern(phrase: &str) -> Regex {
    let words: Vec<String> = phrase.split_whitespace().map(regex::escape).collect();
    let body = words.join(r"\s+");
    let pattern = if phrase.is_ascii() {
        format!(r"(?i)\b{body}\b")
    } else {
        body
    };
    // Escaped literal words joined by `\s+`.
    Regex::new(&pattern).unwrap()
}

static EXPLICIT_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    EXPLICIT_PHRASES
        .iter()
        .map(|phrase| (*phrase, phrase_pattern(phrase)))
        .collect()
});

static STRONG_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    let mut patterns = EXPLICIT_PATTERNS.clone();
    patterns.push((
        "country of origin: india",
        Regex::new(r"(?i)\bcountry\s+of\s+origin\s*:\s*india\b").unwrap(),
    ));
    patterns.push((
        "origin: india",
        Regex::new(r"(?i)\borigin\s*:\s*india\b").unwrap(),
    ));
    patterns
});

static WEAK_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    WEAK_KEYWORDS
        .iter()
        .map(|word| (*word, phrase_pattern(word)))
        .collect()
});

fn first_phrase(patterns: &[(&'static str, Regex)], text: &str) -> Option<&'static str> {
    patterns
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(phrase, _)| *phrase)
}

/// Scores evidence against a geography knowledge base.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    kb: &'a GeographyKb,
}

impl Default for Scorer<'static> {
    fn default() -> Self {
        Self::new(GeographyKb::shared())
    }
}

impl<'a> Scorer<'a> {
    pub fn new(kb: &'a GeographyKb) -> Self {
        Self { kb }
    }

    /// Score one page.
    ///
    /// `explicit_country` and `explicit_manufacturer` are structured field
    /// values when the page had them; `fallback_text` is the page text.
    /// Blank field values count as absent.
    pub fn score(
        &self,
        explicit_country: Option<&str>,
        explicit_manufacturer: Option<&str>,
        fallback_text: &str,
    ) -> DetectionResult {
        let country = explicit_country.map(str::trim).filter(|c| !c.is_empty());
        let manufacturer = explicit_manufacturer
            .map(str::trim)
            .filter(|m| !m.is_empty());

        self.decide(country, manufacturer, fallback_text)
            .with_manufacturer(manufacturer.map(String::from))
    }

    fn decide(
        &self,
        country: Option<&str>,
        manufacturer: Option<&str>,
        fallback_text: &str,
    ) -> DetectionResult {
        // Foreign origin is final.
        if let Some(country) = country.filter(|c| find_non_indian_country(c).is_some()) {
            debug!(country, "country of origin is an excluded country");
            return DetectionResult::foreign(
                DEFINITIVE,
                format!("Country of Origin: {country}"),
                Signal::CountryExclusion,
            );
        }
        if let Some(found) = manufacturer.and_then(find_non_indian_country) {
            debug!(country = found, "manufacturer address is abroad");
            return DetectionResult::foreign(
                DEFINITIVE,
                format!("Manufactured in {}", display_name(found)),
                Signal::ForeignManufacturer,
            );
        }

        let combined = [country.unwrap_or_default(), manufacturer.unwrap_or_default(), fallback_text]
            .join("\n");

        if let Some(phrase) = first_phrase(&EXPLICIT_PATTERNS, &combined) {
            debug!(phrase, "explicit origin statement");
            return DetectionResult::indian(DEFINITIVE, phrase, Signal::ExplicitStatement);
        }

        // Without a country field, "made in <abroad>" in the page text settles it.
        if country.is_none() {
            let foreign = origin_statement(fallback_text)
                .filter(|place| !INDIA_WORD.is_match(place))
                .and_then(|place| find_non_indian_country(&place));
            if let Some(found) = foreign {
                debug!(country = found, "page states foreign manufacture");
                return DetectionResult::foreign(
                    DEFINITIVE,
                    format!("Manufactured in {}", display_name(found)),
                    Signal::ForeignStatement,
                );
            }
        }

        let country_is_india = country.is_some_and(|c| INDIA_WORD.is_match(c))
            || COUNTRY_IS_INDIA.is_match(&combined);
        let manufacturer_is_indian =
            manufacturer.is_some_and(|m| self.kb.classify_location(m).is_indian);

        if country_is_india && manufacturer_is_indian {
            debug!("country of origin and manufacturer both Indian");
            return DetectionResult::indian(
                DEFINITIVE,
                "Country of Origin: India + Manufacturer in India",
                Signal::CountryAndManufacturer,
            );
        }
        if country_is_india {
            debug!("country of origin is India");
            return DetectionResult::indian(
                COUNTRY_FIELD,
                "Country of Origin: India",
                Signal::CountryOfOrigin,
            );
        }

        if country.is_none() {
            if manufacturer_is_indian {
                debug!("manufacturer address is Indian");
                return DetectionResult::indian(
                    MANUFACTURER_ONLY,
                    "Manufacturer address in India",
                    Signal::ManufacturerAddress,
                );
            }
            if origin_label(fallback_text).is_some_and(|value| value.to_lowercase().contains("india")) {
                debug!("origin label mentions India");
                return DetectionResult::indian(ORIGIN_LABEL, "Origin: India", Signal::OriginLabel);
            }
        }

        self.free_text(&combined)
    }

    fn free_text(&self, text: &str) -> DetectionResult {
        if let Some(phrase) = first_phrase(&STRONG_PATTERNS, text) {
            debug!(phrase, "strong phrase in page text");
            return DetectionResult::indian(STRONG_PHRASE, phrase, Signal::StrongPhrase);
        }
        if let Some(word) = first_phrase(&WEAK_PATTERNS, text) {
            debug!(word, "weak keyword in page text");
            return DetectionResult::indian(
                WEAK_KEYWORD,
                format!("Keyword: {word}"),
                Signal::WeakKeyword,
            );
        }
        let found = self.kb.strongest_match(text);
        if let (true, Some(match_type), Some(value)) =
            (found.is_indian, found.match_type, found.match_value)
        {
            debug!(%match_type, value, "geography in page text");
            return DetectionResult::indian(
                match_type.fallback_confidence(),
                format!("{match_type}: {value}"),
                Signal::Geography,
            );
        }
        debug!(confidence = NONE, "no origin evidence");
        DetectionResult::no_evidence()
    }
}

/// Score with the built-in geography tables. See [`Scorer::score`].
pub fn score(
    explicit_country: Option<&str>,
    explicit_manufacturer: Option<&str>,
    fallback_text: &str,
) -> DetectionResult {
    Scorer::default().score(explicit_country, explicit_manufacturer, fallback_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excluded_country_wins_over_indian_text() {
        let result = score(Some("China"), None, "Registered office in Maharashtra");
        assert!(!result.is_indian);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.indicator, "Country of Origin: China");
        assert_eq!(result.signal, Signal::CountryExclusion);
    }

    #[test]
    fn excluded_country_beats_made_in_india_phrase() {
        let result = score(Some("Vietnam"), None, "Made in India quality");
        assert!(!result.is_indian);
        assert_eq!(result.signal, Signal::CountryExclusion);
    }

    #[test]
    fn foreign_statement_without_country_field() {
        let result = score(None, None, "Manufactured in Bangkok, Thailand");
        assert!(!result.is_indian);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.indicator, "Manufactured in Thailand");
        assert_eq!(result.signal, Signal::ForeignStatement);
    }

    #[test]
    fn foreign_statement_that_also_names_india_is_ignored() {
        let result = score(None, None, "Made in India, exported to Japan");
        assert!(result.is_indian);
        assert_eq!(result.signal, Signal::ExplicitStatement);
    }

    #[test]
    fn explicit_phrase_beats_earlier_foreign_statement() {
        let result = score(
            None,
            None,
            "Compressor made in Japan; Manufactured in India by Voltas Ltd, Pune",
        );
        assert!(result.is_indian);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.indicator, "manufactured in india");
        assert_eq!(result.signal, Signal::ExplicitStatement);
    }

    #[test]
    fn foreign_manufacturer_address_is_final() {
        let result = score(
            None,
            Some("Samsung Electronics Co Ltd, Suwon, South Korea"),
            "Importer: Samsung India Electronics, Noida 201301",
        );
        assert!(!result.is_indian);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.indicator, "Manufactured in South Korea");
        assert_eq!(result.signal, Signal::ForeignManufacturer);
        assert_eq!(
            result.manufacturer.as_deref(),
            Some("Samsung Electronics Co Ltd, Suwon, South Korea")
        );

        let result = score(Some("India"), Some("Acme Corp, Osaka, Japan"), "Made in India");
        assert_eq!(result.signal, Signal::ForeignManufacturer);
    }

    #[test]
    fn explicit_phrases() {
        for (text, phrase) in [
            ("Proudly MADE IN INDIA", "made in india"),
            ("Manufactured   in\nIndia", "manufactured in india"),
            ("यह उत्पाद मेड इन इंडिया है", "मेड इन इंडिया"),
            ("भारत में निर्मित", "भारत में निर्मित"),
        ] {
            let result = score(None, None, text);
            assert!(result.is_indian, "{text}");
            assert_eq!(result.confidence, 1.0, "{text}");
            assert_eq!(result.indicator, phrase);
        }
    }

    #[test]
    fn made_in_indiana_is_not_explicit() {
        let result = score(None, None, "Made in Indiana");
        assert_ne!(result.signal, Signal::ExplicitStatement);
    }

    #[test]
    fn country_and_manufacturer_combine() {
        let result = score(Some("India"), Some("Tata Consumer Products, Mumbai"), "");
        assert!(result.is_indian);
        assert_eq!(result.confidence, 1.0);
        assert!(result.indicator.contains("Country of Origin"));
        assert!(result.indicator.contains("Manufacturer"));
        assert_eq!(result.manufacturer.as_deref(), Some("Tata Consumer Products, Mumbai"));
    }

    #[test]
    fn country_alone() {
        let result = score(Some("India"), None, "");
        assert_eq!(result.confidence, 0.70);
        assert_eq!(result.signal, Signal::CountryOfOrigin);

        let result = score(Some("India"), Some("Acme GmbH, Berlin"), "");
        assert_eq!(result.confidence, 0.70);
    }

    #[test]
    fn country_from_text_counts() {
        let result = score(None, None, "Country: India");
        assert_eq!(result.confidence, 0.70);
        assert_eq!(result.indicator, "Country of Origin: India");
    }

    #[test]
    fn manufacturer_only() {
        let result = score(None, Some("Plot 7, SIPCOT, Hosur"), "");
        assert!(result.is_indian);
        assert_eq!(result.confidence, 0.50);
        assert_eq!(result.indicator, "Manufacturer address in India");
    }

    #[test]
    fn manufacturer_ignored_when_country_is_unknown() {
        let result = score(Some("Not specified"), Some("Plot 7, SIPCOT, Hosur"), "");
        assert_ne!(result.signal, Signal::ManufacturerAddress);
        // Still found by the free-text geography fallback.
        assert_eq!(result.signal, Signal::Geography);
    }

    #[test]
    fn origin_label() {
        let result = score(None, None, "Origin: Made by artisans of India");
        assert_eq!(result.confidence, 0.70);
        assert_eq!(result.signal, Signal::OriginLabel);
    }

    #[test]
    fn weak_keywords() {
        let result = score(None, None, "Traditional desi ghee");
        assert!(result.is_indian);
        assert_eq!(result.confidence, 0.6);
        assert_eq!(result.indicator, "Keyword: desi");

        let result = score(None, None, "Desiccant pack included");
        assert!(!result.is_indian);
    }

    #[test]
    fn geography_fallback_ranks_city_over_pin() {
        let result = score(None, None, "Address: 123 Main Road, Bangalore 560001");
        assert!(result.is_indian);
        assert_eq!(result.confidence, 0.88);
        assert_eq!(result.indicator, "City: bangalore");
        assert_eq!(result.signal, Signal::Geography);
    }

    #[test]
    fn geography_fallback_pin_only() {
        let result = score(None, None, "Ships from warehouse 411001");
        assert_eq!(result.confidence, 0.75);
        assert_eq!(result.indicator, "PIN Code: 411001");
    }

    #[test]
    fn nothing_found() {
        let result = score(None, None, "A lovely ceramic mug");
        assert_eq!(result, DetectionResult::no_evidence());
        assert_eq!(score(None, None, ""), DetectionResult::no_evidence());
    }

    #[test]
    fn blank_fields_are_absent() {
        let result = score(Some("   "), Some(""), "Plot 7, MIDC");
        assert_eq!(result.signal, Signal::Geography);
        assert_eq!(result.manufacturer, None);
    }

    #[test]
    fn custom_kb_flows_through() {
        let kb = GeographyKb::builder().cities(["kundli"]).build();
        let scorer = Scorer::new(&kb);
        let result = scorer.score(None, Some("Unit 4, Kundli"), "");
        assert_eq!(result.signal, Signal::ManufacturerAddress);
        assert!(!score(None, Some("Unit 4, Kundli"), "").is_indian);
    }
}
