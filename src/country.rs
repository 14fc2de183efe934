use once_cell::sync::Lazy;
use regex::Regex;

/// Countries whose explicit mention as origin rules out Indian manufacture.
///
/// Order matters only for which name is reported when several match.
pub const NON_INDIAN_COUNTRIES: &[&str] = &[
    "china",
    "usa",
    "united states",
    "south korea",
    "korea",
    "japan",
    "taiwan",
    "vietnam",
    "thailand",
    "malaysia",
    "singapore",
    "indonesia",
    "philippines",
    "hong kong",
    "germany",
    "france",
    "italy",
    "uk",
    "united kingdom",
    "mexico",
];

/// How a country name is looked up in text.
#[derive(Debug, Clone)]
enum CountryPattern {
    /// Multi-word names are compared as lowercase substrings.
    Phrase(String),
    /// Single words need word boundaries ("china" must not hit "Chinaware").
    Word(Regex),
}

impl CountryPattern {
    fn compile(country: &str) -> Option<Self> {
        let name = country.trim().to_lowercase();
        if name.is_empty() {
            return None;
        }
        if name.contains(char::is_whitespace) {
            return Some(Self::Phrase(name));
        }
        let pattern = match name.as_str() {
            "uk" => r"(?i)\bu\.?k\.?\b|\bunited\s+kingdom\b".to_string(),
            // A bare "us" is an ordinary word; it only counts as the whole value.
            "usa" => r"(?i)\bu\.?s\.?a\b|\A\s*us\s*\z".to_string(),
            _ => format!(r"(?i)\b{}\b", regex::escape(&name)),
        };
        Regex::new(&pattern).ok().map(Self::Word)
    }

    fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Phrase(phrase) => text.to_lowercase().contains(phrase.as_str()),
            Self::Word(regex) => regex.is_match(text),
        }
    }
}

static EXCLUSION_PATTERNS: Lazy<Vec<(&'static str, CountryPattern)>> = Lazy::new(|| {
    NON_INDIAN_COUNTRIES
        .iter()
        .filter_map(|country| CountryPattern::compile(country).map(|p| (*country, p)))
        .collect()
});

/// Whether `text` mentions `country_name` without matching inside another word.
///
/// "uk" accepts "UK", "U.K." and "United Kingdom" but not "Taluk"; "usa"
/// accepts "USA" and "U.S.A.".
pub fn matches_country(text: &str, country_name: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let key = country_name.trim().to_lowercase();
    if let Some((_, pattern)) = EXCLUSION_PATTERNS.iter().find(|(name, _)| *name == key) {
        return pattern.is_match(text);
    }
    CountryPattern::compile(&key).is_some_and(|pattern| pattern.is_match(text))
}

/// First entry of [`NON_INDIAN_COUNTRIES`] mentioned in `text`.
pub fn find_non_indian_country(text: &str) -> Option<&'static str> {
    if text.trim().is_empty() {
        return None;
    }
    EXCLUSION_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(name, _)| *name)
}

/// Presentation form of an exclusion-list entry ("hong kong" -> "Hong Kong").
pub fn display_name(country: &str) -> String {
    match country {
        "uk" | "usa" => country.to_uppercase(),
        _ => country
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" "),
    }
}
