use once_cell::sync::Lazy;
use regex::Regex;

// Patterns below are string literals that always compile.
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static LOWER_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static LETTER_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Za-z])([0-9])").unwrap());
static DIGIT_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9])([A-Za-z])").unwrap());

/// Clean scraped text so label/value regexes behave consistently.
///
/// Product pages frequently glue a label to its value ("CountryIndia",
/// "Bangalore560001"). This collapses whitespace, splits those joins with a
/// single space and trims the result. Empty input yields an empty string.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let collapsed = WHITESPACE_RUN.replace_all(raw, " ");
    let split = LOWER_UPPER.replace_all(&collapsed, "$1 $2");
    let split = LETTER_DIGIT.replace_all(&split, "$1 $2");
    let split = DIGIT_LETTER.replace_all(&split, "$1 $2");

    split.trim().to_string()
}

/// Normalize each line on its own, dropping blank lines.
///
/// Free-text extraction anchors values to the end of a line, so line breaks
/// have to survive normalization.
pub fn normalize_lines(raw: &str) -> String {
    raw.lines()
        .map(normalize)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
