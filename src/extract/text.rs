//! Label/value extraction from plain text.
//!
//! Text is expected to be normalized line by line, so a value ends at the end
//! of its line or at the next recognizable label, whichever comes first.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ExtractionCandidate, select_longest};

// Pattern literals below always compile.

/// Labels that commonly follow one another on retail listings.
static KNOWN_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:country\s+of\s+origin|manufacturer(?:'s)?|manufactured\s+by|importer|imported\s+by|packer|packed\s+by|marketed\s+by|marketer|net\s+quantity|generic\s+name|customer\s+care|item\s+weight|item\s+dimensions|model\s+number|sold\s+by|best\s+sellers\s+rank|date\s+first\s+available)\b",
    )
    .unwrap()
});
static COUNTRY_OF_ORIGIN_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bcountry\s+of\s+origin\b\s*[:\-–]?").unwrap());
static COUNTRY_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bcountry\s*[:\-–]").unwrap());
static MANUFACTURER_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:manufacturer(?:'s)?|manufactured\s+by)\b[^:\n]{0,40}:").unwrap()
});
static ORIGIN_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\borigin(?:\s*:\s*|\s+)").unwrap());
static ORIGIN_STATEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:made|manufactured|produced|assembled)\s+in\s+(?:the\s+)?").unwrap()
});

const COUNTRY_MAX_CHARS: usize = 50;
const MANUFACTURER_MAX_CHARS: usize = 500;
const STATEMENT_MAX_CHARS: usize = 60;

/// The value that follows a label match: the rest of the line, or the next
/// line when the label ends its own line.
fn value_after(text: &str, label_end: usize) -> &str {
    let rest = text[label_end..].trim_start_matches([' ', '\t']);
    let rest = rest.strip_prefix('\n').unwrap_or(rest);
    rest.split('\n').next().unwrap_or_default()
}

/// Cut a value where the next known label starts.
pub(crate) fn truncate_at_label(value: &str) -> &str {
    match KNOWN_LABEL.find(value) {
        Some(m) => &value[..m.start()],
        None => value,
    }
}

/// Trim whitespace and separator punctuation around a value.
pub(crate) fn tidy_value(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':' | '|' | '-'))
}

fn country_after(text: &str, label: &Regex) -> Option<String> {
    label.find_iter(text).find_map(|m| {
        let rest = value_after(text, m.end());
        let end = rest
            .find(|c: char| !(c.is_alphabetic() || matches!(c, ' ' | '.' | '&' | '(' | ')')))
            .unwrap_or(rest.len());
        let value = tidy_value(truncate_at_label(&rest[..end]));
        (!value.is_empty() && value.chars().count() < COUNTRY_MAX_CHARS)
            .then(|| value.to_string())
    })
}

/// Country named after a "Country of Origin" label, falling back to a bare
/// "Country:" label.
pub fn country_of_origin(text: &str) -> Option<String> {
    country_after(text, &COUNTRY_OF_ORIGIN_LABEL).or_else(|| country_after(text, &COUNTRY_LABEL))
}

/// Every manufacturer value labeled in `text`; the longest one wins.
pub fn manufacturer_candidates(text: &str) -> Vec<ExtractionCandidate> {
    MANUFACTURER_LABEL
        .find_iter(text)
        .filter_map(|m| {
            let value = tidy_value(truncate_at_label(value_after(text, m.end())));
            (!value.is_empty() && value.chars().count() < MANUFACTURER_MAX_CHARS)
                .then(|| ExtractionCandidate::new(value, "text"))
        })
        .collect()
}

pub fn manufacturer_address(text: &str) -> Option<String> {
    select_longest(manufacturer_candidates(text)).map(|candidate| candidate.value)
}

/// "Country of Origin" and "Place of Origin" are labels of their own.
fn follows_of(before: &str) -> bool {
    let before = before.trim_end();
    let Some(head) = before.len().checked_sub(2).and_then(|i| before.get(..i)) else {
        return false;
    };
    before[head.len()..].eq_ignore_ascii_case("of")
        && !head.ends_with(|c: char| c.is_alphanumeric())
}

/// Value of a short "Origin: X" label, up to the end of line or first comma.
pub fn origin_label(text: &str) -> Option<String> {
    ORIGIN_LABEL.find_iter(text).find_map(|m| {
        if follows_of(&text[..m.start()]) {
            return None;
        }
        let rest = value_after(text, m.end());
        let value = tidy_value(rest.split(',').next().unwrap_or_default());
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// Place named by the first "made/manufactured/produced/assembled in ..."
/// statement, e.g. "Bangkok, Thailand".
pub fn origin_statement(text: &str) -> Option<String> {
    let m = ORIGIN_STATEMENT.find(text)?;
    let rest = value_after(text, m.end());
    let end = rest
        .find(|c: char| !(c.is_alphabetic() || matches!(c, ' ' | '.' | ',' | '&' | '-')))
        .unwrap_or(rest.len());
    let value: String = truncate_at_label(&rest[..end])
        .chars()
        .take(STATEMENT_MAX_CHARS)
        .collect();
    let value = tidy_value(&value);
    (!value.is_empty()).then(|| value.to_string())
}
