//! Whitespace and character stripping.

use std::sync::LazyLock;

use regex::Regex;

/// U+00AD, invisible unless the browser breaks the word at that point.
pub const SOFT_HYPHEN: char = '\u{00AD}';

static NUMBERS_AND_CURRENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9€$£,.]+").expect("valid numbers regex"));

/// Trim and collapse every run of whitespace (including newlines) to one space.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove soft hyphens, then normalize whitespace.
pub fn remove_soft_hyphens(text: &str) -> String {
    normalize_whitespace(&text.replace(SOFT_HYPHEN, ""))
}

/// Remove every whitespace character.
pub fn trim_and_remove_spaces(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_whitespace()).collect()
}

/// Trim, then replace each pair of spaces with a single space.
///
/// Pairs are replaced left to right without rescanning, so four spaces
/// become two.
pub fn trim_and_remove_double_spaces(text: &str) -> String {
    text.trim().replace("  ", " ")
}

/// Trim, then remove soft hyphens without touching inner whitespace.
pub fn trim_and_remove_soft_hyphen(text: &str) -> String {
    text.trim().replace(SOFT_HYPHEN, "")
}

/// Split on `delimiter` and return the part at `index`.
pub fn split_text_and_get_part<'a>(text: &'a str, delimiter: &str, index: usize) -> Option<&'a str> {
    text.split(delimiter).nth(index)
}

/// Drop digits, `,`, `.` and the `€ $ £` symbols, then trim.
pub fn extract_text_only(text: &str) -> String {
    NUMBERS_AND_CURRENCY
        .replace_all(text, "")
        .trim()
        .to_string()
}
