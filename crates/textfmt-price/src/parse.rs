//! Price parsing entry points.

use serde::Serialize;
use tracing::trace;

use crate::profile::{SeparatorProfile, clean_price_text};
use crate::rules::{Normalization, RuleKind, classify};

/// Full record of how a price string was interpreted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceParse {
    /// Input reduced to digits, `,` and `.`.
    pub cleaned: String,
    /// Rule that classified the cleaned text. `None` when there was nothing to classify.
    pub rule: Option<RuleKind>,
    /// Separator rewrite chosen by the rule.
    pub normalization: Option<Normalization>,
    /// Digit string handed to numeric conversion.
    pub normalized: String,
    /// Parsed value, `0.0` when no digits were found.
    pub value: f64,
}

impl PriceParse {
    fn empty(cleaned: String) -> Self {
        Self {
            cleaned,
            rule: None,
            normalization: None,
            normalized: String::new(),
            value: 0.0,
        }
    }
}

/// Parse a price written in either US (`1,234.56`) or European (`1.234,56`) style.
///
/// Currency symbols, whitespace and any other non-numeric characters are
/// ignored, including a leading `-`. Returns `0.0` for empty input or input
/// without digits.
///
/// ```
/// use textfmt_price::parse_price;
///
/// assert_eq!(parse_price("1,234,567.89"), 1234567.89);
/// assert_eq!(parse_price("1.234.567,89"), 1234567.89);
/// assert_eq!(parse_price("£ 9,260"), 9260.0);
/// assert_eq!(parse_price("n/a"), 0.0);
/// ```
pub fn parse_price(text: &str) -> f64 {
    parse_price_detailed(text).value
}

/// [`parse_price`] for values that may be absent.
pub fn parse_price_opt(text: Option<&str>) -> f64 {
    text.map_or(0.0, parse_price)
}

/// Parse a price and report which rule fired.
pub fn parse_price_detailed(text: &str) -> PriceParse {
    if text.is_empty() {
        return PriceParse::empty(String::new());
    }
    let cleaned = clean_price_text(text);
    if cleaned.is_empty() {
        return PriceParse::empty(cleaned);
    }

    let profile = SeparatorProfile::of(&cleaned);
    let (rule, normalization) = classify(&profile);
    let normalized = normalization.apply(&cleaned);
    let value = leading_number(&normalized);
    trace!(
        cleaned = %cleaned,
        rule = %rule,
        normalized = %normalized,
        value,
        "classified price text"
    );

    PriceParse {
        cleaned,
        rule: Some(rule),
        normalization: Some(normalization),
        normalized,
        value,
    }
}

/// Convert the longest `digits[.digits]` prefix to a number.
///
/// Anything after that prefix is ignored. A prefix without digits, or one too
/// long to fit a finite `f64`, is `0.0`.
fn leading_number(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let int_end = bytes
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(bytes.len());
    let mut end = int_end;
    if bytes.get(int_end) == Some(&b'.') {
        let frac_len = bytes[int_end + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if frac_len > 0 {
            end = int_end + 1 + frac_len;
        }
    }

    let number = &text[..end];
    if number.is_empty() {
        return 0.0;
    }
    let number = if number.starts_with('.') {
        format!("0{number}")
    } else {
        number.to_string()
    };
    number
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}
