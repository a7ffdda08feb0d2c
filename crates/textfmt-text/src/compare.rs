//! Text comparison with a structured mismatch report.

use serde::Serialize;
use tracing::debug;

use crate::whitespace::remove_soft_hyphens;

/// Outcome of comparing an expected text with an actual one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextComparison {
    pub equal: bool,
    /// Present only when the texts differ.
    pub diff: Option<TextDiff>,
}

/// Where two texts diverge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextDiff {
    pub expected: String,
    pub actual: String,
    /// Character offset of the first differing character.
    pub first_mismatch: usize,
    pub expected_len: usize,
    pub actual_len: usize,
}

/// Compare two texts exactly.
///
/// A mismatch is logged at debug level along with the offset where the texts
/// diverge.
pub fn compare_texts(expected: &str, actual: &str) -> TextComparison {
    if expected == actual {
        return TextComparison {
            equal: true,
            diff: None,
        };
    }

    let first_mismatch = expected
        .chars()
        .zip(actual.chars())
        .take_while(|(a, b)| a == b)
        .count();
    let diff = TextDiff {
        expected: expected.to_string(),
        actual: actual.to_string(),
        first_mismatch,
        expected_len: expected.chars().count(),
        actual_len: actual.chars().count(),
    };
    debug!(
        expected = %diff.expected,
        actual = %diff.actual,
        first_mismatch = diff.first_mismatch,
        "texts differ"
    );
    TextComparison {
        equal: false,
        diff: Some(diff),
    }
}

/// Compare after removing soft hyphens and normalizing whitespace on both sides.
pub fn compare_normalized_texts(expected: &str, actual: &str) -> TextComparison {
    compare_texts(&remove_soft_hyphens(expected), &remove_soft_hyphens(actual))
}
