//! URL extraction from free text.

use std::sync::LazyLock;

use regex::Regex;

// Trailing punctuation is excluded by the final class, so "see www.a.com."
// yields "www.a.com".
static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:(?:https?|ftp|file)://|www\.|ftp\.)(?:\([\-A-Z0-9+\&@#/%=\~_|$?!:,.]*\)|[\-A-Z0-9+\&@#/%=\~_|$?!:,.])*(?:\([\-A-Z0-9+\&@#/%=\~_|$?!:,.]*\)|[A-Z0-9+\&@#/%=\~_|$])",
    )
    .expect("valid url regex")
});

/// Find URLs in text, in order of appearance.
///
/// Recognizes `http`, `https`, `ftp` and `file` schemes as well as bare
/// `www.` and `ftp.` hosts. Duplicates are kept.
///
/// ```
/// use textfmt_text::extract_urls;
///
/// let urls = extract_urls("Check out https://example.com and http://test.com");
/// assert_eq!(urls, ["https://example.com", "http://test.com"]);
/// ```
pub fn extract_urls(text: &str) -> Vec<String> {
    URL.find_iter(text)
        .map(|found| found.as_str().to_string())
        .collect()
}
