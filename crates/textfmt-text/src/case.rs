//! Case conversion for identifiers built from visible labels.

use std::sync::LazyLock;

use regex::Regex;

static NON_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z]+").expect("valid non-letter regex"));

/// Convert text to camelCase.
///
/// Anything that is not an ASCII letter separates words. The first word is
/// lowercased and each later word starts with an uppercase letter. Input
/// without letters yields an empty string.
///
/// ```
/// use textfmt_text::to_camel_case;
///
/// assert_eq!(to_camel_case("hello world"), "helloWorld");
/// assert_eq!(to_camel_case("Price (incl. VAT)"), "priceInclVat");
/// assert_eq!(to_camel_case("!@#$%^&*()"), "");
/// ```
pub fn to_camel_case(text: &str) -> String {
    letter_words(text)
        .into_iter()
        .enumerate()
        .map(|(idx, word)| {
            let lower = word.to_ascii_lowercase();
            if idx == 0 { lower } else { capitalize(&lower) }
        })
        .collect()
}

/// Convert text to PascalCase using the same word splitting as [`to_camel_case`].
pub fn to_pascal_case(text: &str) -> String {
    letter_words(text)
        .into_iter()
        .map(|word| capitalize(&word.to_ascii_lowercase()))
        .collect()
}

/// Return the first space-separated word, capitalized, with the rest lowercased.
pub fn capitalize_first_word(text: &str) -> String {
    let first = text.split(' ').next().unwrap_or_default();
    let mut chars = first.chars();
    match chars.next() {
        Some(head) => {
            let rest = chars.as_str().to_lowercase();
            head.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    }
}

fn letter_words(text: &str) -> Vec<String> {
    NON_LETTERS
        .replace_all(text, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(head) => head.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_camel_case("hello world"), "helloWorld");
        assert_eq!(to_camel_case("JAVASCRIPT testing"), "javascriptTesting");
        assert_eq!(to_camel_case("  multiple   spaces "), "multipleSpaces");
        assert_eq!(to_camel_case("item-2-name"), "itemName");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_pascal_case("hello world"), "HelloWorld");
        assert_eq!(to_pascal_case("SHOP now_today"), "ShopNowToday");
        assert_eq!(to_pascal_case("!@#"), "");
    }

    #[test]
    fn test_capitalize_first_word() {
        assert_eq!(capitalize_first_word("hello world"), "Hello");
        assert_eq!(capitalize_first_word("JAVASCRIPT testing"), "Javascript");
        assert_eq!(capitalize_first_word(""), "");
        assert_eq!(capitalize_first_word("élan vital"), "Élan");
    }
}
