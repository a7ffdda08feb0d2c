//! HTML entity decoding.
//!
//! Handles a fixed table of named entities plus decimal (`&#8364;`) and hex
//! (`&#x20AC;`) character references. Decoding is a single pass, so an
//! escaped entity such as `&amp;lt;` decodes to `&lt;` and not to `<`.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#([0-9]{1,7})|#[xX]([0-9a-fA-F]{1,6})|([a-zA-Z][a-zA-Z0-9]{1,31}));")
        .expect("valid entity regex")
});

static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Markup
        ("amp", "&"),
        ("lt", "<"),
        ("gt", ">"),
        ("quot", "\""),
        ("apos", "'"),
        // Spacing; nbsp becomes a plain space so normalized text compares equal
        ("nbsp", " "),
        ("ensp", " "),
        ("emsp", " "),
        ("thinsp", " "),
        ("shy", "\u{00AD}"),
        // Punctuation
        ("ndash", "–"),
        ("mdash", "—"),
        ("hellip", "…"),
        ("lsquo", "‘"),
        ("rsquo", "’"),
        ("sbquo", "‚"),
        ("ldquo", "“"),
        ("rdquo", "”"),
        ("bdquo", "„"),
        ("laquo", "«"),
        ("raquo", "»"),
        ("bull", "•"),
        ("middot", "·"),
        ("iexcl", "¡"),
        ("iquest", "¿"),
        ("sect", "§"),
        ("para", "¶"),
        ("dagger", "†"),
        ("Dagger", "‡"),
        // Currency
        ("euro", "€"),
        ("pound", "£"),
        ("yen", "¥"),
        ("cent", "¢"),
        ("curren", "¤"),
        // Symbols
        ("copy", "©"),
        ("reg", "®"),
        ("trade", "™"),
        ("deg", "°"),
        ("plusmn", "±"),
        ("times", "×"),
        ("divide", "÷"),
        ("micro", "µ"),
        ("frac12", "½"),
        ("frac14", "¼"),
        ("frac34", "¾"),
        ("permil", "‰"),
        // Latin-1 letters common in European shop pages
        ("Agrave", "À"),
        ("Aacute", "Á"),
        ("Acirc", "Â"),
        ("Auml", "Ä"),
        ("Ccedil", "Ç"),
        ("Egrave", "È"),
        ("Eacute", "É"),
        ("Ecirc", "Ê"),
        ("Iacute", "Í"),
        ("Ntilde", "Ñ"),
        ("Oacute", "Ó"),
        ("Ouml", "Ö"),
        ("Uacute", "Ú"),
        ("Uuml", "Ü"),
        ("szlig", "ß"),
        ("agrave", "à"),
        ("aacute", "á"),
        ("acirc", "â"),
        ("auml", "ä"),
        ("ccedil", "ç"),
        ("egrave", "è"),
        ("eacute", "é"),
        ("ecirc", "ê"),
        ("euml", "ë"),
        ("iacute", "í"),
        ("icirc", "î"),
        ("ntilde", "ñ"),
        ("oacute", "ó"),
        ("ocirc", "ô"),
        ("ouml", "ö"),
        ("uacute", "ú"),
        ("ugrave", "ù"),
        ("uuml", "ü"),
    ])
});

/// Decode named and numeric HTML entities.
///
/// Unknown names and invalid code points are left untouched.
///
/// ```
/// use textfmt_text::decode_html_entities;
///
/// assert_eq!(decode_html_entities("1&nbsp;234&#44;56&nbsp;&euro;"), "1 234,56 €");
/// assert_eq!(decode_html_entities("&#x41;&#66;"), "AB");
/// ```
pub fn decode_html_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    ENTITY
        .replace_all(text, |caps: &Captures<'_>| -> Cow<'static, str> {
            let whole = || Cow::Owned(caps[0].to_string());
            if let Some(dec) = caps.get(1) {
                return code_point(dec.as_str(), 10).map_or_else(whole, Cow::Owned);
            }
            if let Some(hex) = caps.get(2) {
                return code_point(hex.as_str(), 16).map_or_else(whole, Cow::Owned);
            }
            match caps.get(3).and_then(|name| NAMED_ENTITIES.get(name.as_str())) {
                Some(decoded) => Cow::Borrowed(*decoded),
                None => whole(),
            }
        })
        .into_owned()
}

fn code_point(digits: &str, radix: u32) -> Option<String> {
    u32::from_str_radix(digits, radix)
        .ok()
        .filter(|&value| value != 0)
        .and_then(char::from_u32)
        .map(String::from)
}
