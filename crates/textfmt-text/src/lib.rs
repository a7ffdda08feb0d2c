//! Text helpers for normalizing and comparing scraped page text.
//!
//! Every function here is total: malformed input degrades to a best-effort
//! result instead of an error.
//!
//! # Example
//!
//! ```
//! use textfmt_text::{decode_html_entities, normalize_whitespace, to_camel_case};
//!
//! assert_eq!(normalize_whitespace("  a   b  \n c "), "a b c");
//! assert_eq!(to_camel_case("Add to basket"), "addToBasket");
//! assert_eq!(decode_html_entities("Fish &amp; Chips"), "Fish & Chips");
//! ```

mod case;
mod compare;
mod entities;
mod timing;
mod urls;
mod whitespace;

pub use case::{capitalize_first_word, to_camel_case, to_pascal_case};
pub use compare::{TextComparison, TextDiff, compare_normalized_texts, compare_texts};
pub use entities::decode_html_entities;
pub use timing::format_execution_time;
pub use urls::extract_urls;
pub use whitespace::{
    SOFT_HYPHEN, extract_text_only, normalize_whitespace, remove_soft_hyphens,
    split_text_and_get_part, trim_and_remove_double_spaces, trim_and_remove_soft_hyphen,
    trim_and_remove_spaces,
};
