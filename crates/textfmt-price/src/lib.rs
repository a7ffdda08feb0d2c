//! Price parsing for scraped page text.
//!
//! Shop pages render the same amount as `1,234.56` or `1.234,56` depending on
//! the locale, usually wrapped in currency symbols and whitespace. This crate
//! recovers the numeric value without knowing the locale up front.
//!
//! # Overview
//!
//! Parsing runs in three stages:
//! - **Cleaning**: keep only ASCII digits, `,` and `.`
//! - **Classification**: an ordered rule table inspects the [`SeparatorProfile`]
//!   and picks how the separators are read
//! - **Conversion**: the normalized digit string becomes an `f64`
//!
//! # Example
//!
//! ```
//! use textfmt_price::{format_european_number, parse_price};
//!
//! assert_eq!(parse_price("€ 1.234,56"), 1234.56);
//! assert_eq!(parse_price("$1,234.56"), 1234.56);
//! assert_eq!(parse_price("9.260"), 9260.0);
//! assert_eq!(format_european_number(1234.56), "1.234,56");
//! ```
//!
//! Parsing never fails: empty or digit-free input yields `0.0`.

mod format;
mod parse;
mod profile;
mod rules;

pub use format::{format_european_number, trim_to_two_decimal_places};
pub use parse::{PriceParse, parse_price, parse_price_detailed, parse_price_opt};
pub use profile::{SeparatorProfile, clean_price_text};
pub use rules::{Normalization, PriceRule, RULES, RuleKind, classify, classify_with};
