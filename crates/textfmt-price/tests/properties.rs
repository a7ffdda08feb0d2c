//! Property tests for price parsing.

use proptest::prelude::*;
use textfmt_price::{format_european_number, parse_price};

fn us_format(cents: u64) -> String {
    let int_part = (cents / 100).to_string();
    let digits = int_part.len();
    let mut grouped = String::new();
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{grouped}.{:02}", cents % 100)
}

proptest! {
    #[test]
    fn never_nan_or_negative(text in ".*") {
        let value = parse_price(&text);
        prop_assert!(value.is_finite());
        prop_assert!(value >= 0.0);
    }

    #[test]
    fn european_round_trip(cents in 0u64..100_000_000_000) {
        let value = cents as f64 / 100.0;
        prop_assert_eq!(parse_price(&format_european_number(value)), value);
    }

    #[test]
    fn us_and_european_agree(cents in 0u64..100_000_000_000) {
        let value = cents as f64 / 100.0;
        prop_assert_eq!(parse_price(&us_format(cents)), value);
    }

    #[test]
    fn wrapping_does_not_change_value(
        cents in 0u64..1_000_000_000,
        prefix in prop::sample::select(vec!["", "€", "$", "£", "¢", " ", "  € ", "\t$"]),
        suffix in prop::sample::select(vec!["", "€", " $", "£", "¢", " ", "\n"]),
    ) {
        let text = format_european_number(cents as f64 / 100.0);
        let wrapped = format!("{prefix}{text}{suffix}");
        prop_assert_eq!(parse_price(&wrapped), parse_price(&text));
    }
}
