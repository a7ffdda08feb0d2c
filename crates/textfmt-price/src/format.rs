//! Number formatting helpers.

/// Format a number European style with two decimals.
///
/// Periods group thousands and a comma separates the decimals.
///
/// ```
/// use textfmt_price::format_european_number;
///
/// assert_eq!(format_european_number(123456.789), "123.456,79");
/// assert_eq!(format_european_number(0.0), "0,00");
/// assert_eq!(format_european_number(-1234.5), "-1.234,50");
/// ```
pub fn format_european_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let formatted = format!("{:.2}", value.abs());
    let (int_part, dec_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let rounds_to_zero = !formatted.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if value < 0.0 && !rounds_to_zero { "-" } else { "" };
    format!("{sign}{grouped},{dec_part}")
}

/// Round to two decimal places.
///
/// Rounds the exact binary value, so `0.015` (stored as `0.01499…`) becomes
/// `0.01`. Large values pass through unchanged.
pub fn trim_to_two_decimal_places(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
