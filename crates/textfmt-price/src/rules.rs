//! Ordered separator rules.
//!
//! Each rule pairs a predicate over the [`SeparatorProfile`] with the
//! normalization it selects. Rules are evaluated top to bottom and the first
//! match wins. The recurring heuristic is that exactly two characters after a
//! separator mark it as a decimal point (cents); any other count marks it as
//! a grouping separator.

use std::fmt;

use serde::Serialize;

use crate::profile::SeparatorProfile;

/// Identifies which rule classified a price string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// No `,` or `.` at all.
    NoSeparator,
    /// Both separators, comma last with two trailing digits (`1.234,56`).
    MixedEuropean,
    /// Both separators, period last with two trailing digits (`1,234.56`).
    MixedUs,
    /// Both separators, more than two characters after the last comma.
    MixedCommaGrouping,
    /// Both separators, nothing else matched.
    MixedEuropeanFallback,
    /// One comma followed by exactly two characters.
    SingleCommaDecimal,
    /// One comma followed by any other count.
    SingleCommaGrouping,
    /// One period followed by exactly two characters.
    SinglePeriodDecimal,
    /// One period followed by any other count.
    SinglePeriodGrouping,
    /// Several periods and no comma.
    RepeatedPeriods,
    /// Several commas and no period.
    RepeatedCommas,
    /// Safety net when no table entry matched.
    Residual,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::NoSeparator => "no_separator",
            RuleKind::MixedEuropean => "mixed_european",
            RuleKind::MixedUs => "mixed_us",
            RuleKind::MixedCommaGrouping => "mixed_comma_grouping",
            RuleKind::MixedEuropeanFallback => "mixed_european_fallback",
            RuleKind::SingleCommaDecimal => "single_comma_decimal",
            RuleKind::SingleCommaGrouping => "single_comma_grouping",
            RuleKind::SinglePeriodDecimal => "single_period_decimal",
            RuleKind::SinglePeriodGrouping => "single_period_grouping",
            RuleKind::RepeatedPeriods => "repeated_periods",
            RuleKind::RepeatedCommas => "repeated_commas",
            RuleKind::Residual => "residual",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How separators are rewritten before numeric conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Leave the text as it is.
    Unchanged,
    /// European reading: periods group, the last comma is the decimal point.
    CommaDecimal,
    /// US reading: commas group and are removed.
    StripCommas,
    /// Periods group and are removed.
    StripPeriods,
}

impl Normalization {
    /// Rewrite cleaned text into a plain digit string with at most one `.`.
    pub fn apply(self, cleaned: &str) -> String {
        match self {
            Normalization::Unchanged => cleaned.to_string(),
            Normalization::StripCommas => cleaned.replace(',', ""),
            Normalization::StripPeriods => cleaned.replace('.', ""),
            Normalization::CommaDecimal => {
                let last_comma = cleaned.rfind(',');
                cleaned
                    .char_indices()
                    .filter_map(|(idx, ch)| match ch {
                        '.' => None,
                        ',' if Some(idx) == last_comma => Some('.'),
                        ',' => None,
                        other => Some(other),
                    })
                    .collect()
            }
        }
    }
}

/// One entry of the rule table.
#[derive(Clone, Copy)]
pub struct PriceRule {
    pub kind: RuleKind,
    pub applies: fn(&SeparatorProfile) -> bool,
    pub normalization: Normalization,
}

impl fmt::Debug for PriceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriceRule")
            .field("kind", &self.kind)
            .field("normalization", &self.normalization)
            .finish_non_exhaustive()
    }
}

/// The rule table, in evaluation order.
pub static RULES: &[PriceRule] = &[
    PriceRule {
        kind: RuleKind::NoSeparator,
        applies: no_separator,
        normalization: Normalization::Unchanged,
    },
    PriceRule {
        kind: RuleKind::MixedEuropean,
        applies: mixed_european,
        normalization: Normalization::CommaDecimal,
    },
    PriceRule {
        kind: RuleKind::MixedUs,
        applies: mixed_us,
        normalization: Normalization::StripCommas,
    },
    PriceRule {
        kind: RuleKind::MixedCommaGrouping,
        applies: mixed_comma_grouping,
        normalization: Normalization::StripCommas,
    },
    PriceRule {
        kind: RuleKind::MixedEuropeanFallback,
        applies: mixed,
        normalization: Normalization::CommaDecimal,
    },
    PriceRule {
        kind: RuleKind::SingleCommaDecimal,
        applies: single_comma_decimal,
        normalization: Normalization::CommaDecimal,
    },
    PriceRule {
        kind: RuleKind::SingleCommaGrouping,
        applies: single_comma,
        normalization: Normalization::StripCommas,
    },
    PriceRule {
        kind: RuleKind::SinglePeriodDecimal,
        applies: single_period_decimal,
        normalization: Normalization::Unchanged,
    },
    PriceRule {
        kind: RuleKind::SinglePeriodGrouping,
        applies: single_period,
        normalization: Normalization::StripPeriods,
    },
    PriceRule {
        kind: RuleKind::RepeatedPeriods,
        applies: repeated_periods,
        normalization: Normalization::StripPeriods,
    },
    PriceRule {
        kind: RuleKind::RepeatedCommas,
        applies: repeated_commas,
        normalization: Normalization::StripCommas,
    },
];

/// Pick the rule for a profile.
///
/// Falls back to [`RuleKind::Residual`] when nothing in [`RULES`] matches,
/// reading the text as European when a comma is the last separator and as
/// US otherwise.
pub fn classify(profile: &SeparatorProfile) -> (RuleKind, Normalization) {
    classify_with(RULES, profile)
}

/// Evaluate an arbitrary rule table, with the same residual fallback as [`classify`].
pub fn classify_with(rules: &[PriceRule], profile: &SeparatorProfile) -> (RuleKind, Normalization) {
    if let Some(rule) = rules.iter().find(|rule| (rule.applies)(profile)) {
        return (rule.kind, rule.normalization);
    }
    let normalization = if profile.comma_is_last() {
        Normalization::CommaDecimal
    } else {
        Normalization::StripCommas
    };
    (RuleKind::Residual, normalization)
}

fn no_separator(p: &SeparatorProfile) -> bool {
    !p.has_separators()
}

fn mixed(p: &SeparatorProfile) -> bool {
    p.comma_count > 0 && p.period_count > 0
}

fn mixed_european(p: &SeparatorProfile) -> bool {
    mixed(p) && p.comma_is_last() && p.after_last_comma() == Some(2)
}

fn mixed_us(p: &SeparatorProfile) -> bool {
    mixed(p) && p.period_is_last() && p.after_last_period() == Some(2)
}

fn mixed_comma_grouping(p: &SeparatorProfile) -> bool {
    mixed(p) && p.after_last_comma().is_some_and(|n| n > 2)
}

fn single_comma(p: &SeparatorProfile) -> bool {
    p.comma_count == 1 && p.period_count == 0
}

fn single_comma_decimal(p: &SeparatorProfile) -> bool {
    single_comma(p) && p.after_last_comma() == Some(2)
}

fn single_period(p: &SeparatorProfile) -> bool {
    p.period_count == 1 && p.comma_count == 0
}

fn single_period_decimal(p: &SeparatorProfile) -> bool {
    single_period(p) && p.after_last_period() == Some(2)
}

fn repeated_periods(p: &SeparatorProfile) -> bool {
    p.period_count > 1 && p.comma_count == 0
}

fn repeated_commas(p: &SeparatorProfile) -> bool {
    p.comma_count > 1 && p.period_count == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(cleaned: &str) -> RuleKind {
        classify(&SeparatorProfile::of(cleaned)).0
    }

    #[test]
    fn test_mixed_rules() {
        assert_eq!(kind_of("1.234,56"), RuleKind::MixedEuropean);
        assert_eq!(kind_of("1,234.56"), RuleKind::MixedUs);
        assert_eq!(kind_of("1,234.5"), RuleKind::MixedCommaGrouping);
        assert_eq!(kind_of("1.234,5"), RuleKind::MixedEuropeanFallback);
    }

    #[test]
    fn test_single_separator_rules() {
        assert_eq!(kind_of("9,26"), RuleKind::SingleCommaDecimal);
        assert_eq!(kind_of("9,260"), RuleKind::SingleCommaGrouping);
        assert_eq!(kind_of("9.26"), RuleKind::SinglePeriodDecimal);
        assert_eq!(kind_of("9.260"), RuleKind::SinglePeriodGrouping);
    }

    #[test]
    fn test_repeated_and_plain_rules() {
        assert_eq!(kind_of("1234"), RuleKind::NoSeparator);
        assert_eq!(kind_of("1.2.3"), RuleKind::RepeatedPeriods);
        assert_eq!(kind_of("1,2,3"), RuleKind::RepeatedCommas);
    }

    #[test]
    fn test_table_covers_every_count_combination() {
        for cleaned in ["", "1", ",", ".", ",.", ".,", ",,", "..", "1,2.3,4", "1.2,3.4"] {
            assert_ne!(kind_of(cleaned), RuleKind::Residual, "{cleaned:?}");
        }
    }

    #[test]
    fn test_residual_follows_last_separator() {
        let european = SeparatorProfile::of("1.234,5");
        let us = SeparatorProfile::of("1,234.5");
        assert_eq!(
            classify_with(&[], &european),
            (RuleKind::Residual, Normalization::CommaDecimal)
        );
        assert_eq!(
            classify_with(&[], &us),
            (RuleKind::Residual, Normalization::StripCommas)
        );
    }

    #[test]
    fn test_comma_decimal_keeps_only_last_comma() {
        assert_eq!(Normalization::CommaDecimal.apply("1.234,56"), "1234.56");
        assert_eq!(Normalization::CommaDecimal.apply("1,234,56"), "1234.56");
        assert_eq!(Normalization::StripCommas.apply("1,234.56"), "1234.56");
        assert_eq!(Normalization::StripPeriods.apply("1.234.567"), "1234567");
        assert_eq!(Normalization::Unchanged.apply("12.50"), "12.50");
    }
}
