//! Cleaning and separator profiling.

/// Strip everything except ASCII digits, `,` and `.`.
///
/// The result preserves the relative order of the kept characters.
pub fn clean_price_text(text: &str) -> String {
    text.chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, ',' | '.'))
        .collect()
}

/// Counts and positions of the two separator characters in cleaned text.
///
/// Cleaned text is pure ASCII, so byte offsets and character offsets agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeparatorProfile {
    pub comma_count: usize,
    pub period_count: usize,
    pub last_comma: Option<usize>,
    pub last_period: Option<usize>,
    pub len: usize,
}

impl SeparatorProfile {
    /// Profile an already cleaned string.
    pub fn of(cleaned: &str) -> Self {
        let mut profile = Self {
            len: cleaned.len(),
            ..Self::default()
        };
        for (idx, byte) in cleaned.bytes().enumerate() {
            match byte {
                b',' => {
                    profile.comma_count += 1;
                    profile.last_comma = Some(idx);
                }
                b'.' => {
                    profile.period_count += 1;
                    profile.last_period = Some(idx);
                }
                _ => {}
            }
        }
        profile
    }

    pub fn has_separators(&self) -> bool {
        self.comma_count > 0 || self.period_count > 0
    }

    /// Characters after the last comma, if there is one.
    pub fn after_last_comma(&self) -> Option<usize> {
        self.last_comma.map(|idx| self.len - idx - 1)
    }

    /// Characters after the last period, if there is one.
    pub fn after_last_period(&self) -> Option<usize> {
        self.last_period.map(|idx| self.len - idx - 1)
    }

    /// True when the last comma sits to the right of the last period.
    pub fn comma_is_last(&self) -> bool {
        match (self.last_comma, self.last_period) {
            (Some(comma), Some(period)) => comma > period,
            (Some(_), None) => true,
            _ => false,
        }
    }

    /// True when the last period sits to the right of the last comma.
    pub fn period_is_last(&self) -> bool {
        match (self.last_comma, self.last_period) {
            (Some(comma), Some(period)) => period > comma,
            (None, Some(_)) => true,
            _ => false,
        }
    }
}
