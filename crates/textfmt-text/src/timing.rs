use std::time::Instant;

/// Seconds elapsed since `start`, formatted with two decimals.
pub fn format_execution_time(start: Instant) -> String {
    format!("{:.2}", start.elapsed().as_secs_f64())
}
