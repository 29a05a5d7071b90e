//! Time utilities: parsing HH:MM, formatting elapsed hours.

use chrono::NaiveTime;

use crate::errors::{AppError, AppResult};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

pub fn parse_required_time(input: &str) -> AppResult<NaiveTime> {
    parse_time(input).ok_or_else(|| AppError::InvalidTime(input.to_string()))
}

/// Render fractional hours as `HHh MMm SSs` for the timer display.
pub fn format_elapsed(hours: f64) -> String {
    let total_seconds = (hours * 3600.0).round().max(0.0) as i64;
    format!(
        "{:02}h {:02}m {:02}s",
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60
    )
}
