//! Elapsed-hours computation for a session.
//!
//! The one subtlety here is the midnight rollover: an end time earlier than
//! the start time is treated as falling on the following day. The adjustment
//! is applied at most once, so sessions longer than 24 hours under-report.

use chrono::{Duration, NaiveDateTime};

/// Elapsed hours between two timestamps, rounded to 4 decimal places.
/// If `end < start` the end is shifted forward by one day (overnight
/// session). Pure and deterministic.
pub fn compute_duration_hours(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let end = if end < start {
        end + Duration::days(1)
    } else {
        end
    };

    let seconds = (end - start).num_seconds() as f64;
    round4(seconds / 3600.0)
}

/// Lenient variant for values coming back off storage: either side missing
/// (a stored value that failed to parse) yields 0.0 instead of an error.
pub fn compute_duration_hours_opt(
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> f64 {
    match (start, end) {
        (Some(s), Some(e)) => compute_duration_hours(s, e),
        _ => 0.0,
    }
}

pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn dt(time: &str) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_time(NaiveTime::parse_from_str(time, "%H:%M").unwrap())
    }

    #[test]
    fn same_day_duration() {
        assert_eq!(compute_duration_hours(dt("09:00"), dt("10:15")), 1.25);
        assert_eq!(compute_duration_hours(dt("09:00"), dt("17:30")), 8.5);
    }

    #[test]
    fn zero_length_session() {
        assert_eq!(compute_duration_hours(dt("09:00"), dt("09:00")), 0.0);
    }

    #[test]
    fn overnight_rollover() {
        // 22:00 -> 00:30 next day
        assert_eq!(compute_duration_hours(dt("22:00"), dt("00:30")), 2.5);
    }

    #[test]
    fn rollover_applies_once_only() {
        // A "26 hour" session expressed as same-day timestamps reports 2h.
        assert_eq!(compute_duration_hours(dt("09:00"), dt("11:00")), 2.0);
    }

    #[test]
    fn rounds_to_four_decimals() {
        // 1 second = 0.0002777.. h -> 0.0003
        let d = compute_duration_hours(dt("09:00"), dt("09:00") + chrono::Duration::seconds(1));
        assert_eq!(d, 0.0003);
    }

    #[test]
    fn missing_side_is_zero() {
        assert_eq!(compute_duration_hours_opt(None, Some(dt("10:00"))), 0.0);
        assert_eq!(compute_duration_hours_opt(Some(dt("09:00")), None), 0.0);
        assert_eq!(compute_duration_hours_opt(None, None), 0.0);
        assert_eq!(
            compute_duration_hours_opt(Some(dt("09:00")), Some(dt("10:15"))),
            1.25
        );
    }
}
