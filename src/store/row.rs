//! Lenient coercion from stored text back into typed sessions.
//!
//! Reading never fails on a malformed value: bad dates and timestamps become
//! `None`, a bad focus becomes zero, and a bad duration is recomputed from
//! the timestamps (bottoming out at zero). A half-broken historical row
//! still shows up in listings and label totals instead of blocking the
//! dashboard.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::core::duration::compute_duration_hours_opt;
use crate::models::session::Session;

pub fn coerce_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Accepts RFC3339 and the common naive ISO-8601 spellings.
pub fn coerce_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    None
}

pub fn coerce_i64(s: &str) -> i64 {
    let t = s.trim();
    t.parse::<i64>()
        .or_else(|_| t.parse::<f64>().map(|f| f as i64))
        .unwrap_or(0)
}

/// Build a session from the ten stored fields in schema order.
/// Shared by the SQLite and remote read paths.
pub fn session_from_fields(fields: [&str; 10]) -> Session {
    let [id, created_at, date, start, end, duration, project, task_type, notes, focus] = fields;

    let start_time = coerce_datetime(start);
    let end_time = coerce_datetime(end);

    // a stored duration that does not parse is recomputed from the
    // timestamps; with those also missing it bottoms out at 0
    let duration_hours = duration
        .trim()
        .parse::<f64>()
        .unwrap_or_else(|_| compute_duration_hours_opt(start_time, end_time));

    Session {
        id: id.to_string(),
        created_at: created_at.to_string(),
        date: coerce_date(date),
        start_time,
        end_time,
        duration_hours,
        project: project.to_string(),
        task_type: task_type.to_string(),
        notes: notes.to_string(),
        focus_rating: coerce_i64(focus),
    }
}
