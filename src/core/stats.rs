//! Dashboard aggregations over the full session table.
//!
//! Everything here is a pure projection recomputed on each render; `today`
//! is injected so the window arithmetic stays testable.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::core::duration::round4;
use crate::models::session::Session;

/// Number of days covered by the daily series.
pub const DAILY_WINDOW: usize = 14;

#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelTotal {
    pub label: String,
    pub hours: f64,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub weekly_total: f64,
    pub daily: Vec<DailyTotal>,
    pub by_project: Vec<LabelTotal>,
    pub by_task_type: Vec<LabelTotal>,
}

/// Monday..Sunday window containing `today`, inclusive on both ends.
pub fn week_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    (monday, monday + Duration::days(6))
}

/// Sum of hours for sessions dated within the current week.
pub fn weekly_total(sessions: &[Session], today: NaiveDate) -> f64 {
    let (monday, sunday) = week_bounds(today);
    let sum = sessions
        .iter()
        .filter_map(|s| s.date.map(|d| (d, s.duration_hours)))
        .filter(|(d, _)| *d >= monday && *d <= sunday)
        .map(|(_, h)| h)
        .sum();
    round4(sum)
}

/// Per-day totals for `[today - 13, today]`, always exactly 14 points in
/// chronological order. Days without sessions report 0.
pub fn daily_series(sessions: &[Session], today: NaiveDate) -> Vec<DailyTotal> {
    let cutoff = today - Duration::days(DAILY_WINDOW as i64 - 1);

    let mut per_day: HashMap<NaiveDate, f64> = HashMap::new();
    for s in sessions {
        if let Some(d) = s.date
            && d >= cutoff
            && d <= today
        {
            *per_day.entry(d).or_insert(0.0) += s.duration_hours;
        }
    }

    (0..DAILY_WINDOW as i64)
        .map(|offset| {
            let date = cutoff + Duration::days(offset);
            DailyTotal {
                date,
                hours: round4(per_day.get(&date).copied().unwrap_or(0.0)),
            }
        })
        .collect()
}

/// Group sessions by a label, sum hours, sort descending by total.
/// Ties break on the label so the output stays stable between renders.
pub fn totals_by_label<F>(sessions: &[Session], label_of: F) -> Vec<LabelTotal>
where
    F: Fn(&Session) -> &str,
{
    let mut map: HashMap<String, f64> = HashMap::new();
    for s in sessions {
        *map.entry(label_of(s).to_string()).or_insert(0.0) += s.duration_hours;
    }

    let mut totals: Vec<LabelTotal> = map
        .into_iter()
        .map(|(label, hours)| LabelTotal {
            label,
            hours: round4(hours),
        })
        .collect();

    totals.sort_by(|a, b| {
        b.hours
            .partial_cmp(&a.hours)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });
    totals
}

pub fn totals_by_project(sessions: &[Session]) -> Vec<LabelTotal> {
    totals_by_label(sessions, |s| &s.project)
}

pub fn totals_by_task_type(sessions: &[Session]) -> Vec<LabelTotal> {
    totals_by_label(sessions, |s| &s.task_type)
}

/// Everything the stats command renders, computed in one pass over the table.
pub fn build_dashboard(sessions: &[Session], today: NaiveDate) -> Dashboard {
    Dashboard {
        weekly_total: weekly_total(sessions, today),
        daily: daily_series(sessions, today),
        by_project: totals_by_project(sessions),
        by_task_type: totals_by_task_type(sessions),
    }
}
