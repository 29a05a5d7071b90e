use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::core::duration::compute_duration_hours;

/// Fixed column order shared by the SQLite table, the remote sheet header
/// and the CSV/JSON exports.
pub const COLUMNS: [&str; 10] = [
    "id",
    "created_at",
    "date",
    "start_time",
    "end_time",
    "duration_hours",
    "project",
    "task_type",
    "notes",
    "focus_rating",
];

/// One logged interval of work with metadata.
///
/// Sessions are immutable once created. The date/time fields are optional on
/// the read side: a malformed stored value coerces to `None` instead of
/// failing the whole fetch, so old rows degrade silently.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: String,             // ⇔ sessions.id (TEXT, 32-char hex uuid4)
    pub created_at: String,     // ⇔ sessions.created_at (TEXT, RFC3339 UTC)
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub duration_hours: f64,    // derived, 4 decimal places, never edited
    pub project: String,
    pub task_type: String,
    pub notes: String,
    pub focus_rating: i64,      // 1..=5 at creation, 0 when coerced
}

impl Session {
    /// High-level constructor for sessions created by the CLI.
    /// - assigns a fresh uuid4 hex id
    /// - stamps `created_at` with now() in UTC
    /// - derives `duration_hours` from the start/end pair
    pub fn new(
        date: NaiveDate,
        start: NaiveDateTime,
        end: NaiveDateTime,
        project: String,
        task_type: String,
        notes: String,
        focus_rating: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            created_at: Utc::now().to_rfc3339(),
            date: Some(date),
            start_time: Some(start),
            end_time: Some(end),
            duration_hours: compute_duration_hours(start, end),
            project,
            task_type,
            notes,
            focus_rating,
        }
    }

    pub fn date_str(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    pub fn start_str(&self) -> String {
        self.start_time
            .map(|t| t.format("%Y-%m-%dT%H:%M:%S").to_string())
            .unwrap_or_default()
    }

    pub fn end_str(&self) -> String {
        self.end_time
            .map(|t| t.format("%Y-%m-%dT%H:%M:%S").to_string())
            .unwrap_or_default()
    }

    /// One row in the fixed column order, as written to every backend
    /// and to CSV.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.created_at.clone(),
            self.date_str(),
            self.start_str(),
            self.end_str(),
            format!("{:.4}", self.duration_hours),
            self.project.clone(),
            self.task_type.clone(),
            self.notes.clone(),
            self.focus_rating.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn dt(date: &str, time: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_time(NaiveTime::parse_from_str(time, "%H:%M").unwrap())
    }

    #[test]
    fn new_session_derives_duration_and_id() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let s = Session::new(
            d,
            dt("2024-01-01", "09:00"),
            dt("2024-01-01", "10:15"),
            "Personal".into(),
            "Coding".into(),
            String::new(),
            3,
        );

        assert_eq!(s.duration_hours, 1.25);
        assert_eq!(s.id.len(), 32);
        assert_eq!(s.date, Some(d));
    }

    #[test]
    fn row_follows_fixed_column_order() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let s = Session::new(
            d,
            dt("2024-01-01", "09:00"),
            dt("2024-01-01", "10:15"),
            "Personal".into(),
            "Coding".into(),
            "notes".into(),
            5,
        );

        let row = s.to_row();
        assert_eq!(row.len(), COLUMNS.len());
        assert_eq!(row[2], "2024-01-01");
        assert_eq!(row[3], "2024-01-01T09:00:00");
        assert_eq!(row[5], "1.2500");
        assert_eq!(row[9], "5");
    }
}
