//! Durable local backend: one SQLite table, one row per session.

use std::path::Path;

use rusqlite::{Connection, params};

use crate::errors::AppResult;
use crate::models::session::Session;
use crate::store::migrate::run_pending_migrations;
use crate::store::row::session_from_fields;
use crate::store::SessionStore;

pub struct SqliteStore {
    pub conn: Connection,
}

impl SqliteStore {
    /// Open (and migrate) the database at `path`. A fresh connection per CLI
    /// invocation; no pooling needed for a single-user tool.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }
}

impl SessionStore for SqliteStore {
    /// Single-row insert. `OR IGNORE` makes a duplicate id a no-op instead
    /// of an error.
    fn add(&mut self, s: &Session) -> AppResult<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO sessions
             (id, created_at, date, start_time, end_time, duration_hours,
              project, task_type, notes, focus_rating)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                s.id,
                s.created_at,
                s.date_str(),
                s.start_str(),
                s.end_str(),
                s.duration_hours,
                s.project,
                s.task_type,
                s.notes,
                s.focus_rating,
            ],
        )?;
        Ok(())
    }

    /// Unfiltered select; every column read back as text and coerced
    /// leniently so malformed rows degrade instead of failing the fetch.
    fn fetch_all(&mut self) -> AppResult<Vec<Session>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, created_at, date, start_time, end_time,
                    CAST(duration_hours AS TEXT),
                    project, task_type, notes,
                    CAST(focus_rating AS TEXT)
             FROM sessions
             ORDER BY created_at ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let fields: [String; 10] = [
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
                row.get(6)?,
                row.get(7)?,
                row.get::<_, Option<String>>(8)?.unwrap_or_default(),
                row.get(9)?,
            ];
            Ok(fields)
        })?;

        let mut out = Vec::new();
        for r in rows {
            let fields = r?;
            let refs: [&str; 10] = std::array::from_fn(|i| fields[i].as_str());
            out.push(session_from_fields(refs));
        }
        Ok(out)
    }

    fn kind(&self) -> &'static str {
        "sqlite"
    }
}
