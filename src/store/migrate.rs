//! Schema creation and upgrades for the SQLite backend.
//!
//! All schema is guaranteed here; nothing else issues CREATE TABLE. The
//! current schema version is stamped into `PRAGMA user_version` so future
//! upgrades can branch on it.

use rusqlite::Connection;

use crate::errors::AppResult;

const SCHEMA_VERSION: i32 = 1;

/// Ensure the `sessions` table exists with the fixed column set.
fn create_sessions_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            id             TEXT PRIMARY KEY,
            created_at     TEXT NOT NULL,
            date           TEXT NOT NULL,
            start_time     TEXT NOT NULL,
            end_time       TEXT NOT NULL,
            duration_hours REAL NOT NULL DEFAULT 0,
            project        TEXT NOT NULL DEFAULT '',
            task_type      TEXT NOT NULL DEFAULT '',
            notes          TEXT DEFAULT '',
            focus_rating   INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_date ON sessions(date);
        CREATE INDEX IF NOT EXISTS idx_sessions_project ON sessions(project);
        "#,
    )?;
    Ok(())
}

/// Ensure the internal audit `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn schema_version(conn: &Connection) -> AppResult<i32> {
    let v: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(v)
}

fn set_schema_version(conn: &Connection, version: i32) -> AppResult<()> {
    conn.execute_batch(&format!("PRAGMA user_version = {version}"))?;
    Ok(())
}

/// Run all pending migrations. Idempotent; safe to call on every open.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let version = schema_version(conn)?;
    if version > SCHEMA_VERSION {
        return Err(crate::errors::AppError::Migration(format!(
            "database schema version {version} is newer than this build supports ({SCHEMA_VERSION})"
        )));
    }

    create_sessions_table(conn)?;
    ensure_log_table(conn)?;

    if version < SCHEMA_VERSION {
        set_schema_version(conn, SCHEMA_VERSION)?;
    }
    Ok(())
}
