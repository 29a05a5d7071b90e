//! Durable remote backend: a JSON "sheet" service over HTTP.
//!
//! The service models a spreadsheet: named sheets holding a header row plus
//! value rows. One handle is opened per CLI invocation; the named sheet is
//! created with the fixed header if absent. Every `add`/`fetch_all` is a
//! single round-trip with no batching and no retry; a transient failure
//! surfaces once as a remote error.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::session::{COLUMNS, Session};
use crate::store::SessionStore;
use crate::store::row::session_from_fields;

pub struct RemoteStore {
    client: Client,
    base_url: String,
    sheet: String,
    api_key: String,
}

#[derive(Deserialize)]
struct SheetBody {
    #[serde(default)]
    rows: Vec<Vec<Value>>,
}

impl RemoteStore {
    /// Open the configured sheet, creating it with the header row when the
    /// service reports it missing.
    pub fn connect(cfg: &Config) -> AppResult<Self> {
        let remote = cfg.remote.as_ref().ok_or_else(|| {
            AppError::Config("backend is 'remote' but the [remote] section is missing".to_string())
        })?;

        let store = Self {
            client: Client::new(),
            base_url: remote.url.trim_end_matches('/').to_string(),
            sheet: remote.sheet.clone(),
            api_key: remote.api_key.clone(),
        };
        store.ensure_sheet()?;
        Ok(store)
    }

    fn sheet_url(&self) -> String {
        format!("{}/sheets/{}", self.base_url, self.sheet)
    }

    fn ensure_sheet(&self) -> AppResult<()> {
        let resp = self
            .client
            .get(self.sheet_url())
            .bearer_auth(&self.api_key)
            .send()?;

        match resp.status() {
            s if s.is_success() => Ok(()),
            StatusCode::NOT_FOUND => {
                let resp = self
                    .client
                    .post(format!("{}/sheets", self.base_url))
                    .bearer_auth(&self.api_key)
                    .json(&json!({ "title": self.sheet, "columns": COLUMNS }))
                    .send()?;
                if resp.status().is_success() {
                    Ok(())
                } else {
                    Err(AppError::Remote(format!(
                        "cannot create sheet '{}': HTTP {}",
                        self.sheet,
                        resp.status()
                    )))
                }
            }
            s => Err(AppError::Remote(format!(
                "cannot open sheet '{}': HTTP {s}",
                self.sheet
            ))),
        }
    }
}

/// Cell values arrive as arbitrary JSON; render them as text and let the
/// shared lenient coercion sort out types.
fn cell_to_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl SessionStore for RemoteStore {
    /// One POST appending one row. No duplicate check: the service keeps the
    /// row order of independent appends, and a retry-free client cannot
    /// cheaply ask first.
    fn add(&mut self, session: &Session) -> AppResult<()> {
        let resp = self
            .client
            .post(format!("{}/rows", self.sheet_url()))
            .bearer_auth(&self.api_key)
            .json(&json!({ "values": session.to_row() }))
            .send()?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(AppError::Remote(format!(
                "append to sheet '{}' failed: HTTP {}",
                self.sheet,
                resp.status()
            )))
        }
    }

    /// One GET reading the entire table, coerced leniently row by row.
    /// Rows that are short of columns are padded with empty cells.
    fn fetch_all(&mut self) -> AppResult<Vec<Session>> {
        let resp = self
            .client
            .get(self.sheet_url())
            .bearer_auth(&self.api_key)
            .send()?;

        if !resp.status().is_success() {
            return Err(AppError::Remote(format!(
                "read of sheet '{}' failed: HTTP {}",
                self.sheet,
                resp.status()
            )));
        }

        let body: SheetBody = resp.json()?;

        let mut out = Vec::new();
        for row in &body.rows {
            let mut cells: Vec<String> = row.iter().map(cell_to_string).collect();
            cells.resize(COLUMNS.len(), String::new());
            let refs: [&str; 10] = std::array::from_fn(|i| cells[i].as_str());
            out.push(session_from_fields(refs));
        }
        Ok(out)
    }

    fn kind(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_render_as_text() {
        assert_eq!(cell_to_string(&json!("abc")), "abc");
        assert_eq!(cell_to_string(&json!(1.25)), "1.25");
        assert_eq!(cell_to_string(&json!(4)), "4");
        assert_eq!(cell_to_string(&Value::Null), "");
    }

    #[test]
    fn short_rows_pad_to_schema_width() {
        let row = vec![json!("id1"), json!("2024-01-01T00:00:00+00:00")];
        let mut cells: Vec<String> = row.iter().map(cell_to_string).collect();
        cells.resize(COLUMNS.len(), String::new());
        let refs: [&str; 10] = std::array::from_fn(|i| cells[i].as_str());
        let s = session_from_fields(refs);
        assert_eq!(s.id, "id1");
        assert_eq!(s.duration_hours, 0.0);
        assert_eq!(s.project, "");
    }
}
