mod csv;
mod fs_utils;
mod json;

pub use fs_utils::ensure_writable;

use clap::ValueEnum;
use std::path::Path;

use crate::errors::AppResult;
use crate::models::session::Session;
use crate::ui::messages::success;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Serialize the full session table to `path`. The caller has already read
/// the table through the store, so every backend exports the same way.
pub fn export_sessions(sessions: &[Session], format: &ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => csv::write_csv(sessions, path)?,
        ExportFormat::Json => json::write_json(sessions, path)?,
    }
    success(format!(
        "{} export completed: {}",
        format.as_str().to_uppercase(),
        path.display()
    ));
    Ok(())
}
