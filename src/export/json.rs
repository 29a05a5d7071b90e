use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::models::session::Session;

/// Pretty-printed JSON array of the full table.
pub fn write_json(sessions: &[Session], path: &Path) -> AppResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, sessions)
        .map_err(|e| AppError::Export(format!("cannot write JSON: {e}")))?;
    Ok(())
}
