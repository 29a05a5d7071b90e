use std::path::Path;

use csv::Writer;

use crate::errors::AppResult;
use crate::models::session::{COLUMNS, Session};

/// Comma-delimited full table: fixed header row, one row per session in the
/// schema column order, no filtering.
pub fn write_csv(sessions: &[Session], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(COLUMNS)?;
    for s in sessions {
        wtr.write_record(s.to_row())?;
    }

    wtr.flush()?;
    Ok(())
}
