use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::export::{ensure_writable, export_sessions};
use crate::store::open_store;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let path = expand_tilde(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        // the full table goes through the store trait, so every backend
        // exports the same way
        let mut store = open_store(&ctx.cfg, ctx.mode)?;
        let sessions = store.fetch_all()?;

        // nothing to write: skip the overwrite prompt too
        if sessions.is_empty() {
            warning("No sessions found to export.");
            return Ok(());
        }

        ensure_writable(&path, *force)?;
        export_sessions(&sessions, format, &path)?;

        super::audit_if_sqlite(
            ctx,
            "export",
            file,
            &format!("{} sessions exported as {}", sessions.len(), format.as_str()),
        );
    }
    Ok(())
}
