use rusqlite::Connection;

use crate::AppContext;
use crate::cli::parser::Commands;
use crate::config::Backend;
use crate::errors::{AppError, AppResult};
use crate::store::log::load_log;
use crate::store::migrate::run_pending_migrations;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        if ctx.cfg.backend != Backend::Sqlite {
            return Err(AppError::Config(
                "the internal log lives in the local SQLite database; the current backend has none"
                    .to_string(),
            ));
        }

        let conn = Connection::open(&ctx.cfg.database)?;
        run_pending_migrations(&conn)?;
        let rows = load_log(&conn)?;

        if rows.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        for (timestamp, operation, message) in rows {
            println!("{timestamp}  [{operation}]  {message}");
        }
    }

    Ok(())
}
