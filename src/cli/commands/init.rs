use rusqlite::Connection;

use crate::AppContext;
use crate::config::{Backend, Config};
use crate::errors::AppResult;
use crate::store::log;
use crate::store::migrate::run_pending_migrations;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode) with all pending migrations
pub fn handle(ctx: &AppContext) -> AppResult<()> {
    Config::init_all(ctx.db_override.clone(), ctx.test)?;

    let path = Config::config_file();
    let cfg = Config::load()?;
    let db_path = ctx
        .db_override
        .clone()
        .unwrap_or_else(|| cfg.database.clone());

    println!("⚙️  Initializing focuslog…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);

    if ctx.cfg.backend == Backend::Sqlite {
        let conn = Connection::open(&db_path)?;
        run_pending_migrations(&conn)?;
        println!("✅ Database initialized at {}", &db_path);

        // internal log, non-blocking on failure
        if let Err(e) = log::audit(
            &conn,
            "init",
            &db_path,
            &format!("Database initialized at {}", &db_path),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }

    println!("🎉 focuslog initialization completed!");
    Ok(())
}
