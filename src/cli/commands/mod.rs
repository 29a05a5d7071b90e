pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod stats;
pub mod timer;

use rusqlite::Connection;

use crate::AppContext;
use crate::auth::AuthMode;
use crate::config::Backend;
use crate::store::log::audit;

/// Write an audit line when the durable local backend is in play.
/// Best-effort: a failed log line never fails the command.
pub(crate) fn audit_if_sqlite(ctx: &AppContext, operation: &str, target: &str, message: &str) {
    if ctx.mode != AuthMode::Owner || ctx.cfg.backend != Backend::Sqlite {
        return;
    }
    if let Ok(conn) = Connection::open(&ctx.cfg.database) {
        let _ = audit(&conn, operation, target, message);
    }
}
