//! Session persistence behind a single capability interface.
//!
//! Three interchangeable backends: a local SQLite database (owner default),
//! a remote JSON sheet service, and an ephemeral in-memory table used in
//! guest mode. The rest of the application only ever sees the trait.

pub mod log;
pub mod memory;
pub mod migrate;
pub mod remote;
pub mod row;
pub mod sqlite;

use crate::auth::AuthMode;
use crate::config::{Backend, Config};
use crate::errors::AppResult;
use crate::models::session::Session;

/// Append-only record store: add one session, read the whole table back.
/// No update or delete exists in any backend.
pub trait SessionStore {
    fn add(&mut self, session: &Session) -> AppResult<()>;
    fn fetch_all(&mut self) -> AppResult<Vec<Session>>;

    /// Short backend label for status lines and audit entries.
    fn kind(&self) -> &'static str;
}

/// Open the store selected by configuration. Guest mode always gets the
/// ephemeral backend regardless of what the config says.
pub fn open_store(cfg: &Config, mode: AuthMode) -> AppResult<Box<dyn SessionStore>> {
    if mode == AuthMode::Guest {
        return Ok(Box::new(memory::MemoryStore::new()));
    }

    match cfg.backend {
        Backend::Sqlite => Ok(Box::new(sqlite::SqliteStore::open(&cfg.database)?)),
        Backend::Remote => Ok(Box::new(remote::RemoteStore::connect(cfg)?)),
        Backend::Memory => Ok(Box::new(memory::MemoryStore::new())),
    }
}
