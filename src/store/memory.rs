//! Ephemeral backend: a process-local table used in guest mode and tests.
//! Everything is lost when the process ends, which the guest warning states.

use crate::errors::AppResult;
use crate::models::session::Session;
use crate::store::SessionStore;

#[derive(Default)]
pub struct MemoryStore {
    rows: Vec<Session>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn add(&mut self, session: &Session) -> AppResult<()> {
        // duplicate ids are ignored, matching the SQLite backend
        if !self.rows.iter().any(|s| s.id == session.id) {
            self.rows.push(session.clone());
        }
        Ok(())
    }

    fn fetch_all(&mut self) -> AppResult<Vec<Session>> {
        Ok(self.rows.clone())
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}
