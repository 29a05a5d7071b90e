//! Owner/guest login gate.
//!
//! Guest mode skips credentials entirely and gets the ephemeral backend.
//! Owner mode checks the supplied username/password against the secrets in
//! the config file before any store-touching command runs; the store and
//! aggregator never see credentials.

use std::env;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Owner,
    Guest,
}

/// Credentials as supplied on the command line, falling back to the
/// FOCUSLOG_USER / FOCUSLOG_PASSWORD environment variables.
pub fn resolve_credentials(
    user: Option<&str>,
    password: Option<&str>,
) -> (Option<String>, Option<String>) {
    let user = user
        .map(str::to_string)
        .or_else(|| env::var("FOCUSLOG_USER").ok());
    let password = password
        .map(str::to_string)
        .or_else(|| env::var("FOCUSLOG_PASSWORD").ok());
    (user, password)
}

/// Run the gate. Returns the granted mode or a blocking auth error.
pub fn login(
    cfg: &Config,
    guest: bool,
    user: Option<&str>,
    password: Option<&str>,
) -> AppResult<AuthMode> {
    if guest {
        return Ok(AuthMode::Guest);
    }

    let Some(auth) = &cfg.auth else {
        // no secrets configured: single-user install, gate is open
        return Ok(AuthMode::Owner);
    };

    let (user, password) = resolve_credentials(user, password);
    match (user, password) {
        (Some(u), Some(p)) if u == auth.owner_user && p == auth.owner_pass => Ok(AuthMode::Owner),
        (Some(_), Some(_)) => Err(AppError::Auth(
            "invalid credentials, log in again or use --guest".to_string(),
        )),
        _ => Err(AppError::Auth(
            "owner credentials required (--user/--password or FOCUSLOG_USER/FOCUSLOG_PASSWORD), or use --guest"
                .to_string(),
        )),
    }
}
