//! focuslog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use std::path::PathBuf;

use clap::Parser;

use auth::AuthMode;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use ui::messages::warning;

/// Everything a command handler needs: the loaded config, the granted auth
/// mode and the resolved timer state path.
pub struct AppContext {
    pub cfg: Config,
    pub mode: AuthMode,
    pub timer_path: PathBuf,
    pub test: bool,
    pub db_override: Option<String>,
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, ctx),
        Commands::Timer { .. } => cli::commands::timer::handle(&cli.command, ctx),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, ctx),
        Commands::Stats => cli::commands::stats::handle(ctx),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, ctx),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, ctx),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, ctx),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config ONCE
    let mut cfg = Config::load()?;

    // 3. apply command-line overrides
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    let timer_path = cli
        .timer_file
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::timer_file);

    // 4. login gate: failure blocks here, before any store is touched
    let mode = auth::login(&cfg, cli.guest, cli.user.as_deref(), cli.password.as_deref())?;
    if mode == AuthMode::Guest {
        warning("Guest mode: data lives in memory and is not saved.");
    }

    let ctx = AppContext {
        cfg,
        mode,
        timer_path,
        test: cli.test,
        db_override: cli.db.clone(),
    };

    // 5. hand everything to the dispatcher
    dispatch(&cli, &ctx)
}
