use std::fs;

use rusqlite::{Connection, OptionalExtension};

use crate::AppContext;
use crate::cli::parser::Commands;
use crate::config::Backend;
use crate::errors::{AppError, AppResult};
use crate::store::migrate::run_pending_migrations;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info,
    } = cmd
    {
        if ctx.cfg.backend != Backend::Sqlite {
            return Err(AppError::Config(
                "database diagnostics need the local SQLite backend".to_string(),
            ));
        }

        let conn = Connection::open(&ctx.cfg.database)?;
        run_pending_migrations(&conn)?;

        if *info {
            print_db_info(&conn, &ctx.cfg.database)?;
        }

        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String =
                conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }
    Ok(())
}

fn print_db_info(conn: &Connection, db_path: &str) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    let count: i64 = conn.query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))?;
    println!(
        "{}• Total sessions:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    let total_hours: f64 = conn
        .query_row(
            "SELECT IFNULL(SUM(duration_hours), 0) FROM sessions",
            [],
            |row| row.get(0),
        )?;
    println!("{}• Total hours:{} {:.2} h", CYAN, RESET, total_hours);

    let first_date: Option<String> = conn
        .query_row(
            "SELECT date FROM sessions ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = conn
        .query_row(
            "SELECT date FROM sessions ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
