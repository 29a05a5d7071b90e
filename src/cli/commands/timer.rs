use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use chrono::Utc;

use crate::AppContext;
use crate::cli::parser::{Commands, TimerAction};
use crate::core::timer::{TimerFile, TimerState};
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::store::open_store;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::format_elapsed;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    let Commands::Timer { action } = cmd else {
        return Ok(());
    };

    let file = TimerFile::new(&ctx.timer_path);

    match action {
        TimerAction::Start => {
            let state = file.load()?.start(Utc::now())?;
            file.save(&state)?;
            success("Timer started.");
        }

        TimerAction::Status { watch } => {
            if *watch {
                watch_loop(&file)?;
            } else {
                print_status(&file.load()?);
            }
        }

        TimerAction::Stop => {
            let state = file.load()?.stop(Utc::now())?;
            file.save(&state)?;
            if let TimerState::Stopped { duration_hours, .. } = &state {
                success(format!(
                    "Timer stopped. Duration: {:.4} h ({})",
                    duration_hours,
                    format_elapsed(*duration_hours)
                ));
                info("Log it with 'focuslog timer log' or drop it with 'focuslog timer discard'.");
            }
        }

        TimerAction::Log {
            project,
            task_type,
            notes,
            focus,
        } => {
            let state = file.load()?;
            let TimerState::Stopped {
                start,
                end,
                duration_hours,
            } = state
            else {
                return Err(AppError::Timer(
                    "no stopped timer to log; run 'timer stop' first".to_string(),
                ));
            };

            let focus_final = focus.unwrap_or(ctx.cfg.defaults.focus_rating);
            if !(1..=5).contains(&focus_final) {
                return Err(AppError::InvalidFocus(focus_final));
            }

            // the session is dated by the start's calendar day
            let session = Session {
                duration_hours,
                ..Session::new(
                    start.naive_utc().date(),
                    start.naive_utc(),
                    end.naive_utc(),
                    project
                        .clone()
                        .unwrap_or_else(|| ctx.cfg.defaults.project.clone()),
                    task_type
                        .clone()
                        .unwrap_or_else(|| ctx.cfg.defaults.task_type.clone()),
                    notes.clone().unwrap_or_default(),
                    focus_final,
                )
            };

            let mut store = open_store(&ctx.cfg, ctx.mode)?;
            store.add(&session)?;
            file.save(&TimerState::Idle)?;

            success(format!(
                "Timer session logged: {:.4} h on project '{}'.",
                session.duration_hours, session.project
            ));

            super::audit_if_sqlite(
                ctx,
                "timer-log",
                &session.id,
                &format!("Timer session logged for {}", session.date_str()),
            );
        }

        TimerAction::Discard => {
            let state = file.load()?;
            if state == TimerState::Idle {
                info("Timer is already idle.");
            } else {
                file.save(&state.reset())?;
                warning("Timer state discarded.");
            }
        }
    }

    Ok(())
}

fn print_status(state: &TimerState) {
    match state {
        TimerState::Idle => info("Timer idle."),
        TimerState::Running { start } => {
            let elapsed = state.elapsed_hours(Utc::now()).unwrap_or(0.0);
            info(format!(
                "Timer running since {} — elapsed {}",
                start.format("%Y-%m-%d %H:%M:%S UTC"),
                format_elapsed(elapsed)
            ));
        }
        TimerState::Stopped {
            start,
            end,
            duration_hours,
        } => {
            info(format!(
                "Timer stopped: {} → {} — {:.4} h, waiting to be logged",
                start.format("%H:%M:%S"),
                end.format("%H:%M:%S"),
                duration_hours
            ));
        }
    }
}

/// Sleep-then-redraw ticker: refresh the elapsed display about once per
/// second while the state file still says Running, re-reading it each tick
/// so a `timer stop` from another terminal ends the loop.
fn watch_loop(file: &TimerFile) -> AppResult<()> {
    loop {
        let state = file.load()?;
        match state {
            TimerState::Running { .. } => {
                let elapsed = state.elapsed_hours(Utc::now()).unwrap_or(0.0);
                print!("\r⏳ Elapsed: {}   ", format_elapsed(elapsed));
                io::stdout().flush().ok();
                thread::sleep(Duration::from_secs(1));
            }
            other => {
                println!();
                print_status(&other);
                return Ok(());
            }
        }
    }
}
