use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::store::open_store;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_required_time;

/// Log a session manually (the "entry form" of the CLI).
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        project,
        task_type,
        notes,
        focus,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Parse start/end clock times (mandatory)
        //
        let start_t = parse_required_time(start)?;
        let end_t = parse_required_time(end)?;

        //
        // 3. Validate focus rating
        //
        let focus_final = focus.unwrap_or(ctx.cfg.defaults.focus_rating);
        if !(1..=5).contains(&focus_final) {
            return Err(AppError::InvalidFocus(focus_final));
        }

        //
        // 4. Assemble the record; an end before the start rolls over to the
        //    next day inside the duration computation.
        //
        let session = Session::new(
            d,
            d.and_time(start_t),
            d.and_time(end_t),
            project.clone().unwrap_or_else(|| ctx.cfg.defaults.project.clone()),
            task_type
                .clone()
                .unwrap_or_else(|| ctx.cfg.defaults.task_type.clone()),
            notes.clone().unwrap_or_default(),
            focus_final,
        );

        //
        // 5. Append to the configured store
        //
        let mut store = open_store(&ctx.cfg, ctx.mode)?;
        store.add(&session)?;

        success(format!(
            "Session logged: {} {}→{} ({:.4} h, project '{}')",
            session.date_str(),
            start,
            end,
            session.duration_hours,
            session.project
        ));

        super::audit_if_sqlite(
            ctx,
            "add",
            &session.id,
            &format!("Session added for {}", session.date_str()),
        );
    }

    Ok(())
}
