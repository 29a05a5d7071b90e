use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::store::open_store;
use crate::ui::messages::info;
use crate::utils::date::range_bounds;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::List { period, project } = cmd {
        let bounds = match period {
            Some(p) => Some(range_bounds(p).map_err(AppError::InvalidDate)?),
            None => None,
        };

        let mut store = open_store(&ctx.cfg, ctx.mode)?;
        let mut sessions = store.fetch_all()?;

        if let Some((start, end)) = bounds {
            sessions.retain(|s| s.date.is_some_and(|d| d >= start && d <= end));
        }
        if let Some(p) = project {
            sessions.retain(|s| &s.project == p);
        }

        if sessions.is_empty() {
            info("No sessions logged yet.");
            return Ok(());
        }

        // newest first; created_at is RFC3339 so the string order is the
        // chronological order
        sessions.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut table = Table::new(vec![
            Column::new("date", 10),
            Column::new("start", 5),
            Column::new("end", 5),
            Column::new("hours", 7),
            Column::new("project", 14),
            Column::new("task", 12),
            Column::new("focus", 5),
            Column::new("notes", 24),
        ]);

        for s in &sessions {
            // plain cells: ANSI escapes would throw the fixed widths off
            table.add_row(vec![
                if s.date.is_some() {
                    s.date_str()
                } else {
                    "--".to_string()
                },
                s.start_time
                    .map(|t| t.format("%H:%M").to_string())
                    .unwrap_or_else(|| "--".to_string()),
                s.end_time
                    .map(|t| t.format("%H:%M").to_string())
                    .unwrap_or_else(|| "--".to_string()),
                format!("{:.2}", s.duration_hours),
                s.project.clone(),
                s.task_type.clone(),
                s.focus_rating.to_string(),
                s.notes.clone(),
            ]);
        }

        println!("{}", table.render());
        println!("{} session(s).", sessions.len());
    }
    Ok(())
}
