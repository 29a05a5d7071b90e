use crate::AppContext;
use crate::core::stats::build_dashboard;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::chart::{render_daily, render_labels};
use crate::ui::messages::{header, info};
use crate::utils::date::today;

/// Dashboard: weekly total, 14-day daily series and the two breakdown
/// charts, recomputed from the full table on every run.
pub fn handle(ctx: &AppContext) -> AppResult<()> {
    let mut store = open_store(&ctx.cfg, ctx.mode)?;
    let sessions = store.fetch_all()?;

    if sessions.is_empty() {
        info("No sessions logged yet.");
        return Ok(());
    }

    let dashboard = build_dashboard(&sessions, today());

    header("This week");
    println!("Total hours: {:.2} h", dashboard.weekly_total);

    header("Daily hours (last 14 days)");
    print!("{}", render_daily(&dashboard.daily));

    header("Hours by project");
    print!("{}", render_labels(&dashboard.by_project));

    header("Hours by task type");
    print!("{}", render_labels(&dashboard.by_task_type));

    println!("\n{} session(s) in store [{}].", sessions.len(), store.kind());
    Ok(())
}
