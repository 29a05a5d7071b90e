//! Terminal bar charts for the dashboard.
//!
//! Bars are unicode blocks scaled to the largest value in the series, with
//! the numeric total printed after the bar. An all-zero series still renders
//! one line per entry so the 14-day window stays visibly complete.

use unicode_width::UnicodeWidthStr;

use crate::core::stats::{DailyTotal, LabelTotal};
use crate::utils::colors::{CYAN, GREY, RESET};

const BAR_WIDTH: usize = 40;
const BLOCK: &str = "█";

fn bar(hours: f64, max: f64) -> String {
    if max <= 0.0 || hours <= 0.0 {
        return String::new();
    }
    let len = ((hours / max) * BAR_WIDTH as f64).round() as usize;
    BLOCK.repeat(len.max(1))
}

/// One row per day, chronological: `2024-01-07  ███████  3.25`
pub fn render_daily(series: &[DailyTotal]) -> String {
    let max = series.iter().map(|p| p.hours).fold(0.0, f64::max);

    let mut out = String::new();
    for point in series {
        let painted = if point.hours > 0.0 { CYAN } else { GREY };
        out.push_str(&format!(
            "{}  {painted}{:<width$}{RESET}  {:.2}\n",
            point.date.format("%Y-%m-%d"),
            bar(point.hours, max),
            point.hours,
            width = BAR_WIDTH,
        ));
    }
    out
}

/// Horizontal bars for grouped totals, already sorted descending by the
/// aggregator: `Personal      ██████████  12.50`
pub fn render_labels(totals: &[LabelTotal]) -> String {
    let label_width = totals
        .iter()
        .map(|t| UnicodeWidthStr::width(t.label.as_str()))
        .max()
        .unwrap_or(0)
        .max(8);

    let max = totals.iter().map(|t| t.hours).fold(0.0, f64::max);

    let mut out = String::new();
    for t in totals {
        let pad = label_width - UnicodeWidthStr::width(t.label.as_str());
        out.push_str(&format!(
            "{}{}  {CYAN}{:<width$}{RESET}  {:.2}\n",
            t.label,
            " ".repeat(pad),
            bar(t.hours, max),
            t.hours,
            width = BAR_WIDTH,
        ));
    }
    out
}
