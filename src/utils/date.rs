//! Calendar helpers: today, period expressions, date parsing.

use chrono::{Datelike, NaiveDate};
use regex::Regex;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Validate a period expression before expanding it: `YYYY`, `YYYY-MM`,
/// `YYYY-MM-DD`, or any of those joined by `:` into a range.
pub fn is_valid_period(p: &str) -> bool {
    let piece = r"\d{4}(-\d{2}(-\d{2})?)?";
    let re = Regex::new(&format!("^{piece}(:{piece})?$")).unwrap();
    re.is_match(p)
}

/// Expand a single period into its (first, last) date bounds.
pub fn period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok((first, last_day_of_month(first.year(), first.month())));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(format!("Invalid period: {}", p))
}

/// Expand a period or `A:B` range into (start, end) bounds.
pub fn range_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if !is_valid_period(p) {
        return Err(format!("Invalid period: {}", p));
    }

    if let Some((a, b)) = p.split_once(':') {
        let (start, _) = period_bounds(a)?;
        let (_, end) = period_bounds(b)?;
        return Ok((start, end));
    }

    period_bounds(p)
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_y, next_m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_y, next_m, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap())
}
