//! Daily summary MCP tool
//!
//! Aggregates caller-supplied calorie entries for one day.

use chrono::NaiveDate;

use crate::models::{CalorieEntry, DailyStats};

/// Validate an ISO date (YYYY-MM-DD), defaulting to today in local time
pub fn resolve_date(date: Option<&str>) -> Result<String, String> {
    match date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .map(|parsed| parsed.format("%Y-%m-%d").to_string())
            .map_err(|_| format!("Invalid date '{}': expected YYYY-MM-DD", d)),
        None => Ok(chrono::Local::now().format("%Y-%m-%d").to_string()),
    }
}

/// Summarize the entries logged on `date`
pub fn daily_summary(
    entries: &[CalorieEntry],
    date: Option<&str>,
    calorie_target: f64,
) -> Result<DailyStats, String> {
    let date = resolve_date(date)?;

    for entry in entries {
        if entry.calories < 0.0 {
            return Err(format!("calories cannot be negative (entry '{}')", entry.food_name));
        }
        let macros = [("protein", entry.protein), ("carbs", entry.carbs), ("fat", entry.fat)];
        if let Some((field, _)) = macros.into_iter().find(|(_, v)| v.is_some_and(|v| v < 0.0)) {
            return Err(format!("{} cannot be negative (entry '{}')", field, entry.food_name));
        }
    }

    let stats = DailyStats::for_date(&date, entries, calorie_target);
    tracing::debug!(
        date = %stats.date,
        entries = stats.entry_count,
        calories = stats.total_calories,
        "daily summary computed"
    );
    Ok(stats)
}
