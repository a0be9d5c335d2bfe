//! Weekly hours table use case

use crate::domain::day::day_label;
use crate::infrastructure::{Clock, Config};
use chrono::Weekday;

/// One row of the visit page's hours table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoursRow {
    pub day: Weekday,
    pub label: &'static str,
    pub hours: String,
    pub is_today: bool,
}

/// Rows Monday through Sunday, marking the venue-local current day
pub fn weekly_hours(config: &Config, clock: &dyn Clock) -> Vec<HoursRow> {
    let today = config.resolver().current_day_of_week(clock.now());

    config
        .hours
        .iter()
        .map(|(day, entry)| {
            // Loaded configs reject missing bounds; hours built in code may not.
            if !entry.is_closed && entry.window().is_none() {
                tracing::warn!(day = day_label(day), "day has a missing bound; showing closed");
            }
            HoursRow {
                day,
                label: day_label(day),
                hours: entry.hours_text().unwrap_or_else(|| "Closed".to_string()),
                is_today: day == today,
            }
        })
        .collect()
}
