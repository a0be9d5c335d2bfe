//! Output formatting utilities

use crate::application::HoursRow;
use crate::domain::day::day_label;
use crate::domain::tonight::private_event_message;
use crate::domain::{NextOpening, StatusSnapshot, Tonight};

/// Format the status badge and supporting lines
pub fn format_status(snapshot: &StatusSnapshot) -> String {
    let mut output = format!("{}  {}\n", snapshot.tier.badge_label(), snapshot.today_hours);

    if let Some(minutes) = snapshot.minutes_to_close {
        output.push_str(&format!("Closes in {}\n", format_minutes(minutes)));
    }
    if let Some(minutes) = snapshot.minutes_to_open {
        output.push_str(&format!("Opens in {}\n", format_minutes(minutes)));
    } else if let Some(next) = &snapshot.next_opening {
        output.push_str(&format!("{}\n", format_next_opening(next)));
    }

    output.push_str(&format!("Status: {}\n", snapshot.tier.name()));
    output
}

fn format_next_opening(next: &NextOpening) -> String {
    let when = match next.days_ahead {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        _ => day_label(next.day).to_string(),
    };
    format!(
        "Opens {} at {} (in {})",
        when,
        next.at.format_12h(),
        format_minutes(next.minutes_until)
    )
}

/// `45 min`, `2 h`, `3 h 5 min`
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => format!("{} min", m),
        (h, 0) => format!("{} h", h),
        (h, m) => format!("{} h {} min", h, m),
    }
}

/// Format the weekly hours table, today marked with an arrow
pub fn format_hours_table(rows: &[HoursRow]) -> String {
    let mut output = String::new();
    for row in rows {
        let marker = if row.is_today { "→" } else { " " };
        output.push_str(&format!("{} {:<10} {}\n", marker, row.label, row.hours));
    }
    output
}

/// Format the tonight block
pub fn format_tonight(tonight: &Tonight, venue_name: &str) -> String {
    match tonight {
        Tonight::Private { message } => {
            let message = message
                .clone()
                .unwrap_or_else(|| private_event_message(venue_name));
            format!("{}\nWe'll see you soon.\n", message)
        }
        Tonight::Event { title, description }
        | Tonight::Recurring { title, description }
        | Tonight::Fallback { title, description } => {
            let mut output = String::new();
            if let Some(heading) = tonight.heading() {
                output.push_str(&format!("{}\n", heading.to_uppercase()));
            }
            output.push_str(&format!("{}\n", title));
            if let Some(description) = description.as_deref().filter(|d| !d.is_empty()) {
                output.push_str(&format!("{}\n", description));
            }
            output
        }
    }
}

/// Format `key = value` pairs for `config --list`
pub fn format_config_list(values: &[(String, String)]) -> String {
    let mut output = String::new();
    for (key, value) in values {
        output.push_str(&format!("{} = {}\n", key, value));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClockTime, LocalMoment, StatusTier};
    use chrono::{NaiveDate, Weekday};

    fn snapshot(tier: StatusTier, to_close: Option<u32>, to_open: Option<u32>) -> StatusSnapshot {
        StatusSnapshot {
            moment: LocalMoment::new(
                NaiveDate::from_ymd_opt(2026, 10, 13).unwrap(),
                ClockTime::parse("23:30").unwrap(),
            ),
            is_open: tier.is_open(),
            minutes_to_close: to_close,
            minutes_to_open: to_open,
            today_hours: "5 PM – 12 AM".to_string(),
            tier,
            next_opening: None,
        }
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(45), "45 min");
        assert_eq!(format_minutes(120), "2 h");
        assert_eq!(format_minutes(185), "3 h 5 min");
        assert_eq!(format_minutes(0), "0 min");
    }

    #[test]
    fn test_format_status_closing_soon() {
        let output = format_status(&snapshot(StatusTier::ClosingSoon, Some(30), None));
        assert!(output.starts_with("Open  5 PM – 12 AM\n"));
        assert!(output.contains("Closes in 30 min"));
        assert!(output.contains("Status: Closing Soon"));
    }

    #[test]
    fn test_format_status_next_opening() {
        let mut snap = snapshot(StatusTier::Closed, None, None);
        snap.today_hours = "Closed today".to_string();
        snap.next_opening = Some(NextOpening {
            day: Weekday::Thu,
            days_ahead: 2,
            at: ClockTime::parse("17:00").unwrap(),
            minutes_until: 2 * 1440,
        });

        let output = format_status(&snap);
        assert!(output.starts_with("Closed  Closed today\n"));
        assert!(output.contains("Opens Thursday at 5 PM (in 48 h)"));
    }

    #[test]
    fn test_format_hours_table() {
        let rows = vec![
            HoursRow {
                day: Weekday::Mon,
                label: "Monday",
                hours: "Closed".to_string(),
                is_today: false,
            },
            HoursRow {
                day: Weekday::Tue,
                label: "Tuesday",
                hours: "5 PM – 12 AM".to_string(),
                is_today: true,
            },
        ];
        let output = format_hours_table(&rows);
        assert_eq!(output, "  Monday     Closed\n→ Tuesday    5 PM – 12 AM\n");
    }

    #[test]
    fn test_format_tonight_private_default() {
        let output = format_tonight(&Tonight::Private { message: None }, "Revival");
        assert_eq!(
            output,
            "Revival is hosting a private event this evening.\nWe'll see you soon.\n"
        );
    }

    #[test]
    fn test_format_tonight_recurring() {
        let tonight = Tonight::Recurring {
            title: "Vinyl Fridays".to_string(),
            description: Some("Guest DJ spins vinyl all night.".to_string()),
        };
        let output = format_tonight(&tonight, "Revival");
        assert_eq!(
            output,
            "TONIGHT'S SPECIAL\nVinyl Fridays\nGuest DJ spins vinyl all night.\n"
        );
    }

    #[test]
    fn test_format_config_list() {
        let values = vec![("name".to_string(), "Revival".to_string())];
        assert_eq!(format_config_list(&values), "name = Revival\n");
    }
}
