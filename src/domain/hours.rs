//! Weekly opening hours

use super::clock_time::ClockTime;
use super::day::{day_key, parse_day, DISPLAY_ORDER};
use crate::error::{BarclockError, Result};
use chrono::Weekday;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Hours for a single day as stored in the config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<ClockTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<ClockTime>,
    #[serde(default)]
    pub is_closed: bool,
}

impl HoursEntry {
    /// An open day from `open` until `close`
    pub fn new(open: ClockTime, close: ClockTime) -> Self {
        HoursEntry {
            open: Some(open),
            close: Some(close),
            is_closed: false,
        }
    }

    /// A day the venue does not open
    pub fn closed() -> Self {
        HoursEntry {
            open: None,
            close: None,
            is_closed: true,
        }
    }

    /// Parse `closed` or `HH:MM-HH:MM`
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("closed") {
            return Ok(Self::closed());
        }

        let (open, close) = trimmed.split_once('-').ok_or_else(|| {
            BarclockError::InvalidTime(format!(
                "'{}' is not 'closed' or an HH:MM-HH:MM range",
                input
            ))
        })?;

        Ok(Self::new(ClockTime::parse(open)?, ClockTime::parse(close)?))
    }

    /// The usable window, or `None` when the day counts as closed.
    ///
    /// `is_closed` wins over any stored bounds, and an entry missing
    /// either bound is treated as closed.
    pub fn window(&self) -> Option<Window> {
        if self.is_closed {
            return None;
        }
        match (self.open, self.close) {
            (Some(open), Some(close)) => Some(Window { open, close }),
            _ => None,
        }
    }

    /// Reject an open day that is missing a bound
    pub fn validate(&self, day: Weekday) -> Result<()> {
        if self.is_closed {
            return Ok(());
        }
        if self.open.is_none() {
            return Err(BarclockError::MissingBound {
                day: day_key(day).to_string(),
                field: "open",
            });
        }
        if self.close.is_none() {
            return Err(BarclockError::MissingBound {
                day: day_key(day).to_string(),
                field: "close",
            });
        }
        Ok(())
    }

    /// `5 PM – 12 AM` as configured, or `None` for a closed day
    pub fn hours_text(&self) -> Option<String> {
        self.window().map(|w| {
            format!(
                "{} \u{2013} {}",
                w.open.format_12h(),
                w.close.format_12h()
            )
        })
    }
}

/// An opening window with both bounds present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub open: ClockTime,
    pub close: ClockTime,
}

impl Window {
    pub fn open_minute(&self) -> u16 {
        self.open.minutes_since_midnight()
    }

    pub fn close_minute(&self) -> u16 {
        self.close.minutes_since_midnight()
    }

    /// Close at or before open means the venue closes the following day
    pub fn crosses_midnight(&self) -> bool {
        self.close_minute() <= self.open_minute()
    }
}

/// Opening hours for all seven days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, HoursEntry>")]
pub struct WeeklyHours {
    days: [HoursEntry; 7],
}

impl WeeklyHours {
    /// A week with every day closed
    pub fn all_closed() -> Self {
        WeeklyHours {
            days: [HoursEntry::closed(); 7],
        }
    }

    /// Return a copy with `day` replaced
    pub fn with_day(mut self, day: Weekday, entry: HoursEntry) -> Self {
        self.days[day.num_days_from_monday() as usize] = entry;
        self
    }

    pub fn get(&self, day: Weekday) -> &HoursEntry {
        &self.days[day.num_days_from_monday() as usize]
    }

    /// Iterate days Monday first
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &HoursEntry)> + '_ {
        DISPLAY_ORDER.iter().map(move |day| (*day, self.get(*day)))
    }

    /// Whether any day has a usable window
    pub fn has_any_opening(&self) -> bool {
        self.days.iter().any(|entry| entry.window().is_some())
    }

    /// Check every entry and reject overnight tails that run into the
    /// next day's opening.
    pub fn validate(&self) -> Result<()> {
        for (day, entry) in self.iter() {
            entry.validate(day)?;
        }

        for (day, entry) in self.iter() {
            let Some(window) = entry.window() else {
                continue;
            };
            if !window.crosses_midnight() {
                continue;
            }
            let next = day.succ();
            if let Some(next_window) = self.get(next).window() {
                if window.close_minute() > next_window.open_minute() {
                    return Err(BarclockError::OverlappingHours {
                        day: day_key(day).to_string(),
                        next: day_key(next).to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl Default for WeeklyHours {
    fn default() -> Self {
        Self::all_closed()
    }
}

impl TryFrom<BTreeMap<String, HoursEntry>> for WeeklyHours {
    type Error = BarclockError;

    /// Days absent from the map are closed; a day may appear only once
    fn try_from(map: BTreeMap<String, HoursEntry>) -> Result<Self> {
        let mut hours = WeeklyHours::all_closed();
        let mut seen: [Option<String>; 7] = Default::default();
        for (key, entry) in map {
            let day = parse_day(&key)?;
            let slot = &mut seen[day.num_days_from_monday() as usize];
            if let Some(first) = slot.take() {
                return Err(BarclockError::DuplicateDay {
                    day: day_key(day).to_string(),
                    first,
                    second: key,
                });
            }
            *slot = Some(key);
            hours = hours.with_day(day, entry);
        }
        hours.validate()?;
        Ok(hours)
    }
}

impl Serialize for WeeklyHours {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(7))?;
        for (day, entry) in self.iter() {
            map.serialize_entry(day_key(day), entry)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        ClockTime::parse(s).unwrap()
    }

    #[test]
    fn test_closed_entry_ignores_bounds() {
        let entry = HoursEntry {
            open: Some(t("17:00")),
            close: Some(t("02:00")),
            is_closed: true,
        };
        assert!(entry.window().is_none());
        assert!(entry.hours_text().is_none());
    }

    #[test]
    fn test_missing_bound_is_closed_at_runtime() {
        let entry = HoursEntry {
            open: Some(t("17:00")),
            close: None,
            is_closed: false,
        };
        assert!(entry.window().is_none());
    }

    #[test]
    fn test_missing_bound_fails_validation() {
        let entry = HoursEntry {
            open: None,
            close: Some(t("02:00")),
            is_closed: false,
        };
        match entry.validate(Weekday::Fri).unwrap_err() {
            BarclockError::MissingBound { day, field } => {
                assert_eq!(day, "friday");
                assert_eq!(field, "open");
            }
            other => panic!("Expected MissingBound, got {:?}", other),
        }
    }

    #[test]
    fn test_window_crossing() {
        let same_day = HoursEntry::new(t("09:00"), t("17:00")).window().unwrap();
        assert!(!same_day.crosses_midnight());

        let overnight = HoursEntry::new(t("17:00"), t("02:00")).window().unwrap();
        assert!(overnight.crosses_midnight());

        let until_midnight = HoursEntry::new(t("17:00"), t("00:00")).window().unwrap();
        assert!(until_midnight.crosses_midnight());

        let full_day = HoursEntry::new(t("10:00"), t("10:00")).window().unwrap();
        assert!(full_day.crosses_midnight());
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(HoursEntry::parse("closed").unwrap(), HoursEntry::closed());
        assert_eq!(HoursEntry::parse("Closed").unwrap(), HoursEntry::closed());
        assert_eq!(
            HoursEntry::parse("17:00-02:00").unwrap(),
            HoursEntry::new(t("17:00"), t("02:00"))
        );
        assert!(HoursEntry::parse("17:00").is_err());
        assert!(HoursEntry::parse("5pm-2am").is_err());
    }

    #[test]
    fn test_hours_text() {
        let entry = HoursEntry::new(t("17:00"), t("00:00"));
        assert_eq!(entry.hours_text().unwrap(), "5 PM – 12 AM");
    }

    #[test]
    fn test_deserialize_missing_days_are_closed() {
        let hours: WeeklyHours = toml::from_str(
            r#"
            [tuesday]
            open = "17:00"
            close = "00:00"
            "#,
        )
        .unwrap();

        assert_eq!(hours.get(Weekday::Tue), &HoursEntry::new(t("17:00"), t("00:00")));
        assert_eq!(hours.get(Weekday::Mon), &HoursEntry::closed());
        assert!(hours.has_any_opening());
    }

    #[test]
    fn test_deserialize_rejects_same_day_twice() {
        let result: std::result::Result<WeeklyHours, _> = toml::from_str(
            r#"
            [fri]
            open = "09:00"
            close = "12:00"

            [friday]
            open = "17:00"
            close = "02:00"
            "#,
        );
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Hours for friday are given twice"), "{}", message);
        assert!(message.contains("'fri'") && message.contains("'friday'"), "{}", message);
    }

    #[test]
    fn test_from_map_duplicate_day_error() {
        let mut map = BTreeMap::new();
        map.insert("Sat".to_string(), HoursEntry::closed());
        map.insert("saturday".to_string(), HoursEntry::new(t("17:00"), t("02:00")));

        match WeeklyHours::try_from(map).unwrap_err() {
            err @ BarclockError::DuplicateDay { .. } => assert_eq!(err.exit_code(), 3),
            other => panic!("Expected DuplicateDay, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_rejects_malformed_time() {
        let result: std::result::Result<WeeklyHours, _> = toml::from_str(
            r#"
            [friday]
            open = "5pm"
            close = "02:00"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_missing_bound() {
        let result: std::result::Result<WeeklyHours, _> = toml::from_str(
            r#"
            [friday]
            open = "17:00"
            is_closed = false
            "#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Missing close time for friday"));
    }

    #[test]
    fn test_deserialize_rejects_unknown_day() {
        let result: std::result::Result<WeeklyHours, _> = toml::from_str(
            r#"
            [funday]
            is_closed = true
            "#,
        );
        assert!(result.unwrap_err().to_string().contains("funday"));
    }

    #[test]
    fn test_validate_rejects_overlapping_tail() {
        let hours = WeeklyHours::all_closed()
            .with_day(Weekday::Fri, HoursEntry::new(t("17:00"), t("10:00")))
            .with_day(Weekday::Sat, HoursEntry::new(t("09:00"), t("17:00")));

        assert!(matches!(
            hours.validate().unwrap_err(),
            BarclockError::OverlappingHours { .. }
        ));
    }

    #[test]
    fn test_validate_allows_tail_ending_at_next_open() {
        let hours = WeeklyHours::all_closed()
            .with_day(Weekday::Sun, HoursEntry::new(t("10:00"), t("10:00")))
            .with_day(Weekday::Mon, HoursEntry::new(t("10:00"), t("22:00")));

        assert!(hours.validate().is_ok());
    }

    #[test]
    fn test_serialize_monday_first() {
        let hours = WeeklyHours::all_closed()
            .with_day(Weekday::Fri, HoursEntry::new(t("17:00"), t("02:00")));
        let out = toml::to_string(&hours).unwrap();

        let monday = out.find("[monday]").unwrap();
        let sunday = out.find("[sunday]").unwrap();
        assert!(monday < sunday);
        assert!(out.contains("open = \"17:00\""));
        assert!(out.contains("close = \"02:00\""));
    }
}
