//! Open/closed resolution against the venue's weekly hours
//!
//! A window that crosses midnight is stored under the day it opens, so
//! answering "is it open now?" needs two checks: the evening portion of
//! today's window, and the overnight tail of yesterday's.

use super::clock_time::{ClockTime, MINUTES_PER_DAY};
use super::hours::WeeklyHours;
use super::status::StatusTier;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc, Weekday};
use chrono_tz::Tz;

/// Venue-local wall-clock position, truncated to the minute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalMoment {
    pub date: NaiveDate,
    pub day: Weekday,
    pub minute: u16,
}

impl LocalMoment {
    /// Moment from a local date and time of day
    pub fn new(date: NaiveDate, time: ClockTime) -> Self {
        LocalMoment {
            date,
            day: date.weekday(),
            minute: time.minutes_since_midnight(),
        }
    }

    /// Read the wall-clock fields of an already-zoned datetime
    pub fn from_local<Z: TimeZone>(local: &DateTime<Z>) -> Self {
        LocalMoment {
            date: local.date_naive(),
            day: local.weekday(),
            minute: (local.hour() * 60 + local.minute()) as u16,
        }
    }
}

/// Which part of the week's windows matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenBranch {
    /// Today's window, before midnight
    Today,
    /// Yesterday's window, after midnight
    OvernightTail,
}

/// Result of a successful open check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenMatch {
    pub branch: OpenBranch,
    pub minutes_to_close: u32,
}

/// The next time the venue opens, looking ahead up to a week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextOpening {
    pub day: Weekday,
    pub days_ahead: u32,
    pub at: ClockTime,
    pub minutes_until: u32,
}

/// Everything the status badge needs, computed from one moment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub moment: LocalMoment,
    pub is_open: bool,
    pub minutes_to_close: Option<u32>,
    pub minutes_to_open: Option<u32>,
    pub today_hours: String,
    pub tier: StatusTier,
    pub next_opening: Option<NextOpening>,
}

/// Label used when today's entry has no usable window
pub const CLOSED_TODAY: &str = "Closed today";

/// Resolves open state for one venue in its reference timezone
#[derive(Debug, Clone)]
pub struct HoursResolver {
    hours: WeeklyHours,
    timezone: Tz,
}

impl HoursResolver {
    pub fn new(hours: WeeklyHours, timezone: Tz) -> Self {
        HoursResolver { hours, timezone }
    }

    /// Convert an instant to the venue's wall clock
    pub fn local_moment(&self, now: DateTime<Utc>) -> LocalMoment {
        LocalMoment::from_local(&now.with_timezone(&self.timezone))
    }

    pub fn current_day_of_week(&self, now: DateTime<Utc>) -> Weekday {
        self.local_moment(now).day
    }

    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        self.is_open_at(self.local_moment(now))
    }

    pub fn minutes_to_close(&self, now: DateTime<Utc>) -> Option<u32> {
        self.minutes_to_close_at(self.local_moment(now))
    }

    pub fn minutes_to_open(&self, now: DateTime<Utc>) -> Option<u32> {
        self.minutes_to_open_at(self.local_moment(now))
    }

    pub fn today_hours_label(&self, now: DateTime<Utc>) -> String {
        self.today_hours_label_at(self.local_moment(now))
    }

    pub fn status(&self, now: DateTime<Utc>) -> StatusTier {
        self.snapshot(now).tier
    }

    pub fn next_opening(&self, now: DateTime<Utc>) -> Option<NextOpening> {
        self.next_opening_at(self.local_moment(now))
    }

    pub fn snapshot(&self, now: DateTime<Utc>) -> StatusSnapshot {
        self.snapshot_at(self.local_moment(now))
    }

    /// Evening portion of today's window
    pub fn today_branch(&self, moment: LocalMoment) -> Option<OpenMatch> {
        let window = self.hours.get(moment.day).window()?;
        let open = window.open_minute();
        let close = window.close_minute();

        if moment.minute < open {
            return None;
        }

        let minutes_to_close = if window.crosses_midnight() {
            // Close lands on tomorrow's clock.
            close + MINUTES_PER_DAY - moment.minute
        } else if moment.minute < close {
            close - moment.minute
        } else {
            return None;
        };

        Some(OpenMatch {
            branch: OpenBranch::Today,
            minutes_to_close: minutes_to_close as u32,
        })
    }

    /// After-midnight remainder of yesterday's window
    pub fn overnight_tail_branch(&self, moment: LocalMoment) -> Option<OpenMatch> {
        let window = self.hours.get(moment.day.pred()).window()?;
        if !window.crosses_midnight() {
            return None;
        }

        let close = window.close_minute();
        if moment.minute >= close {
            return None;
        }

        Some(OpenMatch {
            branch: OpenBranch::OvernightTail,
            minutes_to_close: (close - moment.minute) as u32,
        })
    }

    /// Today's branch first, then yesterday's tail
    pub fn open_match(&self, moment: LocalMoment) -> Option<OpenMatch> {
        self.today_branch(moment)
            .or_else(|| self.overnight_tail_branch(moment))
    }

    pub fn is_open_at(&self, moment: LocalMoment) -> bool {
        self.open_match(moment).is_some()
    }

    pub fn minutes_to_close_at(&self, moment: LocalMoment) -> Option<u32> {
        self.open_match(moment).map(|m| m.minutes_to_close)
    }

    /// Minutes until today's opening. Only today's entry is consulted.
    pub fn minutes_to_open_at(&self, moment: LocalMoment) -> Option<u32> {
        if self.is_open_at(moment) {
            return None;
        }

        let entry = self.hours.get(moment.day);
        if entry.is_closed {
            return None;
        }
        let open = entry.open?.minutes_since_midnight();

        if moment.minute < open {
            Some((open - moment.minute) as u32)
        } else {
            None
        }
    }

    /// Today's hours exactly as configured
    pub fn today_hours_label_at(&self, moment: LocalMoment) -> String {
        self.hours
            .get(moment.day)
            .hours_text()
            .unwrap_or_else(|| CLOSED_TODAY.to_string())
    }

    /// First opening strictly after `moment`, scanning today and the
    /// following seven days.
    pub fn next_opening_at(&self, moment: LocalMoment) -> Option<NextOpening> {
        if self.is_open_at(moment) {
            return None;
        }

        let mut day = moment.day;
        for days_ahead in 0..=7u32 {
            if let Some(window) = self.hours.get(day).window() {
                let open = window.open_minute() as u32;
                let now = moment.minute as u32;
                let starts = days_ahead * MINUTES_PER_DAY as u32 + open;

                if starts > now {
                    return Some(NextOpening {
                        day,
                        days_ahead,
                        at: window.open,
                        minutes_until: starts - now,
                    });
                }
            }
            day = day.succ();
        }

        None
    }

    pub fn snapshot_at(&self, moment: LocalMoment) -> StatusSnapshot {
        let open_match = self.open_match(moment);
        let is_open = open_match.is_some();
        let minutes_to_close = open_match.map(|m| m.minutes_to_close);
        let minutes_to_open = self.minutes_to_open_at(moment);

        StatusSnapshot {
            moment,
            is_open,
            minutes_to_close,
            minutes_to_open,
            today_hours: self.today_hours_label_at(moment),
            tier: StatusTier::classify(is_open, minutes_to_close, minutes_to_open),
            next_opening: self.next_opening_at(moment),
        }
    }
}
