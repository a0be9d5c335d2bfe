//! Wall-clock time of day

use crate::error::{BarclockError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Minutes in a calendar day
pub const MINUTES_PER_DAY: u16 = 24 * 60;

fn clock_time_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{2}):(\d{2})$").unwrap())
}

/// A time of day in 24-hour `HH:MM` form.
///
/// Construction always validates, so a `ClockTime` never holds an
/// out-of-range hour or minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Create a time from hour and minute, rejecting out-of-range values
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(BarclockError::InvalidTime(format!(
                "{:02}:{:02} is out of range",
                hour, minute
            )));
        }
        Ok(ClockTime { hour, minute })
    }

    /// Parse a strict `HH:MM` string
    pub fn parse(input: &str) -> Result<Self> {
        let caps = clock_time_regex()
            .captures(input)
            .ok_or_else(|| BarclockError::InvalidTime(format!("'{}' is not HH:MM", input)))?;

        // Two ASCII digits each, so these parses cannot overflow a u8.
        let hour: u8 = caps[1]
            .parse()
            .map_err(|_| BarclockError::InvalidTime(input.to_string()))?;
        let minute: u8 = caps[2]
            .parse()
            .map_err(|_| BarclockError::InvalidTime(input.to_string()))?;

        Self::new(hour, minute)
            .map_err(|_| BarclockError::InvalidTime(format!("'{}' is out of range", input)))
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight
    pub fn minutes_since_midnight(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// Format on a 12-hour clock: `5 PM`, `5:30 PM`, `12 AM`
    pub fn format_12h(&self) -> String {
        let suffix = if self.hour >= 12 { "PM" } else { "AM" };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };

        if self.minute == 0 {
            format!("{} {}", hour, suffix)
        } else {
            format!("{}:{:02} {}", hour, self.minute, suffix)
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = BarclockError;

    fn from_str(s: &str) -> Result<Self> {
        ClockTime::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = BarclockError;

    fn try_from(value: String) -> Result<Self> {
        ClockTime::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}
