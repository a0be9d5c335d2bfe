//! Source of "now"

use crate::error::{BarclockError, Result};
use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Port for getting the current instant
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock of the machine
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Parse an `--at` value.
///
/// RFC 3339 is an absolute instant. `YYYY-MM-DD HH:MM` is wall time in
/// `timezone`; an ambiguous time takes the earlier instant, a skipped one
/// is rejected.
pub fn parse_instant(input: &str, timezone: Tz) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M"))
        .map_err(|_| BarclockError::InvalidInstant(input.to_string()))?;

    match timezone.from_local_datetime(&naive) {
        LocalResult::Single(local) => Ok(local.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(BarclockError::InvalidInstant(format!(
            "{} does not exist in {}",
            input,
            timezone.name()
        ))),
    }
}
