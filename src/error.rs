//! Error types for barclock

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for barclock
#[derive(Debug, Error)]
pub enum BarclockError {
    #[error("Not a barclock directory: {0}")]
    NotBarclockDirectory(PathBuf),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Missing {field} time for {day} (set is_closed = true or provide both open and close)")]
    MissingBound { day: String, field: &'static str },

    #[error("Hours for {day} run past the opening time on {next}")]
    OverlappingHours { day: String, next: String },

    #[error("Hours for {day} are given twice (as '{first}' and '{second}')")]
    DuplicateDay {
        day: String,
        first: String,
        second: String,
    },

    #[error("Unknown day: {0}")]
    UnknownDay(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Invalid instant: {0}")]
    InvalidInstant(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl BarclockError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BarclockError::NotBarclockDirectory(_) => 2,
            BarclockError::InvalidTime(_)
            | BarclockError::MissingBound { .. }
            | BarclockError::OverlappingHours { .. }
            | BarclockError::DuplicateDay { .. }
            | BarclockError::UnknownDay(_)
            | BarclockError::UnknownTimezone(_)
            | BarclockError::TomlDeserialize(_) => 3,
            BarclockError::InvalidInstant(_) => 4,
            _ => 1,
        }
    }

    /// Whether this error means the hours configuration itself is unusable
    pub fn is_configuration_error(&self) -> bool {
        self.exit_code() == 3
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BarclockError::NotBarclockDirectory(path) => {
                format!(
                    "Not a barclock directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'barclock init' in this directory to create a venue config\n\
                    • Navigate to an existing barclock directory\n\
                    • Set BARCLOCK_ROOT environment variable to your venue directory\n\
                    • Pass --config <FILE> to use a specific config file",
                    path.display()
                )
            }
            BarclockError::InvalidTime(value) => {
                format!(
                    "Invalid time: {}\n\n\
                    Times use the 24-hour HH:MM format.\n\
                    Examples: 09:00, 17:30, 00:00",
                    value
                )
            }
            BarclockError::UnknownDay(day) => {
                format!(
                    "Unknown day: '{}'\n\n\
                    Valid days: monday, tuesday, wednesday, thursday, friday, saturday, sunday",
                    day
                )
            }
            BarclockError::UnknownTimezone(tz) => {
                format!(
                    "Unknown timezone: '{}'\n\n\
                    Use an IANA timezone name.\n\
                    Examples: America/New_York, Europe/London, Asia/Tokyo",
                    tz
                )
            }
            BarclockError::InvalidInstant(value) => {
                format!(
                    "Invalid instant: {}\n\n\
                    Accepted --at formats:\n\
                    • RFC 3339: 2026-10-17T23:30:00-04:00\n\
                    • Venue-local wall time: 2026-10-17 23:30",
                    value
                )
            }
            BarclockError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: barclock config friday 17:00-02:00",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BarclockError
pub type Result<T> = std::result::Result<T, BarclockError>;
