//! Venue configuration file

use crate::domain::{
    Fallback, HoursEntry, HoursResolver, RecurringSpecial, ScheduledEvent, WeeklyHours,
};
use crate::error::{BarclockError, Result};
use chrono::Weekday;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_DIR: &str = ".barclock";
pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub name: String,
    #[serde(with = "timezone_name", default = "default_timezone")]
    pub timezone: Tz,
    #[serde(default)]
    pub hours: WeeklyHours,
    #[serde(default)]
    pub fallback: Fallback,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specials: Vec<RecurringSpecial>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<ScheduledEvent>,
}

fn default_timezone() -> Tz {
    DEFAULT_TIMEZONE
}

impl Config {
    /// Demo venue: closed Sunday and Monday, late on Friday and Saturday
    pub fn new(name: &str, timezone: Tz) -> Self {
        let until_midnight = demo_entry("17:00-00:00");
        let late = demo_entry("17:00-02:00");

        let hours = WeeklyHours::all_closed()
            .with_day(Weekday::Tue, until_midnight)
            .with_day(Weekday::Wed, until_midnight)
            .with_day(Weekday::Thu, until_midnight)
            .with_day(Weekday::Fri, late)
            .with_day(Weekday::Sat, late);

        Config {
            name: name.to_string(),
            timezone,
            hours,
            fallback: Fallback {
                title: "Craft Cocktails".to_string(),
                description: Some("Handcrafted drinks in the heart of downtown.".to_string()),
            },
            specials: vec![
                demo_special(Weekday::Tue, "Industry Night", "Half off for our friends in the service industry."),
                demo_special(Weekday::Wed, "Whiskey Wednesday", "$2 off all bourbon pours."),
                demo_special(Weekday::Thu, "Dealer's Choice", "Tell us a flavor. Trust the bartender."),
                demo_special(Weekday::Fri, "Vinyl Fridays", "Guest DJ spins vinyl all night."),
                demo_special(Weekday::Sat, "Late Night", "Doors open til 2 AM. The night is yours."),
            ],
            events: Vec::new(),
        }
    }

    /// Parse and validate config text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that serde alone cannot express
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(BarclockError::Config(
                "Venue name must not be empty".to_string(),
            ));
        }
        self.hours.validate()
    }

    /// Load config from .barclock/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BarclockError::NotBarclockDirectory(path.to_path_buf())
            } else {
                BarclockError::Io(e)
            }
        })?;

        Self::from_toml(&contents)
    }

    /// Load config from an explicit file path
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BarclockError::Config(format!("Config file not found: {}", path.display()))
            } else {
                BarclockError::Io(e)
            }
        })?;

        Self::from_toml(&contents)
    }

    /// Write the config, replacing any existing file in one rename
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.barclock-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or(CONFIG_FILE),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;
        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    /// Save config to .barclock/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        self.save_to_file(&path.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub fn resolver(&self) -> HoursResolver {
        HoursResolver::new(self.hours, self.timezone)
    }
}

/// Parse an IANA timezone name
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| BarclockError::UnknownTimezone(name.to_string()))
}

// Built from string literals above; parse cannot fail.
fn demo_entry(range: &str) -> HoursEntry {
    HoursEntry::parse(range).unwrap_or_else(|_| HoursEntry::closed())
}

fn demo_special(day: Weekday, title: &str, description: &str) -> RecurringSpecial {
    RecurringSpecial {
        day,
        title: title.to_string(),
        description: Some(description.to_string()),
        is_active: true,
    }
}

mod timezone_name {
    use chrono_tz::Tz;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(tz: &Tz, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(tz.name())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Tz, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timezone(&raw).map_err(serde::de::Error::custom)
    }
}
