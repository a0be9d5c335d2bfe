//! Config management use case

use crate::domain::day::{day_key, parse_day};
use crate::domain::HoursEntry;
use crate::error::{BarclockError, Result};
use crate::infrastructure::config::parse_timezone;
use crate::infrastructure::{FileSystemRepository, VenueRepository};

const VALID_KEYS: &str = "name, timezone, monday, tuesday, wednesday, thursday, friday, saturday, sunday";

/// Service for reading and editing the venue configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "name" => Ok(config.name.clone()),
            "timezone" => Ok(config.timezone.name().to_string()),
            _ => {
                let day = parse_day(key).map_err(|_| unknown_key(key))?;
                Ok(format_entry(config.hours.get(day)))
            }
        }
    }

    /// Set a config value. The whole config is revalidated before it
    /// replaces the file on disk.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "name" => {
                config.name = value.to_string();
            }
            "timezone" => {
                config.timezone = parse_timezone(value)?;
            }
            _ => {
                let day = parse_day(key).map_err(|_| unknown_key(key))?;
                let entry = HoursEntry::parse(value)?;
                config.hours = config.hours.with_day(day, entry);
            }
        }

        config.validate()?;
        self.repository.save_config(&config)?;

        tracing::info!(key, value, "updated venue config");
        Ok(())
    }

    /// All values, in display order
    pub fn list(&self) -> Result<Vec<(String, String)>> {
        let config = self.repository.load_config()?;

        let mut values = vec![
            ("name".to_string(), config.name.clone()),
            ("timezone".to_string(), config.timezone.name().to_string()),
        ];
        for (day, entry) in config.hours.iter() {
            values.push((day_key(day).to_string(), format_entry(entry)));
        }

        Ok(values)
    }
}

/// Same shape `set` accepts: `closed` or `HH:MM-HH:MM`
fn format_entry(entry: &HoursEntry) -> String {
    match entry.window() {
        Some(window) => format!("{}-{}", window.open, window.close),
        None => "closed".to_string(),
    }
}

fn unknown_key(key: &str) -> BarclockError {
    BarclockError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, VALID_KEYS
    ))
}
