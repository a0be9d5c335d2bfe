//! Configuration check use case

use crate::domain::day::day_label;
use crate::error::Result;
use crate::infrastructure::{Config, VenueRepository};

/// Load and validate the config, returning notes worth showing the user
pub fn check_config(repository: &dyn VenueRepository) -> Result<(Config, Vec<String>)> {
    let config = repository.load_config()?;
    let mut notes = Vec::new();

    if !config.hours.has_any_opening() {
        notes.push("No day has opening hours; the venue always shows Closed".to_string());
    }

    for special in &config.specials {
        if special.is_active && config.hours.get(special.day).window().is_none() {
            notes.push(format!(
                "Special '{}' is on {}, which is closed",
                special.title,
                day_label(special.day)
            ));
        }
    }

    for note in &notes {
        tracing::warn!("{}", note);
    }

    Ok((config, notes))
}
