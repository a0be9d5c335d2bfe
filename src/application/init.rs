//! Initialize venue use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, VenueRepository};
use chrono_tz::Tz;
use std::fs;
use std::path::Path;

/// Initialize a venue config with the demo week at the specified path.
pub fn init(path: &Path, name: &str, timezone: Tz) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::new(name, timezone);
    repo.save_config(&config)?;

    tracing::info!(path = %repo.config_path().display(), "wrote venue config");
    Ok(config)
}
