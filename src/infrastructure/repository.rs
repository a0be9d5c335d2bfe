//! Locating and persisting the venue config

use crate::error::{BarclockError, Result};
use crate::infrastructure::config::{Config, CONFIG_DIR, CONFIG_FILE};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract store for the venue configuration
pub trait VenueRepository {
    /// Directory the config belongs to
    fn root(&self) -> &Path;

    /// Path of the config file
    fn config_path(&self) -> &Path;

    fn load_config(&self) -> Result<Config>;

    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if the config directory exists
    fn is_initialized(&self) -> bool;

    /// Create the .barclock directory
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of VenueRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
    config_path: PathBuf,
}

impl FileSystemRepository {
    /// Repository rooted at `root`, using root/.barclock/config.toml
    pub fn new(root: PathBuf) -> Self {
        let config_path = root.join(CONFIG_DIR).join(CONFIG_FILE);
        FileSystemRepository { root, config_path }
    }

    /// Repository backed by an explicit config file
    pub fn from_config_file(path: PathBuf) -> Self {
        let root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        FileSystemRepository {
            root,
            config_path: path,
        }
    }

    /// Discover the venue root.
    /// BARCLOCK_ROOT wins; otherwise walk up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("BARCLOCK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_config_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(BarclockError::Config(format!(
                    "BARCLOCK_ROOT is set to '{}' but no .barclock directory found. \
                    Run 'barclock init' in that directory or unset BARCLOCK_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing .barclock is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(BarclockError::NotBarclockDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_config_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }
}

impl VenueRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn config_path(&self) -> &Path {
        &self.config_path
    }

    fn load_config(&self) -> Result<Config> {
        if self.config_path == self.root.join(CONFIG_DIR).join(CONFIG_FILE) {
            Config::load_from_dir(&self.root)
        } else {
            Config::load_from_file(&self.config_path)
        }
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_file(&self.config_path)
    }

    fn is_initialized(&self) -> bool {
        self.config_path.exists()
    }

    fn initialize(&self) -> Result<()> {
        let config_dir = self.root.join(CONFIG_DIR);

        if config_dir.join(CONFIG_FILE).exists() {
            return Err(BarclockError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&config_dir)?;
        Ok(())
    }
}
