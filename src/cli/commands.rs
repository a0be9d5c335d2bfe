//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "barclock")]
#[command(about = "Opening hours and open/closed status for a bar", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Use this config file instead of discovering .barclock/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Evaluate at this instant (RFC 3339, or venue-local "YYYY-MM-DD HH:MM")
    #[arg(long, global = true, value_name = "WHEN")]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a venue config with demo hours
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Venue name
        #[arg(short, long, default_value = "Revival")]
        name: String,

        /// IANA timezone of the venue
        #[arg(short, long, default_value = "America/New_York")]
        timezone: String,
    },

    /// Show whether the venue is open right now
    Status,

    /// Show the weekly hours table
    Hours,

    /// Show what's on tonight
    Tonight,

    /// Validate the venue config
    Check,

    /// View or modify configuration
    Config {
        /// Config key to get or set (name, timezone, or a day)
        key: Option<String>,

        /// Value to set: "closed" or "HH:MM-HH:MM" for days
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
