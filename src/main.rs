use barclock::application::{self, ConfigService};
use barclock::cli::{self, Cli, Commands};
use barclock::error::Result;
use barclock::infrastructure::config::parse_timezone;
use barclock::infrastructure::{
    parse_instant, Clock, FileSystemRepository, FixedClock, SystemClock, VenueRepository,
};
use clap::Parser;
use chrono_tz::Tz;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();
    barclock::logging::init();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_file,
        at,
        command,
    } = cli;

    match command {
        Commands::Init {
            path,
            name,
            timezone,
        } => {
            let timezone = parse_timezone(&timezone)?;
            application::init::init(&path, &name, timezone)?;
            println!("Initialized barclock venue at {}", path.display());
            println!("Timezone: {}", timezone.name());
            Ok(())
        }
        Commands::Status => {
            let config = open_repository(config_file)?.load_config()?;
            let clock = clock_for(at.as_deref(), config.timezone)?;
            let snapshot = application::current_status(&config, clock.as_ref());
            print!("{}", cli::format_status(&snapshot));
            Ok(())
        }
        Commands::Hours => {
            let config = open_repository(config_file)?.load_config()?;
            let clock = clock_for(at.as_deref(), config.timezone)?;
            let rows = application::weekly_hours(&config, clock.as_ref());
            print!("{}", cli::format_hours_table(&rows));
            Ok(())
        }
        Commands::Tonight => {
            let config = open_repository(config_file)?.load_config()?;
            let clock = clock_for(at.as_deref(), config.timezone)?;
            let tonight = application::tonight(&config, clock.as_ref());
            print!("{}", cli::format_tonight(&tonight, &config.name));
            Ok(())
        }
        Commands::Check => {
            let repo = open_repository(config_file)?;
            let (config, notes) = application::check_config(&repo)?;
            for note in &notes {
                println!("note: {}", note);
            }
            println!(
                "Configuration OK: {} ({})",
                config.name,
                config.timezone.name()
            );
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(open_repository(config_file)?);

            if list {
                print!("{}", cli::format_config_list(&service.list()?));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: barclock config [--list | <key> [<value>]]");
                println!("Valid keys: name, timezone, monday ... sunday");
                Ok(())
            }
        }
    }
}

fn open_repository(config_file: Option<PathBuf>) -> Result<FileSystemRepository> {
    match config_file {
        Some(path) => Ok(FileSystemRepository::from_config_file(path)),
        None => FileSystemRepository::discover(),
    }
}

fn clock_for(at: Option<&str>, timezone: Tz) -> Result<Box<dyn Clock>> {
    match at {
        Some(value) => Ok(Box::new(FixedClock(parse_instant(value, timezone)?))),
        None => Ok(Box::new(SystemClock)),
    }
}
