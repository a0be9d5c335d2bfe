//! Infrastructure layer - Config files and the system clock

pub mod clock;
pub mod config;
pub mod repository;

pub use clock::{parse_instant, Clock, FixedClock, SystemClock};
pub use config::Config;
pub use repository::{FileSystemRepository, VenueRepository};
