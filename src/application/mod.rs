//! Application layer - Use cases and orchestration

pub mod check;
pub mod init;
pub mod manage_config;
pub mod status;
pub mod tonight;
pub mod weekly_hours;

pub use check::check_config;
pub use manage_config::ConfigService;
pub use status::current_status;
pub use tonight::tonight;
pub use weekly_hours::{weekly_hours, HoursRow};
