//! Domain layer - Opening hours and status logic

pub mod clock_time;
pub mod day;
pub mod hours;
pub mod resolver;
pub mod status;
pub mod tonight;

pub use clock_time::ClockTime;
pub use hours::{HoursEntry, WeeklyHours, Window};
pub use resolver::{HoursResolver, LocalMoment, NextOpening, OpenBranch, StatusSnapshot};
pub use status::StatusTier;
pub use tonight::{EventKind, Fallback, RecurringSpecial, ScheduledEvent, Tonight};
