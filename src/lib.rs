//! barclock - Opening hours resolver for a bar
//!
//! Answers "is the venue open right now?" from a weekly hours config,
//! handling windows that cross midnight, and derives the status badge,
//! today's hours, the weekly table and the tonight block.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use domain::{HoursResolver, StatusTier, WeeklyHours};
pub use error::BarclockError;
