//! Tonight block use case

use crate::domain::Tonight;
use crate::infrastructure::{Clock, Config};

/// Resolve tonight's block for the venue-local calendar date
pub fn tonight(config: &Config, clock: &dyn Clock) -> Tonight {
    let moment = config.resolver().local_moment(clock.now());
    let resolved = Tonight::resolve(moment.date, &config.events, &config.specials, &config.fallback);

    tracing::debug!(date = %moment.date, heading = ?resolved.heading(), "resolved tonight");
    resolved
}
