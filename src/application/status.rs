//! Current status use case

use crate::domain::resolver::StatusSnapshot;
use crate::infrastructure::{Clock, Config};

/// Resolve the status badge for the venue at the clock's current instant
pub fn current_status(config: &Config, clock: &dyn Clock) -> StatusSnapshot {
    let now = clock.now();
    let snapshot = config.resolver().snapshot(now);

    tracing::debug!(
        %now,
        timezone = config.timezone.name(),
        day = ?snapshot.moment.day,
        minute = snapshot.moment.minute,
        tier = %snapshot.tier,
        "resolved status"
    );

    snapshot
}
