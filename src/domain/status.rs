//! Status badge tiers

use std::fmt;

/// Minutes before close at which the badge switches to last call
pub const LAST_CALL_MINUTES: u32 = 20;

/// Minutes before close (or open) that count as "soon"
pub const SOON_MINUTES: u32 = 60;

/// Display classification derived from open state and boundary proximity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTier {
    LastCall,
    ClosingSoon,
    Open,
    OpeningSoon,
    Closed,
}

impl StatusTier {
    /// Classify in precedence order. Boundary values belong to the
    /// tighter tier.
    pub fn classify(
        is_open: bool,
        minutes_to_close: Option<u32>,
        minutes_to_open: Option<u32>,
    ) -> Self {
        if is_open {
            match minutes_to_close {
                Some(m) if m <= LAST_CALL_MINUTES => StatusTier::LastCall,
                Some(m) if m <= SOON_MINUTES => StatusTier::ClosingSoon,
                _ => StatusTier::Open,
            }
        } else {
            match minutes_to_open {
                Some(m) if m <= SOON_MINUTES => StatusTier::OpeningSoon,
                _ => StatusTier::Closed,
            }
        }
    }

    /// Tier name
    pub fn name(&self) -> &'static str {
        match self {
            StatusTier::LastCall => "Last Call",
            StatusTier::ClosingSoon => "Closing Soon",
            StatusTier::Open => "Open",
            StatusTier::OpeningSoon => "Opening Soon",
            StatusTier::Closed => "Closed",
        }
    }

    /// Text shown on the badge. Closing Soon still reads "Open".
    pub fn badge_label(&self) -> &'static str {
        match self {
            StatusTier::LastCall => "Last Call",
            StatusTier::ClosingSoon | StatusTier::Open => "Open",
            StatusTier::OpeningSoon => "Opening Soon",
            StatusTier::Closed => "Closed",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(
            self,
            StatusTier::LastCall | StatusTier::ClosingSoon | StatusTier::Open
        )
    }
}

impl fmt::Display for StatusTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
