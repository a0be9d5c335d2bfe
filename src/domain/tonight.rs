//! What's happening tonight

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A special that repeats on the same weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringSpecial {
    #[serde(with = "weekday_key")]
    pub day: Weekday,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Kind of a dated event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Open to the public
    Event,
    /// Venue closed to the public
    Private,
}

/// A one-off event on a specific date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub date: NaiveDate,
    pub title: String,
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closure_message: Option<String>,
}

/// The venue's default pitch when nothing else is on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fallback {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for Fallback {
    fn default() -> Self {
        Fallback {
            title: "Craft Cocktails".to_string(),
            description: None,
        }
    }
}

/// The tonight block, one variant per source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tonight {
    Private {
        message: Option<String>,
    },
    Event {
        title: String,
        description: Option<String>,
    },
    Recurring {
        title: String,
        description: Option<String>,
    },
    Fallback {
        title: String,
        description: Option<String>,
    },
}

impl Tonight {
    /// Pick tonight's entry for `date`: private event, public event,
    /// the weekday's active special, then the fallback.
    pub fn resolve(
        date: NaiveDate,
        events: &[ScheduledEvent],
        specials: &[RecurringSpecial],
        fallback: &Fallback,
    ) -> Self {
        let todays_events: Vec<&ScheduledEvent> =
            events.iter().filter(|e| e.date == date).collect();

        if let Some(private) = todays_events.iter().find(|e| e.kind == EventKind::Private) {
            return Tonight::Private {
                message: private.closure_message.clone(),
            };
        }

        if let Some(event) = todays_events.iter().find(|e| e.kind == EventKind::Event) {
            return Tonight::Event {
                title: event.title.clone(),
                description: event.description.clone(),
            };
        }

        let weekday = date.weekday();
        if let Some(special) = specials
            .iter()
            .find(|s| s.is_active && s.day == weekday)
        {
            return Tonight::Recurring {
                title: special.title.clone(),
                description: special.description.clone(),
            };
        }

        Tonight::Fallback {
            title: fallback.title.clone(),
            description: fallback.description.clone(),
        }
    }

    /// Small heading above the title; private nights have none
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            Tonight::Private { .. } => None,
            Tonight::Event { .. } => Some("Tonight"),
            Tonight::Recurring { .. } => Some("Tonight's Special"),
            Tonight::Fallback { .. } => Some("Every Night"),
        }
    }
}

/// Default closure text for a private night
pub fn private_event_message(venue_name: &str) -> String {
    format!("{} is hosting a private event this evening.", venue_name)
}

mod weekday_key {
    use crate::domain::day::{day_key, parse_day};
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(day_key(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_day(&raw).map_err(serde::de::Error::custom)
    }
}
