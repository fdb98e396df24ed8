use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::interval::TimeSpan;

/// Identifier of a stored event.
///
/// Ids are handed out by the store from a monotonic counter and are never
/// reused, not even after the event they named has been deleted.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl EventId {
    /// Returns the id that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// An event that has not been stored yet, so it carries no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl NewEvent {
    /// Creates a new event draft with an empty description.
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>, title: impl Into<String>) -> Self {
        Self {
            start_time,
            end_time,
            title: title.into(),
            description: String::new(),
        }
    }

    /// Sets the description for this event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns the `[start_time, end_time)` span of this event.
    pub fn span(&self) -> TimeSpan {
        TimeSpan::new(self.start_time, self.end_time)
    }

    /// Attaches a store-assigned id, producing a stored event.
    pub fn with_id(self, id: EventId) -> Event {
        Event {
            id,
            start_time: self.start_time,
            end_time: self.end_time,
            title: self.title,
            description: self.description,
        }
    }
}

/// A single calendar entry as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Event {
    /// Returns the `[start_time, end_time)` span of this event.
    pub fn span(&self) -> TimeSpan {
        TimeSpan::new(self.start_time, self.end_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2006, 1, 2, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_event_id_next_is_monotonic() {
        let id = EventId(41);
        assert_eq!(id.next(), EventId(42));
        assert!(id < id.next());
    }

    #[test]
    fn test_event_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&EventId(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_with_id_keeps_every_field() {
        let draft = NewEvent::new(at(15, 0), at(16, 0), "Event 1").with_description("Some Desc1");
        let event = draft.clone().with_id(EventId(3));

        assert_eq!(event.id, EventId(3));
        assert_eq!(event.title, draft.title);
        assert_eq!(event.description, draft.description);
        assert_eq!(event.span(), draft.span());
    }

    #[test]
    fn test_description_defaults_to_empty_when_missing() {
        let json = r#"{
            "start_time": "2006-01-02T15:00:00Z",
            "end_time": "2006-01-02T16:00:00Z",
            "title": "Standup"
        }"#;
        let draft: NewEvent = serde_json::from_str(json).unwrap();
        assert_eq!(draft.description, "");
        assert_eq!(draft.start_time, at(15, 0));
    }
}
