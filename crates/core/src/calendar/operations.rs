use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use super::error::EventError;
use super::types::{Event, NewEvent};

/// Longest accepted title, in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Validates an event draft before creation.
pub fn validate_new_event(event: &NewEvent) -> Result<(), EventError> {
    validate_fields(&event.title, event.start_time, event.end_time)
}

/// Validates a stored event before it replaces the previous value.
pub fn validate_event(event: &Event) -> Result<(), EventError> {
    validate_fields(&event.title, event.start_time, event.end_time)
}

fn validate_fields(
    title: &str,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> Result<(), EventError> {
    if title.trim().is_empty() {
        return Err(EventError::EmptyTitle);
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(EventError::TitleTooLong);
    }
    // Zero-length spans are rejected along with inverted ones.
    if start_time >= end_time {
        return Err(EventError::InvalidInterval);
    }
    Ok(())
}

/// Sorts events by start time, breaking ties by id.
pub fn sort_events_by_start(events: &mut [Event]) {
    events.sort_by(compare_by_start);
}

fn compare_by_start(a: &Event, b: &Event) -> Ordering {
    a.start_time
        .cmp(&b.start_time)
        .then_with(|| a.id.cmp(&b.id))
}
