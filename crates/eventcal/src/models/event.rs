use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use eventcal_core::calendar::{Event, EventId, NewEvent};

/// Errors raised while decoding an event payload, before any domain check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid RFC 3339 timestamp in {field}: {value}")]
    InvalidTimestamp { field: &'static str, value: String },
}

/// Request payload for creating a new event.
///
/// Every field is optional at the serde level so a missing field is reported
/// as a [`RequestError`] instead of a generic deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateEventRequest {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl CreateEventRequest {
    /// Converts the payload into an event draft.
    pub fn into_new_event(self) -> Result<NewEvent, RequestError> {
        let start_time = parse_timestamp("start_time", self.start_time)?;
        let end_time = parse_timestamp("end_time", self.end_time)?;
        let title = self.title.ok_or(RequestError::MissingField("title"))?;

        Ok(NewEvent::new(start_time, end_time, title)
            .with_description(self.description.unwrap_or_default()))
    }
}

/// Request payload for replacing an existing event.
///
/// Edits are wholesale: an omitted description clears the stored one.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateEventRequest {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UpdateEventRequest {
    /// Converts the payload into the replacement value for event `id`.
    pub fn into_event(self, id: EventId) -> Result<Event, RequestError> {
        let draft = CreateEventRequest {
            start_time: self.start_time,
            end_time: self.end_time,
            title: self.title,
            description: self.description,
        }
        .into_new_event()?;
        Ok(draft.with_id(id))
    }
}

fn parse_timestamp(
    field: &'static str,
    value: Option<String>,
) -> Result<DateTime<Utc>, RequestError> {
    let value = value.ok_or(RequestError::MissingField(field))?;
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| RequestError::InvalidTimestamp { field, value })
}
