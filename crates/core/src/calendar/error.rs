use thiserror::Error;

use super::types::EventId;
use crate::storage::StoreError;

/// Errors that can occur when validating an event before it reaches the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event title too long (max 200 characters)")]
    TitleTooLong,
    #[error("Start time must be before end time")]
    InvalidInterval,
}

/// Errors surfaced by the calendar service to its callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Start time must be before end time")]
    InvalidInterval,
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event title too long (max 200 characters)")]
    TitleTooLong,
    #[error("Date interval is busy")]
    DateBusy,
    #[error("Event not found: {0}")]
    NotFound(EventId),
    #[error("No events in storage")]
    NoEventsInStorage,
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<EventError> for CalendarError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::EmptyTitle => CalendarError::EmptyTitle,
            EventError::TitleTooLong => CalendarError::TitleTooLong,
            EventError::InvalidInterval => CalendarError::InvalidInterval,
        }
    }
}

impl From<StoreError> for CalendarError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidInterval { .. } => CalendarError::InvalidInterval,
            StoreError::EmptyTitle => CalendarError::EmptyTitle,
            StoreError::TitleTooLong => CalendarError::TitleTooLong,
            StoreError::DateBusy => CalendarError::DateBusy,
            StoreError::NotFound(id) => CalendarError::NotFound(id),
            StoreError::Unavailable(message) => CalendarError::Storage(message),
        }
    }
}
