use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::calendar::{EventError, EventId};

/// Errors that can occur during event store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid interval: start {start} is not before end {end}")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event title too long (max 200 characters)")]
    TitleTooLong,
    #[error("Date interval is busy")]
    DateBusy,
    #[error("Event not found: {0}")]
    NotFound(EventId),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Lifts a validation failure for the event spanning `start..end`.
    pub fn from_validation(err: EventError, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        match err {
            EventError::EmptyTitle => StoreError::EmptyTitle,
            EventError::TitleTooLong => StoreError::TitleTooLong,
            EventError::InvalidInterval => StoreError::InvalidInterval { start, end },
        }
    }
}

/// Result type for event store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
