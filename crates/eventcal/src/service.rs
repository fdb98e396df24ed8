//! Calendar service: request-level orchestration over an [`EventStore`].
//!
//! Every operation validates its input, delegates to the store, translates
//! store errors into [`CalendarError`] and emits exactly one log line with the
//! outcome. Logging never changes what is returned.

use std::sync::Arc;

use eventcal_core::calendar::{
    sort_events_by_start, validate_event, validate_new_event, CalendarError, Event, EventId,
    NewEvent,
};
use eventcal_core::storage::EventStore;

/// Result type for calendar service operations.
pub type Result<T> = std::result::Result<T, CalendarError>;

/// Orchestrates calendar requests over a shared event store.
#[derive(Clone)]
pub struct CalendarService {
    store: Arc<dyn EventStore>,
}

impl CalendarService {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// Adds a new event and returns its assigned id.
    pub async fn add_event(&self, event: NewEvent) -> Result<EventId> {
        let result = match validate_new_event(&event) {
            Ok(()) => self.store.add(event).await.map_err(CalendarError::from),
            Err(err) => Err(err.into()),
        };

        match &result {
            Ok(id) => tracing::info!(event_id = %id, "Event added"),
            Err(err) => tracing::warn!(error = %err, "Failed to add event"),
        }
        result
    }

    /// Replaces an existing event with `event`.
    pub async fn edit_event(&self, event: Event) -> Result<()> {
        let id = event.id;
        let result = match validate_event(&event) {
            Ok(()) => self.store.edit(event).await.map_err(CalendarError::from),
            Err(err) => Err(err.into()),
        };

        match &result {
            Ok(()) => tracing::info!(event_id = %id, "Event edited"),
            Err(err) => tracing::warn!(event_id = %id, error = %err, "Failed to edit event"),
        }
        result
    }

    /// Deletes an event by its id.
    pub async fn del_event(&self, id: EventId) -> Result<()> {
        let result = self.store.del(id).await.map_err(CalendarError::from);

        match &result {
            Ok(()) => tracing::info!(event_id = %id, "Event deleted"),
            Err(err) => tracing::warn!(event_id = %id, error = %err, "Failed to delete event"),
        }
        result
    }

    /// Gets an event by its id.
    pub async fn get_event(&self, id: EventId) -> Result<Event> {
        let result = self.store.get(id).await.map_err(CalendarError::from);

        match &result {
            Ok(_) => tracing::debug!(event_id = %id, "Event fetched"),
            Err(err) => tracing::warn!(event_id = %id, error = %err, "Failed to get event"),
        }
        result
    }

    /// Returns every event ordered by start time.
    ///
    /// An empty store yields [`CalendarError::NoEventsInStorage`] so callers can
    /// tell an empty calendar apart from a failing store.
    pub async fn get_all_events(&self) -> Result<Vec<Event>> {
        let result = match self.store.get_all().await {
            Ok(events) if events.is_empty() => Err(CalendarError::NoEventsInStorage),
            Ok(mut events) => {
                sort_events_by_start(&mut events);
                Ok(events)
            }
            Err(err) => Err(err.into()),
        };

        match &result {
            Ok(events) => tracing::debug!(count = events.len(), "Events listed"),
            Err(CalendarError::NoEventsInStorage) => tracing::debug!("No events in storage"),
            Err(err) => tracing::warn!(error = %err, "Failed to list events"),
        }
        result
    }

    /// Number of stored events.
    pub async fn count_events(&self) -> Result<usize> {
        let result = self.store.len().await.map_err(CalendarError::from);

        match &result {
            Ok(count) => tracing::debug!(count, "Events counted"),
            Err(err) => tracing::warn!(error = %err, "Failed to count events"),
        }
        result
    }

    /// Drops every event and restarts id assignment.
    pub async fn reset(&self) -> Result<()> {
        let result = self.store.init().await.map_err(CalendarError::from);

        match &result {
            Ok(()) => tracing::info!("Calendar reset"),
            Err(err) => tracing::warn!(error = %err, "Failed to reset calendar"),
        }
        result
    }
}
