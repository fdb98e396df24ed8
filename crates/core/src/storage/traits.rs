use async_trait::async_trait;

use crate::calendar::{Event, EventId, NewEvent};

use super::Result;

/// Storage contract for calendar events.
///
/// Implementations own the event collection exclusively and must keep every
/// stored pair of events non-overlapping under `[start, end)` semantics. A
/// failed call leaves the collection unchanged.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Drops every event and restarts the id counter.
    async fn init(&self) -> Result<()>;

    /// Stores a new event and returns the id assigned to it.
    async fn add(&self, event: NewEvent) -> Result<EventId>;

    /// Gets an event by its ID.
    async fn get(&self, id: EventId) -> Result<Event>;

    /// Returns a snapshot of every stored event, in no particular order.
    async fn get_all(&self) -> Result<Vec<Event>>;

    /// Replaces the stored event with the same id.
    async fn edit(&self, event: Event) -> Result<()>;

    /// Deletes an event by its ID.
    async fn del(&self, id: EventId) -> Result<()>;

    /// Number of stored events.
    async fn len(&self) -> Result<usize>;
}
