//! Shared application state.
//!
//! Holds the calendar service over an `EventStore` trait object. The backend
//! is chosen once at startup from [`Config`].

use std::sync::Arc;

use eventcal_core::interval::BTreeIndex;
use eventcal_core::storage::EventStore;

use crate::config::{Config, IndexKind};
use crate::service::CalendarService;
use crate::storage::inmemory::InMemoryEventStore;

/// Shared application state.
///
/// This is cloned for each request handler; clones share the same store.
#[derive(Clone)]
pub struct AppState {
    pub calendar: CalendarService,
}

impl AppState {
    /// Creates state around an existing store.
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self {
            calendar: CalendarService::new(store),
        }
    }

    /// Creates state with an empty in-memory store using the configured index.
    pub fn from_config(config: &Config) -> Self {
        let store: Arc<dyn EventStore> = match config.index_kind {
            IndexKind::Linear => Arc::new(InMemoryEventStore::new()),
            IndexKind::BTree => Arc::new(InMemoryEventStore::<BTreeIndex>::with_index()),
        };
        tracing::debug!(index = ?config.index_kind, "Created in-memory event store");
        Self::new(store)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryEventStore::new()))
    }
}
