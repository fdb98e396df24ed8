//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the `EventStore` trait
//! that stores all events in a HashMap wrapped in `Arc<RwLock<_>>`.
//!
//! # Example
//!
//! ```rust,ignore
//! use eventcal::storage::inmemory::InMemoryEventStore;
//!
//! let store = InMemoryEventStore::new();
//! // Use store for testing...
//! ```

mod repository;

pub use repository::InMemoryEventStore;
