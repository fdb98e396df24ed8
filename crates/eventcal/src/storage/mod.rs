//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `EventStore` trait
//! defined in `eventcal_core::storage`. Only the in-memory backend exists
//! today; a durable one plugs in behind the same trait.

pub mod inmemory;
