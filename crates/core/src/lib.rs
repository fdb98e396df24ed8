//! eventcal_core - functional core of the eventcal event store.
//!
//! Domain types and validation live in [`calendar`], overlap checks in
//! [`interval`], and the storage contract in [`storage`]. Nothing here does I/O.

pub mod calendar;
pub mod interval;
pub mod storage;
