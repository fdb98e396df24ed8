//! eventcal_client - CLI client for the eventcal API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::EventcalClient;
pub use error::{ClientError, Result};
