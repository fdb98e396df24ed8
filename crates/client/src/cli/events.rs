//! Event CLI commands.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

/// Event management commands.
#[derive(Debug, Parser)]
pub struct EventsCommand {
    #[command(subcommand)]
    pub action: EventsAction,
}

/// Available event actions.
#[derive(Debug, Subcommand)]
pub enum EventsAction {
    /// List all events.
    List,
    /// Create a new event.
    Create {
        /// Start time (RFC 3339).
        #[arg(long)]
        start: DateTime<Utc>,
        /// End time (RFC 3339), exclusive.
        #[arg(long)]
        end: DateTime<Utc>,
        /// Event title.
        #[arg(long)]
        title: String,
        /// Optional description.
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Get event by ID.
    Get {
        /// Event ID.
        id: u64,
    },
    /// Replace an event.
    Update {
        /// Event ID.
        id: u64,
        /// New start time (RFC 3339).
        #[arg(long)]
        start: DateTime<Utc>,
        /// New end time (RFC 3339), exclusive.
        #[arg(long)]
        end: DateTime<Utc>,
        /// New title.
        #[arg(long)]
        title: String,
        /// New description; omitted means empty.
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete event by ID.
    Delete {
        /// Event ID.
        id: u64,
    },
    /// Delete every event.
    Reset,
}
