//! Event API operations.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;

use super::EventcalClient;
use crate::error::Result;
use eventcal_core::calendar::{Event, EventId};

/// Request body for creating or replacing an event.
#[derive(Debug, Clone, serde::Serialize)]
pub struct EventRequest {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub title: String,
    pub description: String,
}

impl EventcalClient {
    /// List all events, sorted by start time.
    ///
    /// An empty calendar yields an empty vector.
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let response = self.client.get(self.url("/api/events")).send().await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }
        self.handle_response(response, "events").await
    }

    /// Create a new event.
    pub async fn create_event(&self, req: &EventRequest) -> Result<Event> {
        let response = self
            .client
            .post(self.url("/api/events"))
            .json(req)
            .send()
            .await?;
        self.handle_response(response, "events").await
    }

    /// Get event by ID.
    pub async fn get_event(&self, id: EventId) -> Result<Event> {
        let response = self
            .client
            .get(self.url(&format!("/api/events/{}", id)))
            .send()
            .await?;
        self.handle_response(response, &format!("event {}", id)).await
    }

    /// Replace an event.
    pub async fn update_event(&self, id: EventId, req: &EventRequest) -> Result<Event> {
        let response = self
            .client
            .put(self.url(&format!("/api/events/{}", id)))
            .json(req)
            .send()
            .await?;
        self.handle_response(response, &format!("event {}", id)).await
    }

    /// Delete event by ID.
    pub async fn delete_event(&self, id: EventId) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/events/{}", id)))
            .send()
            .await?;
        self.handle_empty_response(response, &format!("event {}", id))
            .await
    }

    /// Delete every event.
    pub async fn reset_events(&self) -> Result<()> {
        let response = self.client.delete(self.url("/api/events")).send().await?;
        self.handle_empty_response(response, "events").await
    }
}
