//! Health API operations.

use super::EventcalClient;
use crate::error::Result;

/// Response from `/healthz`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub events: usize,
}

impl EventcalClient {
    /// Query server health and the number of stored events.
    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        self.handle_response(response, "health").await
    }
}
