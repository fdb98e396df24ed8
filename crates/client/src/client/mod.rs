//! HTTP client for the eventcal API.

pub mod events;
pub mod health;

use reqwest::StatusCode;

use crate::error::{ClientError, Result};

/// HTTP client for the eventcal API.
#[derive(Debug, Clone)]
pub struct EventcalClient {
    client: reqwest::Client,
    base_url: String,
}

impl EventcalClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle responses that carry a JSON body on success.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<T> {
        let response = self.check_status(response, resource).await?;
        response.json().await.map_err(ClientError::from)
    }

    /// Handle responses where no body is expected.
    async fn handle_empty_response(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<()> {
        self.check_status(response, resource).await.map(|_| ())
    }

    /// Turns non-success statuses into errors.
    async fn check_status(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(match status {
            StatusCode::NOT_FOUND => ClientError::NotFound {
                resource: resource.to_string(),
            },
            StatusCode::CONFLICT => ClientError::Conflict(message),
            StatusCode::BAD_REQUEST => ClientError::InvalidInput(message),
            _ => ClientError::ServerError {
                status: status.as_u16(),
                message,
            },
        })
    }
}
