//! HTTP client for network-based collaborator calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for making network requests to the ordering backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Server base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request and decode the JSON response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::check_status(response).await?.json().await.map_err(Into::into)
    }

    /// Make a POST request with a JSON body, discarding the response body
    pub async fn post_json<B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Map a non-success status to a server failure
    ///
    /// The response body text is the human-readable failure message; an
    /// empty body gets a generic fallback.
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = if text.trim().is_empty() {
            format!("Server error ({})", status.as_u16())
        } else {
            text
        };

        tracing::warn!(status = status.as_u16(), %message, "Request failed");

        Err(ClientError::Server {
            status: status.as_u16(),
            message,
        })
    }
}
