//! HTTP client for the tutoring backend

use reqwest::Client;

use super::error::TutorError;
use super::models::{AskRequest, AskResponse};

/// Client for the backend's `/ask` endpoint
pub struct TutorClient {
    /// HTTP client
    client: Client,
    /// Backend base URL, no trailing slash
    base_url: String,
}

impl TutorClient {
    /// Where the backend listens when run locally
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:8000";

    /// Create a client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url: base_url.into() }
    }

    /// Ask a single question and wait for the complete answer.
    ///
    /// The backend answers in one JSON body; the caller replays it through a
    /// reveal slot for the streamed look.
    pub async fn ask(&self, request: AskRequest) -> Result<AskResponse, TutorError> {
        let response =
            self.client.post(format!("{}/ask", self.base_url)).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TutorError::ApiError { status: status.as_u16(), message });
        }

        let body = response.text().await?;
        let answer: AskResponse = serde_json::from_str(&body)?;
        Ok(answer)
    }
}

impl Default for TutorClient {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_base_url() {
        let client = TutorClient::new("http://localhost:9999");
        assert_eq!(client.base_url, "http://localhost:9999");
    }

    #[test]
    fn default_client_targets_local_backend() {
        let client = TutorClient::default();
        assert_eq!(client.base_url, TutorClient::DEFAULT_BASE_URL);
    }
}
