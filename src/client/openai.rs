//! HTTP client for an OpenAI-compatible completion API.
//!
//! Configuration normally comes from [`crate::config::CoachConfig`]:
//! - `OPENAI_BASE_URL` - Base URL (default: `https://api.openai.com/v1`)
//! - `OPENAI_API_KEY` - Bearer credential

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::{ClientError, CompletionService};

/// Default URL for the hosted API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// HTTP client for the completion API.
#[derive(Clone)]
pub struct OpenAiClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl OpenAiClient {
    /// Create with explicit configuration. Blank keys are treated as absent.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request with the bearer header if a key is set.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);
        if let Some(ref key) = self.api_key {
            req = req.bearer_auth(key);
        }
        req
    }

    /// Convert non-2xx responses to ClientError.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        match status {
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized(body)),
            StatusCode::TOO_MANY_REQUESTS => Err(ClientError::RateLimited(body)),
            _ => Err(ClientError::Server(format!("{}: {}", status, body))),
        }
    }
}

#[async_trait]
impl CompletionService for OpenAiClient {
    fn credential_present(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(
        &self,
        system: &str,
        user: &str,
        model: &str,
    ) -> Result<String, ClientError> {
        let response = self
            .request(reqwest::Method::POST, "/chat/completions")
            .json(&serde_json::json!({
                "model": model,
                "messages": [
                    {"role": "system", "content": system},
                    {"role": "user", "content": user}
                ]
            }))
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let body = response.text().await?;
        let completion: ChatCompletion = serde_json::from_str(&body)
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| ClientError::MalformedResponse("no message content".to_string()))
    }

    async fn ping(&self) -> Result<(), ClientError> {
        let response = self
            .request(reqwest::Method::GET, "/models")
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_counts_as_missing() {
        let client = OpenAiClient::new(DEFAULT_BASE_URL, Some("   ".to_string()));
        assert!(!client.credential_present());
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let client = OpenAiClient::new("http://localhost:9000/v1/", None);
        assert_eq!(client.base_url(), "http://localhost:9000/v1");
    }

    #[test]
    fn debug_output_hides_the_key() {
        let client = OpenAiClient::new(DEFAULT_BASE_URL, Some("sk-secret".to_string()));
        let debug = format!("{:?}", client);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
