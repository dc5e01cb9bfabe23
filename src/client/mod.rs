//! Completion service abstraction and its HTTP implementation.
//!
//! The coach only needs two things from a hosted model: turn a system and
//! user instruction into text, and confirm the credential works. Both are
//! expressed by [`CompletionService`] so tests can substitute a double.

mod openai;

use async_trait::async_trait;
use thiserror::Error;

pub use openai::{OpenAiClient, DEFAULT_BASE_URL};

/// Errors from the completion endpoint.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unauthorized: API key missing or invalid: {0}")]
    Unauthorized(String),

    #[error("Rate limited or out of quota: {0}")]
    RateLimited(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    /// True when the endpoint rejected the credential itself.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

/// A hosted text-completion endpoint.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Whether a non-empty credential is configured. Checked before any call.
    fn credential_present(&self) -> bool;

    /// Run one completion and return the raw text.
    async fn complete(&self, system: &str, user: &str, model: &str)
        -> Result<String, ClientError>;

    /// Lightweight authenticated call used to validate the credential.
    async fn ping(&self) -> Result<(), ClientError>;
}
