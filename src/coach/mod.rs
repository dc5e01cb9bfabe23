//! The two-tier response policy: locked scripts first, AI fallback second.
//!
//! Locked plays come straight from the catalog. Free-text objections go to
//! the fallback responder, which checks its preconditions in a fixed order
//! and makes at most one call to the completion service per action.

pub mod prompt;

use coach_core::{catalog, FallbackRequest, ObjectionCategory, ResponsePlay};
use thiserror::Error;

use crate::client::{ClientError, CompletionService, OpenAiClient};
use crate::config::CoachConfig;

/// Shown alongside authentication failures.
pub const INVALID_KEY_HINT: &str =
    "An invalid API key is usually an account or billing issue, not a problem with this app.";

/// Why a coach action produced a notice instead of a response.
///
/// Every variant is scoped to the single action that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoachError {
    #[error("AI fallback is disabled")]
    FeatureDisabled,

    #[error("No objection text to process")]
    EmptyInput,

    #[error("No API key configured")]
    MissingCredential,

    #[error("AI request failed: {detail}")]
    ExternalService {
        detail: String,
        hint: Option<&'static str>,
    },
}

impl From<ClientError> for CoachError {
    fn from(e: ClientError) -> Self {
        let hint = e.is_auth_failure().then_some(INVALID_KEY_HINT);
        Self::ExternalService {
            detail: error_chain(&e),
            hint,
        }
    }
}

/// The error's message followed by every cause not already in it, e.g.
/// "HTTP request failed: error sending request: ...: Connection refused".
fn error_chain(e: &(dyn std::error::Error + 'static)) -> String {
    let mut detail = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !detail.contains(&text) {
            detail.push_str(": ");
            detail.push_str(&text);
        }
        source = cause.source();
    }
    detail
}

/// Ambient toggles for the fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackSettings {
    pub enabled: bool,
}

impl Default for FallbackSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// What the user picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A category from the picker.
    Locked(ObjectionCategory),
    /// A free-text objection not covered by the catalog.
    Fallback(FallbackRequest),
}

/// What the coach answered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Locked(&'static ResponsePlay),
    /// Raw model output, not split into sections.
    Generated(String),
}

pub struct Coach<S> {
    service: S,
}

impl Coach<OpenAiClient> {
    /// Build a coach that talks to the configured endpoint.
    pub fn from_config(config: &CoachConfig) -> Self {
        let api_key = config.credential().map(str::to_string);
        Self::new(OpenAiClient::new(&config.base_url, api_key))
    }
}

impl<S: CompletionService> Coach<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Get the locked play for a category. Never touches the service.
    pub fn lookup(&self, category: ObjectionCategory) -> &'static ResponsePlay {
        catalog::lookup(category)
    }

    /// Route a selection to the catalog or the fallback responder.
    pub async fn respond(
        &self,
        selection: &Selection,
        settings: FallbackSettings,
    ) -> Result<Response, CoachError> {
        match selection {
            Selection::Locked(category) => Ok(Response::Locked(self.lookup(*category))),
            Selection::Fallback(request) => {
                self.generate(settings, request).await.map(Response::Generated)
            }
        }
    }

    /// Check the fallback preconditions in order (feature enabled, non-blank
    /// text, credential present) and return the trimmed objection.
    ///
    /// Never touches the network, so callers can use it to decide whether a
    /// request is about to go out.
    pub fn check_fallback<'r>(
        &self,
        settings: FallbackSettings,
        request: &'r FallbackRequest,
    ) -> Result<&'r str, CoachError> {
        if !settings.enabled {
            tracing::debug!("AI fallback requested while disabled");
            return Err(CoachError::FeatureDisabled);
        }

        let objection = request.trimmed_objection().ok_or_else(|| {
            tracing::debug!("AI fallback requested with blank objection");
            CoachError::EmptyInput
        })?;

        if !self.service.credential_present() {
            tracing::debug!("AI fallback requested without an API key");
            return Err(CoachError::MissingCredential);
        }

        Ok(objection)
    }

    /// Generate a response for an objection the catalog doesn't cover.
    ///
    /// Each failed precondition returns before any network call.
    pub async fn generate(
        &self,
        settings: FallbackSettings,
        request: &FallbackRequest,
    ) -> Result<String, CoachError> {
        let objection = self.check_fallback(settings, request)?;

        let prompt = prompt::build(objection, request.tone);
        tracing::debug!(
            model = %request.model,
            tone = %request.tone,
            prompt_chars = prompt.user.len(),
            "Built fallback prompt"
        );

        tracing::info!(model = %request.model, "Requesting AI fallback response");
        match self
            .service
            .complete(prompt.system, &prompt.user, &request.model)
            .await
        {
            Ok(text) => {
                tracing::info!(chars = text.len(), "AI fallback response received");
                Ok(text.trim().to_string())
            }
            Err(e) => {
                tracing::error!("AI fallback request failed: {}", e);
                Err(e.into())
            }
        }
    }

    /// Check that the configured credential is accepted by the service.
    pub async fn test_credential(&self) -> Result<(), CoachError> {
        if !self.service.credential_present() {
            return Err(CoachError::MissingCredential);
        }

        tracing::info!("Testing API credential");
        self.service.ping().await.map_err(|e| {
            tracing::warn!("Credential test failed: {}", e);
            CoachError::from(e)
        })
    }
}
