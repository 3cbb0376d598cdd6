//! Content generation error types.

use thiserror::Error;

/// Failures talking to, or making sense of, the generative model.
///
/// These never reach HTTP callers: the content generator logs them and
/// substitutes fallback material.
#[derive(Debug, Error)]
pub enum AiError {
    /// No API key configured.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// Provider error (from rig-core or the API).
    #[error("Provider error: {0}")]
    Provider(String),

    /// The call did not finish within the configured bound.
    #[error("Generation timed out after {0} seconds")]
    Timeout(u64),

    /// The reply could not be turned into the requested material.
    #[error("Invalid model response: {0}")]
    InvalidResponse(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AiError {
    /// Create a new provider error.
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Create a new invalid response error.
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            AiError::MissingApiKey(_) => "MISSING_API_KEY",
            AiError::Provider(_) => "PROVIDER_ERROR",
            AiError::Timeout(_) => "TIMEOUT",
            AiError::InvalidResponse(_) => "INVALID_RESPONSE",
            AiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
