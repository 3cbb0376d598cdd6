//! Text-completion seam over the generative model provider.

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use rig::{client::CompletionClient, completion::Prompt, providers::gemini};

use crate::config::{GenerationConfig, GEMINI_PROVIDER_ID};
use crate::error::AiError;

// ============================================================================
// Generative Model Trait
// ============================================================================

/// Sends one prompt and returns the raw text reply.
#[async_trait]
pub trait GenerativeModelTrait: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, AiError>;
}

// ============================================================================
// Gemini Implementation
// ============================================================================

/// Gemini through rig-core, bounded by the configured timeout.
pub struct GeminiModel {
    config: GenerationConfig,
}

impl GeminiModel {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    async fn prompt_once(&self, key: &str, prompt: &str) -> Result<String, AiError> {
        let client: gemini::Client<HttpClient> =
            gemini::Client::new(key).map_err(|e| AiError::Provider(e.to_string()))?;
        client
            .agent(&self.config.model_id)
            .build()
            .prompt(prompt)
            .await
            .map_err(|e| AiError::Provider(e.to_string()))
    }
}

#[async_trait]
impl GenerativeModelTrait for GeminiModel {
    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| AiError::MissingApiKey(GEMINI_PROVIDER_ID.to_string()))?;

        debug!(
            "Requesting completion from {} model {}",
            GEMINI_PROVIDER_ID, self.config.model_id
        );

        tokio::time::timeout(self.config.timeout, self.prompt_once(key, prompt))
            .await
            .map_err(|_| AiError::Timeout(self.config.timeout.as_secs()))?
    }
}

// ============================================================================
// Fake Model for Testing
// ============================================================================

/// A deterministic model for tests: a fixed reply, or always failing.
pub struct FakeModel {
    /// Reply to return, or None to fail every call.
    pub reply: Option<String>,
}

impl FakeModel {
    pub fn with_reply(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { reply: None }
    }
}

#[async_trait]
impl GenerativeModelTrait for FakeModel {
    async fn complete(&self, _prompt: &str) -> Result<String, AiError> {
        self.reply
            .clone()
            .ok_or_else(|| AiError::provider("upstream unreachable"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn gemini_without_key_reports_missing_key() {
        let model = GeminiModel::new(GenerationConfig::default());
        let err = model.complete("hello").await.unwrap_err();
        assert!(matches!(err, AiError::MissingApiKey(_)));
    }

    #[tokio::test]
    async fn blank_key_counts_as_missing() {
        let model = GeminiModel::new(GenerationConfig {
            api_key: Some("   ".to_string()),
            ..Default::default()
        });
        let err = model.complete("hello").await.unwrap_err();
        assert_eq!(err.code(), "MISSING_API_KEY");
    }

    #[tokio::test]
    async fn fake_model_replies_or_fails() {
        assert_eq!(
            FakeModel::with_reply("{}").complete("x").await.unwrap(),
            "{}"
        );
        assert!(FakeModel::failing().complete("x").await.is_err());
    }
}
