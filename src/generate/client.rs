//! HTTP client for the generative-language API

use super::{GenerateContentRequest, GenerateContentResponse, Generation};
use chrono::Utc;
use thiserror::Error;

/// Default API root
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-pro";
/// The key travels in this header, never in the URL
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Generation errors
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Prompt is empty")]
    EmptyPrompt,

    #[error("API key is missing")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
}

impl GenerationConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: String::new(),
        }
    }
}

/// Content generation client
///
/// One request per call: no retry, no queue. A failure is returned as is.
pub struct GenerationClient {
    client: reqwest::Client,
    config: GenerationConfig,
}

impl GenerationClient {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Build the generateContent URL
    fn build_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Generate text for a prompt
    pub async fn generate(&self, prompt: &str) -> Result<Generation, GenerateError> {
        if prompt.trim().is_empty() {
            return Err(GenerateError::EmptyPrompt);
        }
        if self.config.api_key.trim().is_empty() {
            return Err(GenerateError::MissingApiKey);
        }

        tracing::info!(
            "Requesting generation from model {} ({} chars)",
            self.config.model,
            prompt.len()
        );

        let response = self
            .client
            .post(self.build_url())
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| GenerateError::RequestFailed(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!("Failed to read error body: {}", e.without_url());
                    String::new()
                }
            };
            tracing::warn!("Generation failed with status {}", status);
            return Err(GenerateError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::MalformedResponse(e.without_url().to_string()))?;
        let text = body.text()?;

        Ok(Generation {
            model: self.config.model.clone(),
            text,
            generated_at: Utc::now().to_rfc3339(),
        })
    }
}
