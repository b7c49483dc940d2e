//! Generative-language API wrapper
//!
//! Sends a free-text prompt to a `generateContent` endpoint and returns the
//! generated text.
//!
//! # Example
//!
//! ```no_run
//! use picks::generate::{GenerationClient, GenerationConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GenerationClient::new(GenerationConfig::new("API_KEY"));
//!     let generation = client.generate("Write a tagline for NFL picks").await?;
//!     println!("{}", generation.text);
//!     Ok(())
//! }
//! ```

mod client;

pub use client::{GenerateError, GenerationClient, GenerationConfig};

use serde::{Deserialize, Serialize};

/// Generated text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generation {
    pub model: String,
    pub text: String,
    pub generated_at: String,
}

/// Request body: `{"contents":[{"parts":[{"text": ...}]}]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: None,
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default, rename = "finishReason")]
    pub finish_reason: Option<String>,
}

/// Response body, only the fields read here
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts joined in order
    pub fn text(&self) -> Result<String, GenerateError> {
        let candidate = self
            .candidates
            .first()
            .ok_or_else(|| GenerateError::MalformedResponse("No candidates returned".into()))?;

        let content = candidate.content.as_ref().ok_or_else(|| {
            GenerateError::MalformedResponse(format!(
                "Candidate has no content (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            ))
        })?;

        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.is_empty() {
            return Err(GenerateError::MalformedResponse("Missing 'text' content".into()));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from_prompt("hi")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "contents": [{ "parts": [{ "text": "hi" }] }] })
        );
    }

    #[test]
    fn test_response_text() {
        let body: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": { "role": "model", "parts": [{ "text": "Sharp " }, { "text": "picks." }] },
                    "finishReason": "STOP"
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(body.text().unwrap(), "Sharp picks.");
    }

    #[test]
    fn test_response_without_candidates() {
        let body: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(body.text(), Err(GenerateError::MalformedResponse(_))));
    }

    #[test]
    fn test_blocked_candidate() {
        let body: GenerateContentResponse =
            serde_json::from_str(r#"{ "candidates": [{ "finishReason": "SAFETY" }] }"#).unwrap();
        let err = body.text().unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }
}
