//! Gemini API wire types.

use serde::{Deserialize, Serialize};

/// A text part of a content block.
///
/// Responses may carry non-text parts; those deserialize with an empty
/// `text` and are skipped during extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// Content in a request or a candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Generate content request envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// The single-prompt envelope this product sends:
    /// `{"contents":[{"parts":[{"text":<prompt>}]}]}`.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
                role: None,
            }],
        }
    }
}

/// Generate content response document.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// The first candidate's first non-empty text part.
    pub fn first_text(&self) -> Option<&str> {
        let text = self
            .candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_str();
        if text.is_empty() { None } else { Some(text) }
    }
}

/// Candidate response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Error response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorDetail,
}

/// Error detail.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: Option<i32>,
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
