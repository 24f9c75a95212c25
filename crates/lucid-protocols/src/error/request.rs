//! Request pipeline errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error(
        "Missing Gemini API key: set your own key in the settings or configure a shared default key"
    )]
    MissingCredential,

    #[error("Gemini API error: {status} {message}")]
    Api { status: u16, message: String },

    #[error("No response from Gemini API")]
    EmptyResponse,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Stream error: {0}")]
    Stream(String),
}

impl RequestError {
    /// Build an `Api` error from a non-2xx provider response.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        RequestError::Api {
            status,
            message: message.into(),
        }
    }

    /// True for responses that indicate a bad or missing credential.
    /// Presentation layers use this to point the user at key setup.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, RequestError::Api { status: 401 | 403, .. })
    }

    /// True for rate-limit or quota-flavored provider errors.
    pub fn is_quota_error(&self) -> bool {
        match self {
            RequestError::Api { status: 429, .. } => true,
            RequestError::Api { message, .. } => {
                let lower = message.to_ascii_lowercase();
                lower.contains("quota") || lower.contains("rate limit")
            }
            _ => false,
        }
    }
}
