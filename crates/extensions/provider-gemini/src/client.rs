//! Gemini API client.

use std::pin::Pin;

use futures::Stream;
use reqwest::{Client, StatusCode};
use tracing::debug;

use lucid_protocols::error::RequestError;
use lucid_protocols::model::ModelId;

use crate::types::*;

/// Production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Stream of text chunks from the streaming endpoint.
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String, RequestError>> + Send>>;

/// Gemini API client.
///
/// Holds no credential: the key is resolved per request (user key or shared
/// default) by the caller and passed into each call.
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client against the production endpoint.
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(300))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the endpoint, mainly for tests.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Generate content (non-streaming).
    pub async fn generate(
        &self,
        api_key: &str,
        model: ModelId,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, RequestError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, api_key
        );

        debug!("Gemini generate: model={}", model);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            RequestError::api(status.as_u16(), format!("failed to parse response: {e}"))
        })
    }

    /// Generate content (streaming).
    ///
    /// The wire format is a JSON array of response documents, not
    /// line-delimited events, so the default path buffers the whole body
    /// and parses it once, yielding each candidate text as one chunk. The
    /// `incremental-stream` feature swaps in a best-effort scanner that
    /// yields text as it appears in the growing buffer.
    pub async fn stream_generate(
        &self,
        api_key: &str,
        model: ModelId,
        request: GenerateContentRequest,
    ) -> Result<TextStream, RequestError> {
        let url = format!(
            "{}/models/{}:streamGenerateContent?key={}",
            self.base_url, model, api_key
        );

        debug!("Gemini stream generate: model={}", model);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| RequestError::Network(e.to_string()))?;
            return Err(api_error(status, &body));
        }

        #[cfg(feature = "incremental-stream")]
        {
            Ok(crate::incremental::extract_stream(response))
        }
        #[cfg(not(feature = "incremental-stream"))]
        {
            Ok(buffered_stream(response))
        }
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Compose an `Api` error from a non-2xx response.
///
/// Prefers the provider's own error message; falls back to the raw body,
/// then to the HTTP reason phrase.
fn api_error(status: StatusCode, body: &str) -> RequestError {
    let message = serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                trimmed.to_string()
            }
        });
    RequestError::api(status.as_u16(), message)
}

/// Buffer the whole body, parse once, yield candidate texts in order.
#[cfg_attr(feature = "incremental-stream", allow(dead_code))]
fn buffered_stream(response: reqwest::Response) -> TextStream {
    let stream = async_stream::stream! {
        use futures::StreamExt;

        let mut bytes_stream = response.bytes_stream();
        let mut buffer = Vec::new();

        while let Some(chunk) = bytes_stream.next().await {
            match chunk {
                Ok(bytes) => buffer.extend_from_slice(&bytes),
                Err(e) => {
                    yield Err(RequestError::Stream(e.to_string()));
                    return;
                }
            }
        }

        let body = String::from_utf8_lossy(&buffer);
        match parse_stream_body(&body) {
            Ok(texts) => {
                for text in texts {
                    yield Ok(text);
                }
            }
            Err(e) => yield Err(e),
        }
    };

    Box::pin(stream)
}

/// Parse a complete streaming body: a JSON array of response documents, or
/// a single document.
#[cfg_attr(feature = "incremental-stream", allow(dead_code))]
fn parse_stream_body(body: &str) -> Result<Vec<String>, RequestError> {
    let documents = match serde_json::from_str::<Vec<GenerateContentResponse>>(body) {
        Ok(documents) => documents,
        Err(_) => {
            let single: GenerateContentResponse = serde_json::from_str(body)
                .map_err(|e| RequestError::Stream(format!("failed to parse stream body: {e}")))?;
            vec![single]
        }
    };

    Ok(documents
        .iter()
        .filter_map(|document| document.first_text().map(str::to_string))
        .collect())
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
