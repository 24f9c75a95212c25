//! # Lucid Provider - Gemini
//!
//! HTTP client for the Gemini `generateContent` API, covering the
//! non-streaming and streaming request paths.

mod client;
#[cfg(feature = "incremental-stream")]
mod incremental;
mod types;

pub use client::{GeminiClient, TextStream, DEFAULT_BASE_URL};
pub use types::*;
