//! # Lucid Core
//!
//! The request pipeline: given a selection (optionally with page context),
//! build the instruction prompt, resolve the credential and model from
//! cached settings, call the Gemini API, and hand the rewritten text back.

pub mod cache;
pub mod context;
pub mod pipeline;
pub mod prompt;

pub use cache::ResultCache;
pub use context::gather_context;
pub use pipeline::{Simplifier, SimplifyOptions, SimplifyResult};
pub use prompt::{build_prompt, PromptInput};
