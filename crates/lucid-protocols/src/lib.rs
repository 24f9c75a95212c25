//! # Lucid Protocols
//!
//! Shared types for the lucid pipeline: the model and language registries,
//! the user settings record, per-request page context, and the request
//! error taxonomy.

pub mod context;
pub mod error;
pub mod language;
pub mod model;
pub mod settings;

pub use context::{ContextPacket, PageText};
pub use error::RequestError;
pub use language::Language;
pub use model::{ModelCategory, ModelId};
pub use settings::{ContextWindow, Settings, SettingsPatch};
