//! # Lucid Config
//!
//! Settings persistence and caching: the [`SettingsStore`] trait with
//! file-backed and in-memory implementations, and the [`SettingsCache`]
//! that fronts a store with a single lazily-loaded copy.

pub mod cache;
pub mod error;
pub mod store;

pub use cache::SettingsCache;
pub use error::SettingsError;
pub use store::{MemoryStore, SettingsStore, TomlFileStore};
