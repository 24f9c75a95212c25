//! Settings storage backends.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use lucid_protocols::Settings;

use crate::error::SettingsError;

/// Key-value persistence for the settings record.
///
/// Implementations hold one flat record. The cache in front of a store is
/// the only reader on the hot path; `save` is called by the settings UI.
pub trait SettingsStore: Send + Sync {
    fn load(&self) -> Result<Settings, SettingsError>;
    fn save(&self, settings: &Settings) -> Result<(), SettingsError>;
}

/// TOML file-backed store.
///
/// A missing file is not an error: first launch has no settings yet, so
/// `load` returns the default record.
pub struct TomlFileStore {
    path: PathBuf,
}

impl TomlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for TomlFileStore {
    fn load(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(&self.path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(settings)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory store for tests and embedding hosts with their own persistence.
///
/// `fail_loads` makes every `load` fail, for exercising the cache's
/// absorb-and-default behavior.
pub struct MemoryStore {
    settings: Mutex<Settings>,
    fail_loads: AtomicBool,
}

impl MemoryStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Mutex::new(settings),
            fail_loads: AtomicBool::new(false),
        }
    }

    /// A store whose every `load` fails.
    pub fn failing() -> Self {
        let store = Self::new(Settings::default());
        store.fail_loads.store(true, Ordering::Relaxed);
        store
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Settings, SettingsError> {
        if self.fail_loads.load(Ordering::Relaxed) {
            return Err(SettingsError::Unavailable("simulated failure".to_string()));
        }
        Ok(self.settings.lock().clone())
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        *self.settings.lock() = settings.clone();
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
