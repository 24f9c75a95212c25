//! Settings cache.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::warn;

use lucid_protocols::{Settings, SettingsPatch};

use crate::store::SettingsStore;

/// A single cached copy of the settings record, loaded lazily from a store.
///
/// Store failures are absorbed: the default record is cached and returned
/// instead, so a broken settings file never blocks a request. The settings
/// UI calls [`update`](SettingsCache::update) after persisting a change;
/// writers in other processes stay invisible until
/// [`invalidate`](SettingsCache::invalidate).
pub struct SettingsCache {
    store: Arc<dyn SettingsStore>,
    cached: RwLock<Option<Settings>>,
}

impl SettingsCache {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self {
            store,
            cached: RwLock::new(None),
        }
    }

    /// The cached settings, loading them on first access.
    pub fn get(&self) -> Settings {
        if let Some(settings) = self.cached.read().clone() {
            return settings;
        }

        let loaded = match self.store.load() {
            Ok(settings) => settings,
            Err(err) => {
                warn!("failed to load settings, falling back to defaults: {err}");
                Settings::default()
            }
        };

        let mut guard = self.cached.write();
        // A concurrent get() may have filled the cache while we loaded.
        let settings = guard.get_or_insert(loaded);
        settings.clone()
    }

    /// Merge a patch into the cached record.
    ///
    /// The caller has already written through to the store. If nothing is
    /// cached yet there is nothing to merge; the next `get` loads the
    /// freshly-saved record.
    pub fn update(&self, patch: SettingsPatch) {
        let mut guard = self.cached.write();
        if let Some(settings) = guard.as_mut() {
            patch.apply(settings);
        }
    }

    /// Drop the cached record so the next `get` reloads from the store.
    pub fn invalidate(&self) {
        *self.cached.write() = None;
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
