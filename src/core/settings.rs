//! View settings persistence.
//!
//! Settings live in a string key-value store. The browser build uses
//! `localStorage`; tests use an in-memory map. Values that are missing or
//! not a non-negative integer fall back to their defaults, one key at a time.

use crate::config::{DEFAULT_DEPTH, DEFAULT_WIDTH, storage_keys};
use crate::core::error::SettingsError;
use crate::models::ViewSettings;
use crate::utils::dom;

/// Minimal get/set interface over persistent string storage.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// Browser `localStorage` backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl SettingsStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let storage = dom::local_storage().ok_or(SettingsError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| SettingsError::SaveFailed)
    }
}

/// In-memory backend.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read a non-negative integer setting, falling back to `default`.
fn read_u32(store: &impl SettingsStore, key: &str, default: u32) -> u32 {
    store
        .get(key)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Load the persisted view settings.
pub fn load_settings(store: &impl SettingsStore) -> ViewSettings {
    ViewSettings::new(
        read_u32(store, storage_keys::DEPTH, DEFAULT_DEPTH),
        read_u32(store, storage_keys::WIDTH, DEFAULT_WIDTH),
    )
}

/// Persist a new depth.
pub fn save_depth(store: &impl SettingsStore, depth: u32) -> Result<(), SettingsError> {
    store.set(storage_keys::DEPTH, &depth.to_string())
}

/// Persist a new width.
pub fn save_width(store: &impl SettingsStore, width: u32) -> Result<(), SettingsError> {
    store.set(storage_keys::WIDTH, &width.to_string())
}
