//! # Storage Module
//!
//! A small key-value persistence port plus its implementations.
//!
//! ## Key Types:
//! - `KeyValueStore` - the capability trait the rest of the app depends on
//! - `JsonFileStore` - one JSON file per key under the platform data dir
//! - `NullStore` - no-op store for contexts without a usable data dir
//! - `MemoryStore` - in-memory store used by tests and fixtures
//!
//! ## Purpose:
//! All persistence goes through `load_json`/`save_json`, which never fail:
//! a missing key, an unreadable store or corrupt JSON falls back to a
//! caller-supplied default, and writes silently no-op when the store is
//! unavailable. The UI never surfaces storage errors.

pub mod migration;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Persisted state keys.
pub mod keys {
    /// Full supplement item list (current record shape)
    pub const SUPPLEMENTS: &str = "friday:supplements:v2";
    /// User-defined presets
    pub const CUSTOM_PRESETS: &str = "friday_custom_presets";
    /// Pre-v2 item list, checked once at load time for migration
    pub const SUPPLEMENTS_LEGACY: &str = "friday_supplements";
}

/// Durable client-local key-value storage.
pub trait KeyValueStore {
    /// Raw value for `key`, or `None` when absent/unreadable.
    fn get(&self, key: &str) -> Option<String>;
    /// Write `value` under `key`; failures are swallowed (logged only).
    fn set(&self, key: &str, value: &str);
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("no usable data directory on this platform")]
    NoDataDir,
    #[error("could not create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// File-backed store: each key becomes one JSON file in the app data dir.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open the store in the platform-specific data directory.
    pub fn open() -> Result<Self, StorageError> {
        let dirs = ProjectDirs::from("com", "friday", "friday").ok_or(StorageError::NoDataDir)?;
        Self::with_dir(dirs.data_dir().to_path_buf())
    }

    /// Open the store rooted at an explicit directory.
    pub fn with_dir(dir: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&dir).map_err(|source| StorageError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Keys may contain characters that are not filename-safe (":"), so
    /// anything non-alphanumeric becomes `_` before hitting the filesystem.
    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let path = self.path_for(key);
        if let Err(e) = fs::write(&path, value) {
            warn!("💾 Failed to write {}: {}", path.display(), e);
        }
    }
}

/// Store for headless/degraded contexts: reads nothing, writes nowhere.
pub struct NullStore;

impl KeyValueStore for NullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}
}

/// In-memory store, used by tests to exercise persistence without disk.
#[derive(Default)]
pub struct MemoryStore {
    cells: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cells.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.cells.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

/// Read and decode a value, returning `fallback` on any failure.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str, fallback: T) -> T {
    match store.get(key) {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("💾 Discarding corrupt value under '{}': {}", key, e);
                fallback
            }
        },
        None => fallback,
    }
}

/// Encode and write a value; a failed encode is logged and dropped.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, &raw),
        Err(e) => warn!("💾 Could not serialize value for '{}': {}", key, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{SupplementItem, SupplementPreset, TimingSlot};

    fn sample_items() -> Vec<SupplementItem> {
        let preset = SupplementPreset {
            key: "omega3".into(),
            display_name: "Omega-3".into(),
            icon: "omega3".into(),
            timing: vec![TimingSlot::Morning],
            benefits: "Essential fatty acids.".into(),
            default_dosage_per_day: 1,
        };
        vec![SupplementItem::from_preset(
            &preset,
            "omega3-1700000000000".into(),
            "2026-02-20".into(),
        )]
    }

    #[test]
    fn file_store_round_trips_an_item_list() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::with_dir(tmp.path().to_path_buf()).unwrap();

        let items = sample_items();
        save_json(&store, keys::SUPPLEMENTS, &items);
        let loaded: Vec<SupplementItem> = load_json(&store, keys::SUPPLEMENTS, Vec::new());

        assert_eq!(loaded, items);
    }

    #[test]
    fn missing_key_returns_fallback() {
        let store = MemoryStore::new();
        let loaded: Vec<SupplementItem> = load_json(&store, keys::SUPPLEMENTS, Vec::new());
        assert!(loaded.is_empty());
    }

    #[test]
    fn corrupt_json_returns_fallback() {
        let store = MemoryStore::new();
        store.set(keys::SUPPLEMENTS, "{not json");
        let loaded: Vec<SupplementItem> = load_json(&store, keys::SUPPLEMENTS, sample_items());
        assert_eq!(loaded, sample_items());
    }

    #[test]
    fn null_store_is_a_silent_no_op() {
        let store = NullStore;
        save_json(&store, keys::SUPPLEMENTS, &sample_items());
        let loaded: Vec<SupplementItem> = load_json(&store, keys::SUPPLEMENTS, Vec::new());
        assert!(loaded.is_empty());
    }

    #[test]
    fn keys_with_separators_become_valid_filenames() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::with_dir(tmp.path().to_path_buf()).unwrap();
        store.set(keys::SUPPLEMENTS, "[]");
        assert!(tmp.path().join("friday_supplements_v2.json").exists());
    }
}
