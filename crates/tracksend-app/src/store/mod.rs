//! Preference persistence for the destination chooser
//!
//! The chooser only needs a boolean key-value store: one key per
//! destination plus one for the map creation mode. Embedders that manage
//! persistence themselves implement [`PreferenceStore`] directly;
//! [`TomlPreferenceStore`] is the file-backed implementation.

mod toml_file;

pub use toml_file::TomlPreferenceStore;

use std::collections::HashMap;

/// Boolean key-value store the chooser reads prior choices from and writes
/// confirmed choices back to.
///
/// Keys are fixed strings (see [`tracksend_core::Destination::pref_key`]
/// and [`tracksend_core::MapCreationMode::PREF_KEY`]); the chooser never
/// invents keys at runtime. Callers must ensure the chooser is the sole
/// writer of its own keys during a session.
pub trait PreferenceStore {
    /// Read a stored flag, falling back to `default` when the key is absent.
    fn get_bool(&self, key: &str, default: bool) -> bool;

    /// Write a flag under `key`.
    fn set_bool(&mut self, key: &str, value: bool);
}

/// In-memory store for tests and embedders that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, bool>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_absent_key_uses_default() {
        let store = MemoryPreferenceStore::new();
        assert!(store.get_bool("send_to_maps", true));
        assert!(!store.get_bool("send_to_maps", false));
    }

    #[test]
    fn test_memory_store_set_then_get() {
        let mut store = MemoryPreferenceStore::new();
        store.set_bool("pick_existing_map", true);
        assert!(store.get_bool("pick_existing_map", false));

        store.set_bool("pick_existing_map", false);
        assert!(!store.get_bool("pick_existing_map", true));
    }

    #[test]
    fn test_memory_store_len_counts_keys() {
        let mut store = MemoryPreferenceStore::new();
        assert!(store.is_empty());

        store.set_bool("a", true);
        store.set_bool("b", false);
        store.set_bool("a", false);
        assert_eq!(store.len(), 2);
    }
}
