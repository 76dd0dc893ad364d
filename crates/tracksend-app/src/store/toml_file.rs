//! TOML-backed preference store
//!
//! A flat table of booleans at a caller-supplied path. Loaded once on open;
//! each write flushes the whole table back with an atomic temp-file +
//! rename. Write failures are logged and swallowed: the store's contract is
//! fail-silent, and the chooser keeps working from its in-memory copy.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracksend_core::prelude::*;

use super::PreferenceStore;

/// File-backed [`PreferenceStore`].
#[derive(Debug, Clone)]
pub struct TomlPreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, bool>,
}

impl TomlPreferenceStore {
    /// Open the store at `path`, loading any existing table.
    ///
    /// A missing, unreadable, or unparsable file is not an error: the store
    /// starts empty and the chooser seeds from defaults.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = load_values(&path);
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the full table to disk (temp file + rename).
    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::config(format!("Failed to create preferences dir: {}", e))
                })?;
            }
        }

        let content = toml::to_string_pretty(&self.values)
            .map_err(|e| Error::config(format!("Failed to serialize preferences: {}", e)))?;

        let temp_path = self.temp_path();
        std::fs::write(&temp_path, content)
            .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("prefs.toml");
        self.path.with_file_name(format!(".{}.tmp", name))
    }
}

impl PreferenceStore for TomlPreferenceStore {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), value);
        if let Err(e) = self.flush() {
            warn!("Failed to persist preference {:?}: {}", key, e);
        }
    }
}

/// Load the boolean table from disk, falling back to empty.
fn load_values(path: &Path) -> BTreeMap<String, bool> {
    if !path.exists() {
        debug!("No preferences file at {:?}, starting empty", path);
        return BTreeMap::new();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(values) => {
                debug!("Loaded preferences from {:?}", path);
                values
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                BTreeMap::new()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            BTreeMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_missing_file_starts_empty() {
        let temp = tempdir().unwrap();
        let store = TomlPreferenceStore::open(temp.path().join("prefs.toml"));

        assert!(store.get_bool("send_to_maps", true));
        assert!(!store.get_bool("send_to_maps", false));
    }

    #[test]
    fn test_open_corrupt_file_starts_empty() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("prefs.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        let store = TomlPreferenceStore::open(&path);
        assert!(store.get_bool("send_to_docs", true));
    }

    #[test]
    fn test_set_writes_through_to_disk() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("prefs.toml");

        let mut store = TomlPreferenceStore::open(&path);
        store.set_bool("send_to_maps", true);
        store.set_bool("pick_existing_map", false);

        let reopened = TomlPreferenceStore::open(&path);
        assert!(reopened.get_bool("send_to_maps", false));
        assert!(!reopened.get_bool("pick_existing_map", true));
    }

    #[test]
    fn test_set_creates_parent_directory() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("prefs.toml");

        let mut store = TomlPreferenceStore::open(&path);
        store.set_bool("send_to_docs", false);

        assert!(path.exists());
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("prefs.toml");

        let mut store = TomlPreferenceStore::open(&path);
        store.set_bool("send_to_maps", true);

        assert!(!temp.path().join(".prefs.toml.tmp").exists());
    }

    #[test]
    fn test_file_is_flat_boolean_table() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("prefs.toml");

        let mut store = TomlPreferenceStore::open(&path);
        store.set_bool("send_to_fusion_tables", true);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("send_to_fusion_tables = true"));
    }
}
