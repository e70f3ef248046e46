//! Flat key-value stores for per-block UI flags.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Error returned by a persisted store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access store file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store file '{}' is not a JSON object of booleans: {source}", path.display())]
    Serde {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A string-keyed store of boolean flags.
///
/// The only contract is get, set and delete by exact key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<bool>, StoreError>;

    fn set(&mut self, key: &str, value: bool) -> Result<(), StoreError>;

    /// Deletes `key`, returning the value it held.
    fn remove(&mut self, key: &str) -> Result<Option<bool>, StoreError>;

    /// Moves the value at `from` to `to`, returning the moved value.
    ///
    /// Nothing is written when `from` is absent. If writing `to` fails the
    /// value is put back under `from`. Stores that can commit both changes
    /// at once should override this.
    fn rename(&mut self, from: &str, to: &str) -> Result<Option<bool>, StoreError> {
        let Some(value) = self.remove(from)? else {
            return Ok(None);
        };
        if let Err(err) = self.set(to, value) {
            if let Err(restore) = self.set(from, value) {
                tracing::warn!(key = %from, error = %restore, "failed to restore moved value");
            }
            return Err(err);
        }
        Ok(Some(value))
    }
}

/// An in-memory store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<bool>, StoreError> {
        Ok(self.entries.get(key).copied())
    }

    fn set(&mut self, key: &str, value: bool) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<Option<bool>, StoreError> {
        Ok(self.entries.remove(key))
    }
}

/// A store persisted as a JSON object on disk.
///
/// Every write goes to a temporary file in the same directory that is then
/// renamed over the store, so the file on disk is always either the old or
/// the new complete object.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, bool>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = match std::fs::read_to_string(&path) {
            Ok(source) if source.trim().is_empty() => BTreeMap::new(),
            Ok(source) => serde_json::from_str(&source).map_err(|source| StoreError::Serde {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &BTreeMap<String, bool> {
        &self.entries
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.entries).map_err(|source| {
            StoreError::Serde {
                path: self.path.clone(),
                source,
            }
        })?;
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(json.as_bytes()).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&self.path).map_err(|err| io_err(err.error))?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<bool>, StoreError> {
        Ok(self.entries.get(key).copied())
    }

    fn set(&mut self, key: &str, value: bool) -> Result<(), StoreError> {
        let previous = self.entries.insert(key.to_string(), value);
        if let Err(err) = self.persist() {
            match previous {
                Some(v) => self.entries.insert(key.to_string(), v),
                None => self.entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<Option<bool>, StoreError> {
        let removed = self.entries.remove(key);
        if let Some(value) = removed {
            if let Err(err) = self.persist() {
                self.entries.insert(key.to_string(), value);
                return Err(err);
            }
        }
        Ok(removed)
    }

    /// Moves the value with a single file replacement.
    fn rename(&mut self, from: &str, to: &str) -> Result<Option<bool>, StoreError> {
        let Some(value) = self.entries.remove(from) else {
            return Ok(None);
        };
        let displaced = self.entries.insert(to.to_string(), value);
        if let Err(err) = self.persist() {
            match displaced {
                Some(v) => self.entries.insert(to.to_string(), v),
                None => self.entries.remove(to),
            };
            self.entries.insert(from.to_string(), value);
            return Err(err);
        }
        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_get_set_remove() {
        let mut store = MemoryStore::new();
        store.set("a/b/c", true).unwrap();
        assert_eq!(store.get("a/b/c").unwrap(), Some(true));
        assert_eq!(store.remove("a/b/c").unwrap(), Some(true));
        assert_eq!(store.remove("a/b/c").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn file_store_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ui-state.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("p1/b1/codeCollapsed", true).unwrap();
        store.set("p1/b1/outputCollapsed", false).unwrap();
        store.remove("p1/b1/outputCollapsed").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("p1/b1/codeCollapsed").unwrap(), Some(true));
        assert_eq!(reopened.get("p1/b1/outputCollapsed").unwrap(), None);
    }

    #[test]
    fn file_store_rejects_non_boolean_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"k": "yes"}"#).unwrap();
        assert!(matches!(
            JsonFileStore::open(&path),
            Err(StoreError::Serde { .. })
        ));
    }

    #[test]
    fn failed_write_leaves_memory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be written as a file.
        let mut store = JsonFileStore::open(dir.path()).unwrap_or_else(|_| JsonFileStore {
            path: dir.path().to_path_buf(),
            entries: BTreeMap::new(),
        });
        assert!(store.set("k", true).is_err());
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn writes_leave_no_temporary_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ui-state.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("a/b/codeCollapsed", true).unwrap();
        store.rename("a/b/codeCollapsed", "c/b/codeCollapsed").unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("ui-state.json")]);
    }

    #[test]
    fn file_store_rename_commits_both_keys_at_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ui-state.json");
        std::fs::write(&path, r#"{"old/b1/outputCollapsed": false}"#).unwrap();

        let mut store = JsonFileStore::open(&path).unwrap();
        let moved = store
            .rename("old/b1/outputCollapsed", "new/b1/outputCollapsed")
            .unwrap();
        assert_eq!(moved, Some(false));
        assert_eq!(store.rename("missing", "elsewhere").unwrap(), None);

        let on_disk = JsonFileStore::open(&path).unwrap();
        assert_eq!(
            on_disk.entries(),
            &BTreeMap::from([("new/b1/outputCollapsed".to_string(), false)])
        );
    }

    #[test]
    fn failed_rename_keeps_old_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore {
            path: dir.path().to_path_buf(),
            entries: BTreeMap::from([("old/b/codeCollapsed".to_string(), true)]),
        };
        assert!(store.rename("old/b/codeCollapsed", "new/b/codeCollapsed").is_err());
        assert_eq!(store.get("old/b/codeCollapsed").unwrap(), Some(true));
        assert_eq!(store.get("new/b/codeCollapsed").unwrap(), None);
    }
}
