use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageKey};
use crate::error::{AppError, AppResult};

const STORAGE_FILE: &str = "storage.json";

/// JSON-file backed store
///
/// The whole file is read once on open. Every write rewrites it through a
/// temporary sibling file followed by a rename, so a crash mid-write leaves
/// the previous contents intact. A failed write leaves memory unchanged too.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens (or creates) the store inside `data_dir`
    pub fn open(data_dir: &Path) -> AppResult<Self> {
        fs::create_dir_all(data_dir)?;
        let path = data_dir.join(STORAGE_FILE);

        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                tracing::error!(error = %e, path = %path.display(), "Unreadable storage file");
                AppError::Internal(format!(
                    "Storage file {} is not a JSON object: {}",
                    path.display(),
                    e
                ))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(
            path = %path.display(),
            entries = entries.len(),
            "Opened local storage"
        );

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `entries` to disk and only then adopts them as the current state
    fn commit(&mut self, entries: BTreeMap<String, String>) -> AppResult<()> {
        let json = serde_json::to_string_pretty(&entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        self.entries = entries;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: StorageKey) -> AppResult<Option<String>> {
        Ok(self.entries.get(&key.to_string()).cloned())
    }

    fn set(&mut self, key: StorageKey, value: &str) -> AppResult<()> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.to_string());
        self.commit(entries)
    }

    fn remove(&mut self, key: StorageKey) -> AppResult<()> {
        let mut entries = self.entries.clone();
        if entries.remove(&key.to_string()).is_some() {
            self.commit(entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get(StorageKey::DarkMode).unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_write_through_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = FileStore::open(dir.path()).unwrap();
            store.set(StorageKey::DarkMode, "true").unwrap();
            store.set(StorageKey::ApiKey, "secret").unwrap();
        }

        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get(StorageKey::DarkMode).unwrap(), Some("true".to_string()));
        assert_eq!(store.get(StorageKey::ApiKey).unwrap(), Some("secret".to_string()));
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set(StorageKey::ApiKey, "secret").unwrap();
        store.remove(StorageKey::ApiKey).unwrap();

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get(StorageKey::ApiKey).unwrap(), None);
    }

    #[test]
    fn test_entries_use_local_storage_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set(StorageKey::SavedMovies, "[]").unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["savedMovies"], "[]");
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set(StorageKey::DarkMode, "false").unwrap();

        // A directory in the temp file's place makes every write fail
        let tmp = store.path().with_extension("json.tmp");
        fs::create_dir(&tmp).unwrap();

        assert!(store.set(StorageKey::DarkMode, "true").is_err());
        assert_eq!(store.get(StorageKey::DarkMode).unwrap(), Some("false".to_string()));

        assert!(store.remove(StorageKey::DarkMode).is_err());
        assert_eq!(store.get(StorageKey::DarkMode).unwrap(), Some("false".to_string()));

        fs::remove_dir(&tmp).unwrap();
        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get(StorageKey::DarkMode).unwrap(), Some("false".to_string()));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STORAGE_FILE), "not json").unwrap();
        assert!(matches!(
            FileStore::open(dir.path()),
            Err(AppError::Internal(_))
        ));
    }
}
