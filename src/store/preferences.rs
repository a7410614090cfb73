use super::{KeyValueStore, StorageKey};
use crate::models::{BookmarkSet, Theme};

/// Typed access to the three persisted session values
///
/// Reads fall back to a default when an entry is missing or unreadable and
/// writes are logged on failure. Neither surfaces an error to the caller.
pub struct PreferenceStore<S> {
    store: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn load_theme(&self) -> Theme {
        self.read(StorageKey::DarkMode)
            .map(|flag| Theme::from_flag(&flag))
            .unwrap_or_default()
    }

    pub fn save_theme(&mut self, theme: Theme) {
        self.write(StorageKey::DarkMode, theme.as_flag());
    }

    /// The stored API key, if any; an empty entry counts as absent
    pub fn load_api_key(&self) -> Option<String> {
        self.read(StorageKey::ApiKey).filter(|key| !key.is_empty())
    }

    pub fn save_api_key(&mut self, api_key: &str) {
        self.write(StorageKey::ApiKey, api_key);
    }

    pub fn clear_api_key(&mut self) {
        if let Err(e) = self.store.remove(StorageKey::ApiKey) {
            tracing::error!(error = %e, key = %StorageKey::ApiKey, "Failed to remove stored value");
        }
    }

    /// Reads the saved movies
    ///
    /// An unreadable entry is copied to `savedMovies.backup` before starting
    /// empty, so the next write-back cannot destroy the only copy.
    pub fn load_bookmarks(&mut self) -> BookmarkSet {
        let Some(json) = self.read(StorageKey::SavedMovies) else {
            return BookmarkSet::new();
        };

        match serde_json::from_str::<BookmarkSet>(&json) {
            Ok(bookmarks) => bookmarks,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    backup = %StorageKey::SavedMoviesBackup,
                    "Stored bookmarks are unreadable, keeping a backup and starting empty"
                );
                self.write(StorageKey::SavedMoviesBackup, &json);
                BookmarkSet::new()
            }
        }
    }

    pub fn save_bookmarks(&mut self, bookmarks: &BookmarkSet) {
        match serde_json::to_string(bookmarks) {
            Ok(json) => self.write(StorageKey::SavedMovies, &json),
            Err(e) => tracing::error!(error = %e, "Bookmark serialization error"),
        }
    }

    fn read(&self, key: StorageKey) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "Failed to read stored value");
                None
            }
        }
    }

    fn write(&mut self, key: StorageKey, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            tracing::error!(error = %e, key = %key, "Failed to persist value");
        }
    }
}
