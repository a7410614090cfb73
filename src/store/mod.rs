/// Durable local key-value storage for session preferences
///
/// Mirrors a browser's local storage: string keys mapped to string values,
/// read once at startup and written through on every change.
use std::fmt::Display;

use crate::error::AppResult;

pub mod file;
pub mod memory;
pub mod preferences;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use preferences::PreferenceStore;

/// Names of the persisted entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    DarkMode,
    ApiKey,
    SavedMovies,
    /// Raw copy of a `savedMovies` entry that could not be read
    SavedMoviesBackup,
}

impl Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageKey::DarkMode => write!(f, "darkMode"),
            StorageKey::ApiKey => write!(f, "geminiApiKey"),
            StorageKey::SavedMovies => write!(f, "savedMovies"),
            StorageKey::SavedMoviesBackup => write!(f, "savedMovies.backup"),
        }
    }
}

/// Trait for string-valued local stores
pub trait KeyValueStore {
    fn get(&self, key: StorageKey) -> AppResult<Option<String>>;

    fn set(&mut self, key: StorageKey, value: &str) -> AppResult<()>;

    fn remove(&mut self, key: StorageKey) -> AppResult<()>;
}
