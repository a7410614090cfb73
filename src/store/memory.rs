use std::collections::HashMap;

use super::{KeyValueStore, StorageKey};
use crate::error::AppResult;

/// In-process store that forgets everything when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<StorageKey, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: StorageKey) -> AppResult<Option<String>> {
        Ok(self.entries.get(&key).cloned())
    }

    fn set(&mut self, key: StorageKey, value: &str) -> AppResult<()> {
        self.entries.insert(key, value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: StorageKey) -> AppResult<()> {
        self.entries.remove(&key);
        Ok(())
    }
}
