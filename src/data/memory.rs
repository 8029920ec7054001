//! In-memory key-value store for tests and ephemeral sessions

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::store::{KeyValueStore, StorageError};

/// Process-local store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("a", "1").unwrap();
        assert_eq!(other.get("a").unwrap(), Some("1".to_string()));

        other.remove("a").unwrap();
        assert!(store.is_empty());
    }
}
