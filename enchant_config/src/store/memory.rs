//! In-memory store backend.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::ConfigStore;
use crate::error::StoreError;
use crate::key::ConfigKey;

/// Store backend keeping values in process memory.
///
/// Cloning is cheap and shares the underlying map, so a test and the code
/// under test observe the same state. Operations never fail.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<ConfigKey, String>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryStore {
    fn read(&self, key: ConfigKey) -> Result<Option<String>, StoreError> {
        Ok(self.values.lock().get(&key).cloned())
    }

    fn write(&self, key: ConfigKey, value: &str) -> Result<(), StoreError> {
        self.values.lock().insert(key, value.to_owned());
        Ok(())
    }

    fn clear(&self, key: ConfigKey) -> Result<(), StoreError> {
        self.values.lock().remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigStore, MemoryStore};
    use crate::key::ConfigKey;

    #[test]
    fn clones_share_state() {
        let store = MemoryStore::new();
        let alias = store.clone();
        store
            .write(ConfigKey::HOME_DIR, "/home/shared")
            .expect("write");
        assert_eq!(
            alias.read(ConfigKey::HOME_DIR).expect("read").as_deref(),
            Some("/home/shared"),
        );
    }

    #[test]
    fn clearing_an_absent_value_is_a_noop() {
        let store = MemoryStore::new();
        store.clear(ConfigKey::MACHINE_DATA_DIR).expect("clear");
        assert_eq!(store.read(ConfigKey::MACHINE_DATA_DIR).expect("read"), None);
    }

    #[test]
    fn empty_string_is_stored_verbatim() {
        let store = MemoryStore::new();
        store.write(ConfigKey::USER_DATA_DIR, "").expect("write");
        assert_eq!(
            store.read(ConfigKey::USER_DATA_DIR).expect("read").as_deref(),
            Some(""),
        );
    }
}
