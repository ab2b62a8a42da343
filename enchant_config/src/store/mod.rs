//! Persistent key-value store abstraction and its backends.
//!
//! The override fixture never calls platform APIs directly; it is handed a
//! [`ConfigStore`] capability instead, so its own tests can substitute an
//! in-memory or scripted backend for the real registry.

use crate::error::StoreError;
use crate::key::ConfigKey;

mod memory;
#[cfg(windows)]
mod windows;

pub use memory::MemoryStore;
#[cfg(windows)]
pub use windows::SystemRegistry;

/// Read, write, and clear access to the persistent configuration store.
///
/// The surface is deliberately narrow: string values addressed by a
/// [`ConfigKey`], with "absent" a first-class state distinct from any
/// stored string.
pub trait ConfigStore {
    /// Reads the stored string for `key`, `None` when the enclosing
    /// section or the value itself is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails the lookup for any reason
    /// other than absence, or if the stored value cannot be represented
    /// as a UTF-8 string.
    fn read(&self, key: ConfigKey) -> Result<Option<String>, StoreError>;

    /// Stores `value` for `key`, creating the enclosing section if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses or fails the write.
    fn write(&self, key: ConfigKey, value: &str) -> Result<(), StoreError>;

    /// Removes the value for `key`; removing an absent value is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses or fails the deletion.
    fn clear(&self, key: ConfigKey) -> Result<(), StoreError>;
}

impl<S: ConfigStore + ?Sized> ConfigStore for &S {
    fn read(&self, key: ConfigKey) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: ConfigKey, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }

    fn clear(&self, key: ConfigKey) -> Result<(), StoreError> {
        (**self).clear(key)
    }
}

/// Returns the platform's default store: the real registry.
#[cfg(windows)]
#[must_use]
pub fn system_store() -> SystemRegistry {
    SystemRegistry::new()
}

/// Returns the platform's default store.
///
/// No durable configuration registry exists here, so a process-wide shared
/// [`MemoryStore`] stands in and the fixture contract stays uniform across
/// platforms. Every call returns a handle to the same map.
#[cfg(not(windows))]
#[must_use]
pub fn system_store() -> MemoryStore {
    use std::sync::LazyLock;

    static PROCESS_STORE: LazyLock<MemoryStore> = LazyLock::new(MemoryStore::new);
    PROCESS_STORE.clone()
}
