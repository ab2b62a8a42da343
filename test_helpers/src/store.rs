//! Controlled doubles for the persistent configuration store.
//!
//! The override fixture takes its store as a capability, so tests can hand
//! it one of these instead of the real registry: a pre-seeded map, a
//! recorder that captures call order, or a backend that fails on demand.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use enchant_config::{ConfigKey, ConfigStore, MemoryStore, StoreError};

/// Creates a [`MemoryStore`] pre-populated with `entries`.
///
/// # Errors
///
/// Propagates backend write failures; `MemoryStore` itself never fails.
pub fn seeded(entries: &[(ConfigKey, &str)]) -> Result<MemoryStore, StoreError> {
    let store = MemoryStore::new();
    for (key, value) in entries {
        store.write(*key, value)?;
    }
    Ok(store)
}

/// One observed backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    /// A `read` of the given key.
    Read(ConfigKey),
    /// A `write` of the given key and value.
    Write(ConfigKey, String),
    /// A `clear` of the given key.
    Clear(ConfigKey),
}

/// Store wrapper that records every backend call in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    operations: Arc<Mutex<Vec<Operation>>>,
}

impl RecordingStore {
    /// Creates a recorder over an empty [`MemoryStore`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder over an existing backend.
    #[must_use]
    pub fn with_inner(inner: MemoryStore) -> Self {
        Self {
            inner,
            operations: Arc::default(),
        }
    }

    /// Operations observed so far, oldest first.
    #[must_use]
    pub fn operations(&self) -> Vec<Operation> {
        self.operations.lock().clone()
    }
}

impl ConfigStore for RecordingStore {
    fn read(&self, key: ConfigKey) -> Result<Option<String>, StoreError> {
        self.operations.lock().push(Operation::Read(key));
        self.inner.read(key)
    }

    fn write(&self, key: ConfigKey, value: &str) -> Result<(), StoreError> {
        self.operations
            .lock()
            .push(Operation::Write(key, value.to_owned()));
        self.inner.write(key, value)
    }

    fn clear(&self, key: ConfigKey) -> Result<(), StoreError> {
        self.operations.lock().push(Operation::Clear(key));
        self.inner.clear(key)
    }
}

/// Store wrapper that fails selected operations with a permission error.
///
/// All toggles start off; flip them mid-test to script the failure.
#[derive(Clone, Debug, Default)]
pub struct FaultyStore {
    inner: MemoryStore,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
    fail_clears: Arc<AtomicBool>,
}

impl FaultyStore {
    /// Creates a healthy store over an empty [`MemoryStore`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a healthy store over an existing backend.
    #[must_use]
    pub fn with_inner(inner: MemoryStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    /// Makes subsequent reads fail when `fail` is true.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes subsequent writes fail when `fail` is true.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Makes subsequent clears fail when `fail` is true.
    pub fn fail_clears(&self, fail: bool) {
        self.fail_clears.store(fail, Ordering::SeqCst);
    }

    fn denied(op: &'static str, key: ConfigKey) -> StoreError {
        StoreError::access(op, key, io::Error::from(io::ErrorKind::PermissionDenied))
    }
}

impl ConfigStore for FaultyStore {
    fn read(&self, key: ConfigKey) -> Result<Option<String>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::denied("read", key));
        }
        self.inner.read(key)
    }

    fn write(&self, key: ConfigKey, value: &str) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::denied("write", key));
        }
        self.inner.write(key, value)
    }

    fn clear(&self, key: ConfigKey) -> Result<(), StoreError> {
        if self.fail_clears.load(Ordering::SeqCst) {
            return Err(Self::denied("clear", key));
        }
        self.inner.clear(key)
    }
}
