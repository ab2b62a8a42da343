//! Scoped override of the managed registry values.
//!
//! Acquisition snapshots each managed value and clears it; dropping the
//! fixture restores the snapshot in the same fixed order. Restoration is
//! tied to scope exit, so it runs on normal return, early return, and
//! unwinding alike.
//!
//! There is deliberately no locking here. The store is process-external
//! and potentially machine-wide, and the fixture assumes the host test
//! runner serialises tests that touch it. Tests in this workspace use
//! `serial_test` for the shared default store.

use crate::key::ConfigKey;
use crate::store::ConfigStore;

#[cfg(test)]
mod tests;

/// Scoped override of the five managed Enchant registry values.
///
/// Construction via [`ConfigOverride::acquire`] saves the current value of
/// every key in [`ConfigKey::MANAGED`] and clears it, so the code under
/// test observes unset state. Dropping the fixture writes each saved value
/// back, or clears the key again if it was absent when saved.
///
/// Two behaviours are inherited from the registry helpers this fixture
/// grew out of and are kept for compatibility:
///
/// - A saved value that is the *empty string* is restored by clearing the
///   key, not by writing `""` back. A key that held an empty string before
///   the test comes back absent.
/// - Store failures during acquisition and release are absorbed and logged
///   at `warn`; a failed restore never panics or masks the test body's own
///   outcome. The residual risk is stale configuration bleeding into a
///   later test when restoration fails silently.
///
/// # Examples
///
/// ```
/// use enchant_config::{ConfigKey, ConfigOverride, ConfigStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.write(ConfigKey::USER_MODULE_DIR, "/usr/lib/enchant")?;
///
/// {
///     let fixture = ConfigOverride::acquire(store.clone());
///     // The code under test now sees no configured module directory.
///     assert_eq!(fixture.get(ConfigKey::USER_MODULE_DIR), None);
///     fixture.set(ConfigKey::USER_MODULE_DIR, "/tmp/modules");
/// }
///
/// // The pre-test value is back, whatever the test body did.
/// assert_eq!(
///     store.read(ConfigKey::USER_MODULE_DIR)?.as_deref(),
///     Some("/usr/lib/enchant"),
/// );
/// # Ok::<(), enchant_config::StoreError>(())
/// ```
#[must_use = "dropping restores the saved registry values"]
pub struct ConfigOverride<S: ConfigStore> {
    store: S,
    saved: Vec<(ConfigKey, Option<String>)>,
}

impl<S: ConfigStore> ConfigOverride<S> {
    /// Snapshots and clears every managed key, in the fixed order of
    /// [`ConfigKey::MANAGED`].
    ///
    /// A read failure degrades to "value absent"; the key will be cleared
    /// on release rather than restored. Clear failures are logged and
    /// ignored; acquisition itself never fails.
    pub fn acquire(store: S) -> Self {
        let mut saved = Vec::with_capacity(ConfigKey::MANAGED.len());
        for key in ConfigKey::MANAGED {
            let prior = match store.read(key) {
                Ok(prior) => prior,
                Err(error) => {
                    tracing::warn!(%key, %error, "snapshot read failed; treating value as unset");
                    None
                }
            };
            if let Err(error) = store.clear(key) {
                tracing::warn!(%key, %error, "failed to clear value during acquisition");
            }
            saved.push((key, prior));
        }
        Self { store, saved }
    }

    /// Returns the backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Reads the current value of `key`, absorbing backend failures.
    #[must_use]
    pub fn get(&self, key: ConfigKey) -> Option<String> {
        self.store.read(key).unwrap_or_else(|error| {
            tracing::warn!(%key, %error, "read failed; reporting value as unset");
            None
        })
    }

    /// Writes an override value for `key`, absorbing backend failures.
    pub fn set(&self, key: ConfigKey, value: &str) {
        if let Err(error) = self.store.write(key, value) {
            tracing::warn!(%key, %error, "failed to write override value");
        }
    }

    /// Clears `key`, absorbing backend failures.
    pub fn clear(&self, key: ConfigKey) {
        if let Err(error) = self.store.clear(key) {
            tracing::warn!(%key, %error, "failed to clear value");
        }
    }

    /// Returns the value saved for `key` at acquisition, if any.
    #[must_use]
    pub fn saved(&self, key: ConfigKey) -> Option<&str> {
        self.saved
            .iter()
            .find(|(saved_key, _)| *saved_key == key)
            .and_then(|(_, value)| value.as_deref())
    }
}

impl<S: ConfigStore> Drop for ConfigOverride<S> {
    fn drop(&mut self) {
        for (key, prior) in self.saved.drain(..) {
            // An empty saved string is treated as "was unset": the registry
            // helpers this fixture replaced never told the two apart.
            let outcome = match prior.as_deref() {
                None | Some("") => self.store.clear(key),
                Some(value) => self.store.write(key, value),
            };
            if let Err(error) = outcome {
                tracing::warn!(%key, %error, "failed to restore saved registry value");
            }
        }
    }
}
