//! Windows registry backend.
//!
//! Registry strings are stored as UTF-16; `winreg` converts to and from the
//! crate's UTF-8 strings at the boundary. The conversion round-trips
//! exactly for the ASCII directory paths these values hold.

use std::io;

use winreg::RegKey;
use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, KEY_READ, KEY_SET_VALUE};

use super::ConfigStore;
use crate::error::StoreError;
use crate::key::{ConfigKey, ConfigScope};

/// Store backend over the real Windows registry.
///
/// User-scoped keys live under `HKEY_CURRENT_USER`, machine-scoped keys
/// under `HKEY_LOCAL_MACHINE`. Writes and deletions in the machine scope
/// need an elevated process; callers relying on best-effort semantics (the
/// override fixture does) absorb the resulting `Access` errors.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRegistry;

impl SystemRegistry {
    /// Creates a handle to the system registry.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn root(scope: ConfigScope) -> RegKey {
        RegKey::predef(match scope {
            ConfigScope::User => HKEY_CURRENT_USER,
            ConfigScope::Machine => HKEY_LOCAL_MACHINE,
        })
    }
}

impl ConfigStore for SystemRegistry {
    fn read(&self, key: ConfigKey) -> Result<Option<String>, StoreError> {
        let section = match Self::root(key.scope()).open_subkey_with_flags(key.section(), KEY_READ)
        {
            Ok(section) => section,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::access("read", key, err)),
        };
        match section.get_value::<String, _>(key.value_name()) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                Err(StoreError::encoding(key))
            }
            Err(err) => Err(StoreError::access("read", key, err)),
        }
    }

    fn write(&self, key: ConfigKey, value: &str) -> Result<(), StoreError> {
        let (section, _disposition) = Self::root(key.scope())
            .create_subkey(key.section())
            .map_err(|err| StoreError::access("write", key, err))?;
        section
            .set_value(key.value_name(), &value)
            .map_err(|err| StoreError::access("write", key, err))
    }

    fn clear(&self, key: ConfigKey) -> Result<(), StoreError> {
        let section = match Self::root(key.scope())
            .open_subkey_with_flags(key.section(), KEY_SET_VALUE)
        {
            Ok(section) => section,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(StoreError::access("clear", key, err)),
        };
        match section.delete_value(key.value_name()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::access("clear", key, err)),
        }
    }
}
