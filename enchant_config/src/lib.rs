//! Scoped override fixture for Enchant's persistent configuration registry.
//!
//! Enchant locates its provider modules and dictionary data through a small
//! set of registry values under `Software\Enchant\Config`. Tests that
//! exercise that lookup need the store cleared so the code under test
//! observes the default, unset state, and need whatever was there before
//! restored afterwards, because the store is real, durable, and shared with
//! everything else on the machine.
//!
//! [`ConfigOverride`] is that fixture: acquiring it snapshots the five
//! managed values and clears them; dropping it drives each value back to
//! its saved state on every exit path, including unwinding out of a failed
//! test body.
//!
//! Backends implement [`ConfigStore`]. On Windows the real registry is
//! available as `SystemRegistry`; everywhere else (and for tests of the
//! fixture itself) [`MemoryStore`] provides the same contract in process
//! memory. [`system_store`] picks the platform default.
//!
//! # Examples
//!
//! ```
//! use enchant_config::{ConfigKey, ConfigOverride, ConfigStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.write(ConfigKey::HOME_DIR, "/home/original")?;
//!
//! {
//!     let fixture = ConfigOverride::acquire(store.clone());
//!     assert_eq!(fixture.get(ConfigKey::HOME_DIR), None);
//!     fixture.set(ConfigKey::HOME_DIR, "/home/override");
//! }
//!
//! assert_eq!(
//!     store.read(ConfigKey::HOME_DIR)?.as_deref(),
//!     Some("/home/original"),
//! );
//! # Ok::<(), enchant_config::StoreError>(())
//! ```

mod discovery;
mod error;
mod fixture;
mod key;
mod store;

pub use discovery::executable_dir;
pub use error::StoreError;
pub use fixture::ConfigOverride;
pub use key::{ConfigKey, ConfigScope, ConfigSetting};
#[cfg(windows)]
pub use store::SystemRegistry;
pub use store::{ConfigStore, MemoryStore, system_store};
