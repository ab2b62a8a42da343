//! Identifiers for the registry values the override fixture manages.

use std::fmt;

/// Persistence domain of a configuration value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigScope {
    /// Stored under the per-user root (`HKEY_CURRENT_USER` on Windows).
    User,
    /// Stored under the machine-wide root (`HKEY_LOCAL_MACHINE` on Windows).
    Machine,
}

impl fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::User => "user",
            Self::Machine => "machine",
        })
    }
}

/// Logical setting a configuration value holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigSetting {
    /// Directory Enchant treats as the user's home.
    HomeDir,
    /// Directory searched for provider modules.
    ModuleDir,
    /// Directory searched for dictionary data.
    DataDir,
}

/// One overridable registry value, addressed by scope and setting.
///
/// Only the five observed combinations can be named: the home directory is
/// per-user only, while the module and data directories exist in both
/// scopes. There is deliberately no constructor for other pairings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConfigKey {
    scope: ConfigScope,
    setting: ConfigSetting,
}

impl ConfigKey {
    /// Per-user home directory override.
    pub const HOME_DIR: Self = Self::new(ConfigScope::User, ConfigSetting::HomeDir);
    /// Per-user provider module directory.
    pub const USER_MODULE_DIR: Self = Self::new(ConfigScope::User, ConfigSetting::ModuleDir);
    /// Machine-wide provider module directory.
    pub const MACHINE_MODULE_DIR: Self = Self::new(ConfigScope::Machine, ConfigSetting::ModuleDir);
    /// Per-user dictionary data directory.
    pub const USER_DATA_DIR: Self = Self::new(ConfigScope::User, ConfigSetting::DataDir);
    /// Machine-wide dictionary data directory.
    pub const MACHINE_DATA_DIR: Self = Self::new(ConfigScope::Machine, ConfigSetting::DataDir);

    /// Every managed key, in the order the fixture snapshots and restores.
    pub const MANAGED: [Self; 5] = [
        Self::HOME_DIR,
        Self::USER_MODULE_DIR,
        Self::MACHINE_MODULE_DIR,
        Self::USER_DATA_DIR,
        Self::MACHINE_DATA_DIR,
    ];

    const fn new(scope: ConfigScope, setting: ConfigSetting) -> Self {
        Self { scope, setting }
    }

    /// Persistence domain this key lives in.
    #[must_use]
    pub const fn scope(self) -> ConfigScope {
        self.scope
    }

    /// Logical setting this key names.
    #[must_use]
    pub const fn setting(self) -> ConfigSetting {
        self.setting
    }

    /// Section holding every managed value, relative to the scope root.
    #[must_use]
    pub const fn section(self) -> &'static str {
        r"Software\Enchant\Config"
    }

    /// Name of the value inside [`Self::section`].
    #[must_use]
    pub const fn value_name(self) -> &'static str {
        match self.setting {
            ConfigSetting::HomeDir => "Home_Dir",
            ConfigSetting::ModuleDir => "Module_Dir",
            ConfigSetting::DataDir => "Data_Dir",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}\\{}", self.scope, self.section(), self.value_name())
    }
}
