//! Unit tests for the override fixture.

use super::ConfigOverride;
use crate::key::ConfigKey;
use crate::store::{ConfigStore, MemoryStore};

fn seeded(entries: &[(ConfigKey, &str)]) -> MemoryStore {
    let store = MemoryStore::new();
    for (key, value) in entries {
        store.write(*key, value).expect("seed store");
    }
    store
}

fn value(store: &MemoryStore, key: ConfigKey) -> Option<String> {
    store.read(key).expect("read store")
}

#[test]
fn acquisition_clears_every_managed_key() {
    let store = seeded(&[
        (ConfigKey::HOME_DIR, "/home/me"),
        (ConfigKey::USER_MODULE_DIR, "/usr/lib/enchant"),
        (ConfigKey::MACHINE_MODULE_DIR, "/opt/enchant/lib"),
        (ConfigKey::USER_DATA_DIR, "/usr/share/enchant"),
        (ConfigKey::MACHINE_DATA_DIR, "/opt/enchant/share"),
    ]);

    let fixture = ConfigOverride::acquire(store.clone());
    for key in ConfigKey::MANAGED {
        assert_eq!(value(&store, key), None, "{key} not cleared");
    }
    drop(fixture);
}

#[test]
fn drop_restores_saved_values() {
    let store = seeded(&[(ConfigKey::HOME_DIR, "/home/original")]);
    {
        let fixture = ConfigOverride::acquire(store.clone());
        fixture.set(ConfigKey::HOME_DIR, "/home/other");
    }
    assert_eq!(
        value(&store, ConfigKey::HOME_DIR).as_deref(),
        Some("/home/original"),
    );
}

#[test]
fn unset_keys_are_unset_again_after_release() {
    let store = MemoryStore::new();
    {
        let fixture = ConfigOverride::acquire(store.clone());
        fixture.set(ConfigKey::MACHINE_MODULE_DIR, "/opt/mod");
    }
    assert_eq!(value(&store, ConfigKey::MACHINE_MODULE_DIR), None);
}

#[test]
fn empty_saved_string_restores_as_absent() {
    let store = seeded(&[(ConfigKey::USER_DATA_DIR, "")]);
    {
        let fixture = ConfigOverride::acquire(store.clone());
        fixture.set(ConfigKey::USER_DATA_DIR, "/data");
    }
    assert_eq!(value(&store, ConfigKey::USER_DATA_DIR), None);
}

#[test]
fn keys_restore_independently() {
    let store = seeded(&[
        (ConfigKey::USER_MODULE_DIR, "/usr/lib/enchant"),
        (ConfigKey::USER_DATA_DIR, "/usr/share/enchant"),
    ]);
    {
        let fixture = ConfigOverride::acquire(store.clone());
        fixture.set(ConfigKey::USER_MODULE_DIR, "/tmp/modules");
        fixture.clear(ConfigKey::USER_MODULE_DIR);
    }
    assert_eq!(
        value(&store, ConfigKey::USER_MODULE_DIR).as_deref(),
        Some("/usr/lib/enchant"),
    );
    assert_eq!(
        value(&store, ConfigKey::USER_DATA_DIR).as_deref(),
        Some("/usr/share/enchant"),
    );
    assert_eq!(value(&store, ConfigKey::HOME_DIR), None);
}

#[test]
fn saved_exposes_the_snapshot() {
    let store = seeded(&[(ConfigKey::HOME_DIR, "/home/original")]);
    let fixture = ConfigOverride::acquire(store.clone());
    assert_eq!(fixture.saved(ConfigKey::HOME_DIR), Some("/home/original"));
    assert_eq!(fixture.saved(ConfigKey::USER_MODULE_DIR), None);
    // The snapshot reflects acquisition time, not later mutation.
    fixture.set(ConfigKey::HOME_DIR, "/home/other");
    assert_eq!(fixture.saved(ConfigKey::HOME_DIR), Some("/home/original"));
}

#[test]
fn restoration_runs_when_the_test_body_panics() {
    let store = seeded(&[(ConfigKey::HOME_DIR, "/home/original")]);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let fixture = ConfigOverride::acquire(store.clone());
        fixture.set(ConfigKey::HOME_DIR, "/home/other");
        panic!("test body failure");
    }));
    assert!(result.is_err());
    assert_eq!(
        value(&store, ConfigKey::HOME_DIR).as_deref(),
        Some("/home/original"),
    );
}

#[test]
fn get_reflects_overrides_written_through_the_fixture() {
    let store = MemoryStore::new();
    let fixture = ConfigOverride::acquire(store);
    assert_eq!(fixture.get(ConfigKey::USER_MODULE_DIR), None);
    fixture.set(ConfigKey::USER_MODULE_DIR, "/tmp/modules");
    assert_eq!(
        fixture.get(ConfigKey::USER_MODULE_DIR).as_deref(),
        Some("/tmp/modules"),
    );
}
