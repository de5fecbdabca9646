// Host-side tests for failure-swallowing persistence.

mod common;

use common::*;
use folio_core::constants::{MOTION_KEY, THEME_ATTR, THEME_KEY};
use folio_core::{Event, KeyValueStore, MemoryStore, SafeStorage, StorageError, Theme};

#[test]
fn memory_store_reports_failures() {
    let mut store = MemoryStore::new();
    store.fail_writes = true;
    assert!(matches!(store.set("k", "v"), Err(StorageError::Rejected(_))));
    store.fail_reads = true;
    assert_eq!(store.get("k"), Err(StorageError::Unavailable));
}

#[test]
fn safe_storage_swallows_read_failures() {
    let mut store = MemoryStore::new().with_entry(THEME_KEY, "light");
    store.fail_reads = true;
    let storage = SafeStorage::new(store);
    assert_eq!(storage.get(THEME_KEY), None);
}

#[test]
fn safe_storage_swallows_write_failures() {
    let mut store = MemoryStore::new();
    store.fail_writes = true;
    let mut storage = SafeStorage::new(store);
    storage.set(THEME_KEY, "light");
    assert_eq!(storage.inner().and_then(|s| s.peek(THEME_KEY)), None);
}

#[test]
fn unavailable_storage_reads_nothing_and_drops_writes() {
    let mut storage: SafeStorage<MemoryStore> = SafeStorage::unavailable();
    assert!(!storage.is_available());
    storage.set(MOTION_KEY, "off");
    assert_eq!(storage.get(MOTION_KEY), None);
}

#[test]
fn controller_keeps_working_when_writes_fail() {
    let mut store = MemoryStore::new();
    store.fail_writes = true;
    let mut controller = boot(FakePage::starfield(), store);

    controller.dispatch(Event::ThemeChangeRequested);
    controller.dispatch(Event::MotionChangeRequested);
    controller.dispatch(Event::ConstellationsChangeRequested);

    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(controller.page().attribute(THEME_ATTR), Some("light"));
    assert!(!controller.motion_active());
    assert_eq!(stored(&controller, THEME_KEY), None);
}
