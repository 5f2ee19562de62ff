use super::*;

#[test]
fn memory_storage_get_unset_key_is_none() {
    let store = MemoryStorage::new();
    assert_eq!(store.get("token"), Ok(None));
}

#[test]
fn memory_storage_set_then_get() {
    let store = MemoryStorage::new();
    store.set("token", "abc").unwrap();
    assert_eq!(store.get("token"), Ok(Some("abc".to_owned())));
}

#[test]
fn memory_storage_remove_unset_key_is_ok() {
    let store = MemoryStorage::new();
    assert_eq!(store.remove("missing"), Ok(()));
}

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set("userType", "SCOUT").unwrap();
    assert_eq!(b.get("userType"), Ok(Some("SCOUT".to_owned())));
}

#[test]
fn broken_memory_storage_fails_every_operation() {
    let store = MemoryStorage::new();
    store.break_backend();
    assert_eq!(store.get("token"), Err(StorageError::Unavailable));
    assert_eq!(store.set("token", "x"), Err(StorageError::Unavailable));
    assert_eq!(store.remove("token"), Err(StorageError::Unavailable));
}

#[test]
fn storage_event_for_watched_key_is_relevant() {
    assert!(is_relevant_change(Some("token"), &["token", "userType"]));
}

#[test]
fn storage_event_for_other_key_is_ignored() {
    assert!(!is_relevant_change(Some("theme"), &["token", "userType"]));
}

#[test]
fn storage_clear_event_is_relevant() {
    assert!(is_relevant_change(None, &["token"]));
}
