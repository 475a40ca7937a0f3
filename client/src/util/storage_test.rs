use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_get_missing_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("token"), Ok(None));
}

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set("token", "abc").unwrap();
    assert_eq!(storage.get("token"), Ok(Some("abc".to_owned())));
}

#[test]
fn memory_storage_remove_missing_key_succeeds() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.remove("user"), Ok(()));
}

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::new();
    let other = storage.clone();
    storage.set("token", "abc").unwrap();
    assert_eq!(other.get("token"), Ok(Some("abc".to_owned())));
    other.remove("token").unwrap();
    assert!(storage.snapshot().is_empty());
}

#[test]
fn memory_storage_unavailable_refuses_everything() {
    let storage = MemoryStorage::unavailable();
    assert!(matches!(storage.get("token"), Err(StorageError::Unavailable(_))));
    assert!(matches!(storage.set("token", "abc"), Err(StorageError::Unavailable(_))));
    assert!(matches!(storage.remove("token"), Err(StorageError::Unavailable(_))));
}

#[test]
fn memory_storage_rejects_only_the_named_key() {
    let storage = MemoryStorage::new().rejecting_writes_to("user");
    assert_eq!(storage.set("token", "abc"), Ok(()));
    assert!(matches!(storage.set("user", "{}"), Err(StorageError::Unavailable(_))));
    assert_eq!(storage.snapshot().len(), 1);
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_without_a_window() {
    let storage = BrowserStorage;
    assert!(matches!(storage.get("token"), Err(StorageError::Unavailable(_))));
    assert!(matches!(storage.set("token", "abc"), Err(StorageError::Unavailable(_))));
    assert!(matches!(storage.remove("token"), Err(StorageError::Unavailable(_))));
}

#[test]
fn storage_error_messages_name_the_kind() {
    assert_eq!(
        StorageError::Unavailable("disabled".to_owned()).to_string(),
        "storage unavailable: disabled"
    );
    assert_eq!(
        StorageError::Malformed("user".to_owned()).to_string(),
        "malformed session data: user"
    );
}
