use super::*;

#[test]
fn memory_storage_round_trips_and_clears() {
    let storage = MemoryTokenStorage::new();
    assert_eq!(storage.load(), None);
    storage.save("tok-1");
    assert_eq!(storage.load().as_deref(), Some("tok-1"));
    storage.clear();
    assert_eq!(storage.load(), None);
}

#[test]
fn memory_storage_clones_share_the_slot() {
    let storage = MemoryTokenStorage::with_token("tok-1");
    let view = storage.clone();
    storage.clear();
    assert_eq!(view.load(), None);
}

#[test]
fn local_storage_keeps_configured_key() {
    assert_eq!(LocalTokenStorage::new("token").key(), "token");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_empty_outside_the_browser() {
    let storage = LocalTokenStorage::new("token");
    storage.save("tok-1");
    assert_eq!(storage.load(), None);
    storage.clear();
}
