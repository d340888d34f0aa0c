use super::*;

#[test]
fn memory_storage_round_trips_values() {
    let store = MemoryStorage::new();
    assert_eq!(store.load("k"), None);
    store.save("k", "v1");
    assert_eq!(store.load("k").as_deref(), Some("v1"));
    store.save("k", "v2");
    assert_eq!(store.load("k").as_deref(), Some("v2"));
}

#[test]
fn memory_storage_clones_share_entries() {
    let store = MemoryStorage::new();
    let other = store.clone();
    store.save("shared", "yes");
    assert_eq!(other.load("shared").as_deref(), Some("yes"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_without_a_browser() {
    let store = BrowserStorage;
    store.save("k", "v");
    assert_eq!(store.load("k"), None);
}
