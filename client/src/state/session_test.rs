use leptos::prelude::Owner;

use super::*;
use crate::net::types::{Role, UserStatus};
use crate::util::persist::{AUTH_STORAGE_KEY, load_session};
use crate::util::storage::MemoryStorage;

fn influencer() -> User {
    User {
        id: "i-1".to_owned(),
        email: "ivy@example.com".to_owned(),
        name: "Ivy".to_owned(),
        role: Role::Influencer,
        status: UserStatus::Approved,
        profile_completed: Some(false),
        phone: None,
        avatar: None,
        extra: serde_json::Map::new(),
    }
}

fn store_with(storage: &MemoryStorage) -> SessionStore {
    SessionStore::new(Arc::new(storage.clone()))
}

/// Signals need an active owner (and arena, under `ssr`) to be created.
fn with_owner(test: impl FnOnce()) {
    let owner = Owner::new();
    owner.with(test);
}

// =============================================================
// Session defaults
// =============================================================

#[test]
fn session_default_is_loading_and_empty() {
    let session = Session::default();
    assert!(session.is_loading);
    assert!(session.user.is_none());
    assert!(session.token.is_none());
}

#[test]
fn session_logout_clears_user_and_token() {
    let mut session = Session::hydrated(PersistedSession { user: Some(influencer()), token: Some("t".to_owned()) });
    session.logout();
    assert!(session.user.is_none());
    assert!(session.token.is_none());
    assert!(!session.is_loading);
}

#[test]
fn session_persisted_excludes_loading_flag() {
    let session = Session { user: None, token: Some("t".to_owned()), is_loading: true };
    assert_eq!(session.persisted(), PersistedSession { user: None, token: Some("t".to_owned()) });
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn store_starts_loading_until_hydrated() {
    with_owner(|| {
        let storage = MemoryStorage::new();
        let store = store_with(&storage);
        assert!(store.snapshot().is_loading);
        store.hydrate();
        assert!(!store.snapshot().is_loading);
        assert!(store.snapshot().user.is_none());
    });
}

#[test]
fn store_hydrate_restores_persisted_pair() {
    with_owner(|| {
        let storage = MemoryStorage::new();
        let first = store_with(&storage);
        first.login(influencer(), "tok".to_owned());

        let second = store_with(&storage);
        second.hydrate();
        let session = second.snapshot();
        assert_eq!(session.user, Some(influencer()));
        assert_eq!(session.token.as_deref(), Some("tok"));
    });
}

#[test]
fn store_hydrate_treats_corrupt_record_as_empty() {
    with_owner(|| {
        let storage = MemoryStorage::new();
        storage.save(AUTH_STORAGE_KEY, "][");
        let store = store_with(&storage);
        store.hydrate();
        assert!(store.snapshot().user.is_none());
        assert!(!store.snapshot().is_loading);
    });
}

#[test]
fn store_setters_persist_each_mutation() {
    with_owner(|| {
        let storage = MemoryStorage::new();
        let store = store_with(&storage);
        store.hydrate();

        store.set_token(Some("abc".to_owned()));
        assert_eq!(load_session(&storage).token.as_deref(), Some("abc"));

        store.set_user(Some(influencer()));
        assert_eq!(load_session(&storage).user, Some(influencer()));
    });
}

#[test]
fn store_logout_clears_both_fields_at_once() {
    with_owner(|| {
        let storage = MemoryStorage::new();
        let store = store_with(&storage);
        store.hydrate();
        store.login(influencer(), "tok".to_owned());

        store.logout();
        let session = store.snapshot();
        assert!(session.user.is_none());
        assert!(session.token.is_none());
        assert_eq!(load_session(&storage), PersistedSession::default());
    });
}

#[test]
fn store_set_loading_is_not_persisted() {
    with_owner(|| {
        let storage = MemoryStorage::new();
        let store = store_with(&storage);
        store.hydrate();
        store.set_loading(true);
        assert!(store.snapshot().is_loading);

        let reloaded = store_with(&storage);
        assert!(reloaded.snapshot().is_loading);
        reloaded.hydrate();
        assert!(!reloaded.snapshot().is_loading);
    });
}

#[test]
fn store_update_user_writes_back_cached_profile() {
    with_owner(|| {
        let storage = MemoryStorage::new();
        let store = store_with(&storage);
        store.hydrate();
        store.login(influencer(), "tok".to_owned());

        store.update_user(|user| user.profile_completed = Some(true));
        assert_eq!(load_session(&storage).user.and_then(|u| u.profile_completed), Some(true));
    });
}

#[test]
fn store_update_user_without_user_is_noop() {
    with_owner(|| {
        let storage = MemoryStorage::new();
        let store = store_with(&storage);
        store.hydrate();
        store.update_user(|user| user.name = "ghost".to_owned());
        assert!(store.snapshot().user.is_none());
    });
}
