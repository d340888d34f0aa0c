//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the role gate, the profile gate and the root redirect; written only
//! through `SessionStore` setters. Every setter is a single signal update
//! followed by a write of the `{user, token}` pair to storage, so readers never
//! see a half-applied change (in particular, `logout` clears both fields at
//! once).
//!
//! HYDRATION
//! =========
//! The store starts with `is_loading = true`. `hydrate` reads the persisted
//! record synchronously and clears the flag in the same update, so gates never
//! make a decision against a store that has not yet been read from storage.
//! On the server `hydrate` is never called and the page renders its deferred
//! state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::persist::{self, PersistedSession};
use crate::util::storage::KeyValueStore;

/// In-memory session snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self { user: None, token: None, is_loading: true }
    }
}

impl Session {
    /// Session restored from storage, with loading already finished.
    pub fn hydrated(persisted: PersistedSession) -> Self {
        Self { user: persisted.user, token: persisted.token, is_loading: false }
    }

    /// The part of the session that is written to storage.
    pub fn persisted(&self) -> PersistedSession {
        PersistedSession { user: self.user.clone(), token: self.token.clone() }
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
    }
}

/// Reactive, persisted session store shared through Leptos context.
#[derive(Clone, Copy)]
pub struct SessionStore {
    session: RwSignal<Session>,
    storage: StoredValue<Arc<dyn KeyValueStore>>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { session: RwSignal::new(Session::default()), storage: StoredValue::new(storage) }
    }

    /// Read-only view for gates and components.
    pub fn session(&self) -> Signal<Session> {
        self.session.into()
    }

    /// Current snapshot without subscribing.
    pub fn snapshot(&self) -> Session {
        self.session.get_untracked()
    }

    /// Load the persisted record and finish loading in one update.
    pub fn hydrate(&self) {
        let persisted = self.storage.with_value(|storage| persist::load_session(storage.as_ref()));
        self.session.set(Session::hydrated(persisted));
    }

    pub fn set_user(&self, user: Option<User>) {
        self.mutate(|session| session.user = user);
    }

    pub fn set_token(&self, token: Option<String>) {
        self.mutate(|session| session.token = token);
    }

    pub fn set_loading(&self, loading: bool) {
        self.mutate(|session| session.is_loading = loading);
    }

    /// Install a freshly authenticated user and token together.
    pub fn login(&self, user: User, token: String) {
        self.mutate(|session| {
            session.user = Some(user);
            session.token = Some(token);
        });
    }

    /// Apply a change to the cached user, if one is signed in.
    pub fn update_user(&self, f: impl FnOnce(&mut User)) {
        self.mutate(|session| {
            if let Some(user) = session.user.as_mut() {
                f(user);
            }
        });
    }

    pub fn logout(&self) {
        self.mutate(Session::logout);
    }

    fn mutate(&self, f: impl FnOnce(&mut Session)) {
        self.session.update(f);
        let persisted = self.session.with_untracked(Session::persisted);
        self.storage.with_value(|storage| persist::save_session(storage.as_ref(), &persisted));
    }
}

/// Returns the session store provided by `App`.
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}
