//! Persisted session record under the `auth-storage` key.
//!
//! DESIGN
//! ======
//! The record is wrapped as `{"state": {"user": .., "token": ..}, "version": 0}`.
//! Records written by already-deployed builds use the same envelope, so its
//! shape must not change. Only `user` and `token` are persisted; the
//! loading flag always starts fresh.
//!
//! ERROR HANDLING
//! ==============
//! A missing, malformed or schema-invalid record reads as "no session".

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use serde::{Deserialize, Serialize};

use super::storage::KeyValueStore;
use crate::net::types::User;

/// Storage key for the persisted session record.
pub const AUTH_STORAGE_KEY: &str = "auth-storage";
/// Envelope version written with every record.
pub const STORAGE_VERSION: u32 = 0;

/// The `{user, token}` pair that survives reloads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct Envelope {
    state: PersistedSession,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<u32>,
}

/// Serialize a session into the storage envelope.
pub fn encode(session: &PersistedSession) -> Result<String, serde_json::Error> {
    serde_json::to_string(&Envelope { state: session.clone(), version: Some(STORAGE_VERSION) })
}

/// Parse a storage envelope.
pub fn decode(raw: &str) -> Result<PersistedSession, serde_json::Error> {
    serde_json::from_str::<Envelope>(raw).map(|envelope| envelope.state)
}

/// Read the persisted session, treating anything unreadable as empty.
pub fn load_session(store: &dyn KeyValueStore) -> PersistedSession {
    let Some(raw) = store.load(AUTH_STORAGE_KEY) else {
        return PersistedSession::default();
    };
    match decode(&raw) {
        Ok(session) => session,
        Err(e) => {
            leptos::logging::warn!("discarding unreadable {AUTH_STORAGE_KEY} record: {e}");
            PersistedSession::default()
        }
    }
}

/// Write the session envelope.
pub fn save_session(store: &dyn KeyValueStore, session: &PersistedSession) {
    match encode(session) {
        Ok(raw) => store.save(AUTH_STORAGE_KEY, &raw),
        Err(e) => leptos::logging::warn!("failed to encode {AUTH_STORAGE_KEY} record: {e}"),
    }
}

/// Extract the bearer token from a raw record, or `""` when there is none.
///
/// This only looks at `state.token`, so a record whose user no longer
/// matches the current schema still yields its token.
pub fn token_from_record(raw: Option<&str>) -> String {
    raw.and_then(|raw| serde_json::from_str::<serde_json::Value>(raw).ok())
        .and_then(|value| value.get("state")?.get("token")?.as_str().map(str::to_owned))
        .unwrap_or_default()
}
