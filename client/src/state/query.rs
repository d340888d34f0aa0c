//! Keyed query cache with a freshness window.
//!
//! DESIGN
//! ======
//! Fetch results are stored as JSON alongside the time they were fetched.
//! A lookup only returns an entry while it is younger than the caller's
//! freshness window, so repeated navigation inside that window skips the
//! network. Keys that describe the signed-in user carry the user id, so one
//! account never reads another's entry. Mutations invalidate the keys they
//! affect; logout clears everything. Time is passed in explicitly (milliseconds) to keep the cache
//! deterministic.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::collections::HashMap;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

const PROFILE_QUERY_PREFIX: &str = "influencer/profile/";
/// How long a fetched profile counts as fresh.
pub const PROFILE_FRESH_MS: f64 = 60_000.0;

/// Cache key for the live profile of influencer `user_id`.
pub fn profile_query_key(user_id: &str) -> String {
    format!("{PROFILE_QUERY_PREFIX}{user_id}")
}

#[derive(Clone, Debug, PartialEq)]
struct CachedQuery {
    value: serde_json::Value,
    fetched_at_ms: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryCache {
    entries: HashMap<String, CachedQuery>,
}

impl QueryCache {
    /// Return the cached value for `key` if it was fetched within `fresh_ms`.
    pub fn get_fresh<T: DeserializeOwned>(&self, key: &str, now_ms: f64, fresh_ms: f64) -> Option<T> {
        let entry = self.entries.get(key)?;
        let age = now_ms - entry.fetched_at_ms;
        if !(0.0..fresh_ms).contains(&age) {
            return None;
        }
        serde_json::from_value(entry.value.clone()).ok()
    }

    pub fn insert<T: Serialize>(&mut self, key: &str, value: &T, now_ms: f64) {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.entries.insert(key.to_owned(), CachedQuery { value, fetched_at_ms: now_ms });
            }
            Err(e) => leptos::logging::warn!("query {key} not cached: {e}"),
        }
    }

    pub fn invalidate(&mut self, key: &str) {
        self.entries.remove(key);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Current wall-clock time in milliseconds.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |elapsed| elapsed.as_secs_f64() * 1000.0)
    }
}

/// Returns the query cache provided by `App`.
pub fn use_query_cache() -> RwSignal<QueryCache> {
    expect_context::<RwSignal<QueryCache>>()
}
