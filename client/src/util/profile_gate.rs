//! Influencer profile-completion gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs inside the influencer section after the role gate has admitted the
//! user. Approved influencers who have not finished onboarding are sent to the
//! complete-profile route. The live profile fetch wins over the cached session
//! copy field by field; a failed fetch falls back to the cache entirely.
//!
//! FETCH PLANNING
//! ==============
//! Each gate mount either reuses a fresh cached profile for the signed-in
//! user or issues one request. Nothing is fetched on the complete-profile
//! route, where the gate always renders. A result is cached only if the gate
//! that asked for it is still mounted, so a request that finishes after
//! logout or after the form invalidated the entry cannot repopulate it.

#[cfg(test)]
#[path = "profile_gate_test.rs"]
mod profile_gate_test;

use crate::net::types::{ProfileStatus, Role, User, UserStatus};
use crate::paths;
use crate::state::query::{PROFILE_FRESH_MS, QueryCache, profile_query_key};

/// Progress of the live profile fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ProfileFetch {
    #[default]
    Pending,
    Loaded(ProfileStatus),
    /// Request failed; only cached values are available.
    Failed,
}

impl ProfileFetch {
    fn live(&self) -> Option<&ProfileStatus> {
        match self {
            Self::Loaded(profile) => Some(profile),
            Self::Pending | Self::Failed => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileGateDecision {
    /// Fetch still in flight.
    Deferred,
    Render,
    Redirect(&'static str),
}

impl ProfileGateDecision {
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Redirect(path) => Some(path),
            Self::Deferred | Self::Render => None,
        }
    }
}

/// Whether the live profile should be requested for this user at all.
pub fn profile_fetch_enabled(user: Option<&User>) -> bool {
    user.is_some_and(|user| user.role == Role::Influencer)
}

/// Where a freshly mounted gate gets the live profile from.
#[derive(Clone, Debug, PartialEq)]
pub enum ProfileSource {
    /// Nothing to fetch for this user or route.
    Skip,
    Cached(ProfileStatus),
    /// Request it; the result belongs under `key`.
    Fetch { key: String },
}

/// Pick the profile source for `user` at `current_path`.
pub fn plan_profile_fetch(user: Option<&User>, current_path: &str, cache: &QueryCache, now_ms: f64) -> ProfileSource {
    if !profile_fetch_enabled(user) || is_complete_profile_path(current_path) {
        return ProfileSource::Skip;
    }
    let Some(user) = user else {
        return ProfileSource::Skip;
    };
    let key = profile_query_key(&user.id);
    match cache.get_fresh::<ProfileStatus>(&key, now_ms, PROFILE_FRESH_MS) {
        Some(profile) => ProfileSource::Cached(profile),
        None => ProfileSource::Fetch { key },
    }
}

/// The profile worth caching from a finished request, if any.
pub fn cacheable_profile(fetch: &ProfileFetch, gate_mounted: bool) -> Option<&ProfileStatus> {
    if gate_mounted { fetch.live() } else { None }
}

/// Effective `(status, profile_completed)`: live values win, cached fill gaps.
pub fn reconcile(cached: &User, live: Option<&ProfileStatus>) -> (UserStatus, Option<bool>) {
    let status = live.and_then(|live| live.status).unwrap_or(cached.status);
    let completed = live.and_then(|live| live.profile_completed).or(cached.profile_completed);
    (status, completed)
}

/// Decide whether the influencer section may render at `current_path`.
pub fn evaluate_profile_gate(user: &User, current_path: &str, fetch: &ProfileFetch) -> ProfileGateDecision {
    if user.role != Role::Influencer || is_complete_profile_path(current_path) {
        return ProfileGateDecision::Render;
    }
    if matches!(fetch, ProfileFetch::Pending) {
        return ProfileGateDecision::Deferred;
    }
    match reconcile(user, fetch.live()) {
        (UserStatus::Approved, Some(false)) => ProfileGateDecision::Redirect(paths::COMPLETE_PROFILE),
        _ => ProfileGateDecision::Render,
    }
}

fn is_complete_profile_path(path: &str) -> bool {
    let trimmed = path.trim_end_matches('/');
    trimmed == paths::COMPLETE_PROFILE
}
