use super::*;

fn user(role: Role, status: UserStatus, profile_completed: Option<bool>) -> User {
    user_with_id("u1", role, status, profile_completed)
}

fn user_with_id(id: &str, role: Role, status: UserStatus, profile_completed: Option<bool>) -> User {
    User {
        id: id.to_owned(),
        email: "u1@example.com".to_owned(),
        name: "Ivy".to_owned(),
        role,
        status,
        profile_completed,
        phone: None,
        avatar: None,
        extra: serde_json::Map::new(),
    }
}

fn live(status: UserStatus, profile_completed: bool) -> ProfileFetch {
    ProfileFetch::Loaded(ProfileStatus { status: Some(status), profile_completed: Some(profile_completed) })
}

// =============================================================
// Decision rule
// =============================================================

#[test]
fn live_values_win_over_cached() {
    let cached = user(Role::Influencer, UserStatus::Pending, Some(true));
    let decision = evaluate_profile_gate(&cached, "/influencer", &live(UserStatus::Approved, false));
    assert_eq!(decision, ProfileGateDecision::Redirect("/influencer/complete-profile"));
}

#[test]
fn pending_fetch_defers_without_redirect() {
    let cached = user(Role::Influencer, UserStatus::Approved, Some(true));
    let decision = evaluate_profile_gate(&cached, "/influencer", &ProfileFetch::Pending);
    assert_eq!(decision, ProfileGateDecision::Deferred);
    assert_eq!(decision.redirect_target(), None);
}

#[test]
fn pending_fetch_with_incomplete_cache_still_waits() {
    let cached = user(Role::Influencer, UserStatus::Approved, Some(false));
    let decision = evaluate_profile_gate(&cached, "/influencer", &ProfileFetch::Pending);
    assert_eq!(decision, ProfileGateDecision::Deferred);
}

#[test]
fn complete_profile_route_never_redirects() {
    let cached = user(Role::Influencer, UserStatus::Approved, Some(false));
    for path in ["/influencer/complete-profile", "/influencer/complete-profile/"] {
        for fetch in [ProfileFetch::Pending, ProfileFetch::Failed, live(UserStatus::Approved, false)] {
            assert_eq!(evaluate_profile_gate(&cached, path, &fetch), ProfileGateDecision::Render, "{path}");
        }
    }
}

#[test]
fn failed_fetch_falls_back_to_cache() {
    let incomplete = user(Role::Influencer, UserStatus::Approved, Some(false));
    assert_eq!(
        evaluate_profile_gate(&incomplete, "/influencer", &ProfileFetch::Failed),
        ProfileGateDecision::Redirect("/influencer/complete-profile")
    );

    let complete = user(Role::Influencer, UserStatus::Approved, Some(true));
    assert_eq!(evaluate_profile_gate(&complete, "/influencer", &ProfileFetch::Failed), ProfileGateDecision::Render);
}

#[test]
fn partial_live_profile_fills_from_cache() {
    let cached = user(Role::Influencer, UserStatus::Approved, Some(true));
    let fetch = ProfileFetch::Loaded(ProfileStatus { status: None, profile_completed: Some(false) });
    assert_eq!(
        evaluate_profile_gate(&cached, "/influencer/campaigns", &fetch),
        ProfileGateDecision::Redirect("/influencer/complete-profile")
    );
}

#[test]
fn unapproved_influencer_is_not_redirected() {
    let cached = user(Role::Influencer, UserStatus::Pending, Some(false));
    for status in [UserStatus::Pending, UserStatus::Rejected] {
        assert_eq!(evaluate_profile_gate(&cached, "/influencer", &live(status, false)), ProfileGateDecision::Render);
    }
}

#[test]
fn unknown_completion_is_not_redirected() {
    let cached = user(Role::Influencer, UserStatus::Approved, None);
    let fetch = ProfileFetch::Loaded(ProfileStatus::default());
    assert_eq!(evaluate_profile_gate(&cached, "/influencer", &fetch), ProfileGateDecision::Render);
}

#[test]
fn other_roles_are_not_gated() {
    for role in [Role::Admin, Role::Client] {
        let cached = user(role, UserStatus::Approved, Some(false));
        assert_eq!(evaluate_profile_gate(&cached, "/influencer", &ProfileFetch::Pending), ProfileGateDecision::Render);
    }
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn fetch_enabled_only_for_influencers() {
    assert!(profile_fetch_enabled(Some(&user(Role::Influencer, UserStatus::Pending, None))));
    assert!(!profile_fetch_enabled(Some(&user(Role::Admin, UserStatus::Approved, None))));
    assert!(!profile_fetch_enabled(Some(&user(Role::Client, UserStatus::Approved, None))));
    assert!(!profile_fetch_enabled(None));
}

#[test]
fn reconcile_without_live_uses_cache() {
    let cached = user(Role::Influencer, UserStatus::Rejected, Some(true));
    assert_eq!(reconcile(&cached, None), (UserStatus::Rejected, Some(true)));
}

// =============================================================
// Fetch planning
// =============================================================

fn profile(status: UserStatus, profile_completed: bool) -> ProfileStatus {
    ProfileStatus { status: Some(status), profile_completed: Some(profile_completed) }
}

#[test]
fn plan_fetches_when_nothing_is_cached() {
    let influencer = user(Role::Influencer, UserStatus::Approved, Some(true));
    assert_eq!(
        plan_profile_fetch(Some(&influencer), "/influencer", &QueryCache::default(), 0.0),
        ProfileSource::Fetch { key: profile_query_key("u1") }
    );
}

#[test]
fn plan_reuses_fresh_cached_profile() {
    let influencer = user(Role::Influencer, UserStatus::Approved, None);
    let mut cache = QueryCache::default();
    cache.insert(&profile_query_key("u1"), &profile(UserStatus::Approved, true), 1_000.0);

    assert_eq!(
        plan_profile_fetch(Some(&influencer), "/influencer", &cache, 1_000.0 + PROFILE_FRESH_MS - 1.0),
        ProfileSource::Cached(profile(UserStatus::Approved, true))
    );
    assert_eq!(
        plan_profile_fetch(Some(&influencer), "/influencer", &cache, 1_000.0 + PROFILE_FRESH_MS),
        ProfileSource::Fetch { key: profile_query_key("u1") }
    );
}

#[test]
fn plan_skips_other_roles_and_signed_out() {
    let cache = QueryCache::default();
    for role in [Role::Admin, Role::Client] {
        let other = user(role, UserStatus::Approved, Some(false));
        assert_eq!(plan_profile_fetch(Some(&other), "/influencer", &cache, 0.0), ProfileSource::Skip);
    }
    assert_eq!(plan_profile_fetch(None, "/influencer", &cache, 0.0), ProfileSource::Skip);
}

#[test]
fn plan_skips_complete_profile_route() {
    let influencer = user(Role::Influencer, UserStatus::Approved, Some(false));
    for path in ["/influencer/complete-profile", "/influencer/complete-profile/"] {
        assert_eq!(plan_profile_fetch(Some(&influencer), path, &QueryCache::default(), 0.0), ProfileSource::Skip);
    }
}

#[test]
fn only_mounted_gates_cache_loaded_profiles() {
    let loaded = ProfileFetch::Loaded(profile(UserStatus::Approved, false));
    assert_eq!(cacheable_profile(&loaded, true), Some(&profile(UserStatus::Approved, false)));
    assert_eq!(cacheable_profile(&loaded, false), None);
    assert_eq!(cacheable_profile(&ProfileFetch::Failed, true), None);
    assert_eq!(cacheable_profile(&ProfileFetch::Pending, true), None);
}

#[test]
fn late_fetch_after_logout_does_not_leak_into_next_login() {
    let mut cache = QueryCache::default();
    let first = user_with_id("i-a", Role::Influencer, UserStatus::Approved, Some(false));
    let ProfileSource::Fetch { key: first_key } = plan_profile_fetch(Some(&first), "/influencer", &cache, 0.0) else {
        panic!("expected a fetch for the first influencer");
    };

    // Logout clears the cache; the first influencer's request lands afterwards.
    cache.clear();
    let late = ProfileFetch::Loaded(profile(UserStatus::Approved, false));
    if let Some(stale) = cacheable_profile(&late, false) {
        cache.insert(&first_key, stale, 1_000.0);
    }
    // Even a write that did land stays under the first influencer's key.
    cache.insert(&first_key, &profile(UserStatus::Approved, false), 1_000.0);

    let second = user_with_id("i-b", Role::Influencer, UserStatus::Approved, Some(true));
    let source = plan_profile_fetch(Some(&second), "/influencer", &cache, 6_000.0);
    assert_eq!(source, ProfileSource::Fetch { key: profile_query_key("i-b") });

    let live = live(UserStatus::Approved, true);
    assert_eq!(evaluate_profile_gate(&second, "/influencer", &live), ProfileGateDecision::Render);
}
