//! Influencer onboarding guard.
//!
//! Fetches the live profile once per mount (or reuses a fresh cached copy),
//! then applies the completion rule from `util::profile_gate`. Must be nested
//! inside a `RoleGate` so a signed-in user is always present.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use super::role_gate::GatePending;
use crate::net::api;
use crate::state::query::{QueryCache, now_ms, use_query_cache};
use crate::state::session::use_session;
use crate::util::auth::install_gate_redirect;
use crate::util::profile_gate::{
    ProfileFetch, ProfileGateDecision, ProfileSource, cacheable_profile, evaluate_profile_gate, plan_profile_fetch,
};

#[component]
pub fn ProfileGate(children: ChildrenFn) -> impl IntoView {
    let session = use_session().session();
    let cache = use_query_cache();
    let location = use_location();
    let navigate = use_navigate();

    let fetch = RwSignal::new(ProfileFetch::Pending);
    let requested = RwSignal::new(false);

    Effect::new(move || {
        if requested.get_untracked() {
            return;
        }
        let path = location.pathname.get();
        let source =
            session.with(|s| cache.with_untracked(|c| plan_profile_fetch(s.user.as_ref(), &path, c, now_ms())));
        match source {
            ProfileSource::Skip => {}
            ProfileSource::Cached(profile) => {
                requested.set(true);
                fetch.set(ProfileFetch::Loaded(profile));
            }
            ProfileSource::Fetch { key } => {
                requested.set(true);
                spawn_profile_fetch(cache, fetch, key);
            }
        }
    });

    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        session.with(|s| match s.user.as_ref() {
            Some(user) => fetch.with(|f| evaluate_profile_gate(user, &path, f)),
            None => ProfileGateDecision::Deferred,
        })
    });
    install_gate_redirect(move || decision.get().redirect_target(), navigate);

    view! {
        <Show
            when=move || decision.get() == ProfileGateDecision::Render
            fallback=move || view! { <GatePending deferred=Signal::derive(move || decision.get() == ProfileGateDecision::Deferred)/> }
        >
            {children()}
        </Show>
    }
}

fn spawn_profile_fetch(cache: RwSignal<QueryCache>, fetch: RwSignal<ProfileFetch>, key: String) {
    leptos::task::spawn_local(async move {
        let next = match api::fetch_profile().await {
            Ok(profile) => ProfileFetch::Loaded(profile),
            Err(e) => {
                leptos::logging::warn!("profile fetch failed, using cached status: {e}");
                ProfileFetch::Failed
            }
        };
        // `try_set` hands the value back once the gate has been disposed.
        let mounted = fetch.try_set(next.clone()).is_none();
        if let Some(profile) = cacheable_profile(&next, mounted) {
            cache.update(|c| c.insert(&key, profile, now_ms()));
        }
    });
}
