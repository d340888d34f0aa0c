//! Chrome shared by the admin, client and influencer sections.

use leptos::prelude::*;

use super::role_gate::RoleGate;
use crate::net::types::Role;
use crate::state::query::{QueryCache, use_query_cache};
use crate::state::session::use_session;

pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const CLIENT_ONLY: &[Role] = &[Role::Client];
pub const INFLUENCER_ONLY: &[Role] = &[Role::Influencer];

/// Role-gated section with a header showing the signed-in user and logout.
#[component]
pub fn SectionLayout(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let store = use_session();
    let session = store.session();
    let cache = use_query_cache();

    let identity = move || {
        session.with(|s| {
            s.user
                .as_ref()
                .map(|user| (user.name.clone(), user.role.label()))
                .unwrap_or_else(|| (String::new(), ""))
        })
    };

    // The role gate sends the signed-out visitor to /login.
    let on_logout = move |_| {
        cache.update(QueryCache::clear);
        store.logout();
    };

    view! {
        <RoleGate allowed=allowed>
            <div class="section-layout">
                <header class="section-layout__header">
                    <span class="section-layout__title">{move || identity().1}</span>
                    <span class="section-layout__spacer"></span>
                    <span class="section-layout__user">{move || identity().0}</span>
                    <button class="btn section-layout__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </header>
                <main class="section-layout__body">{children()}</main>
            </div>
        </RoleGate>
    }
}
