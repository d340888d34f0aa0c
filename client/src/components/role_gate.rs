//! Route guard restricting a subtree to specific roles.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::session::use_session;
use crate::util::auth::{GateState, evaluate_role_gate, install_gate_redirect};

/// Renders `children` only once the session is hydrated and the user's role
/// is in `allowed`; otherwise redirects to login or the user's own section.
#[component]
pub fn RoleGate(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let session = use_session().session();
    let navigate = use_navigate();

    let state = Memo::new(move |_| evaluate_role_gate(&session.get(), allowed));
    install_gate_redirect(move || state.get().redirect_target(), navigate);

    view! {
        <Show
            when=move || state.get() == GateState::Authorized
            fallback=move || view! { <GatePending deferred=Signal::derive(move || state.get() == GateState::Deferred)/> }
        >
            {children()}
        </Show>
    }
}

/// Placeholder shown while a gate is undecided or about to redirect.
#[component]
pub fn GatePending(#[prop(into)] deferred: Signal<bool>) -> impl IntoView {
    view! {
        <div class="gate-pending">
            <p>{move || if deferred.get() { "Loading..." } else { "Redirecting..." }}</p>
        </div>
    }
}
