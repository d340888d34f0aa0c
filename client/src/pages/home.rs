//! Root route: sends each visitor to the section for their role.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session;
use crate::util::auth::{install_gate_redirect, root_redirect};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session().session();
    let navigate = use_navigate();

    install_gate_redirect(move || session.with(root_redirect), navigate);

    view! {
        <div class="home-page">
            <p>"Loading..."</p>
        </div>
    }
}
