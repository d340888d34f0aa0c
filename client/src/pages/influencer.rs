//! Influencer section landing page.

#[cfg(test)]
#[path = "influencer_test.rs"]
mod influencer_test;

use leptos::prelude::*;

use crate::components::profile_gate::ProfileGate;
use crate::components::section_layout::{INFLUENCER_ONLY, SectionLayout};
use crate::net::types::UserStatus;
use crate::state::session::use_session;

/// Banner text for the influencer's account status.
fn status_notice(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Pending => "Your account is awaiting approval. Campaign invitations unlock once approved.",
        UserStatus::Approved => "You're approved. Browse open campaigns and track your submissions.",
        UserStatus::Rejected => "Your application was not approved. Contact support for details.",
    }
}

#[component]
pub fn InfluencerPage() -> impl IntoView {
    let session = use_session().session();
    let notice = move || session.with(|s| s.user.as_ref().map_or("", |user| status_notice(user.status)));

    view! {
        <SectionLayout allowed=INFLUENCER_ONLY>
            <ProfileGate>
                <section class="section-home">
                    <h2>"Creator home"</h2>
                    <p class="section-home__notice">{notice}</p>
                </section>
            </ProfileGate>
        </SectionLayout>
    }
}
