//! Admin section landing page.

use leptos::prelude::*;

use crate::components::section_layout::{ADMIN_ONLY, SectionLayout};

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <SectionLayout allowed=ADMIN_ONLY>
            <section class="section-home">
                <h2>"Platform overview"</h2>
                <p>"Review campaigns, approve influencers and reconcile payments."</p>
            </section>
        </SectionLayout>
    }
}
