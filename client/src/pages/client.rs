//! Client (brand) section landing page.

use leptos::prelude::*;

use crate::components::section_layout::{CLIENT_ONLY, SectionLayout};

#[component]
pub fn ClientPage() -> impl IntoView {
    view! {
        <SectionLayout allowed=CLIENT_ONLY>
            <section class="section-home">
                <h2>"Your campaigns"</h2>
                <p>"Create campaigns and surveys, then review influencer submissions."</p>
            </section>
        </SectionLayout>
    }
}
