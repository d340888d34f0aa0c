//! Influencer onboarding form reached through the profile gate.
//!
//! On success the cached user is marked complete and the profile query is
//! invalidated, so the gate re-checks the server on the next section load.

#[cfg(test)]
#[path = "complete_profile_test.rs"]
mod complete_profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::profile_gate::ProfileGate;
use crate::components::section_layout::{INFLUENCER_ONLY, SectionLayout};
use crate::net::types::CompleteProfileRequest;
use crate::paths;
use crate::state::query::{profile_query_key, use_query_cache};
use crate::state::session::use_session;

fn validate_profile_input(
    phone: &str,
    bio: &str,
    social_handle: &str,
    follower_count: &str,
) -> Result<CompleteProfileRequest, &'static str> {
    let (phone, bio, social_handle) = (phone.trim(), bio.trim(), social_handle.trim());
    if phone.is_empty() || bio.is_empty() || social_handle.is_empty() || follower_count.trim().is_empty() {
        return Err("All fields are required.");
    }
    let follower_count = follower_count
        .trim()
        .replace(',', "")
        .parse::<u64>()
        .map_err(|_| "Follower count must be a whole number.")?;
    Ok(CompleteProfileRequest {
        phone: phone.to_owned(),
        bio: bio.to_owned(),
        social_handle: social_handle.to_owned(),
        follower_count,
    })
}

#[component]
pub fn CompleteProfilePage() -> impl IntoView {
    let store = use_session();
    let cache = use_query_cache();
    let navigate = use_navigate();

    let phone = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let social_handle = RwSignal::new(String::new());
    let follower_count = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    Effect::new(move || {
        if done.get() {
            navigate(paths::INFLUENCER, leptos_router::NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request =
            match validate_profile_input(&phone.get(), &bio.get(), &social_handle.get(), &follower_count.get()) {
                Ok(request) => request,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Saving...".to_owned());

        leptos::task::spawn_local(async move {
            match crate::net::api::complete_profile(&request).await {
                Ok(()) => {
                    store.update_user(|user| user.profile_completed = Some(true));
                    if let Some(user) = store.snapshot().user {
                        cache.update(|c| c.invalidate(&profile_query_key(&user.id)));
                    }
                    info.set(String::new());
                    done.set(true);
                }
                Err(e) => {
                    leptos::logging::warn!("profile submit failed: {e}");
                    info.set(e.user_message());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <SectionLayout allowed=INFLUENCER_ONLY>
            <ProfileGate>
                <section class="complete-profile">
                    <h2>"Complete your profile"</h2>
                    <p>"Brands see these details when reviewing campaign applications."</p>
                    <form class="profile-form" on:submit=on_submit>
                        <input
                            class="profile-input"
                            type="tel"
                            placeholder="Phone"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                        <textarea
                            class="profile-input"
                            placeholder="Short bio"
                            prop:value=move || bio.get()
                            on:input=move |ev| bio.set(event_target_value(&ev))
                        ></textarea>
                        <input
                            class="profile-input"
                            type="text"
                            placeholder="@handle"
                            prop:value=move || social_handle.get()
                            on:input=move |ev| social_handle.set(event_target_value(&ev))
                        />
                        <input
                            class="profile-input"
                            type="text"
                            inputmode="numeric"
                            placeholder="Followers"
                            prop:value=move || follower_count.get()
                            on:input=move |ev| follower_count.set(event_target_value(&ev))
                        />
                        <button class="btn profile-submit" type="submit" disabled=move || busy.get()>
                            "Save profile"
                        </button>
                    </form>
                    <Show when=move || !info.get().is_empty()>
                        <p class="profile-message">{move || info.get()}</p>
                    </Show>
                </section>
            </ProfileGate>
        </SectionLayout>
    }
}
