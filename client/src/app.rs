//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::net::api;
use crate::pages::{
    admin::AdminPage, client::ClientPage, complete_profile::CompleteProfilePage, home::HomePage,
    influencer::InfluencerPage, login::LoginPage,
};
use crate::state::query::QueryCache;
use crate::state::session::SessionStore;
use crate::util::storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and query cache, configures the API facade,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let storage = storage::default_store();
    api::configure(&AppConfig::load(), storage.clone());

    let session = SessionStore::new(storage);
    let queries = RwSignal::new(QueryCache::default());
    provide_context(session);
    provide_context(queries);

    // Effects only run in the browser, so server-rendered HTML always shows
    // the deferred state and matches the first client render.
    Effect::new(move || session.hydrate());

    view! {
        <Stylesheet id="leptos" href="/pkg/dashboard.css"/>
        <Title text="Creator Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route path=StaticSegment("client") view=ClientPage/>
                <Route path=StaticSegment("influencer") view=InfluencerPage/>
                <Route
                    path=(StaticSegment("influencer"), StaticSegment("complete-profile"))
                    view=CompleteProfilePage
                />
            </Routes>
        </Router>
    }
}
