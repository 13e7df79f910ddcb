//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use views::{CatalogueState, NoticeQueue};

use crate::components::{app_header::AppHeader, notice_tray::NoticeTray};
use crate::config::ClientConfig;
use crate::pages::{
    asset::AssetPage, assets::AssetsPage, job::JobPage, login::LoginPage, object::ObjectPage, search::SearchPage,
    workflows::WorkflowsPage,
};
use crate::state::auth::AuthState;
use crate::state::ui::{UI_PREFS_KEY, UiPrefs, UiState};
use crate::util::{auth, prefs};

/// Root application component.
///
/// Provides the shared contexts, starts the session refresh loop and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::default();
    let stored = prefs::load::<UiPrefs>(UI_PREFS_KEY).unwrap_or_default();
    let ui_state = UiState::from_prefs(stored, prefs::dark_preference());
    prefs::apply_theme(ui_state.dark_mode);

    let auth = RwSignal::new(AuthState::pending());
    let catalogue = RwSignal::new(CatalogueState::new(ui_state.group_by_asset));
    let ui = RwSignal::new(ui_state);
    let notices = RwSignal::new(NoticeQueue::default());

    provide_context(config.clone());
    provide_context(auth);
    provide_context(ui);
    provide_context(notices);
    provide_context(catalogue);

    auth::install_session_refresh(auth, config);

    view! {
        <Stylesheet id="catalogue" href="/catalogue.css"/>
        <Title text="Data Catalogue"/>

        <Router>
            <AppHeader/>
            <NoticeTray/>
            <main class="app-main">
                <ErrorBoundary fallback=|errors| {
                    view! {
                        <div class="page page--error">
                            <h1>"Something went wrong"</h1>
                            <ul>
                                {move || {
                                    errors
                                        .get()
                                        .into_iter()
                                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                        .collect_view()
                                }}
                            </ul>
                            <button class="btn" on:click=|_| reload()>"Reload"</button>
                        </div>
                    }
                }>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("") view=AssetsPage/>
                        <Route path=(StaticSegment("assets"), ParamSegment("uuid")) view=AssetPage/>
                        <Route path=(StaticSegment("objects"), ParamSegment("id")) view=ObjectPage/>
                        <Route path=StaticSegment("search") view=SearchPage/>
                        <Route path=StaticSegment("workflows") view=WorkflowsPage/>
                        <Route path=(StaticSegment("workflows"), ParamSegment("id")) view=JobPage/>
                    </Routes>
                </ErrorBoundary>
            </main>
        </Router>
    }
}

fn reload() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
