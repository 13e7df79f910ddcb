//! Sign-in page. Authentication happens at the identity provider; this page
//! only hands the browser over and comes back to `/` afterwards.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::auth::AuthState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    Effect::new(move || {
        if auth.with(|a| a.session.is_some()) {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_sign_in = move |_| crate::util::auth::login(&config, "/");

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Data Catalogue"</h1>
                <p class="login-card__subtitle">"Browse, validate and analyse research datasets."</p>
                <Show
                    when=move || !auth.get().loading
                    fallback=|| view! { <p class="login-message">"Checking session…"</p> }
                >
                    <button class="login-button" on:click=on_sign_in.clone()>
                        "Sign in"
                    </button>
                </Show>
            </div>
        </div>
    }
}
