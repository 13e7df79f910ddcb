//! Top navigation bar with theme toggle and the signed-in identity.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn AppHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<ClientConfig>();

    let identity = move || {
        auth.with(|a| a.session.as_ref().map(|s| s.display().to_owned()))
            .unwrap_or_default()
    };

    view! {
        <header class="toolbar app-header">
            <a class="toolbar__brand" href="/">"Data Catalogue"</a>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <nav class="toolbar__nav">
                <a href="/">"My assets"</a>
                <a href="/search">"Search"</a>
                <a href="/workflows">"Workflows"</a>
            </nav>

            <span class="toolbar__spacer"></span>

            <button
                class="btn toolbar__dark-toggle"
                on:click=move |_| {
                    let next = crate::util::prefs::toggle_theme(ui.get_untracked().dark_mode);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <Show when=move || auth.with(|a| a.session.is_some())>
                <span class="toolbar__self">{identity}</span>
                <button
                    class="btn toolbar__logout"
                    on:click={
                        let config = config.clone();
                        move |_| crate::util::auth::logout(&config)
                    }
                >
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
