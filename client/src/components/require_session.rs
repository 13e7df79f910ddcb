//! Route guard: renders its children only for a signed-in user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.with(|a| !a.loading && a.session.is_some())
            fallback=move || {
                view! {
                    <p class="page__muted">
                        {move || if auth.get().loading { "Loading…" } else { "Redirecting to login…" }}
                    </p>
                }
            }
        >
            {children()}
        </Show>
    }
}
