//! Session loading, refresh and route guarding.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes share one unauthenticated-redirect rule, and every REST
//! call builds its [`Api`] from the current session token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::ClientConfig;
use crate::net::api::Api;
use crate::state::auth::AuthState;

/// Signed out once the first session check has finished.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.session.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Load the session now, then refresh it every [`TOKEN_REFRESH_SECS`] so the
/// bearer token never goes stale under a long-lived page.
///
/// [`TOKEN_REFRESH_SECS`]: crate::config::TOKEN_REFRESH_SECS
pub fn install_session_refresh(auth: RwSignal<AuthState>, config: ClientConfig) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        loop {
            let session = crate::net::api::fetch_session(&config).await;
            if session.is_none() && auth.get_untracked().session.is_some() {
                log::info!("session expired");
            }
            auth.set(AuthState {
                session,
                loading: false,
            });
            gloo_timers::future::sleep(std::time::Duration::from_secs(crate::config::TOKEN_REFRESH_SECS)).await;
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        auth.update(|a| a.loading = false);
    }
}

/// REST handle carrying the current bearer token.
pub fn api(config: &ClientConfig, auth: RwSignal<AuthState>) -> Api {
    Api::new(config, auth.get_untracked().token())
}

/// Hand the browser to the identity provider's login, returning to `redirect`.
pub fn login(config: &ClientConfig, redirect: &str) {
    navigate_away(&config.login_url(redirect));
}

pub fn logout(config: &ClientConfig) {
    navigate_away(&config.logout_url());
}

fn navigate_away(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}
