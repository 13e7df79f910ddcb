//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped loading and delegates rendering details to
//! `components`. Pages behind a session wrap their content in
//! `RequireSession`.

pub mod asset;
pub mod assets;
pub mod job;
pub mod login;
pub mod object;
pub mod search;
pub mod workflows;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::str::FromStr;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Rendered through the app's `ErrorBoundary`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("invalid {param} in URL: {raw:?}")]
    BadParam { param: &'static str, raw: String },
}

pub fn parse_param<T: FromStr>(param: &'static str, raw: Option<String>) -> Result<T, PageError> {
    let raw = raw.unwrap_or_default();
    raw.parse().map_err(|_| PageError::BadParam { param, raw })
}

/// Reactive typed route parameter.
pub(crate) fn use_param<T>(param: &'static str) -> Memo<Result<T, PageError>>
where
    T: FromStr + PartialEq + Clone + Send + Sync + 'static,
{
    let params = use_params_map();
    Memo::new(move |_| parse_param(param, params.with(|p| p.get(param))))
}
