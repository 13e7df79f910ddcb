//! Identity-provider session for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards read `loading`/`session` to decide on login redirects; every
//! REST call takes its bearer token from here.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Deserialize;

/// `GET {identity_url}/session` payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Session {
    /// Display name when the provider supplies one, otherwise the username.
    pub fn display(&self) -> &str {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }
}

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    /// State at startup, before the first session check completes.
    pub fn pending() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }

    /// Whether the signed-in user owns something created by `username`.
    pub fn owns(&self, username: &str) -> bool {
        self.username().is_some_and(|me| me == username)
    }
}
