//! Build-time endpoints for the browser front end.
//!
//! Both bases default to same-origin paths so a reverse proxy can front the
//! API and the identity provider; set `CATALOGUE_API_BASE` or
//! `CATALOGUE_IDENTITY_URL` when building to point elsewhere.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use records::Endpoint;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_IDENTITY_URL: &str = "/auth";

/// Session token lifetime is short; refresh well inside it.
pub const TOKEN_REFRESH_SECS: u64 = 240;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub identity_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_parts(option_env!("CATALOGUE_API_BASE"), option_env!("CATALOGUE_IDENTITY_URL"))
    }
}

impl ClientConfig {
    /// Blank overrides fall back to the defaults; trailing slashes are dropped.
    pub fn from_parts(api_base: Option<&str>, identity_url: Option<&str>) -> Self {
        Self {
            api_base: normalise(api_base, DEFAULT_API_BASE),
            identity_url: normalise(identity_url, DEFAULT_IDENTITY_URL),
        }
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        endpoint.url(&self.api_base)
    }

    pub fn session_url(&self) -> String {
        format!("{}/session", self.identity_url)
    }

    /// Identity-provider login, returning the browser to `redirect` afterwards.
    pub fn login_url(&self, redirect: &str) -> String {
        format!("{}/login?redirect={}", self.identity_url, urlencoding::encode(redirect))
    }

    pub fn logout_url(&self) -> String {
        format!("{}/logout", self.identity_url)
    }
}

fn normalise(raw: Option<&str>, fallback: &str) -> String {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(fallback);
    value.trim_end_matches('/').to_owned()
}
