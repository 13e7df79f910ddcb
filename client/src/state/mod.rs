//! Shared client state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` holds the identity-provider session, `ui` the persisted display
//! preferences. Catalogue search state and notices come straight from the
//! `views` crate and are provided as signals in `app`.

pub mod auth;
pub mod ui;
