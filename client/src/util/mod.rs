//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, timers, identity
//! redirects) from page and component logic.

pub mod auth;
pub mod clock;
#[cfg(feature = "csr")]
pub mod download;
pub mod form;
pub mod notify;
pub mod poller;
pub mod prefs;
