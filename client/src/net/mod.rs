//! Browser networking.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the catalogue REST API and the identity-provider session
//! endpoint; `upload` drives multipart uploads through `XMLHttpRequest` so
//! progress can be reported.

pub mod api;
#[cfg(feature = "csr")]
pub mod upload;
