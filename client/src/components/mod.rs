//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render catalogue records and tracker state while reading and
//! writing shared state from Leptos context providers.

pub mod app_header;
pub mod asset_form;
pub mod html_frame;
pub mod job_card;
pub mod notice_tray;
pub mod object_table;
pub mod require_session;
pub mod status_badge;
pub mod upload_form;
pub mod validation_panel;
