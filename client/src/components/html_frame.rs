//! Embedded documents: server-rendered visualizations and notebooks.
//!
//! Visualizations are fetched with the bearer token and injected through
//! `srcdoc`; notebooks are served by their own host and loaded by URL.

use leptos::prelude::*;

#[component]
pub fn HtmlFrame(#[prop(into)] title: String, html: String) -> impl IntoView {
    view! { <iframe class="report-frame" title=title srcdoc=html sandbox="allow-scripts"></iframe> }
}

#[component]
pub fn UrlFrame(#[prop(into)] title: String, src: String) -> impl IntoView {
    view! { <iframe class="report-frame report-frame--tall" title=title src=src></iframe> }
}
