use leptos::prelude::*;
use views::PollStatus;

/// Lifecycle pill for a validation run or job. `None` renders as unknown.
#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<Option<PollStatus>>) -> impl IntoView {
    view! {
        <span class=move || {
            format!("status-badge {}", status.get().map_or("status--idle", PollStatus::css_modifier))
        }>{move || status.get().map_or("Unknown", PollStatus::label)}</span>
    }
}
