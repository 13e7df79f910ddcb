//! Data-quality validation for one object: status, summary, start/retry.
//!
//! The panel refreshes on mount, so a run already in progress is polled to
//! completion. Polling also begins when the user starts a run and ends when
//! the backend reports a final state or the panel unmounts.

#[cfg(test)]
#[path = "validation_panel_test.rs"]
mod validation_panel_test;

use leptos::prelude::*;
use records::ValidationResult;
use views::{Phase, PollStatus, Tracker, format_percent, pass_rate_band};

use crate::components::status_badge::StatusBadge;
use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::util::poller::{ValidationFeed, use_poller};

/// A run the backend already reports as in progress cannot be started again.
pub fn start_disabled(status: Option<PollStatus>, polling: bool, triggered: bool) -> bool {
    polling || triggered || status == Some(PollStatus::InProgress)
}

pub fn start_label(status: Option<PollStatus>) -> &'static str {
    match status {
        None | Some(PollStatus::NotStarted) => "Run validation",
        Some(PollStatus::InProgress) => "Validating…",
        Some(PollStatus::Failed) => "Retry validation",
        Some(PollStatus::Complete | PollStatus::Unsupported | PollStatus::Abandoned) => "Run again",
    }
}

#[component]
pub fn ValidationPanel(object_id: i64) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let poller = use_poller(
        ValidationFeed {
            config,
            auth,
            object_id,
        },
        Tracker::validation(),
    );
    poller.refresh();

    let tracker = poller.tracker();
    let status = Signal::derive(move || tracker.with(Tracker::status));
    let record = move || tracker.with(|t| t.record().cloned());
    let error = move || tracker.with(|t| t.error().map(str::to_owned));

    let on_start = {
        let poller = poller.clone();
        move |_| poller.start()
    };
    let on_refresh = {
        let poller = poller.clone();
        move |_| poller.refresh()
    };
    let on_dismiss = move |_| poller.dismiss_error();

    view! {
        <section class="panel validation-panel">
            <header class="panel__header">
                <h2>"Data quality"</h2>
                <StatusBadge status=status/>
            </header>
            <Show when=move || tracker.with(|t| t.phase() == Phase::Loading)>
                <p class="panel__muted">"Loading validation status…"</p>
            </Show>
            {move || record().map(|result| view! { <ValidationSummary result=result/> })}
            <Show when=move || error().is_some()>
                <p class="panel__error">
                    {move || error().unwrap_or_default()}
                    <button class="btn btn--ghost" on:click=on_dismiss.clone()>"Dismiss"</button>
                </p>
            </Show>
            <div class="panel__actions">
                <button
                    class="btn btn--primary"
                    on:click=on_start
                    disabled=move || tracker.with(|t| start_disabled(t.status(), t.is_polling(), t.is_triggered()))
                >
                    {move || start_label(status.get())}
                </button>
                <button class="btn btn--ghost" on:click=on_refresh>"Refresh"</button>
            </div>
        </section>
    }
}

#[component]
fn ValidationSummary(result: ValidationResult) -> impl IntoView {
    let rate = result.overall_pass_rate();
    let band = pass_rate_band(rate);
    let failing = result
        .failing_entries()
        .into_iter()
        .map(|entry| {
            view! {
                <tr>
                    <td>{entry.feature.clone()}</td>
                    <td>{entry.validator.clone()}</td>
                    <td>{entry.rule.clone()}</td>
                    <td class="num">{entry.fail}</td>
                    <td class="num">{format_percent(entry.pass_rate())}</td>
                </tr>
            }
        })
        .collect_view();
    let has_failures = result.total_fail > 0;

    view! {
        <div class="validation-summary">
            <p class=format!("validation-summary__rate {}", band.css_modifier())>
                {format_percent(rate)}
                <span class="panel__muted">" passing"</span>
            </p>
            <p class="panel__muted">
                {format!("{} valid, {} failed", result.total_valid, result.total_fail)}
                {result.processed_rows.map(|rows| format!(" across {rows} rows"))}
            </p>
            {result.error_message.clone().map(|message| view! { <p class="panel__error">{message}</p> })}
            {has_failures
                .then(|| {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Feature"</th>
                                    <th>"Validator"</th>
                                    <th>"Rule"</th>
                                    <th class="num">"Failed"</th>
                                    <th class="num">"Pass rate"</th>
                                </tr>
                            </thead>
                            <tbody>{failing}</tbody>
                        </table>
                    }
                })}
        </div>
    }
}
