//! Detail card for one analysis job, polled until it finalises.
//!
//! DESIGN
//! ======
//! Mounting refreshes the job, which arms the timer while it is still
//! running. A job running past the abandoned threshold stops polling and is
//! flagged; failed jobs show `results.error` with a resubmit action.

#[cfg(test)]
#[path = "job_card_test.rs"]
mod job_card_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::{JobKind, JobRequest, WorkflowJob};
use serde_json::Value;
use views::{PollStatus, Tracker, format_duration};

use crate::components::html_frame::UrlFrame;
use crate::components::status_badge::StatusBadge;
use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::util::poller::{JobFeed, use_poller};
use crate::util::{auth, clock, notify};

/// Notebook jobs report where the provisioned notebook is served.
pub fn notebook_url(job: &WorkflowJob) -> Option<String> {
    if job.job_type != JobKind::Notebook {
        return None;
    }
    job.results
        .as_ref()?
        .get("url")
        .and_then(Value::as_str)
        .filter(|url| url.starts_with("https://") || url.starts_with("http://") || url.starts_with('/'))
        .map(str::to_owned)
}

/// Same workflow, same arguments.
pub fn resubmission(job: &WorkflowJob) -> JobRequest {
    JobRequest {
        job_type: job.job_type.clone(),
        arguments: job.arguments.clone(),
    }
}

#[component]
pub fn JobCard(job_id: i64) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<views::NoticeQueue>>();
    let navigate = use_navigate();

    let poller = use_poller(
        JobFeed {
            config: config.clone(),
            auth,
            job_id,
        },
        Tracker::job(job_id),
    );
    poller.refresh();

    let tracker = poller.tracker();
    let status = Signal::derive(move || tracker.with(Tracker::status));
    let job = move || tracker.with(|t| t.record().cloned());
    let extended = RwSignal::new(None::<Value>);
    let busy = RwSignal::new(false);

    let load_extended = {
        let config = config.clone();
        move |_| {
            if busy.get() {
                return;
            }
            busy.set(true);
            let api = auth::api(&config, auth);
            leptos::task::spawn_local(async move {
                match api.extended_results(job_id).await {
                    Ok(value) => extended.set(Some(value)),
                    Err(e) => notify::notify_error(notices, format!("extended results unavailable: {e}")),
                }
                busy.set(false);
            });
        }
    };

    let resubmitted = RwSignal::new(None::<i64>);
    Effect::new(move || {
        if let Some(next) = resubmitted.get() {
            resubmitted.set(None);
            navigate(&format!("/workflows/{next}"), NavigateOptions::default());
        }
    });

    let resubmit = move |_| {
        let Some(current) = job() else {
            return;
        };
        if busy.get() {
            return;
        }
        busy.set(true);
        let api = auth::api(&config, auth);
        leptos::task::spawn_local(async move {
            match api.submit_job(&resubmission(&current)).await {
                Ok(next) => {
                    notify::notify_success(notices, format!("resubmitted as job {}", next.id));
                    resubmitted.set(Some(next.id));
                }
                Err(e) => notify::notify_error(notices, format!("could not resubmit job: {e}")),
            }
            busy.set(false);
        });
    };

    let on_refresh = move |_| poller.refresh();

    view! {
        <section class="panel job-card">
            <header class="panel__header">
                <h2>
                    {move || job().map_or_else(|| format!("Job {job_id}"), |j| format!("{} #{}", j.job_type.label(), j.id))}
                </h2>
                <StatusBadge status=status/>
                <Show when=move || status.get() == Some(PollStatus::Abandoned)>
                    <span class="status-badge status--bad" title="Still running long after it should have finished">
                        "Possibly abandoned"
                    </span>
                </Show>
            </header>

            {move || {
                job()
                    .map(|j| {
                        let now = clock::now();
                        let object_link = j.asset_object_id().map(|id| {
                            view! { <a href=format!("/objects/{id}")>{format!("object {id}")}</a> }
                        });
                        view! {
                            <dl class="facts">
                                <dt>"Created"</dt>
                                <dd>{j.created_at.to_string()}</dd>
                                <dt>"Runtime"</dt>
                                <dd>{format_duration(j.runtime(now))}</dd>
                                <dt>"Input"</dt>
                                <dd>{object_link}</dd>
                            </dl>
                            {j.error_message().map(|message| view! { <p class="panel__error">{message}</p> })}
                            {notebook_url(&j).map(|src| view! { <UrlFrame title="Notebook" src=src/> })}
                            {j.results
                                .as_ref()
                                .filter(|_| j.job_type != JobKind::Notebook)
                                .map(|results| {
                                    view! {
                                        <pre class="json-block">
                                            {serde_json::to_string_pretty(results).unwrap_or_default()}
                                        </pre>
                                    }
                                })}
                        }
                    })
            }}

            {move || {
                extended
                    .get()
                    .map(|value| {
                        view! {
                            <h3>"Extended results"</h3>
                            <pre class="json-block">{serde_json::to_string_pretty(&value).unwrap_or_default()}</pre>
                        }
                    })
            }}

            <div class="panel__actions">
                <button class="btn btn--ghost" on:click=on_refresh>"Refresh"</button>
                <Show when=move || status.get().is_some_and(PollStatus::is_terminal)>
                    <button class="btn" on:click=load_extended.clone() disabled=move || busy.get()>
                        "Load extended results"
                    </button>
                </Show>
                <Show when=move || matches!(status.get(), Some(PollStatus::Failed | PollStatus::Abandoned))>
                    <button class="btn btn--primary" on:click=resubmit.clone() disabled=move || busy.get()>
                        "Resubmit"
                    </button>
                </Show>
            </div>
        </section>
    }
}
