//! Workflow jobs: the caller's job list and the three submission forms.

#[cfg(test)]
#[path = "workflows_test.rs"]
mod workflows_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::{JobKind, JobRequest, MatrixProfileArgs, NotebookArgs, SyntheticLoadArgs, WorkflowJob};
use views::{Pollable, format_duration};

use crate::components::require_session::RequireSession;
use crate::components::status_badge::StatusBadge;
use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::util::{auth, clock, form, notify};

const KIND_FILTERS: [(&str, &str); 4] = [
    ("", "All types"),
    ("matrix_profile", "Matrix profile"),
    ("synthetic_load", "Synthetic load"),
    ("notebook", "Notebook"),
];

/// Blank selects every job type.
pub(crate) fn kind_filter(raw: &str) -> Option<JobKind> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| JobKind::from(raw.to_owned()))
}

fn object_id(raw: &str) -> Result<i64, String> {
    form::parse_positive(raw).ok_or_else(|| "object id must be a positive whole number".to_owned())
}

pub(crate) fn matrix_profile_request(object: &str, column: &str, window: &str) -> Result<JobRequest, String> {
    let asset_object_id = object_id(object)?;
    let column = column.trim();
    if column.is_empty() {
        return Err("choose a numeric column".to_owned());
    }
    let window_size = form::parse_positive(window).ok_or_else(|| "window must be a positive whole number".to_owned())?;
    Ok(JobRequest::matrix_profile(&MatrixProfileArgs {
        asset_object_id,
        column: column.to_owned(),
        window_size,
    }))
}

pub(crate) fn synthetic_load_request(object: &str, rows: &str, seed: &str) -> Result<JobRequest, String> {
    let asset_object_id = object_id(object)?;
    let rows = form::parse_positive(rows).ok_or_else(|| "rows must be a positive whole number".to_owned())?;
    let seed = form::parse_optional("seed", seed)?;
    Ok(JobRequest::synthetic_load(&SyntheticLoadArgs {
        asset_object_id,
        rows,
        seed,
    }))
}

pub(crate) fn notebook_request(object: &str) -> Result<JobRequest, String> {
    Ok(JobRequest::notebook(&NotebookArgs {
        asset_object_id: object_id(object)?,
    }))
}

#[component]
pub fn WorkflowsPage() -> impl IntoView {
    view! {
        <RequireSession>
            <Workflows/>
        </RequireSession>
    }
}

#[component]
fn Workflows() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<views::NoticeQueue>>();
    let navigate = use_navigate();

    let jobs = RwSignal::new(Vec::<WorkflowJob>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let kind = RwSignal::new(String::new());
    let submitted = RwSignal::new(None::<i64>);
    let submitting = RwSignal::new(false);

    Effect::new(move || {
        if let Some(id) = submitted.get() {
            navigate(&format!("/workflows/{id}"), NavigateOptions::default());
        }
    });

    let load = {
        let config = config.clone();
        move || {
            loading.set(true);
            let api = auth::api(&config, auth);
            let filter = kind_filter(&kind.get_untracked());
            leptos::task::spawn_local(async move {
                match api.list_jobs(filter).await {
                    Ok(page) => {
                        jobs.set(page.results);
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e)),
                }
                loading.set(false);
            });
        }
    };
    load();

    let on_kind = {
        let load = load.clone();
        move |ev| {
            kind.set(event_target_value(&ev));
            load();
        }
    };

    let submit = Callback::new({
        let config = config.clone();
        move |request: Result<JobRequest, String>| {
            let request = match request {
                Ok(request) => request,
                Err(message) => {
                    notify::notify_error(notices, message);
                    return;
                }
            };
            submitting.set(true);
            let api = auth::api(&config, auth);
            leptos::task::spawn_local(async move {
                match api.submit_job(&request).await {
                    Ok(job) => {
                        notify::notify_success(notices, format!("{} job {} submitted", job.job_type.label(), job.id));
                        submitted.set(Some(job.id));
                    }
                    Err(e) => notify::notify_error(notices, format!("could not submit job: {e}")),
                }
                submitting.set(false);
            });
        }
    });

    view! {
        <div class="page workflows-page">
            <header class="page__header">
                <h1>"Workflows"</h1>
            </header>

            <div class="workflow-forms">
                <MatrixProfileForm on_submit=submit busy=submitting/>
                <SyntheticLoadForm on_submit=submit busy=submitting/>
                <NotebookForm on_submit=submit busy=submitting/>
            </div>

            <section class="panel">
                <header class="panel__header">
                    <h2>"My jobs"</h2>
                    <select class="field__input" on:change=on_kind>
                        {KIND_FILTERS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                    <button class="btn" on:click=move |_| load()>"Reload"</button>
                </header>
                <Show when=move || error.get().is_some()>
                    <p class="page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || !loading.get() fallback=|| view! { <p class="panel__muted">"Loading jobs…"</p> }>
                    <JobTable jobs=jobs/>
                </Show>
            </section>
        </div>
    }
}

#[component]
fn JobTable(jobs: RwSignal<Vec<WorkflowJob>>) -> impl IntoView {
    view! {
        {move || {
            let now = clock::now();
            let rows = jobs.get();
            if rows.is_empty() {
                return view! { <p class="panel__muted">"No jobs yet."</p> }.into_any();
            }
            view! {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Job"</th>
                            <th>"Type"</th>
                            <th>"Object"</th>
                            <th>"Status"</th>
                            <th class="num">"Runtime"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|job| {
                                let status = Some(job.poll_status(now));
                                view! {
                                    <tr>
                                        <td><a href=format!("/workflows/{}", job.id)>{format!("#{}", job.id)}</a></td>
                                        <td>{job.job_type.label().to_owned()}</td>
                                        <td>
                                            {job
                                                .asset_object_id()
                                                .map(|id| view! { <a href=format!("/objects/{id}")>{id}</a> })}
                                        </td>
                                        <td><StatusBadge status=status/></td>
                                        <td class="num">{format_duration(job.runtime(now))}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            }
            .into_any()
        }}
    }
}

#[component]
fn MatrixProfileForm(on_submit: Callback<Result<JobRequest, String>>, #[prop(into)] busy: Signal<bool>) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let object = RwSignal::new(String::new());
    let column = RwSignal::new(String::new());
    let window = RwSignal::new("32".to_owned());
    let columns = RwSignal::new(Vec::<String>::new());
    let columns_error = RwSignal::new(None::<String>);

    // Offer numeric columns from the object's profile once an id is entered.
    let load_columns = move |_| {
        let Some(id) = form::parse_positive::<i64>(&object.get_untracked()) else {
            columns.set(Vec::new());
            return;
        };
        let api = auth::api(&config, auth);
        leptos::task::spawn_local(async move {
            match api.profile(id).await {
                Ok(report) => {
                    let numeric: Vec<String> = report.numeric_columns().into_iter().map(str::to_owned).collect();
                    if let Some(first) = numeric.first() {
                        column.set(first.clone());
                    }
                    columns.set(numeric);
                    columns_error.set(None);
                }
                Err(e) => {
                    columns.set(Vec::new());
                    columns_error.set(Some(e));
                }
            }
        });
    };

    let on_form = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(matrix_profile_request(
            &object.get_untracked(),
            &column.get_untracked(),
            &window.get_untracked(),
        ));
    };

    view! {
        <form class="panel workflow-form" on:submit=on_form>
            <h2>"Matrix profile"</h2>
            <label class="field">
                <span class="field__label">"Object id"</span>
                <input
                    class="field__input"
                    type="text"
                    inputmode="numeric"
                    prop:value=move || object.get()
                    on:input=move |ev| object.set(event_target_value(&ev))
                    on:change=load_columns
                />
            </label>
            <label class="field">
                <span class="field__label">"Column"</span>
                <select class="field__input" on:change=move |ev| column.set(event_target_value(&ev))>
                    {move || {
                        let selected = column.get();
                        columns
                            .get()
                            .into_iter()
                            .map(|name| {
                                let is_selected = name == selected;
                                view! { <option value=name.clone() selected=is_selected>{name.clone()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
                {move || columns_error.get().map(|e| view! { <span class="field__error">{format!("Profile unavailable: {e}")}</span> })}
            </label>
            <label class="field">
                <span class="field__label">"Window"</span>
                <input
                    class="field__input"
                    type="text"
                    inputmode="numeric"
                    prop:value=move || window.get()
                    on:input=move |ev| window.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"Run"</button>
        </form>
    }
}

#[component]
fn SyntheticLoadForm(on_submit: Callback<Result<JobRequest, String>>, #[prop(into)] busy: Signal<bool>) -> impl IntoView {
    let object = RwSignal::new(String::new());
    let rows = RwSignal::new("1000".to_owned());
    let seed = RwSignal::new(String::new());

    let on_form = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(synthetic_load_request(
            &object.get_untracked(),
            &rows.get_untracked(),
            &seed.get_untracked(),
        ));
    };

    view! {
        <form class="panel workflow-form" on:submit=on_form>
            <h2>"Synthetic load"</h2>
            <label class="field">
                <span class="field__label">"Object id"</span>
                <input
                    class="field__input"
                    type="text"
                    inputmode="numeric"
                    prop:value=move || object.get()
                    on:input=move |ev| object.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field__label">"Rows"</span>
                <input
                    class="field__input"
                    type="text"
                    inputmode="numeric"
                    prop:value=move || rows.get()
                    on:input=move |ev| rows.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field__label">"Seed (optional)"</span>
                <input
                    class="field__input"
                    type="text"
                    inputmode="numeric"
                    prop:value=move || seed.get()
                    on:input=move |ev| seed.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"Generate"</button>
        </form>
    }
}

#[component]
fn NotebookForm(on_submit: Callback<Result<JobRequest, String>>, #[prop(into)] busy: Signal<bool>) -> impl IntoView {
    let object = RwSignal::new(String::new());

    let on_form = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(notebook_request(&object.get_untracked()));
    };

    view! {
        <form class="panel workflow-form" on:submit=on_form>
            <h2>"Notebook"</h2>
            <label class="field">
                <span class="field__label">"Object id"</span>
                <input
                    class="field__input"
                    type="text"
                    inputmode="numeric"
                    prop:value=move || object.get()
                    on:input=move |ev| object.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"Launch"</button>
        </form>
    }
}
