//! Object detail: metadata, validation, reports, visualization and download.

use leptos::prelude::*;
use records::{AssetObject, IntegrityReport, ObjectPatch, ProfileReport, RowCount};

use crate::components::html_frame::HtmlFrame;
use crate::components::require_session::RequireSession;
use crate::components::validation_panel::ValidationPanel;
use crate::config::ClientConfig;
use crate::pages::use_param;
use crate::state::auth::AuthState;
use crate::util::{auth, form, notify};
use views::format_bytes;

#[component]
pub fn ObjectPage() -> impl IntoView {
    let id = use_param::<i64>("id");
    view! {
        <RequireSession>
            {move || id.get().map(|id| view! { <ObjectDetail id=id/> })}
        </RequireSession>
    }
}

/// One report slot: not yet loaded, loaded, or failed with a message.
#[derive(Clone, Debug, PartialEq)]
enum Report<T> {
    Pending,
    Ready(T),
    Unavailable(String),
}

impl<T> From<Result<T, String>> for Report<T> {
    fn from(result: Result<T, String>) -> Self {
        result.map_or_else(Report::Unavailable, Report::Ready)
    }
}

#[component]
fn ObjectDetail(id: i64) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<views::NoticeQueue>>();

    let object = RwSignal::new(None::<AssetObject>);
    let error = RwSignal::new(None::<String>);
    let rows = RwSignal::new(Report::<RowCount>::Pending);
    let profile = RwSignal::new(Report::<ProfileReport>::Pending);
    let integrity = RwSignal::new(Report::<IntegrityReport>::Pending);
    let visualization = RwSignal::new(None::<Report<String>>);
    let editing = RwSignal::new(false);
    let downloading = RwSignal::new(false);

    {
        let api = auth::api(&config, auth);
        leptos::task::spawn_local(async move {
            match api.get_object(id).await {
                Ok(loaded) => object.set(Some(loaded)),
                Err(e) => error.set(Some(e)),
            }
            rows.set(api.row_count(id).await.into());
            profile.set(api.profile(id).await.into());
            integrity.set(api.integrity(id).await.into());
        });
    }

    let load_visualization = {
        let config = config.clone();
        move |_| {
            visualization.set(Some(Report::Pending));
            let api = auth::api(&config, auth);
            leptos::task::spawn_local(async move {
                visualization.set(Some(api.visualization(id).await.into()));
            });
        }
    };

    let on_download = {
        let config = config.clone();
        move |_| {
            let Some(current) = object.get_untracked() else {
                return;
            };
            downloading.set(true);
            let api = auth::api(&config, auth);
            leptos::task::spawn_local(async move {
                match api.download(id).await {
                    Ok(bytes) => {
                        #[cfg(feature = "csr")]
                        {
                            if let Err(e) = crate::util::download::save_bytes(current.file_name(), &bytes) {
                                notify::notify_error(notices, format!("could not save download: {e}"));
                            }
                        }
                        #[cfg(not(feature = "csr"))]
                        let _ = (current, bytes);
                    }
                    Err(e) => notify::notify_error(notices, format!("download failed: {e}")),
                }
                downloading.set(false);
            });
        }
    };

    let edit_name = RwSignal::new(String::new());
    let edit_description = RwSignal::new(String::new());
    let edit_tags = RwSignal::new(String::new());
    let open_edit = move |_| {
        if let Some(current) = object.get_untracked() {
            edit_name.set(current.name.clone().unwrap_or_default());
            edit_description.set(current.description.clone().unwrap_or_default());
            edit_tags.set(current.tags.join(", "));
        }
        editing.update(|v| *v = !*v);
    };
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let patch = ObjectPatch {
            name: Some(edit_name.get_untracked()),
            description: Some(edit_description.get_untracked()),
            tags: Some(form::split_tags(&edit_tags.get_untracked())),
            meta: None,
        };
        let api = auth::api(&config, auth);
        leptos::task::spawn_local(async move {
            match api.update_object(id, &patch).await {
                Ok(updated) => {
                    object.set(Some(updated));
                    editing.set(false);
                    notify::notify_success(notices, "object updated");
                }
                Err(e) => notify::notify_error(notices, format!("could not update object: {e}")),
            }
        });
    };

    view! {
        <div class="page object-page">
            <Show when=move || error.get().is_some()>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || object.get().map(|o| view! { <ObjectFacts object=o/> })}

            <div class="panel__actions">
                <button class="btn btn--primary" on:click=on_download disabled=move || downloading.get()>
                    {move || if downloading.get() { "Downloading…" } else { "Download" }}
                </button>
                <button class="btn" on:click=open_edit>
                    {move || if editing.get() { "Cancel edit" } else { "Edit details" }}
                </button>
            </div>

            <Show when=move || editing.get()>
                <form class="panel asset-form" on:submit=on_save.clone()>
                    <label class="field">
                        <span class="field__label">"Name"</span>
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || edit_name.get()
                            on:input=move |ev| edit_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Description"</span>
                        <textarea
                            class="field__input"
                            rows="3"
                            prop:value=move || edit_description.get()
                            on:input=move |ev| edit_description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="field">
                        <span class="field__label">"Tags (comma separated)"</span>
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || edit_tags.get()
                            on:input=move |ev| edit_tags.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit">"Save"</button>
                </form>
            </Show>

            <ValidationPanel object_id=id/>

            <section class="panel reports">
                <h2>"Reports"</h2>
                <h3>"Row count"</h3>
                {move || match rows.get() {
                    Report::Pending => view! { <p class="panel__muted">"Loading…"</p> }.into_any(),
                    Report::Ready(count) => view! { <p>{format!("{} rows", count.rows)}</p> }.into_any(),
                    Report::Unavailable(e) => view! { <p class="panel__muted">{format!("Unavailable: {e}")}</p> }.into_any(),
                }}
                <h3>"Integrity"</h3>
                {move || match integrity.get() {
                    Report::Pending => view! { <p class="panel__muted">"Loading…"</p> }.into_any(),
                    Report::Ready(report) => view! { <IntegritySummary report=report/> }.into_any(),
                    Report::Unavailable(e) => view! { <p class="panel__muted">{format!("Unavailable: {e}")}</p> }.into_any(),
                }}
                <h3>"Profile"</h3>
                {move || match profile.get() {
                    Report::Pending => view! { <p class="panel__muted">"Loading…"</p> }.into_any(),
                    Report::Ready(report) => view! { <ProfileTable report=report/> }.into_any(),
                    Report::Unavailable(e) => view! { <p class="panel__muted">{format!("Unavailable: {e}")}</p> }.into_any(),
                }}
            </section>

            <section class="panel">
                <header class="panel__header">
                    <h2>"Visualization"</h2>
                    <button class="btn" on:click=load_visualization>"Render"</button>
                </header>
                {move || match visualization.get() {
                    None => ().into_any(),
                    Some(Report::Pending) => view! { <p class="panel__muted">"Rendering…"</p> }.into_any(),
                    Some(Report::Ready(html)) => view! { <HtmlFrame title="Visualization" html=html/> }.into_any(),
                    Some(Report::Unavailable(e)) => view! { <p class="panel__error">{e}</p> }.into_any(),
                }}
            </section>
        </div>
    }
}

#[component]
fn ObjectFacts(object: AssetObject) -> impl IntoView {
    let key = object
        .storage_key()
        .map_or_else(|| object.key.clone(), |key| key.pretty_file_name());
    view! {
        <header class="page__header">
            <h1>{object.display_name()}</h1>
            {object.format().map(|format| view! { <span class="status-badge">{format}</span> })}
        </header>
        {object.description.clone().map(|d| view! { <p>{d}</p> })}
        <dl class="facts">
            <dt>"File"</dt>
            <dd>{key}</dd>
            <dt>"Size"</dt>
            <dd>{object.size.map_or_else(|| "—".to_owned(), format_bytes)}</dd>
            <dt>"Added"</dt>
            <dd>{object.created_at.to_string()}</dd>
            <dt>"SHA-256"</dt>
            <dd class="mono">{object.sha256_hash.clone().unwrap_or_else(|| "—".to_owned())}</dd>
            <dt>"Tags"</dt>
            <dd>{object.tags.join(", ")}</dd>
        </dl>
    }
}

#[component]
fn IntegritySummary(report: IntegrityReport) -> impl IntoView {
    let band = if report.verified { "band--good" } else { "band--bad" };
    view! {
        <p class=band>
            {if report.verified { "Verified" } else { "Not verified" }}
            {report.proof_id.map(|proof| format!(" · proof {proof}"))}
            {report.checked_at.map(|at| format!(" · checked {at}"))}
        </p>
        {report.detail.map(|detail| view! { <p class="panel__muted">{detail}</p> })}
    }
}

#[component]
fn ProfileTable(report: ProfileReport) -> impl IntoView {
    let fmt = |value: Option<f64>| value.map_or_else(|| "—".to_owned(), |v| format!("{v:.3}"));
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Column"</th>
                    <th>"Type"</th>
                    <th class="num">"Nulls"</th>
                    <th class="num">"Distinct"</th>
                    <th class="num">"Min"</th>
                    <th class="num">"Mean"</th>
                    <th class="num">"Max"</th>
                </tr>
            </thead>
            <tbody>
                {report
                    .columns
                    .into_iter()
                    .map(|column| {
                        view! {
                            <tr>
                                <td>{column.name}</td>
                                <td>{column.dtype}</td>
                                <td class="num">{column.nulls}</td>
                                <td class="num">{column.distinct.map_or_else(|| "—".to_owned(), |d| d.to_string())}</td>
                                <td class="num">{fmt(column.min)}</td>
                                <td class="num">{fmt(column.mean)}</td>
                                <td class="num">{fmt(column.max)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
