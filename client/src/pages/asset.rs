//! Asset detail: metadata, owner edits, object table and uploads.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::{Asset, AssetDraft, AssetObject};
use uuid::Uuid;

use crate::components::asset_form::{AssetForm, patch_from};
use crate::components::object_table::ObjectTable;
use crate::components::require_session::RequireSession;
use crate::components::upload_form::UploadForm;
use crate::config::ClientConfig;
use crate::pages::use_param;
use crate::state::auth::AuthState;
use crate::util::{auth, notify};

#[component]
pub fn AssetPage() -> impl IntoView {
    let uuid = use_param::<Uuid>("uuid");
    view! {
        <RequireSession>
            {move || uuid.get().map(|uuid| view! { <AssetDetail uuid=uuid/> })}
        </RequireSession>
    }
}

#[component]
fn AssetDetail(uuid: Uuid) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<views::NoticeQueue>>();
    let navigate = use_navigate();

    let asset = RwSignal::new(None::<Asset>);
    let error = RwSignal::new(None::<String>);
    let editing = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let deleted = RwSignal::new(false);

    {
        let api = auth::api(&config, auth);
        leptos::task::spawn_local(async move {
            match api.get_asset(uuid).await {
                Ok(loaded) => asset.set(Some(loaded)),
                Err(e) => error.set(Some(e)),
            }
        });
    }

    Effect::new(move || {
        if deleted.get() {
            navigate("/", NavigateOptions::default());
        }
    });

    let is_owner = move || asset.with(|a| a.as_ref().is_some_and(|a| auth.with(|s| s.owns(&a.username))));
    let objects = Signal::derive(move || asset.with(|a| a.as_ref().map(|a| a.objects.clone()).unwrap_or_default()));

    let on_save = {
        let config = config.clone();
        Callback::new(move |draft: AssetDraft| {
            let Some(current) = asset.get_untracked() else {
                return;
            };
            let patch = patch_from(&current, &draft);
            if patch.is_empty() {
                editing.set(false);
                return;
            }
            saving.set(true);
            let api = auth::api(&config, auth);
            leptos::task::spawn_local(async move {
                match api.update_asset(uuid, &patch).await {
                    Ok(updated) => {
                        asset.set(Some(updated));
                        editing.set(false);
                        notify::notify_success(notices, "asset updated");
                    }
                    Err(e) => notify::notify_error(notices, format!("could not update asset: {e}")),
                }
                saving.set(false);
            });
        })
    };

    let on_delete_asset = {
        let config = config.clone();
        move |_| {
            if !confirm("Delete this asset and all of its objects?") {
                return;
            }
            let api = auth::api(&config, auth);
            leptos::task::spawn_local(async move {
                match api.delete_asset(uuid).await {
                    Ok(()) => {
                        notify::notify_success(notices, "asset deleted");
                        deleted.set(true);
                    }
                    Err(e) => notify::notify_error(notices, format!("could not delete asset: {e}")),
                }
            });
        }
    };

    let on_delete_object = {
        let config = config.clone();
        Callback::new(move |id: i64| {
            if !confirm("Delete this object?") {
                return;
            }
            let api = auth::api(&config, auth);
            leptos::task::spawn_local(async move {
                match api.delete_object(id).await {
                    Ok(()) => {
                        asset.update(|a| {
                            if let Some(a) = a {
                                a.objects.retain(|o| o.id != id);
                            }
                        });
                        notify::notify_success(notices, "object deleted");
                    }
                    Err(e) => notify::notify_error(notices, format!("could not delete object: {e}")),
                }
            });
        })
    };

    let on_uploaded = Callback::new(move |object: AssetObject| {
        asset.update(|a| {
            if let Some(a) = a {
                a.objects.push(object);
            }
        });
    });

    view! {
        <div class="page asset-page">
            <Show when=move || error.get().is_some()>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                asset
                    .get()
                    .map(|a| {
                        view! {
                            <header class="page__header">
                                <h1>{a.name.clone()}</h1>
                                <span class="status-badge">{a.access_level.label()}</span>
                                <span class="page__muted">{format!("owned by {}", a.username)}</span>
                            </header>
                            <p class="asset-page__description">{a.description.clone()}</p>
                        }
                    })
            }}

            <Show when=is_owner>
                <div class="panel__actions">
                    <button class="btn" on:click=move |_| editing.update(|v| *v = !*v)>
                        {move || if editing.get() { "Cancel edit" } else { "Edit" }}
                    </button>
                    <button class="btn btn--danger" on:click=on_delete_asset.clone()>"Delete asset"</button>
                </div>
                <Show when=move || editing.get()>
                    <section class="panel">
                        {move || {
                            asset
                                .get()
                                .map(|current| {
                                    view! {
                                        <AssetForm initial=current on_submit=on_save submit_label="Save" busy=saving/>
                                    }
                                })
                        }}
                    </section>
                </Show>
                <section class="panel">
                    <h2>"Upload"</h2>
                    <UploadForm asset=uuid on_uploaded=on_uploaded/>
                </section>
            </Show>

            <section class="panel">
                <h2>"Objects"</h2>
                {move || {
                    if is_owner() {
                        view! { <ObjectTable objects=objects on_delete=on_delete_object/> }.into_any()
                    } else {
                        view! { <ObjectTable objects=objects/> }.into_any()
                    }
                }}
            </section>
        </div>
    }
}

fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}
