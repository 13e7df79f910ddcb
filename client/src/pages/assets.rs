//! Landing page: the signed-in user's assets and a create form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::{Asset, AssetDraft, AssetQuery};

use crate::components::asset_form::AssetForm;
use crate::components::require_session::RequireSession;
use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::util::{auth, notify};

#[component]
pub fn AssetsPage() -> impl IntoView {
    view! {
        <RequireSession>
            <MyAssets/>
        </RequireSession>
    }
}

#[component]
fn MyAssets() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<views::NoticeQueue>>();
    let navigate = use_navigate();

    let assets = RwSignal::new(Vec::<Asset>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let filter = RwSignal::new(String::new());
    let show_create = RwSignal::new(false);
    let creating = RwSignal::new(false);
    let created = RwSignal::new(None::<uuid::Uuid>);

    let load = {
        let config = config.clone();
        move || {
            loading.set(true);
            let api = auth::api(&config, auth);
            let search = Some(filter.get_untracked()).filter(|s| !s.trim().is_empty());
            leptos::task::spawn_local(async move {
                match api.list_assets(AssetQuery { mine: true, search, page: None }).await {
                    Ok(page) => {
                        assets.set(page.results);
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e)),
                }
                loading.set(false);
            });
        }
    };
    load();

    Effect::new(move || {
        if let Some(uuid) = created.get() {
            created.set(None);
            navigate(&format!("/assets/{uuid}"), NavigateOptions::default());
        }
    });

    let on_create = Callback::new(move |draft: AssetDraft| {
        creating.set(true);
        let api = auth::api(&config, auth);
        leptos::task::spawn_local(async move {
            match api.create_asset(&draft).await {
                Ok(asset) => {
                    notify::notify_success(notices, format!("created {}", asset.name));
                    created.set(Some(asset.uuid));
                }
                Err(e) => notify::notify_error(notices, format!("could not create asset: {e}")),
            }
            creating.set(false);
        });
    });

    let on_filter = {
        let load = load.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            load();
        }
    };

    view! {
        <div class="page assets-page">
            <header class="page__header">
                <h1>"My assets"</h1>
                <form class="inline-form" on:submit=on_filter>
                    <input
                        class="field__input"
                        type="search"
                        placeholder="Filter by name"
                        prop:value=move || filter.get()
                        on:input=move |ev| filter.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">"Filter"</button>
                </form>
                <button class="btn btn--primary" on:click=move |_| show_create.update(|v| *v = !*v)>
                    {move || if show_create.get() { "Cancel" } else { "+ New asset" }}
                </button>
            </header>

            <Show when=move || show_create.get()>
                <section class="panel">
                    <AssetForm on_submit=on_create submit_label="Create asset" busy=creating/>
                </section>
            </Show>

            <Show when=move || error.get().is_some()>
                <p class="page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page__muted">"Loading assets…"</p> }>
                <div class="asset-grid">
                    {move || {
                        let items = assets.get();
                        if items.is_empty() {
                            return view! { <p class="page__muted">"No assets yet."</p> }.into_any();
                        }
                        items
                            .into_iter()
                            .map(|asset| {
                                view! {
                                    <a class="asset-card" href=format!("/assets/{}", asset.uuid)>
                                        <span class="asset-card__name">{asset.name.clone()}</span>
                                        <span class="asset-card__meta">
                                            {format!("{} · {} objects", asset.access_level.label(), asset.object_count())}
                                        </span>
                                        <span class="asset-card__description">{asset.description.clone()}</span>
                                    </a>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
