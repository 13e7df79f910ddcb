//! Catalogue search across every visible asset.
//!
//! Results live in the app-level `CatalogueState`, so returning to this page
//! shows the last search without refetching. Format filtering and grouping
//! are local derivations of the cached results.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;
use records::ObjectHit;
use views::{CatalogueRows, CatalogueState, SearchQuery, format_bytes};

use crate::components::require_session::RequireSession;
use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::state::ui::{UI_PREFS_KEY, UiState};
use crate::util::{auth, prefs};

#[component]
pub fn SearchPage() -> impl IntoView {
    view! {
        <RequireSession>
            <Catalogue/>
        </RequireSession>
    }
}

/// Page number following `query`; the backend's first page is 1.
fn next_page(query: &SearchQuery) -> SearchQuery {
    SearchQuery {
        page: Some(query.page.unwrap_or(1) + 1),
        ..query.clone()
    }
}

#[component]
fn Catalogue() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = expect_context::<RwSignal<CatalogueState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let initial = state.with_untracked(|s| s.query().cloned().unwrap_or_default());
    let text = RwSignal::new(initial.text.clone());
    let exclude_mine = RwSignal::new(initial.exclude_mine);

    let run = move |query: SearchQuery| {
        state.update(|s| {
            s.search(query.clone());
        });
        let api = auth::api(&config, auth);
        leptos::task::spawn_local(async move {
            let result = api.search_objects(query.object_query()).await;
            // A newer search owns the state now.
            if state.with_untracked(|s| s.query() != Some(&query)) {
                return;
            }
            match result {
                Ok(page) => state.update(|s| s.set_results(page)),
                Err(e) => state.update(|s| s.set_error(e)),
            }
        });
    };

    let on_submit = {
        let run = run.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            run(SearchQuery::new(text.get_untracked()).exclude_mine(exclude_mine.get_untracked()));
        }
    };

    let on_next = move |_| {
        if let Some(query) = state.with_untracked(|s| s.query().map(next_page)) {
            run(query);
        }
    };

    let on_toggle_group = move |_| {
        state.update(CatalogueState::toggle_grouping);
        let grouped = state.with_untracked(CatalogueState::is_grouped);
        ui.update(|u| u.group_by_asset = grouped);
        prefs::store(UI_PREFS_KEY, &ui.with_untracked(UiState::prefs));
    };

    let on_format = move |ev| {
        let value = event_target_value(&ev);
        state.update(|s| s.set_format(Some(value)));
    };

    view! {
        <div class="page search-page">
            <header class="page__header">
                <h1>"Search the catalogue"</h1>
            </header>

            <form class="search-bar" on:submit=on_submit>
                <input
                    class="field__input"
                    type="search"
                    placeholder="Name, description or tag"
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                />
                <label class="field field--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || exclude_mine.get()
                        on:change=move |ev| exclude_mine.set(event_target_checked(&ev))
                    />
                    <span>"Exclude my assets"</span>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || state.with(CatalogueState::is_loading)>
                    "Search"
                </button>
            </form>

            <div class="search-controls">
                <label class="field field--inline">
                    <span class="field__label">"Format"</span>
                    <select class="field__input" on:change=on_format>
                        <option value="" selected=move || state.with(|s| s.format().is_none())>"All formats"</option>
                        {move || {
                            let current = state.with(|s| s.format().map(str::to_owned));
                            state
                                .with(CatalogueState::format_options)
                                .into_iter()
                                .map(|format| {
                                    let selected = current.as_deref() == Some(format.as_str());
                                    view! { <option value=format.clone() selected=selected>{format.clone()}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <button class="btn" on:click=on_toggle_group>
                    {move || if state.with(CatalogueState::is_grouped) { "Flat list" } else { "Group by asset" }}
                </button>
            </div>

            <Show when=move || state.with(|s| s.error().is_some())>
                <p class="page__error">{move || state.with(|s| s.error().unwrap_or_default().to_owned())}</p>
            </Show>
            <Show when=move || state.with(CatalogueState::is_loading)>
                <p class="panel__muted">"Searching…"</p>
            </Show>

            {move || render_rows(state.with(CatalogueState::rows))}

            <Show when=move || state.with(CatalogueState::has_more)>
                <button class="btn" on:click=on_next.clone()>"Next page"</button>
            </Show>
        </div>
    }
}

fn render_rows(rows: CatalogueRows) -> AnyView {
    if rows.object_count() == 0 {
        return view! { <p class="panel__muted">"No matching objects."</p> }.into_any();
    }
    match rows {
        CatalogueRows::Flat(hits) => view! { <HitTable hits=hits show_asset=true/> }.into_any(),
        CatalogueRows::Grouped(groups) => groups
            .into_iter()
            .map(|group| {
                let href = format!("/assets/{}", group.asset.uuid);
                view! {
                    <section class="panel asset-group">
                        <header class="panel__header">
                            <h2><a href=href>{group.asset.name}</a></h2>
                            <span class="panel__muted">{group.asset.username}</span>
                        </header>
                        <HitTable hits=group.hits show_asset=false/>
                    </section>
                }
            })
            .collect_view()
            .into_any(),
    }
}

#[component]
fn HitTable(hits: Vec<ObjectHit>, show_asset: bool) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Object"</th>
                    {show_asset.then(|| view! { <th>"Asset"</th> })}
                    <th>"Format"</th>
                    <th class="num">"Size"</th>
                </tr>
            </thead>
            <tbody>
                {hits
                    .into_iter()
                    .map(|hit| {
                        let object_href = format!("/objects/{}", hit.object.id);
                        let asset_href = format!("/assets/{}", hit.asset.uuid);
                        let asset_name = hit.asset.name.clone();
                        view! {
                            <tr>
                                <td><a href=object_href>{hit.object.display_name()}</a></td>
                                {show_asset.then(|| view! { <td><a href=asset_href>{asset_name}</a></td> })}
                                <td>{hit.object.format().unwrap_or_default()}</td>
                                <td class="num">{hit.object.size.map_or_else(String::new, format_bytes)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
