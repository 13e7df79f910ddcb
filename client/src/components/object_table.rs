//! Table of an asset's objects with links to their detail pages.

use leptos::prelude::*;
use records::AssetObject;
use views::format_bytes;

#[component]
pub fn ObjectTable(
    #[prop(into)] objects: Signal<Vec<AssetObject>>,
    #[prop(optional)] on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || objects.with(|o| !o.is_empty())
            fallback=|| view! { <p class="panel__muted">"No objects yet."</p> }
        >
            <table class="data-table object-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Format"</th>
                        <th class="num">"Size"</th>
                        <th>"Added"</th>
                        <th>"Tags"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        objects
                            .get()
                            .into_iter()
                            .map(|object| {
                                let id = object.id;
                                view! {
                                    <tr>
                                        <td>
                                            <a href=format!("/objects/{id}")>{object.display_name()}</a>
                                            {object
                                                .has_proof()
                                                .then(|| {
                                                    view! {
                                                        <span class="object-table__proof" title="Integrity proof recorded">
                                                            "✓"
                                                        </span>
                                                    }
                                                })}
                                        </td>
                                        <td>{object.format().unwrap_or_else(|| "—".to_owned())}</td>
                                        <td class="num">{object.size.map_or_else(|| "—".to_owned(), format_bytes)}</td>
                                        <td>{object.created_at.to_string()}</td>
                                        <td>{object.tags.join(", ")}</td>
                                        <td>
                                            {on_delete
                                                .map(|on_delete| {
                                                    view! {
                                                        <button
                                                            class="btn btn--ghost btn--danger"
                                                            title="Delete object"
                                                            on:click=move |_| on_delete.run(id)
                                                        >
                                                            "Delete"
                                                        </button>
                                                    }
                                                })}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </Show>
    }
}
