//! Create/edit form for asset metadata.
//!
//! DESIGN
//! ======
//! The form always produces a full [`AssetDraft`]; edits are reduced to the
//! changed fields with [`patch_from`] so untouched fields are never sent.

#[cfg(test)]
#[path = "asset_form_test.rs"]
mod asset_form_test;

use leptos::prelude::*;
use records::{AccessLevel, Asset, AssetDraft, AssetPatch};

/// Changed fields of `draft` relative to `current`. Metadata is not edited here.
pub fn patch_from(current: &Asset, draft: &AssetDraft) -> AssetPatch {
    let name = draft.name.trim();
    AssetPatch {
        name: (name != current.name && !name.is_empty()).then(|| name.to_owned()),
        description: (draft.description != current.description).then(|| draft.description.clone()),
        access_level: (draft.access_level != current.access_level).then_some(draft.access_level),
        meta: None,
    }
}

#[component]
pub fn AssetForm(
    #[prop(optional)] initial: Option<Asset>,
    on_submit: Callback<AssetDraft>,
    #[prop(into)] submit_label: String,
    #[prop(optional, into)] busy: Signal<bool>,
) -> impl IntoView {
    let name = RwSignal::new(initial.as_ref().map(|a| a.name.clone()).unwrap_or_default());
    let description = RwSignal::new(initial.as_ref().map(|a| a.description.clone()).unwrap_or_default());
    let access = RwSignal::new(initial.as_ref().map_or(AccessLevel::Private, |a| a.access_level));
    let info = RwSignal::new(String::new());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = name.get().trim().to_owned();
        if value.is_empty() {
            info.set("Give the asset a name.".to_owned());
            return;
        }
        info.set(String::new());
        let mut draft = AssetDraft::new(value);
        draft.description = description.get();
        draft.access_level = access.get();
        on_submit.run(draft);
    };

    view! {
        <form class="asset-form" on:submit=on_form_submit>
            <label class="field">
                <span class="field__label">"Name"</span>
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field__label">"Description"</span>
                <textarea
                    class="field__input"
                    rows="3"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="field">
                <span class="field__label">"Access"</span>
                <select
                    class="field__input"
                    on:change=move |ev| {
                        if let Ok(level) = event_target_value(&ev).parse::<AccessLevel>() {
                            access.set(level);
                        }
                    }
                >
                    {AccessLevel::ALL
                        .into_iter()
                        .map(|level| {
                            view! {
                                <option value=level.as_str() selected=move || access.get() == level>
                                    {level.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <Show when=move || !info.get().is_empty()>
                <p class="field__error">{move || info.get()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {submit_label}
            </button>
        </form>
    }
}
