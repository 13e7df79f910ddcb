//! File upload into an asset with a live progress bar.

#[cfg(test)]
#[path = "upload_form_test.rs"]
mod upload_form_test;

use leptos::prelude::*;
use records::AssetObject;
use uuid::Uuid;
use views::{format_bytes, format_percent};

use crate::config::ClientConfig;
use crate::state::auth::AuthState;

/// Percent of `total` sent; an empty body counts as done.
#[allow(clippy::cast_precision_loss)]
pub fn progress_percent(sent: u64, total: u64) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (sent.min(total) as f64 / total as f64) * 100.0
}

pub fn progress_label(sent: u64, total: u64) -> String {
    format!(
        "{} of {} ({})",
        format_bytes(sent.min(total)),
        format_bytes(total),
        format_percent(progress_percent(sent, total))
    )
}

#[component]
pub fn UploadForm(asset: Uuid, on_uploaded: Callback<AssetObject>) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<views::NoticeQueue>>();

    let file_input = NodeRef::<leptos::html::Input>::new();
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let progress = RwSignal::new(None::<(u64, u64)>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            use crate::net::upload::{UploadFields, upload_object};
            use crate::util::{auth, notify};

            let Some(input) = file_input.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                notify::notify_error(notices, "choose a file to upload");
                return;
            };
            busy.set(true);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            progress.set(Some((0, file.size() as u64)));

            let api = auth::api(&config, auth);
            let fields = UploadFields {
                name: Some(name.get_untracked()),
                description: Some(description.get_untracked()),
            };
            leptos::task::spawn_local(async move {
                let result = upload_object(&api, asset, file, fields, move |sent, total| {
                    progress.set(Some((sent, total)));
                })
                .await;
                match result {
                    Ok(object) => {
                        notify::notify_success(notices, format!("uploaded {}", object.display_name()));
                        input.set_value("");
                        name.set(String::new());
                        description.set(String::new());
                        on_uploaded.run(object);
                    }
                    Err(e) => notify::notify_error(notices, format!("upload failed: {e}")),
                }
                busy.set(false);
                progress.set(None);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&config, auth, notices, asset, on_uploaded);
        }
    };

    view! {
        <form class="upload-form" on:submit=on_submit>
            <input class="field__input" type="file" node_ref=file_input/>
            <input
                class="field__input"
                type="text"
                placeholder="Name (optional)"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                class="field__input"
                type="text"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Upload"
            </button>
            {move || {
                progress
                    .get()
                    .map(|(sent, total)| {
                        view! {
                            <div class="progress">
                                <div
                                    class="progress__bar"
                                    style=format!("width: {:.1}%", progress_percent(sent, total))
                                ></div>
                                <span class="progress__label">{progress_label(sent, total)}</span>
                            </div>
                        }
                    })
            }}
        </form>
    }
}
