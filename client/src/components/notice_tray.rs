//! Dismissible notices, newest last.

use leptos::prelude::*;
use views::NoticeQueue;

#[component]
pub fn NoticeTray() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeQueue>>();

    view! {
        <div class="notice-tray" role="status" aria-live="polite">
            {move || {
                notices
                    .get()
                    .iter()
                    .map(|(id, notice)| {
                        let id = *id;
                        view! {
                            <div class=format!("notice {}", notice.level.css_modifier())>
                                <span class="notice__message">{notice.message.clone()}</span>
                                <button
                                    class="notice__dismiss"
                                    aria-label="Dismiss"
                                    on:click=move |_| notices.update(|q| q.dismiss(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
