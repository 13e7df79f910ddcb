//! Push notices into the app-wide queue.

use leptos::prelude::*;
use views::{Notice, NoticeQueue};

pub fn notify(notices: RwSignal<NoticeQueue>, notice: Notice) {
    #[cfg(feature = "csr")]
    log::debug!("notice: {}", notice.message);
    notices.update(|queue| {
        queue.push(notice);
    });
}

pub fn notify_error(notices: RwSignal<NoticeQueue>, message: impl Into<String>) {
    notify(notices, Notice::error(message));
}

pub fn notify_success(notices: RwSignal<NoticeQueue>, message: impl Into<String>) {
    notify(notices, Notice::success(message));
}
