//! Multipart object upload with progress.
//!
//! `fetch` exposes no upload progress, so this goes through
//! `XMLHttpRequest`; completion is bridged to a future with a oneshot channel
//! fired from `loadend`.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use records::{AssetObject, Endpoint};
use uuid::Uuid;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use super::api::{Api, bearer, status_message};

/// Optional text fields sent alongside the file.
#[derive(Clone, Debug, Default)]
pub struct UploadFields {
    pub name: Option<String>,
    pub description: Option<String>,
}

fn js_err(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Upload `file` into `asset`, calling `on_progress(sent, total)` as bytes leave.
///
/// # Errors
///
/// Returns an error string on network failure, a non-2xx status, or a
/// malformed response body.
pub async fn upload_object(
    api: &Api,
    asset: Uuid,
    file: web_sys::File,
    fields: UploadFields,
    on_progress: impl Fn(u64, u64) + 'static,
) -> Result<AssetObject, String> {
    let url = api.url(&Endpoint::AssetUpload(asset));
    let xhr = web_sys::XmlHttpRequest::new().map_err(js_err)?;
    xhr.open_with_async("POST", &url, true).map_err(js_err)?;
    if let Some(token) = api.token() {
        xhr.set_request_header("Authorization", &bearer(token)).map_err(js_err)?;
    }

    let form = web_sys::FormData::new().map_err(js_err)?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(js_err)?;
    if let Some(name) = fields.name.as_deref().filter(|n| !n.trim().is_empty()) {
        form.append_with_str("name", name).map_err(js_err)?;
    }
    if let Some(description) = fields.description.as_deref().filter(|d| !d.trim().is_empty()) {
        form.append_with_str("description", description).map_err(js_err)?;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let progress = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |ev: web_sys::ProgressEvent| {
        if ev.length_computable() {
            on_progress(ev.loaded() as u64, ev.total() as u64);
        }
    });
    let upload = xhr.upload().map_err(js_err)?;
    upload.set_onprogress(Some(progress.as_ref().unchecked_ref()));

    let (done_tx, done_rx) = oneshot::channel::<()>();
    let done_tx = Rc::new(RefCell::new(Some(done_tx)));
    let loadend = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = done_tx.borrow_mut().take() {
            let _ = tx.send(());
        }
    });
    xhr.set_onloadend(Some(loadend.as_ref().unchecked_ref()));

    log::debug!("POST {url} (multipart, {} bytes)", file.size());
    xhr.send_with_opt_form_data(Some(&form)).map_err(js_err)?;
    let _ = done_rx.await;

    upload.set_onprogress(None);
    xhr.set_onloadend(None);
    drop(progress);
    drop(loadend);

    let status = xhr.status().map_err(js_err)?;
    if status == 0 {
        return Err("upload failed: network error".to_owned());
    }
    let body = xhr.response_text().map_err(js_err)?.unwrap_or_default();
    if !(200..300).contains(&status) {
        let status_text = xhr.status_text().unwrap_or_default();
        return Err(status_message(status, &status_text, &body));
    }
    records::parse(&body).map_err(|e| e.to_string())
}
