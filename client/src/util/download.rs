//! Save downloaded bytes through a temporary object URL.

/// Offer `bytes` to the user as `file_name`.
///
/// # Errors
///
/// Returns an error string when the blob, URL or anchor cannot be created.
#[cfg(feature = "csr")]
pub fn save_bytes(file_name: &str, bytes: &[u8]) -> Result<(), String> {
    use wasm_bindgen::JsCast as _;

    let js_err = |value: wasm_bindgen::JsValue| value.as_string().unwrap_or_else(|| format!("{value:?}"));
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));
    let blob = web_sys::Blob::new_with_u8_array_sequence(&array).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_owned())?;
    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "anchor element unavailable".to_owned())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    web_sys::Url::revoke_object_url(&url).map_err(js_err)
}
