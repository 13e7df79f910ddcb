//! Preferences kept in `localStorage`: the theme flag and the display
//! toggles in [`crate::state::ui::UiPrefs`]. Values are stored as JSON.
//! Native builds read nothing and write nothing.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

const DARK_KEY: &str = "catalogue_dark";

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        let raw = storage()?.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Best effort; a full or disabled store drops the write.
pub fn store<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "csr")]
    {
        if let (Some(storage), Ok(raw)) = (storage(), serde_json::to_string(value)) {
            let _ = storage.set_item(key, &raw);
        }
    }
    #[cfg(not(feature = "csr"))]
    let _ = (key, value);
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|query| query.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Stored theme, falling back to the system setting.
pub fn dark_preference() -> bool {
    load::<bool>(DARK_KEY).unwrap_or_else(system_prefers_dark)
}

/// Sets `data-theme` on `<html>`.
pub fn apply_theme(dark: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = root.set_attribute("data-theme", if dark { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "csr"))]
    let _ = dark;
}

/// Flip the theme, apply it and remember it. Returns the new value.
pub fn toggle_theme(dark: bool) -> bool {
    let next = !dark;
    apply_theme(next);
    store(DARK_KEY, &next);
    next
}
