#![cfg(not(feature = "csr"))]

use super::*;
use crate::state::ui::{UI_PREFS_KEY, UiPrefs};

#[test]
fn native_builds_fall_back_to_light() {
    assert!(!dark_preference());
}

#[test]
fn toggle_returns_the_flipped_value() {
    assert!(toggle_theme(false));
    assert!(!toggle_theme(true));
}

#[test]
fn native_store_is_not_read_back() {
    store(UI_PREFS_KEY, &UiPrefs { group_by_asset: true });
    assert_eq!(load::<UiPrefs>(UI_PREFS_KEY), None);
}
