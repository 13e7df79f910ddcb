//! Display preferences that survive reloads.
//!
//! DESIGN
//! ======
//! Kept apart from domain state so toggles never trigger refetches. The
//! persisted subset is [`UiPrefs`]; dark mode has its own storage key so it
//! can be applied before the app mounts.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use serde::{Deserialize, Serialize};

pub const UI_PREFS_KEY: &str = "catalogue_ui_prefs";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub group_by_asset: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiPrefs {
    pub group_by_asset: bool,
}

impl UiState {
    pub fn from_prefs(prefs: UiPrefs, dark_mode: bool) -> Self {
        Self {
            dark_mode,
            group_by_asset: prefs.group_by_asset,
        }
    }

    pub fn prefs(&self) -> UiPrefs {
        UiPrefs {
            group_by_asset: self.group_by_asset,
        }
    }
}
