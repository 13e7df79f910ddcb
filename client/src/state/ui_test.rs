use super::*;

#[test]
fn defaults_are_light_and_flat() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.group_by_asset);
}

#[test]
fn prefs_carry_grouping_only() {
    let state = UiState::from_prefs(UiPrefs { group_by_asset: true }, true);
    assert!(state.dark_mode);
    assert_eq!(state.prefs(), UiPrefs { group_by_asset: true });
}

#[test]
fn stored_prefs_with_unknown_or_missing_fields_parse() {
    let prefs: UiPrefs = serde_json::from_str(r#"{"legacy":1}"#).unwrap();
    assert_eq!(prefs, UiPrefs::default());
}
