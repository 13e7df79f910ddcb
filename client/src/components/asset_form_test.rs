use super::*;
use records::AssetDraft;
use serde_json::json;

fn asset() -> Asset {
    serde_json::from_value(json!({
        "id": 1,
        "uuid": "6f1c2a8e-2d4b-4a7e-9a43-1f0f7d1c2b3a",
        "name": "Wave buoys",
        "description": "Hourly readings",
        "access_level": "private",
        "username": "ana",
        "objects": [],
    }))
    .unwrap()
}

#[test]
fn unchanged_draft_produces_empty_patch() {
    let current = asset();
    let mut draft = AssetDraft::new("Wave buoys");
    draft.description = "Hourly readings".to_owned();
    draft.access_level = AccessLevel::Private;
    assert!(patch_from(&current, &draft).is_empty());
}

#[test]
fn only_changed_fields_are_patched() {
    let current = asset();
    let mut draft = AssetDraft::new("  Wave buoys 2024 ");
    draft.description = "Hourly readings".to_owned();
    draft.access_level = AccessLevel::Public;
    let patch = patch_from(&current, &draft);
    assert_eq!(patch.name.as_deref(), Some("Wave buoys 2024"));
    assert_eq!(patch.description, None);
    assert_eq!(patch.access_level, Some(AccessLevel::Public));
    assert_eq!(patch.meta, None);
}
