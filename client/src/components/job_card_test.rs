use super::*;
use serde_json::json;

fn job(kind: &str, results: Value) -> WorkflowJob {
    serde_json::from_value(json!({
        "id": 12,
        "job_type": kind,
        "arguments": { "asset_object_id": 7, "column": "wave_height", "window_size": 24 },
        "created_at": "2024-05-01T10:00:00Z",
        "finalised_at": "2024-05-01T10:03:00Z",
        "results": results,
    }))
    .unwrap()
}

#[test]
fn notebook_url_only_for_notebook_jobs() {
    let notebook = job("notebook", json!({ "url": "https://notebooks.example.org/n/12" }));
    assert_eq!(notebook_url(&notebook).as_deref(), Some("https://notebooks.example.org/n/12"));

    let profile = job("matrix_profile", json!({ "url": "https://notebooks.example.org/n/12" }));
    assert_eq!(notebook_url(&profile), None);
}

#[test]
fn notebook_url_rejects_script_schemes() {
    let notebook = job("notebook", json!({ "url": "javascript:alert(1)" }));
    assert_eq!(notebook_url(&notebook), None);
}

#[test]
fn resubmission_copies_kind_and_arguments() {
    let failed = job("matrix_profile", json!({ "error": "window larger than series" }));
    let request = resubmission(&failed);
    assert_eq!(request.job_type, JobKind::MatrixProfile);
    assert_eq!(request.arguments["column"], "wave_height");
    assert_eq!(request.arguments["window_size"], 24);
}
