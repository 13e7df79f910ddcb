use super::*;

#[test]
fn blank_filter_selects_all() {
    assert_eq!(kind_filter(""), None);
    assert_eq!(kind_filter("  "), None);
    assert_eq!(kind_filter("notebook"), Some(JobKind::Notebook));
}

#[test]
fn matrix_profile_request_carries_arguments() {
    let request = matrix_profile_request(" 12 ", "rainfall", "48").expect("valid");
    assert_eq!(request.job_type, JobKind::MatrixProfile);
    assert_eq!(request.arguments["asset_object_id"], 12);
    assert_eq!(request.arguments["column"], "rainfall");
    assert_eq!(request.arguments["window_size"], 48);
}

#[test]
fn matrix_profile_requires_column_and_window() {
    assert!(matrix_profile_request("12", " ", "48").is_err());
    assert!(matrix_profile_request("12", "rainfall", "0").is_err());
    assert!(matrix_profile_request("abc", "rainfall", "48").is_err());
}

#[test]
fn synthetic_load_seed_is_optional() {
    let request = synthetic_load_request("3", "500", "").expect("valid");
    assert_eq!(request.job_type, JobKind::SyntheticLoad);
    assert_eq!(request.arguments["rows"], 500);

    let seeded = synthetic_load_request("3", "500", "7").expect("valid");
    assert_eq!(seeded.arguments["seed"], 7);

    let err = synthetic_load_request("3", "500", "seven").expect_err("bad seed");
    assert_eq!(err, "seed must be a whole number");
}

#[test]
fn notebook_needs_positive_object() {
    assert!(notebook_request("-1").is_err());
    let request = notebook_request("9").expect("valid");
    assert_eq!(request.arguments["asset_object_id"], 9);
}
