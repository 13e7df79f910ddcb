use super::*;
use uuid::Uuid;

#[test]
fn parse_param_reads_typed_values() {
    let id: i64 = parse_param("id", Some("42".to_owned())).unwrap();
    assert_eq!(id, 42);
    let uuid: Uuid = parse_param("uuid", Some("6f1c2a8e-2d4b-4a7e-9a43-1f0f7d1c2b3a".to_owned())).unwrap();
    assert_eq!(uuid.to_string(), "6f1c2a8e-2d4b-4a7e-9a43-1f0f7d1c2b3a");
}

#[test]
fn parse_param_reports_the_bad_value() {
    let err = parse_param::<i64>("id", Some("seven".to_owned())).unwrap_err();
    assert_eq!(err.to_string(), "invalid id in URL: \"seven\"");
    let missing = parse_param::<i64>("id", None).unwrap_err();
    assert_eq!(missing, PageError::BadParam { param: "id", raw: String::new() });
}
