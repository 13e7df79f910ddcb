use super::*;

#[test]
fn start_label_offers_retry_after_failure() {
    assert_eq!(start_label(None), "Run validation");
    assert_eq!(start_label(Some(PollStatus::NotStarted)), "Run validation");
    assert_eq!(start_label(Some(PollStatus::Failed)), "Retry validation");
    assert_eq!(start_label(Some(PollStatus::Complete)), "Run again");
}

#[test]
fn start_is_disabled_while_backend_reports_a_run() {
    assert!(start_disabled(Some(PollStatus::InProgress), false, false));
    assert!(start_disabled(None, true, false));
    assert!(start_disabled(Some(PollStatus::NotStarted), false, true));
    assert!(!start_disabled(Some(PollStatus::Failed), false, false));
    assert!(!start_disabled(None, false, false));
}
