use super::*;

#[test]
fn progress_percent_is_clamped_and_handles_empty_files() {
    assert!((progress_percent(512, 2048) - 25.0).abs() < f64::EPSILON);
    assert!((progress_percent(4096, 2048) - 100.0).abs() < f64::EPSILON);
    assert!((progress_percent(0, 0) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn progress_label_reads_sent_of_total() {
    assert_eq!(progress_label(1536, 3072), "1.5 KiB of 3.0 KiB (50.0%)");
}
