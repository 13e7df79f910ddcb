use super::*;

#[test]
fn parse_positive_rejects_zero_negative_and_junk() {
    assert_eq!(parse_positive::<i64>(" 42 "), Some(42));
    assert_eq!(parse_positive::<i64>("0"), None);
    assert_eq!(parse_positive::<i64>("-3"), None);
    assert_eq!(parse_positive::<u32>("abc"), None);
}

#[test]
fn parse_optional_treats_blank_as_absent() {
    assert_eq!(parse_optional::<u64>("seed", "  "), Ok(None));
    assert_eq!(parse_optional::<u64>("seed", "7"), Ok(Some(7)));
    assert_eq!(parse_optional::<u64>("seed", "x"), Err("seed must be a whole number".to_owned()));
}

#[test]
fn split_tags_trims_and_dedupes() {
    assert_eq!(split_tags(" buoy, hourly,,buoy , "), vec!["buoy".to_owned(), "hourly".to_owned()]);
    assert!(split_tags("").is_empty());
}
