use super::*;

#[test]
fn next_page_starts_after_first() {
    let query = SearchQuery::new("rain").exclude_mine(true);
    let next = next_page(&query);
    assert_eq!(next.page, Some(2));
    assert_eq!(next.text, "rain");
    assert!(next.exclude_mine);
}

#[test]
fn next_page_advances_explicit_page() {
    let query = SearchQuery {
        page: Some(3),
        ..SearchQuery::new("rain")
    };
    assert_eq!(next_page(&query).page, Some(4));
}
