//! Parsing for free-text form fields.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::str::FromStr;

/// A strictly positive number, e.g. an object id or window size.
pub fn parse_positive<T>(raw: &str) -> Option<T>
where
    T: FromStr + PartialOrd + Default,
{
    raw.trim().parse::<T>().ok().filter(|value| *value > T::default())
}

/// Blank means "not given"; anything else must parse.
///
/// # Errors
///
/// Returns a message naming `field` when the value is not a number.
pub fn parse_optional<T: FromStr>(field: &str, raw: &str) -> Result<Option<T>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>().map(Some).map_err(|_| format!("{field} must be a whole number"))
}

/// Comma-separated tags, trimmed, blanks and duplicates dropped.
pub fn split_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_owned());
        }
    }
    tags
}
