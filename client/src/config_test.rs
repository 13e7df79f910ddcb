use super::*;
use records::AssetQuery;

#[test]
fn defaults_are_same_origin_paths() {
    let config = ClientConfig::from_parts(None, None);
    assert_eq!(config.api_base, "/api");
    assert_eq!(config.identity_url, "/auth");
}

#[test]
fn blank_overrides_fall_back_and_trailing_slash_is_dropped() {
    let config = ClientConfig::from_parts(Some("  "), Some("https://id.example.org/"));
    assert_eq!(config.api_base, "/api");
    assert_eq!(config.identity_url, "https://id.example.org");
}

#[test]
fn url_joins_endpoint_path() {
    let config = ClientConfig::from_parts(Some("https://data.example.org/api/"), None);
    let query = AssetQuery {
        mine: true,
        ..AssetQuery::default()
    };
    assert_eq!(
        config.url(&Endpoint::Assets(query)),
        "https://data.example.org/api/assets/?mine=true"
    );
}

#[test]
fn identity_urls() {
    let config = ClientConfig::from_parts(None, None);
    assert_eq!(config.session_url(), "/auth/session");
    assert_eq!(config.logout_url(), "/auth/logout");
    assert_eq!(config.login_url("/objects/7?tab=a b"), "/auth/login?redirect=%2Fobjects%2F7%3Ftab%3Da%20b");
}
