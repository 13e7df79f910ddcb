use super::*;
use crate::state::auth::Session;

fn signed_in() -> AuthState {
    AuthState {
        session: Some(Session {
            token: "tok-1".to_owned(),
            username: "ana".to_owned(),
            display_name: None,
        }),
        loading: false,
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_session_missing() {
    let state = AuthState {
        session: None,
        loading: false,
    };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::pending()));
}

#[test]
fn should_not_redirect_when_session_exists() {
    assert!(!should_redirect_unauth(&signed_in()));
}
