use super::*;

fn session(display_name: Option<&str>) -> Session {
    Session {
        token: "tok-1".to_owned(),
        username: "ana".to_owned(),
        display_name: display_name.map(str::to_owned),
    }
}

#[test]
fn pending_state_is_loading_without_session() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert_eq!(state.token(), None);
    assert_eq!(state.username(), None);
}

#[test]
fn session_payload_without_display_name_parses() {
    let parsed: Session = serde_json::from_str(r#"{"token":"t","username":"ana"}"#).unwrap();
    assert_eq!(parsed.display(), "ana");
}

#[test]
fn blank_display_name_falls_back_to_username() {
    assert_eq!(session(Some("  ")).display(), "ana");
    assert_eq!(session(Some("Ana Lima")).display(), "Ana Lima");
}

#[test]
fn owns_compares_usernames() {
    let state = AuthState {
        session: Some(session(None)),
        loading: false,
    };
    assert_eq!(state.token(), Some("tok-1"));
    assert!(state.owns("ana"));
    assert!(!state.owns("bo"));
    assert!(!AuthState::default().owns("ana"));
}
