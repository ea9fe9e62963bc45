use super::*;
use crate::net::types::UserProfile;

fn session(token: &str) -> UserSession {
    UserSession {
        email: "a@b.c".to_owned(),
        token: token.to_owned(),
        profile: Some(UserProfile {
            username: Some("ada".to_owned()),
            ..UserProfile::default()
        }),
    }
}

// =============================================================
// SessionState defaults and transitions
// =============================================================

#[test]
fn default_session_has_no_user_and_no_token() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(state.token().is_none());
    assert!(!state.is_logged_in());
}

#[test]
fn log_in_exposes_token() {
    let mut state = SessionState::default();
    state.log_in(session("t-1"));
    assert!(state.is_logged_in());
    assert_eq!(state.token().as_deref(), Some("t-1"));
}

#[test]
fn log_in_overwrites_previous_user() {
    let mut state = SessionState::default();
    state.log_in(session("t-1"));
    state.log_in(session("t-2"));
    assert_eq!(state.token().as_deref(), Some("t-2"));
}

#[test]
fn log_out_drops_user() {
    let mut state = SessionState::default();
    state.log_in(session("t-1"));
    state.log_out();
    assert!(!state.is_logged_in());
    assert!(state.token().is_none());
}

#[test]
fn from_stored_token_without_storage_is_logged_out() {
    // Native test builds have no localStorage, so this is the cold path.
    let state = SessionState::from_stored_token();
    assert!(state.user.is_none());
}
