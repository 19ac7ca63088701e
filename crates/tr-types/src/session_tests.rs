//! Unit tests for session state transitions.

use std::collections::BTreeSet;

use chrono::DateTime;

use super::*;
use crate::auth::Role;

fn principal(name: &str) -> Principal {
    Principal {
        username: name.to_string(),
        display_name: None,
        roles: BTreeSet::from([Role::Employee]),
        issued_at: None,
        expires_at: DateTime::from_timestamp(1_900_000_000, 0).unwrap(),
    }
}

#[test]
fn test_default_is_uninitialized() {
    let state = SessionState::default();
    assert!(!state.is_initialized());
    assert!(!state.is_authenticated());
    assert!(state.principal().is_none());
}

#[test]
fn test_settle_authenticated() {
    let mut state = SessionState::Uninitialized;
    state.settle(Ok(Some(principal("ana")))).unwrap();
    assert!(state.is_initialized());
    assert_eq!(state.principal().map(|p| p.username.as_str()), Some("ana"));
}

#[test]
fn test_settle_without_session() {
    let mut state = SessionState::Uninitialized;
    state.settle(Ok(None)).unwrap();
    assert_eq!(state, SessionState::Unauthenticated);
}

#[test]
fn test_failed_init_settles_unauthenticated() {
    let mut state = SessionState::Uninitialized;
    state.settle(Err(AuthInitError::Network("connection refused".into()))).unwrap();
    assert_eq!(state, SessionState::Unauthenticated);

    let mut state = SessionState::Uninitialized;
    state.settle(Err(AuthInitError::Token(TokenError::Malformed))).unwrap();
    assert_eq!(state, SessionState::Unauthenticated);
}

#[test]
fn test_settle_happens_once() {
    let mut state = SessionState::Uninitialized;
    state.settle(Ok(None)).unwrap();

    let err = state.settle(Ok(Some(principal("ana")))).unwrap_err();
    assert_eq!(
        err,
        SessionError::InvalidTransition {
            from: "Unauthenticated",
            to: "settled"
        }
    );
    assert_eq!(state, SessionState::Unauthenticated);
}

#[test]
fn test_end_session() {
    let mut state = SessionState::Uninitialized;
    state.settle(Ok(Some(principal("ana")))).unwrap();
    state.end().unwrap();
    assert_eq!(state, SessionState::Unauthenticated);

    // No way back to Uninitialized, and nothing to end twice
    assert!(state.end().is_err());
    assert!(state.is_initialized());
}

#[test]
fn test_end_before_init_is_rejected() {
    let mut state = SessionState::Uninitialized;
    assert_eq!(
        state.end(),
        Err(SessionError::InvalidTransition {
            from: "Uninitialized",
            to: "Unauthenticated"
        })
    );
    assert_eq!(state, SessionState::Uninitialized);
}

#[test]
fn test_refresh_replaces_principal() {
    let mut state = SessionState::Uninitialized;
    state.settle(Ok(Some(principal("ana")))).unwrap();

    let mut renewed = principal("ana");
    renewed.expires_at = DateTime::from_timestamp(1_900_000_300, 0).unwrap();
    state.refresh(renewed.clone()).unwrap();
    assert_eq!(state.principal(), Some(&renewed));

    let mut anonymous = SessionState::Unauthenticated;
    assert!(anonymous.refresh(renewed).is_err());
    assert_eq!(anonymous, SessionState::Unauthenticated);
}
