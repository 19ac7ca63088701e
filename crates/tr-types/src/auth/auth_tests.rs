//! Unit tests for token decoding and principal construction.

use super::*;
use serde_json::json;

fn encode_token(payload: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{}.{}.signature", header, body)
}

fn employee_token() -> String {
    encode_token(json!({
        "preferred_username": "12.345.678-5",
        "name": "Ana Rojas",
        "realm_access": { "roles": ["Employee", "offline_access", "uma_authorization"] },
        "exp": 1_900_000_000,
        "iat": 1_899_999_700,
    }))
}

#[test]
fn test_decode_claims() {
    let claims = TokenClaims::decode(&employee_token()).unwrap();
    assert_eq!(claims.preferred_username, "12.345.678-5");
    assert_eq!(claims.name.as_deref(), Some("Ana Rojas"));
    assert_eq!(claims.role_names().len(), 3);
    assert_eq!(claims.exp, 1_900_000_000);
    assert_eq!(claims.iat, Some(1_899_999_700));
}

#[test]
fn test_decode_rejects_malformed_tokens() {
    assert!(matches!(TokenClaims::decode("not-a-jwt"), Err(TokenError::Malformed)));
    assert!(matches!(TokenClaims::decode("a.b.c.d"), Err(TokenError::Malformed)));
    assert!(matches!(TokenClaims::decode("a.!!!.c"), Err(TokenError::Encoding(_))));

    let not_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode("plain text"));
    assert!(matches!(TokenClaims::decode(&not_json), Err(TokenError::Json(_))));
}

#[test]
fn test_principal_keeps_only_known_roles() {
    let principal = Principal::from_token(&employee_token()).unwrap();
    assert_eq!(principal.username, "12.345.678-5");
    assert_eq!(principal.roles.len(), 1);
    assert!(principal.has_any_role(&[Role::Employee]));
    assert!(!principal.has_any_role(&[Role::Admin]));
    assert_eq!(principal.expires_at.timestamp(), 1_900_000_000);
}

#[test]
fn test_principal_roles_have_no_duplicates() {
    let token = encode_token(json!({
        "preferred_username": "admin",
        "realm_access": { "roles": ["Admin", "admin", "Employee"] },
        "exp": 1_900_000_000,
    }));
    let principal = Principal::from_token(&token).unwrap();
    assert_eq!(principal.roles.len(), 2);
    assert!(principal.issued_at.is_none());
}

#[test]
fn test_principal_requires_username() {
    let token = encode_token(json!({ "exp": 1_900_000_000 }));
    assert!(matches!(
        Principal::from_token(&token),
        Err(TokenError::MissingClaim("preferred_username"))
    ));
}

#[test]
fn test_principal_without_realm_access_has_no_roles() {
    let token = encode_token(json!({ "preferred_username": "nobody", "exp": 1_900_000_000 }));
    let principal = Principal::from_token(&token).unwrap();
    assert!(principal.roles.is_empty());
    assert!(!principal.has_any_role(&[Role::Admin, Role::Employee]));
}

#[test]
fn test_has_any_role() {
    let principal = Principal::from_token(&employee_token()).unwrap();
    assert!(principal.has_any_role(&[Role::Admin, Role::Employee]));
    assert!(!principal.has_any_role(&[Role::Admin]));
    assert!(!principal.has_any_role(&[]));
}

#[test]
fn test_greeting_name_falls_back_to_username() {
    let mut principal = Principal::from_token(&employee_token()).unwrap();
    assert_eq!(principal.greeting_name(), "Ana Rojas");

    principal.display_name = None;
    assert_eq!(principal.greeting_name(), "12.345.678-5");
}

#[test]
fn test_expiry_check() {
    let principal = Principal::from_token(&employee_token()).unwrap();
    let before = DateTime::from_timestamp(1_899_999_999, 0).unwrap();
    let after = DateTime::from_timestamp(1_900_000_000, 0).unwrap();
    assert!(!principal.is_expired_at(before));
    assert!(principal.is_expired_at(after));
}
