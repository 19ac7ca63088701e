//! Unit tests for role parsing.

use super::*;
use std::str::FromStr;

#[test]
fn test_role_string_representation() {
    assert_eq!(Role::Admin.to_string(), "Admin");
    assert_eq!(Role::Employee.to_string(), "Employee");

    assert_eq!(Role::from_str("Admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("Employee").unwrap(), Role::Employee);

    // Realm role names are matched case-insensitively
    assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
    assert_eq!(Role::from_str(" employee ").unwrap(), Role::Employee);
}

#[test]
fn test_unknown_roles_are_rejected() {
    assert!(Role::from_str("offline_access").is_err());
    assert!(Role::from_str("uma_authorization").is_err());
    assert!(Role::from_str("").is_err());
}

#[test]
fn test_display_and_parse_agree() {
    for role in [Role::Admin, Role::Employee] {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}
