//! Unit tests for route matching, the role guard and the resolver.

use std::collections::{BTreeSet, HashSet};

use chrono::DateTime;

use super::*;

fn principal(roles: &[Role]) -> Principal {
    Principal {
        username: "12.345.678-5".to_string(),
        display_name: Some("Ana Rojas".to_string()),
        roles: roles.iter().copied().collect::<BTreeSet<_>>(),
        issued_at: None,
        expires_at: DateTime::from_timestamp(1_900_000_000, 0).unwrap(),
    }
}

fn signed_in(roles: &[Role]) -> SessionState {
    SessionState::Authenticated(principal(roles))
}

#[test]
fn test_normalize() {
    assert_eq!(normalize("/loans/active"), vec!["loans", "active"]);
    assert_eq!(normalize("//loans///active/"), vec!["loans", "active"]);
    assert_eq!(normalize("/loans/active?page=2#top"), vec!["loans", "active"]);
    assert_eq!(normalize("/#/loans"), Vec::<&str>::new());
    assert!(normalize("/").is_empty());
    assert!(normalize("").is_empty());
}

#[test]
fn test_pattern_captures_params() {
    let descriptor = AUTHENTICATED_ROUTES
        .iter()
        .find(|d| d.pattern == "/loan/return/:id")
        .unwrap();

    let params = descriptor.matches(&["loan", "return", "42"]).unwrap();
    assert_eq!(params.get("id"), Some("42"));
    assert_eq!(params.get("other"), None);

    assert!(descriptor.matches(&["loan", "return"]).is_none());
    assert!(descriptor.matches(&["loan", "return", "42", "x"]).is_none());
    assert!(descriptor.matches(&["loans", "return", "42"]).is_none());
}

#[test]
fn test_guard_grants_on_intersection() {
    let employee = principal(&[Role::Employee]);
    let admin = principal(&[Role::Admin]);
    let nobody = principal(&[]);

    assert_eq!(guard(&[Role::Admin, Role::Employee], &employee), Access::Granted);
    assert_eq!(guard(&[Role::Admin], &employee), Access::Denied);
    assert_eq!(guard(&[Role::Admin], &admin), Access::Granted);
    assert_eq!(guard(&[Role::Employee], &nobody), Access::Denied);
}

#[test]
fn test_guard_empty_requirement_grants_everyone() {
    assert_eq!(guard(&[], &principal(&[])), Access::Granted);
    assert_eq!(guard(&[], &principal(&[Role::Admin])), Access::Granted);
}

#[test]
fn test_loading_until_session_settles() {
    for path in ["/", "/home", "/nope"] {
        assert_eq!(resolve(&SessionState::Uninitialized, path), Resolution::Loading);
    }
}

#[test]
fn test_unauthenticated_landing() {
    assert_eq!(
        resolve(&SessionState::Unauthenticated, "/"),
        Resolution::Public(ViewId::PublicHome)
    );
    assert_eq!(
        resolve(&SessionState::Unauthenticated, "/?code=abc&state=xyz"),
        Resolution::Public(ViewId::PublicHome)
    );
}

#[test]
fn test_unauthenticated_redirects_everything_else() {
    let every_pattern = AUTHENTICATED_ROUTES.iter().map(|d| d.pattern.replace(":id", "7"));
    for path in every_pattern.chain(["/totally/unknown".to_string(), "/home/".to_string()]) {
        if normalize(&path).is_empty() {
            continue;
        }
        assert_eq!(
            resolve(&SessionState::Unauthenticated, &path),
            Resolution::Redirect("/".to_string()),
            "path {path}"
        );
    }
}

#[test]
fn test_employee_denied_admin_view() {
    let resolution = resolve(&signed_in(&[Role::Employee]), "/employees");
    assert_eq!(
        resolution,
        Resolution::Render {
            layout: Layout::Full,
            view: ViewId::EmployeeHome,
            params: RouteParams::default(),
            access: Access::Denied,
        }
    );
}

#[test]
fn test_unauthenticated_deep_link_redirects() {
    assert_eq!(
        resolve(&SessionState::Unauthenticated, "/loans/active"),
        Resolution::Redirect("/".to_string())
    );
}

#[test]
fn test_admin_employee_sees_disable_view() {
    let resolution = resolve(&signed_in(&[Role::Admin, Role::Employee]), "/tools/tool-items/disable");
    assert_eq!(
        resolution,
        Resolution::Render {
            layout: Layout::Full,
            view: ViewId::ToolItemDisable,
            params: RouteParams::default(),
            access: Access::Granted,
        }
    );
}

#[test]
fn test_unknown_path_is_not_found() {
    for roles in [&[Role::Admin][..], &[Role::Employee], &[]] {
        assert_eq!(resolve(&signed_in(roles), "/totally/unknown"), Resolution::NotFound);
    }
}

#[test]
fn test_root_redirects_home_when_signed_in() {
    assert_eq!(
        resolve(&signed_in(&[Role::Employee]), "/"),
        Resolution::Redirect("/home".to_string())
    );
    assert_eq!(
        resolve(&signed_in(&[Role::Employee]), "//?next=x"),
        Resolution::Redirect("/home".to_string())
    );
}

#[test]
fn test_home_uses_minimal_layout() {
    let Resolution::Render { layout, view, access, .. } = resolve(&signed_in(&[Role::Employee]), "/home") else {
        panic!("expected render");
    };
    assert_eq!(layout, Layout::Minimal);
    assert_eq!(view, ViewId::Home);
    assert_eq!(access, Access::Granted);
}

#[test]
fn test_return_process_captures_loan_id() {
    let Resolution::Render { view, params, access, .. } =
        resolve(&signed_in(&[Role::Employee]), "/loan/return/15/")
    else {
        panic!("expected render");
    };
    assert_eq!(view, ViewId::LoanReturnProcess);
    assert_eq!(params.get("id"), Some("15"));
    assert_eq!(access, Access::Granted);
}

#[test]
fn test_trailing_and_repeated_slashes_resolve_the_same() {
    let state = signed_in(&[Role::Admin]);
    let expected = resolve(&state, "/tools/tool-items");
    assert_eq!(resolve(&state, "/tools/tool-items/"), expected);
    assert_eq!(resolve(&state, "//tools//tool-items"), expected);
    assert_eq!(resolve(&state, "/tools/tool-items?type=3"), expected);
}

#[test]
fn test_resolve_is_idempotent() {
    let states = [
        SessionState::Uninitialized,
        SessionState::Unauthenticated,
        signed_in(&[Role::Employee]),
        signed_in(&[Role::Admin, Role::Employee]),
    ];
    let paths = ["/", "/home", "/employees", "/loan/return/3", "/nope", "/tools/kardex-view"];

    for state in &states {
        for path in paths {
            assert_eq!(resolve(state, path), resolve(state, path));
        }
    }
}

#[test]
fn test_rendered_views_respect_roles() {
    let employee = signed_in(&[Role::Employee]);
    for descriptor in AUTHENTICATED_ROUTES {
        let RouteTarget::View { .. } = descriptor.target else {
            continue;
        };
        let path = descriptor.pattern.replace(":id", "1");
        let Resolution::Render { access, .. } = resolve(&employee, &path) else {
            panic!("expected render for {path}");
        };
        let expected = if descriptor.roles.contains(&Role::Employee) {
            Access::Granted
        } else {
            Access::Denied
        };
        assert_eq!(access, expected, "path {path}");
    }
}

#[test]
fn test_route_table_shape() {
    // Catch-all is last and unique
    let last = AUTHENTICATED_ROUTES.last().unwrap();
    assert_eq!(last.pattern, "*");
    assert_eq!(last.target, RouteTarget::NotFound);
    assert_eq!(AUTHENTICATED_ROUTES.iter().filter(|d| d.pattern == "*").count(), 1);

    // No pattern is declared twice
    let patterns: HashSet<_> = AUTHENTICATED_ROUTES.iter().map(|d| d.pattern).collect();
    assert_eq!(patterns.len(), AUTHENTICATED_ROUTES.len());

    // Every view route names at least one role
    for descriptor in AUTHENTICATED_ROUTES {
        if let RouteTarget::View { .. } = descriptor.target {
            assert!(!descriptor.roles.is_empty(), "{} has no roles", descriptor.pattern);
        }
    }
}
