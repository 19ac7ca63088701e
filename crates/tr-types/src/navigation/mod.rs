//! Session-gated navigation: the static route tables, path matching, the role
//! guard and the resolver that turns `(session, path)` into what to render.
//!
//! Everything here is pure. The web crate feeds it the current session and
//! location and renders whatever comes back.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    auth::{Principal, Role},
    session::SessionState,
};

mod table;

pub use table::{AUTHENTICATED_ROUTES, PUBLIC_PATH, UNAUTHENTICATED_ROUTES};

/// Every screen the application can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    PublicHome,
    Home,
    EmployeeHome,
    EmployeeRegister,
    ClientHome,
    ClientRegister,
    ToolHome,
    ToolItemHome,
    ToolTypeRegister,
    ToolItemRegister,
    ToolItemEnable,
    ToolItemDisable,
    ToolItemEvaluateDamage,
    ToolTypeRentalFeeConfig,
    ToolTypeReplacementValueConfig,
    ToolKardexView,
    ToolKardexDateRangeReport,
    LoanHome,
    LoanRegister,
    LoanReturn,
    LoanReturnProcess,
    LoanLateFeeConfig,
    LoanActiveView,
}

/// Chrome wrapped around a view. Has no bearing on authorization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    /// No chrome at all (public landing page).
    Bare,
    /// Header only.
    Minimal,
    /// Header, collapsible sidebar and toast host.
    Full,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    View { view: ViewId, layout: Layout },
    Redirect(&'static str),
    NotFound,
}

/// One entry of a route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// `/`-separated pattern. `:name` segments capture, `*` matches anything.
    pub pattern: &'static str,
    /// Roles allowed to see the target; empty means anyone.
    pub roles: &'static [Role],
    pub target: RouteTarget,
}

impl RouteDescriptor {
    /// Match already-normalized path segments against this pattern.
    pub fn matches(&self, segments: &[&str]) -> Option<RouteParams> {
        if self.pattern == "*" {
            return Some(RouteParams::default());
        }

        let pattern: Vec<&str> = split_segments(self.pattern).collect();
        if pattern.len() != segments.len() {
            return None;
        }

        let mut params = RouteParams::default();
        for (expected, actual) in pattern.iter().zip(segments) {
            match expected.strip_prefix(':') {
                Some(name) => {
                    params.0.insert(name.to_string(), (*actual).to_string());
                }
                None if expected == actual => {}
                None => return None,
            }
        }
        Some(params)
    }
}

/// Values captured from `:name` pattern segments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Access {
    Granted,
    Denied,
}

/// Decide whether `principal` may see something restricted to `required`.
///
/// An empty requirement grants everyone; otherwise one shared role is enough.
pub fn guard(required: &[Role], principal: &Principal) -> Access {
    if required.is_empty() || principal.has_any_role(required) {
        Access::Granted
    } else {
        Access::Denied
    }
}

/// What the shell should do for the current session and location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Session check still running.
    Loading,
    /// Replace the current location.
    Redirect(String),
    /// Unauthenticated landing view, no layout.
    Public(ViewId),
    Render {
        layout: Layout,
        view: ViewId,
        params: RouteParams,
        access: Access,
    },
    NotFound,
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Drop query string and fragment, then split into non-empty segments.
///
/// `"/loans//active/?x=1#top"` becomes `["loans", "active"]`.
pub fn normalize(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    split_segments(&path[..end]).collect()
}

fn first_match<'t>(table: &'t [RouteDescriptor], segments: &[&str]) -> Option<(&'t RouteDescriptor, RouteParams)> {
    table
        .iter()
        .find_map(|descriptor| descriptor.matches(segments).map(|params| (descriptor, params)))
}

/// Resolve a location against the table that applies to `state`.
pub fn resolve(state: &SessionState, path: &str) -> Resolution {
    let segments = normalize(path);

    match state {
        SessionState::Uninitialized => Resolution::Loading,
        SessionState::Unauthenticated => match first_match(UNAUTHENTICATED_ROUTES, &segments) {
            Some((descriptor, _)) => match descriptor.target {
                RouteTarget::View { view, .. } => Resolution::Public(view),
                RouteTarget::Redirect(to) => Resolution::Redirect(to.to_string()),
                RouteTarget::NotFound => Resolution::Redirect(PUBLIC_PATH.to_string()),
            },
            None => Resolution::Redirect(PUBLIC_PATH.to_string()),
        },
        SessionState::Authenticated(principal) => match first_match(AUTHENTICATED_ROUTES, &segments) {
            Some((descriptor, params)) => match descriptor.target {
                RouteTarget::View { view, layout } => Resolution::Render {
                    layout,
                    view,
                    params,
                    access: guard(descriptor.roles, principal),
                },
                RouteTarget::Redirect(to) => Resolution::Redirect(to.to_string()),
                RouteTarget::NotFound => Resolution::NotFound,
            },
            None => Resolution::NotFound,
        },
    }
}

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod tests;
