use super::{Layout, RouteDescriptor, RouteTarget, ViewId};
use crate::auth::Role;

const STAFF: &[Role] = &[Role::Admin, Role::Employee];
const ADMIN: &[Role] = &[Role::Admin];
const PUBLIC: &[Role] = &[];

const fn full(pattern: &'static str, roles: &'static [Role], view: ViewId) -> RouteDescriptor {
    RouteDescriptor {
        pattern,
        roles,
        target: RouteTarget::View { view, layout: Layout::Full },
    }
}

/// Routes available once a session exists. Order matters: first match wins,
/// and the catch-all must stay last.
pub static AUTHENTICATED_ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        pattern: "/",
        roles: PUBLIC,
        target: RouteTarget::Redirect("/home"),
    },
    RouteDescriptor {
        pattern: "/home",
        roles: STAFF,
        target: RouteTarget::View {
            view: ViewId::Home,
            layout: Layout::Minimal,
        },
    },
    full("/employees", ADMIN, ViewId::EmployeeHome),
    full("/employees/register", ADMIN, ViewId::EmployeeRegister),
    full("/clients", ADMIN, ViewId::ClientHome),
    full("/clients/register", ADMIN, ViewId::ClientRegister),
    full("/tools", STAFF, ViewId::ToolHome),
    full("/tools/tool-items", STAFF, ViewId::ToolItemHome),
    full("/tools/register-tool-type", ADMIN, ViewId::ToolTypeRegister),
    full("/tools/tool-items/register-tool-item", ADMIN, ViewId::ToolItemRegister),
    full("/tools/tool-items/enable", ADMIN, ViewId::ToolItemEnable),
    full("/tools/tool-items/disable", ADMIN, ViewId::ToolItemDisable),
    full("/tools/tool-items/evaluation", ADMIN, ViewId::ToolItemEvaluateDamage),
    full("/tools/rental-fee-config", ADMIN, ViewId::ToolTypeRentalFeeConfig),
    full("/tools/replacement-value-config", ADMIN, ViewId::ToolTypeReplacementValueConfig),
    full("/tools/kardex-view", STAFF, ViewId::ToolKardexView),
    full("/tools/kardex-date-range-report", STAFF, ViewId::ToolKardexDateRangeReport),
    full("/loans", STAFF, ViewId::LoanHome),
    full("/loan/register", STAFF, ViewId::LoanRegister),
    full("/loan/return", STAFF, ViewId::LoanReturn),
    full("/loan/return/:id", STAFF, ViewId::LoanReturnProcess),
    full("/loan/configuration", ADMIN, ViewId::LoanLateFeeConfig),
    full("/loans/active", STAFF, ViewId::LoanActiveView),
    RouteDescriptor {
        pattern: "*",
        roles: PUBLIC,
        target: RouteTarget::NotFound,
    },
];

/// Routes used while nobody is signed in: the landing page, and a bounce back
/// to it from everywhere else.
pub static UNAUTHENTICATED_ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        pattern: PUBLIC_PATH,
        roles: PUBLIC,
        target: RouteTarget::View {
            view: ViewId::PublicHome,
            layout: Layout::Bare,
        },
    },
    RouteDescriptor {
        pattern: "*",
        roles: PUBLIC,
        target: RouteTarget::Redirect(PUBLIC_PATH),
    },
];

pub const PUBLIC_PATH: &str = "/";
