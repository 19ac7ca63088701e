pub mod require_role;

pub use require_role::RequireRole;
