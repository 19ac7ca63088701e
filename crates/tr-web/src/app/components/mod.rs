pub mod auth;
pub mod cards;
pub mod form;
pub mod header;
pub mod layout;
pub mod sidebar;
pub mod table;
pub mod toast;
pub mod tool_type_picker;

pub use auth::{RequireRole, require_role::AccessDenied};
pub use cards::{ClientCard, EmployeeCard, LoanCard, StatusBadge, ToolItemCard, ToolTypeCard};
pub use form::{CardGrid, PageCard, SelectField, TextField};
pub use header::Header;
pub use layout::{FullLayout, LayoutShell, MinimalLayout};
pub use sidebar::Sidebar;
pub use table::{ErrorLine, KardexTable, LoadingLine, Table, TableColumn};
pub use toast::{ToastHost, Toaster, use_toaster};
pub use tool_type_picker::ToolTypePicker;
