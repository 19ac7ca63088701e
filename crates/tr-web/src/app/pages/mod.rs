use dioxus::prelude::*;
use tr_types::navigation::{RouteParams, ViewId};

pub mod clients;
pub mod employees;
pub mod home;
pub mod loans;
pub mod not_found;
pub mod public_home;
pub mod tools;

pub use clients::{ClientHomePage, ClientRegisterPage};
pub use employees::{EmployeeHomePage, EmployeeRegisterPage};
pub use home::HomePage;
pub use loans::{LoanActiveViewPage, LoanHomePage, LoanLateFeeConfigPage, LoanRegisterPage, LoanReturnPage, LoanReturnProcessPage};
pub use not_found::{LoadingPage, NotFoundPage};
pub use public_home::PublicHomePage;
pub use tools::{
    RentalFeeConfigPage, ReplacementValueConfigPage, ToolHomePage, ToolItemDisablePage, ToolItemEnablePage, ToolItemEvaluateDamagePage, ToolItemHomePage, ToolItemRegisterPage, ToolKardexDateRangePage, ToolKardexViewPage, ToolTypeRegisterPage
};

/// Render the page behind a resolved view.
#[component]
pub fn ViewOutlet(view: ViewId, params: RouteParams) -> Element {
    match view {
        ViewId::PublicHome => rsx! { PublicHomePage {} },
        ViewId::Home => rsx! { HomePage {} },
        ViewId::EmployeeHome => rsx! { EmployeeHomePage {} },
        ViewId::EmployeeRegister => rsx! { EmployeeRegisterPage {} },
        ViewId::ClientHome => rsx! { ClientHomePage {} },
        ViewId::ClientRegister => rsx! { ClientRegisterPage {} },
        ViewId::ToolHome => rsx! { ToolHomePage {} },
        ViewId::ToolItemHome => rsx! { ToolItemHomePage {} },
        ViewId::ToolTypeRegister => rsx! { ToolTypeRegisterPage {} },
        ViewId::ToolItemRegister => rsx! { ToolItemRegisterPage {} },
        ViewId::ToolItemEnable => rsx! { ToolItemEnablePage {} },
        ViewId::ToolItemDisable => rsx! { ToolItemDisablePage {} },
        ViewId::ToolItemEvaluateDamage => rsx! { ToolItemEvaluateDamagePage {} },
        ViewId::ToolTypeRentalFeeConfig => rsx! { RentalFeeConfigPage {} },
        ViewId::ToolTypeReplacementValueConfig => rsx! { ReplacementValueConfigPage {} },
        ViewId::ToolKardexView => rsx! { ToolKardexViewPage {} },
        ViewId::ToolKardexDateRangeReport => rsx! { ToolKardexDateRangePage {} },
        ViewId::LoanHome => rsx! { LoanHomePage {} },
        ViewId::LoanRegister => rsx! { LoanRegisterPage {} },
        ViewId::LoanReturn => rsx! { LoanReturnPage {} },
        ViewId::LoanReturnProcess => {
            let id = params.get("id").unwrap_or_default().to_string();
            rsx! { LoanReturnProcessPage { id } }
        }
        ViewId::LoanLateFeeConfig => rsx! { LoanLateFeeConfigPage {} },
        ViewId::LoanActiveView => rsx! { LoanActiveViewPage {} },
    }
}
