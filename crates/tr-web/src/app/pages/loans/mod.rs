use dioxus::prelude::*;
use tr_types::web::{Loan, LoanStatus};

use crate::{
    app::{
        api::loans, auth::hooks::use_api, components::{CardGrid, ErrorLine, LoadingLine, LoanCard, PageCard, use_toaster}
    },
    error::ApiError,
};

pub mod late_fee;
pub mod register;
pub mod return_process;
pub mod return_search;

pub use late_fee::LoanLateFeeConfigPage;
pub use register::LoanRegisterPage;
pub use return_process::LoanReturnProcessPage;
pub use return_search::LoanReturnPage;

const LOAN_ACTIONS: &[(&str, &str)] = &[
    ("/loan/register", "Registrar Nuevo Préstamo"),
    ("/loan/return", "Devolver un Préstamo"),
    ("/loan/configuration", "Configurar Multa por Atraso"),
    ("/loans/active", "Ver Préstamos Activos"),
];

#[component]
pub fn LoanHomePage() -> Element {
    let api = use_api();
    let nav = navigator();
    let mut toaster = use_toaster();
    let mut refreshing = use_signal(|| false);

    let list_api = api.clone();
    let mut loan_list = use_resource(move || {
        let api = list_api.clone();
        async move { loans::list(&api).await }
    });

    let refresh_validity = move |_| {
        if refreshing() {
            return;
        }
        let api = api.clone();
        refreshing.set(true);
        spawn(async move {
            match loans::update_late_statuses(&api).await {
                Ok(()) => {
                    toaster.success("¡Validez de préstamos actualizada con éxito!");
                    loan_list.restart();
                }
                Err(err) => {
                    tracing::warn!(error = %err, "late status update failed");
                    toaster.error(err.user_message("Error al actualizar la validez."));
                }
            }
            refreshing.set(false);
        });
    };

    rsx! {
        PageCard {
            title: "Gestión de Préstamos",
            actions: rsx! {
                button {
                    class: "btn btn-secondary btn-sm",
                    disabled: refreshing(),
                    onclick: refresh_validity,
                    "Actualizar Validez de los Préstamos"
                }
                for (to, label) in LOAN_ACTIONS.iter().copied() {
                    button {
                        key: "{to}",
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| {
                            nav.push(to);
                        },
                        "{label}"
                    }
                }
            },
            LoanList {
                loans: loan_list(),
                loading: "Cargando préstamos...",
                failed: "Error al cargar los préstamos.",
                empty: "No hay préstamos registrados.".to_string(),
            }
        }
    }
}

#[component]
pub fn LoanActiveViewPage() -> Element {
    let api = use_api();
    let nav = navigator();
    let active = use_resource(move || {
        let api = api.clone();
        async move { loans::by_status(&api, LoanStatus::Active).await }
    });

    let status = LoanStatus::Active.as_str();
    rsx! {
        PageCard {
            title: format!("Préstamos Activos (Estado: {status})"),
            actions: rsx! {
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| {
                        nav.push("/loans");
                    },
                    "Volver a Todos los Préstamos"
                }
            },
            LoanList {
                loans: active(),
                loading: "Cargando préstamos activos...",
                failed: "Error al cargar los préstamos activos.",
                empty: format!("No hay préstamos con estado \"{status}\" registrados."),
            }
        }
    }
}

/// Card grid over a loan fetch, with its loading, error and empty lines.
#[component]
fn LoanList(
    loans: Option<Result<Vec<Loan>, ApiError>>,
    loading: &'static str,
    failed: &'static str,
    empty: String,
) -> Element {
    match loans {
        None => rsx! { LoadingLine { message: loading } },
        Some(Err(err)) => {
            tracing::warn!(error = %err, "failed to load loans");
            rsx! { ErrorLine { message: failed.to_string() } }
        }
        Some(Ok(list)) if list.is_empty() => rsx! { p { "{empty}" } },
        Some(Ok(list)) => rsx! {
            CardGrid {
                for loan in list {
                    LoanCard { key: "{loan.id}", loan }
                }
            }
        },
    }
}
