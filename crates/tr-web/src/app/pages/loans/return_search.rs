use dioxus::prelude::*;
use tr_types::{validation::format_run, web::Loan};

use crate::{
    app::{
        api::loans, auth::hooks::use_api, components::{CardGrid, PageCard, TextField, form::InputTransform, use_toaster}
    },
    error::ApiError,
};

fn search_error(err: &ApiError) -> &'static str {
    if err.is_not_found() {
        "Cliente no encontrado en la base de datos."
    } else {
        "Error al buscar los préstamos."
    }
}

/// Names of the tools on the loan, comma separated.
fn tool_names(loan: &Loan) -> String {
    loan.loan_tools
        .iter()
        .map(|lt| lt.tool_item.type_name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[component]
pub fn LoanReturnPage() -> Element {
    let api = use_api();
    let mut toaster = use_toaster();

    let client_run = use_signal(String::new);
    let mut found = use_signal(Vec::<Loan>::new);
    // RUN of the last finished search, if any
    let mut searched = use_signal(|| None::<String>);
    let mut searching = use_signal(|| false);

    let on_search = move |evt: Event<FormData>| {
        evt.prevent_default();
        if searching() {
            return;
        }
        let run = client_run().trim().to_string();
        if run.is_empty() {
            toaster.warning("Ingrese un RUT para buscar.");
            return;
        }

        let api = api.clone();
        searching.set(true);
        spawn(async move {
            match loans::by_client(&api, &run).await {
                Ok(list) => {
                    if list.is_empty() {
                        toaster.info("El cliente no tiene préstamos activos pendientes.");
                    }
                    found.set(list);
                }
                Err(err) => {
                    tracing::warn!(error = %err, client = %run, "loan search failed");
                    toaster.error(search_error(&err));
                    found.set(Vec::new());
                }
            }
            searched.set(Some(run));
            searching.set(false);
        });
    };

    let loans_found = found();

    rsx! {
        PageCard { title: "Realizar Devolución",
            form { class: "flex items-end gap-2 max-w-2xl mx-auto w-full", onsubmit: on_search,
                div { class: "grow",
                    TextField {
                        label: "RUT del Cliente",
                        value: client_run,
                        placeholder: "Ingrese RUN del Cliente",
                        transform: format_run as InputTransform,
                    }
                }
                button { class: "btn btn-primary", r#type: "submit", disabled: searching(), "Buscar" }
            }

            if !loans_found.is_empty() {
                CardGrid {
                    for loan in loans_found {
                        ReturnCandidate { key: "{loan.id}", loan }
                    }
                }
            } else if let Some(run) = searched() {
                p { class: "text-center opacity-70 mt-4",
                    "No se encontraron préstamos activos para el RUT: {run}"
                }
            }
        }
    }
}

#[component]
fn ReturnCandidate(loan: Loan) -> Element {
    let nav = navigator();
    let id = loan.id;
    let names = tool_names(&loan);
    let count = loan.loan_tools.len();

    rsx! {
        div { class: "card bg-base-100 shadow-md",
            div { class: "card-body gap-2",
                div { class: "flex items-center justify-between",
                    h3 { class: "card-title", "Préstamo #{id}" }
                    span { class: "badge badge-success", "ACTIVO" }
                }
                p { class: "text-sm", strong { "Fecha Préstamo: " } "{loan.loan_date}" }
                p { class: "text-sm", strong { "Fecha Límite: " } "{loan.return_date}" }
                p { class: "text-sm", strong { "Items: " } "{count}" }
                p { class: "text-xs opacity-70", "{names}" }
                div { class: "card-actions justify-end",
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| {
                            nav.push(format!("/loan/return/{id}"));
                        },
                        "Iniciar Devolución"
                    }
                }
            }
        }
    }
}
