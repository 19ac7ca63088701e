use dioxus::prelude::*;

use crate::app::{
    api::employees, auth::hooks::use_api, components::{CardGrid, EmployeeCard, ErrorLine, LoadingLine, PageCard}
};

pub mod register;

pub use register::EmployeeRegisterPage;

#[component]
pub fn EmployeeHomePage() -> Element {
    let api = use_api();
    let nav = navigator();
    let employees = use_resource(move || {
        let api = api.clone();
        async move { employees::list(&api).await }
    });

    rsx! {
        PageCard {
            title: "Gestión de Empleados",
            actions: rsx! {
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        nav.push("/employees/register");
                    },
                    "Registrar Empleado"
                }
            },
            match employees() {
                None => rsx! { LoadingLine { message: "Cargando empleados..." } },
                Some(Err(err)) => {
                    tracing::warn!(error = %err, "failed to load employees");
                    rsx! { ErrorLine { message: "Error al cargar los empleados." } }
                }
                Some(Ok(list)) if list.is_empty() => rsx! { p { "No hay empleados registrados." } },
                Some(Ok(list)) => rsx! {
                    CardGrid {
                        for employee in list {
                            EmployeeCard { key: "{employee.run}", employee }
                        }
                    }
                },
            }
        }
    }
}
