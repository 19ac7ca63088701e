use dioxus::prelude::*;

use crate::app::{
    api::clients, auth::hooks::use_api, components::{CardGrid, ClientCard, ErrorLine, LoadingLine, PageCard}
};

pub mod register;

pub use register::ClientRegisterPage;

#[component]
pub fn ClientHomePage() -> Element {
    let api = use_api();
    let nav = navigator();
    let clients = use_resource(move || {
        let api = api.clone();
        async move { clients::list(&api).await }
    });

    rsx! {
        PageCard {
            title: "Gestión de Clientes",
            actions: rsx! {
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        nav.push("/clients/register");
                    },
                    "Registrar Cliente"
                }
            },
            match clients() {
                None => rsx! { LoadingLine { message: "Cargando clientes..." } },
                Some(Err(err)) => {
                    tracing::warn!(error = %err, "failed to load clients");
                    rsx! { ErrorLine { message: "Error al cargar los clientes." } }
                }
                Some(Ok(list)) if list.is_empty() => rsx! { p { "No hay clientes registrados." } },
                Some(Ok(list)) => rsx! {
                    CardGrid {
                        for client in list {
                            ClientCard { key: "{client.run}", client }
                        }
                    }
                },
            }
        }
    }
}
