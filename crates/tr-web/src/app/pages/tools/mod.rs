use dioxus::prelude::*;

use crate::app::{
    api::tool_types, auth::hooks::use_api, components::{CardGrid, ErrorLine, LoadingLine, PageCard, ToolTypeCard}
};

pub mod evaluation;
pub mod items;
pub mod kardex;
pub mod pricing;
pub mod register_type;

pub use evaluation::ToolItemEvaluateDamagePage;
pub use items::{ToolItemDisablePage, ToolItemEnablePage, ToolItemHomePage, ToolItemRegisterPage};
pub use kardex::{ToolKardexDateRangePage, ToolKardexViewPage};
pub use pricing::{RentalFeeConfigPage, ReplacementValueConfigPage};
pub use register_type::ToolTypeRegisterPage;

const TOOL_ACTIONS: &[(&str, &str)] = &[
    ("/tools/register-tool-type", "Registrar Tipo de Herramienta"),
    ("/tools/tool-items", "Ver Unidades de Herramienta"),
    ("/tools/rental-fee-config", "Configurar Tarifa de Arriendo"),
    ("/tools/replacement-value-config", "Configurar Valor de Reemplazo"),
    ("/tools/kardex-view", "Ver movimientos de Herramientas"),
    ("/tools/kardex-date-range-report", "Ver movimientos entre fechas"),
];

#[component]
pub fn ToolHomePage() -> Element {
    let api = use_api();
    let nav = navigator();
    let tool_types = use_resource(move || {
        let api = api.clone();
        async move { tool_types::list(&api).await }
    });

    rsx! {
        PageCard {
            title: "Gestión de Herramientas",
            actions: rsx! {
                for (to, label) in TOOL_ACTIONS.iter().copied() {
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
            match tool_types() {
                None => rsx! { LoadingLine { message: "Cargando herramientas..." } },
                Some(Err(err)) => {
                    tracing::warn!(error = %err, "failed to load tool types");
                    rsx! { ErrorLine { message: "Error al cargar las herramientas. ¿Tienes los permisos correctos?" } }
                }
                Some(Ok(list)) if list.is_empty() => rsx! { p { "No hay herramientas registradas." } },
                Some(Ok(list)) => rsx! {
                    CardGrid {
                        for tool_type in list {
                            ToolTypeCard { key: "{tool_type.id:?}", tool_type }
                        }
                    }
                },
            }
        }
    }
}
