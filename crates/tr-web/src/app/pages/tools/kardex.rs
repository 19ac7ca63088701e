use std::collections::HashMap;

use dioxus::prelude::*;
use tr_types::{
    validation::{ValidationError, validate_date_range}, web::{Kardex, ToolType}
};

use crate::app::{
    api::{kardex, tool_types}, auth::hooks::use_api, components::{KardexTable, LoadingLine, PageCard, TextField, ToolTypePicker, tool_type_picker::OptionDetail, use_toaster}
};

fn stock_detail(tool_type: &ToolType) -> String {
    format!("Stock Total: {}", tool_type.total_stock.unwrap_or(0))
}

#[component]
pub fn ToolKardexViewPage() -> Element {
    let api = use_api();
    let mut toaster = use_toaster();

    let list_api = api.clone();
    let tool_types = use_resource(move || {
        let api = list_api.clone();
        async move {
            tool_types::list(&api).await.unwrap_or_else(|err| {
                tracing::warn!(error = %err, "failed to load tool types");
                toaster.error("Error al cargar la lista de herramientas.");
                Vec::new()
            })
        }
    });

    let mut selected = use_signal(|| None::<ToolType>);
    let movements = use_resource(move || {
        let api = api.clone();
        let name = selected.read().as_ref().map(|t| t.name.clone());
        async move {
            let name = name?;
            match kardex::by_tool_name(&api, &name).await {
                Ok(movements) => Some(movements),
                Err(err) => {
                    tracing::warn!(error = %err, tool = %name, "failed to load kardex");
                    toaster.error("Error al cargar los movimientos de Kardex.");
                    Some(Vec::new())
                }
            }
        }
    });

    let selected_type = selected();
    let heading = selected_type
        .as_ref()
        .map(|t| format!("Movimientos para {}", t.label()))
        .unwrap_or_default();

    rsx! {
        PageCard { title: "Historial de Movimientos de Kardex",
            match tool_types() {
                None => rsx! { LoadingLine { message: "Cargando lista de herramientas..." } },
                Some(list) => rsx! {
                    div { class: "max-w-xl",
                        ToolTypePicker {
                            tool_types: list,
                            selected: selected_type.as_ref().and_then(|t| t.id),
                            detail: stock_detail as OptionDetail,
                            on_select: move |choice| selected.set(choice),
                        }
                    }
                },
            }
            if selected_type.is_some() {
                h3 { class: "text-lg font-semibold text-center", "{heading}" }
                match movements().flatten() {
                    None => rsx! { LoadingLine { message: "Cargando movimientos..." } },
                    Some(movements) => rsx! {
                        KardexTable {
                            movements,
                            empty_message: "No hay movimientos de Kardex registrados para este tipo de herramienta.",
                        }
                    },
                }
            }
        }
    }
}

/// Toast text for an invalid report range.
fn range_error(errors: &HashMap<String, ValidationError>) -> &'static str {
    if errors.values().any(|e| *e == ValidationError::StartAfterEnd) {
        "La fecha de inicio no puede ser posterior a la fecha de fin."
    } else {
        "Debes seleccionar una fecha de inicio y una fecha de fin."
    }
}

#[component]
pub fn ToolKardexDateRangePage() -> Element {
    let api = use_api();
    let mut toaster = use_toaster();

    let start = use_signal(String::new);
    let end = use_signal(String::new);
    let mut movements = use_signal(|| None::<Vec<Kardex>>);
    let mut loading = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let (from, to) = match validate_date_range(&start(), &end()) {
            Ok(range) => range,
            Err(errors) => {
                toaster.error(range_error(&errors));
                return;
            }
        };

        let api = api.clone();
        loading.set(true);
        spawn(async move {
            match kardex::by_date_range(&api, from, to).await {
                Ok(found) => {
                    if found.is_empty() {
                        toaster.info("No se encontraron movimientos en el rango de fechas seleccionado.");
                    }
                    movements.set(Some(found));
                }
                Err(err) => {
                    tracing::warn!(error = %err, %from, %to, "failed to load kardex range");
                    toaster.error(err.user_message("Error al cargar los datos. Verifique el rango."));
                    movements.set(Some(Vec::new()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        PageCard { title: "Reporte de Kardex por Rango de Fechas",
            form { class: "flex flex-wrap items-end gap-4 max-w-2xl", onsubmit: on_submit,
                div { class: "flex-1 min-w-40",
                    TextField { label: "Fecha Inicio:", value: start, input_type: "date", required: true }
                }
                div { class: "flex-1 min-w-40",
                    TextField { label: "Fecha Fin:", value: end, input_type: "date", required: true }
                }
                button { class: "btn btn-primary", r#type: "submit", disabled: loading(),
                    if loading() { "Buscando..." } else { "Generar Reporte" }
                }
            }
            if let Some(movements) = movements() {
                KardexTable {
                    movements,
                    show_tool: true,
                    empty_message: "No hay movimientos en el rango seleccionado.",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_range_has_its_own_message() {
        let errors = validate_date_range("2025-03-01", "2025-01-01").unwrap_err();
        assert_eq!(range_error(&errors), "La fecha de inicio no puede ser posterior a la fecha de fin.");
    }

    #[test]
    fn missing_dates_ask_for_both() {
        let errors = validate_date_range("", "2025-01-01").unwrap_err();
        assert_eq!(range_error(&errors), "Debes seleccionar una fecha de inicio y una fecha de fin.");
    }
}
