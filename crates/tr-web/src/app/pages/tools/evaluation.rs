use dioxus::prelude::*;
use tr_types::web::{DamageLevel, EvaluationOutcome, ToolItem, ToolStatus};

use crate::app::{
    api::tool_items, auth::hooks::use_api, components::{PageCard, SelectField, StatusBadge, TextField, use_toaster}
};

const DAMAGE_OPTIONS: &[(DamageLevel, &str)] = &[
    (DamageLevel::NoDanada, "Sin Daños (Falsa Alarma)"),
    (DamageLevel::LevementeDanada, "Daño Leve (Reparable)"),
    (DamageLevel::Danada, "Dañada (Reparable con Costo)"),
    (DamageLevel::GravementeDanada, "Gravemente Dañada (Reparación Mayor)"),
    (DamageLevel::Irreparable, "Irreparable / Pérdida Total"),
];

/// Lines explaining what confirming `level` will do to `item`.
fn outcome_lines(level: DamageLevel, item: &ToolItem) -> [String; 2] {
    let (replacement, damage_fee) = item
        .tool_type
        .as_ref()
        .map(|t| (t.replacement_value, t.damage_fee))
        .unwrap_or_default();

    match level.evaluation_outcome() {
        EvaluationOutcome::Retired => [
            "La herramienta se dará de BAJA.".to_string(),
            format!("Se cobrará el Valor de Reposición (${replacement}) al último cliente."),
        ],
        EvaluationOutcome::Available => [
            "La herramienta volverá a estar DISPONIBLE.".to_string(),
            "No se aplicarán cargos extra.".to_string(),
        ],
        EvaluationOutcome::InRepair => [
            "La herramienta quedará EN REPARACIÓN.".to_string(),
            format!("Se cobrará la Tarifa de Daño (${damage_fee}) al último cliente."),
        ],
    }
}

#[component]
pub fn ToolItemEvaluateDamagePage() -> Element {
    let api = use_api();
    let nav = navigator();
    let mut toaster = use_toaster();

    let mut serial_number = use_signal(String::new);
    let mut found = use_signal(|| None::<ToolItem>);
    let mut result = use_signal(String::new);
    let mut searching = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let search_api = api.clone();
    let on_search = move |evt: Event<FormData>| {
        evt.prevent_default();
        let serial = serial_number().trim().to_string();
        if serial.is_empty() || searching() {
            return;
        }

        let api = search_api.clone();
        searching.set(true);
        spawn(async move {
            match tool_items::by_serial(&api, &serial).await {
                Ok(item) => {
                    if item.status == ToolStatus::Disponible {
                        toaster.info("Esta herramienta figura como DISPONIBLE. ¿Seguro que es la correcta?");
                    }
                    found.set(Some(item));
                    result.set(String::new());
                }
                Err(err) => {
                    tracing::info!(error = %err, serial = %serial, "tool item lookup failed");
                    toaster.error("No se encontró ninguna herramienta con ese número de serie.");
                    found.set(None);
                }
            }
            searching.set(false);
        });
    };

    let on_confirm = move |_| {
        if submitting() {
            return;
        }
        let (Some(item), Some(level)) = (found(), DamageLevel::parse(&result())) else {
            toaster.warning("Debe seleccionar un resultado de la evaluación.");
            return;
        };

        let api = api.clone();
        submitting.set(true);
        spawn(async move {
            match tool_items::evaluate_damage(&api, item.id, level).await {
                Ok(_) => {
                    toaster.success("Evaluación registrada. Se han aplicado los cargos correspondientes.");
                    nav.push("/tools");
                }
                Err(err) => {
                    tracing::warn!(error = %err, id = item.id, "damage evaluation failed");
                    toaster.error(err.user_message("Error al procesar la evaluación."));
                }
            }
            submitting.set(false);
        });
    };

    let reset = move |_| {
        found.set(None);
        serial_number.set(String::new());
        result.set(String::new());
    };

    let damage_options = DAMAGE_OPTIONS
        .iter()
        .map(|(level, label)| (level.as_str().to_string(), label.to_string()))
        .collect::<Vec<_>>();

    let current = found();
    let type_name = current.as_ref().map(|item| item.type_name().to_string()).unwrap_or_default();
    let (model, replacement, damage_fee) = current
        .as_ref()
        .and_then(|item| item.tool_type.as_ref())
        .map(|t| (t.model.clone(), t.replacement_value, t.damage_fee))
        .unwrap_or_default();

    rsx! {
        PageCard { title: "Evaluar Daño y Cobros",
            form { class: "flex items-end gap-2 max-w-xl", onsubmit: on_search,
                div { class: "flex-grow",
                    TextField { label: "Número de Serie", value: serial_number, placeholder: "Escanear Número de Serie *", required: true }
                }
                button { class: "btn btn-primary", r#type: "submit", disabled: searching(),
                    if searching() { "Buscando..." } else { "Buscar" }
                }
            }

            if let Some(item) = current {
                div { class: "card bg-base-100 max-w-2xl",
                    div { class: "card-body gap-3",
                        h3 { class: "card-title", "{type_name}" }
                        div { class: "grid grid-cols-2 gap-2 text-sm",
                            div { strong { "Modelo: " } "{model}" }
                            div { strong { "Serie: " } "{item.serial_number}" }
                            div { strong { "Estado Actual: " } StatusBadge { badge: item.status.badge() } }
                            div { strong { "Daño Actual: " } StatusBadge { badge: item.damage_level.badge() } }
                            div { strong { "Valor Reposición: " } "${replacement}" }
                            div { strong { "Costo Reparación: " } "${damage_fee}" }
                        }
                        SelectField {
                            label: "Resultado de la Evaluación:",
                            value: result,
                            options: damage_options,
                            placeholder: "Seleccione el resultado de la evaluación *",
                        }
                        if let Some(level) = DamageLevel::parse(&result()) {
                            div { role: "alert", class: "alert alert-info alert-soft flex-col items-start",
                                strong { "Acción del Sistema:" }
                                ul { class: "list-disc ml-6",
                                    for line in outcome_lines(level, &item) {
                                        li { "{line}" }
                                    }
                                }
                            }
                        }
                        div { class: "card-actions justify-end",
                            button { class: "btn btn-ghost", onclick: reset, "Cancelar / Nueva Búsqueda" }
                            button { class: "btn btn-primary", disabled: submitting(), onclick: on_confirm, "Confirmar Evaluación y Cobro" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tr_types::web::ToolType;

    use super::*;

    fn item() -> ToolItem {
        ToolItem {
            id: 1,
            serial_number: "SN-1".into(),
            status: ToolStatus::EnReparacion,
            damage_level: DamageLevel::EnEvaluacion,
            tool_type: Some(ToolType {
                replacement_value: 90000,
                damage_fee: 15000,
                ..Default::default()
            }),
        }
    }

    #[test]
    fn irreparable_charges_replacement_value() {
        let lines = outcome_lines(DamageLevel::Irreparable, &item());
        assert_eq!(lines[0], "La herramienta se dará de BAJA.");
        assert!(lines[1].contains("$90000"));
    }

    #[test]
    fn repairable_damage_charges_damage_fee() {
        let lines = outcome_lines(DamageLevel::Danada, &item());
        assert_eq!(lines[0], "La herramienta quedará EN REPARACIÓN.");
        assert!(lines[1].contains("$15000"));
    }

    #[test]
    fn false_alarm_has_no_charge() {
        let lines = outcome_lines(DamageLevel::NoDanada, &item());
        assert_eq!(lines[1], "No se aplicarán cargos extra.");
    }
}
