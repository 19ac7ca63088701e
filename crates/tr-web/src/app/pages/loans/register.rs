use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use tr_types::{
    validation::format_run, web::{IdRef, LoanToolRef, NewLoan, RunRef, ToolItem, ToolType}
};

use crate::app::{
    api::{loans, tool_items, tool_types}, auth::hooks::use_api, components::{PageCard, TextField, ToolTypePicker, form::InputTransform, use_toaster}
};

/// Add `item` to the loan unless that very unit is already on it.
///
/// Returns the unit already present on a clash.
fn add_unit(units: &mut Vec<ToolItem>, item: ToolItem) -> Result<(), ToolItem> {
    if let Some(existing) = units.iter().find(|u| u.id == item.id) {
        return Err(existing.clone());
    }
    units.push(item);
    Ok(())
}

fn duplicate_message(type_name: &str, serial_number: &str) -> String {
    format!("Ya agregaste una unidad de {type_name} (Serie: {serial_number}). Agrega otra si necesitas más.")
}

/// Body for a loan of `units` to `run`, starting `today`.
fn build_loan(run: &str, return_date: &str, today: NaiveDate, units: &[ToolItem]) -> Result<NewLoan, &'static str> {
    if units.is_empty() {
        return Err("Debes agregar al menos una herramienta.");
    }
    let run = run.trim();
    if run.is_empty() {
        return Err("Ingrese el RUT del cliente.");
    }
    let return_date = NaiveDate::parse_from_str(return_date.trim(), "%Y-%m-%d")
        .map_err(|_| "Seleccione una fecha de devolución válida.")?;
    if return_date < today {
        return Err("La fecha de devolución no puede ser anterior a hoy.");
    }

    Ok(NewLoan {
        client: RunRef { run: run.to_string() },
        loan_date: today,
        return_date,
        loan_tools: units
            .iter()
            .map(|u| LoanToolRef { tool_item: IdRef { id: u.id } })
            .collect(),
    })
}

#[component]
pub fn LoanRegisterPage() -> Element {
    let api = use_api();
    let mut toaster = use_toaster();

    let list_api = api.clone();
    let tool_types = use_resource(move || {
        let api = list_api.clone();
        async move {
            tool_types::list(&api).await.unwrap_or_else(|err| {
                tracing::warn!(error = %err, "failed to load tool types");
                Vec::new()
            })
        }
    });

    let mut client_run = use_signal(String::new);
    let mut return_date = use_signal(String::new);
    let mut selected = use_signal(|| None::<ToolType>);
    let mut units = use_signal(Vec::<ToolItem>::new);
    let mut adding = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let add_api = api.clone();
    let on_add = move |_| {
        if adding() {
            return;
        }
        let Some(tool_type) = selected() else {
            toaster.warning("Selecciona un tipo de herramienta primero.");
            return;
        };
        let Some(type_id) = tool_type.id else {
            return;
        };

        let api = add_api.clone();
        adding.set(true);
        spawn(async move {
            match tool_items::first_available(&api, type_id).await {
                Ok(item) => {
                    let serial = item.serial_number.clone();
                    match add_unit(&mut units.write(), item) {
                        Ok(()) => {
                            toaster.success(format!("Agregada: {serial}"));
                            selected.set(None);
                        }
                        Err(existing) => toaster.warning(duplicate_message(&tool_type.name, &existing.serial_number)),
                    }
                }
                Err(err) if err.is_not_found() => {
                    toaster.error(format!("No hay unidades disponibles o en buen estado de {}.", tool_type.name));
                }
                Err(err) => {
                    tracing::warn!(error = %err, type_id, "available unit lookup failed");
                    toaster.error("Error al buscar herramienta.");
                }
            }
            adding.set(false);
        });
    };

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let today = Local::now().date_naive();
        let loan = match build_loan(&client_run(), &return_date(), today, &units.read()) {
            Ok(loan) => loan,
            Err(message) => {
                toaster.error(message);
                return;
            }
        };

        let api = api.clone();
        submitting.set(true);
        spawn(async move {
            match loans::create(&api, &loan).await {
                Ok(()) => {
                    toaster.success("¡Préstamo registrado!");
                    // Stay on the form, ready for the next loan
                    client_run.set(String::new());
                    return_date.set(String::new());
                    units.write().clear();
                }
                Err(err) => {
                    tracing::warn!(error = %err, "loan registration failed");
                    toaster.error(err.describe("Error interno.", "Error al registrar."));
                }
            }
            submitting.set(false);
        });
    };

    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let selected_id = selected.read().as_ref().and_then(|t| t.id);
    let added: Vec<(i64, String, String)> = units
        .read()
        .iter()
        .map(|u| (u.id, u.type_name().to_string(), u.serial_number.clone()))
        .collect();

    rsx! {
        PageCard { title: "Registrar Nuevo Préstamo",
            form { class: "flex flex-col gap-4", onsubmit: on_submit,
                div { class: "grid gap-4 md:grid-cols-2",
                    TextField {
                        label: "RUT del Cliente",
                        value: client_run,
                        placeholder: "RUT del Cliente",
                        required: true,
                        transform: format_run as InputTransform,
                    }
                    TextField {
                        label: "Fecha de Devolución",
                        value: return_date,
                        input_type: "date",
                        required: true,
                        min: today,
                    }
                }

                div { class: "divider my-0" }
                h3 { class: "text-lg font-semibold", "Agregar Herramientas" }
                div { class: "flex flex-col gap-2 md:flex-row md:items-end",
                    div { class: "grow",
                        ToolTypePicker {
                            tool_types: tool_types().unwrap_or_default(),
                            selected: selected_id,
                            label: "Tipo de Herramienta (Nombre o Modelo):",
                            on_select: move |choice| selected.set(choice),
                        }
                        p { class: "text-xs opacity-70 mt-1",
                            "* El sistema seleccionará automáticamente una unidad disponible."
                        }
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: adding(),
                        onclick: on_add,
                        "Agregar"
                    }
                }

                div { class: "bg-base-100 rounded-box p-4 min-h-24",
                    if added.is_empty() {
                        p { class: "text-center italic opacity-60",
                            "Lista vacía. Seleccione un tipo y pulse Agregar."
                        }
                    } else {
                        ul { class: "flex flex-col gap-2",
                            for (id, name, serial) in added {
                                li {
                                    key: "{id}",
                                    class: "flex items-center justify-between rounded border border-base-300 p-3",
                                    div {
                                        strong { "{name}" }
                                        span { class: "ml-3 opacity-70", "SN: {serial}" }
                                    }
                                    button {
                                        class: "btn btn-ghost btn-sm text-error",
                                        r#type: "button",
                                        onclick: move |_| units.write().retain(|u| u.id != id),
                                        "✕"
                                    }
                                }
                            }
                        }
                    }
                }

                button { class: "btn btn-primary w-full", r#type: "submit", disabled: submitting(), "Confirmar Préstamo" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tr_types::web::{DamageLevel, ToolStatus};

    fn unit(id: i64, serial: &str) -> ToolItem {
        ToolItem {
            id,
            serial_number: serial.into(),
            status: ToolStatus::Disponible,
            damage_level: DamageLevel::NoDanada,
            tool_type: None,
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn same_unit_is_not_added_twice() {
        let mut units = vec![unit(1, "TAL-001")];
        let clash = add_unit(&mut units, unit(1, "TAL-001")).unwrap_err();
        assert_eq!(clash.serial_number, "TAL-001");
        assert_eq!(units.len(), 1);

        add_unit(&mut units, unit(2, "TAL-002")).unwrap();
        assert_eq!(units.len(), 2);
    }

    #[test]
    fn duplicate_message_names_type_and_serial() {
        assert_eq!(
            duplicate_message("Taladro", "TAL-001"),
            "Ya agregaste una unidad de Taladro (Serie: TAL-001). Agrega otra si necesitas más."
        );
    }

    #[test]
    fn loan_needs_at_least_one_unit() {
        let err = build_loan("12.345.678-5", "2026-10-25", day("2026-10-19"), &[]).unwrap_err();
        assert_eq!(err, "Debes agregar al menos una herramienta.");
    }

    #[test]
    fn loan_rejects_return_dates_in_the_past() {
        let units = [unit(1, "TAL-001")];
        assert!(build_loan("12.345.678-5", "2026-10-18", day("2026-10-19"), &units).is_err());
        assert!(build_loan("12.345.678-5", "", day("2026-10-19"), &units).is_err());
    }

    #[test]
    fn loan_body_starts_today_and_references_units_by_id() {
        let units = [unit(1, "TAL-001"), unit(4, "SIE-010")];
        let loan = build_loan(" 12.345.678-5 ", "2026-10-19", day("2026-10-19"), &units).unwrap();
        assert_eq!(loan.client.run, "12.345.678-5");
        assert_eq!(loan.loan_date, day("2026-10-19"));
        assert_eq!(loan.return_date, day("2026-10-19"));
        let ids: Vec<i64> = loan.loan_tools.iter().map(|t| t.tool_item.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }
}
