use std::collections::HashMap;

use chrono::{Local, NaiveTime};
use dioxus::prelude::*;
use tr_types::web::{DamageLevel, Loan, LoanReturn};

use crate::{
    app::{
        api::loans, auth::hooks::{use_api, use_auth}, components::{LoadingLine, PageCard, use_toaster}
    },
    error::ApiError,
};

/// Reception conditions offered for each returned unit.
const CONDITION_OPTIONS: &[(DamageLevel, &str)] = &[
    (DamageLevel::NoDanada, "En Buen Estado"),
    (DamageLevel::EnEvaluacion, "Dañada (La herramienta irá a evaluación de daños)"),
];

/// Every unit on the loan starts out as received in good condition.
fn initial_conditions(loan: &Loan) -> HashMap<i64, DamageLevel> {
    loan.loan_tools
        .iter()
        .map(|lt| (lt.tool_item.id, DamageLevel::NoDanada))
        .collect()
}

fn return_time(now: NaiveTime) -> String {
    now.format("%H:%M:%S").to_string()
}

#[component]
pub fn LoanReturnProcessPage(id: String) -> Element {
    let api = use_api();
    let auth = use_auth();
    let nav = navigator();
    let mut toaster = use_toaster();

    let mut loan = use_signal(|| None::<Loan>);
    let mut conditions = use_signal(HashMap::<i64, DamageLevel>::new);
    let mut submitting = use_signal(|| false);

    let load_api = api.clone();
    use_hook(move || {
        spawn(async move {
            let fetched = match id.parse::<i64>() {
                Ok(loan_id) => loans::by_id(&load_api, loan_id).await,
                Err(_) => Err(ApiError::setup(format!("invalid loan id {id:?}"))),
            };
            match fetched {
                Ok(found) => {
                    conditions.set(initial_conditions(&found));
                    loan.set(Some(found));
                }
                Err(err) => {
                    tracing::warn!(error = %err, %id, "failed to load loan");
                    toaster.error("No se pudo cargar la información del préstamo.");
                    nav.push("/loan/return");
                }
            }
        })
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let Some(current) = loan() else {
            return;
        };
        let Some(employee) = auth.principal().map(|p| p.username) else {
            toaster.error("No se pudo identificar al empleado. Inicie sesión nuevamente.");
            return;
        };

        let chosen = conditions();
        let body = LoanReturn::for_loan(&current, &employee, return_time(Local::now().time()), |item_id| {
            chosen.get(&item_id).copied().unwrap_or(DamageLevel::NoDanada)
        });
        let api = api.clone();
        submitting.set(true);
        spawn(async move {
            match loans::register_return(&api, &body).await {
                Ok(()) => {
                    toaster.success(format!("Devolución del préstamo #{} registrada con éxito.", body.id));
                    nav.push("/loan/return");
                }
                Err(err) => {
                    tracing::warn!(error = %err, id = body.id, "loan return failed");
                    toaster.error(err.describe("Error interno del servidor.", "Error al procesar la devolución."));
                }
            }
            submitting.set(false);
        });
    };

    let Some(current) = loan() else {
        return rsx! { LoadingLine { message: "Cargando detalles del préstamo..." } };
    };
    let client_name = format!("{} {}", current.client.name, current.client.surname);

    rsx! {
        PageCard { title: format!("Procesar Devolución #{}", current.id),
            div { class: "grid gap-4 rounded-box bg-base-100 p-4 md:grid-cols-3",
                div {
                    strong { "Cliente:" }
                    p { "{client_name}" }
                }
                div {
                    strong { "RUT:" }
                    p { "{current.client.run}" }
                }
                div {
                    strong { "Fecha Préstamo:" }
                    p { "{current.loan_date}" }
                }
            }

            form { class: "flex flex-col gap-4", onsubmit: on_submit,
                h3 { class: "text-lg font-semibold", "Evaluar Estado de las Herramientas" }
                for lt in current.loan_tools {
                    ReturnedUnitRow {
                        key: "{lt.tool_item.id}",
                        item_id: lt.tool_item.id,
                        name: lt.tool_item.type_name().to_string(),
                        serial_number: lt.tool_item.serial_number.clone(),
                        model: lt.tool_item.tool_type.as_ref().map(|t| t.model.clone()).unwrap_or_default(),
                        conditions,
                    }
                }
                div { class: "flex justify-end gap-2",
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| {
                            nav.push("/loan/return");
                        },
                        "Cancelar"
                    }
                    button { class: "btn btn-primary", r#type: "submit", disabled: submitting(), "Confirmar Recepción" }
                }
            }
        }
    }
}

#[component]
fn ReturnedUnitRow(
    item_id: i64,
    name: String,
    serial_number: String,
    model: String,
    conditions: Signal<HashMap<i64, DamageLevel>>,
) -> Element {
    let mut conditions = conditions;
    let current = conditions
        .read()
        .get(&item_id)
        .copied()
        .unwrap_or(DamageLevel::NoDanada);
    let select_class = if current == DamageLevel::NoDanada {
        "select select-bordered w-full"
    } else {
        "select select-bordered select-error w-full font-bold"
    };

    rsx! {
        div { class: "flex flex-wrap items-center justify-between gap-4 rounded-box border border-base-300 bg-base-100 p-4",
            div {
                strong { class: "text-lg", "{name}" }
                span { class: "ml-3 opacity-70", "Serie: {serial_number}" }
                p { class: "text-sm opacity-70", "Modelo: {model}" }
            }
            fieldset { class: "fieldset min-w-64",
                legend { class: "fieldset-legend", "Condición de recepción:" }
                select {
                    class: select_class,
                    onchange: move |evt| {
                        if let Some(level) = DamageLevel::parse(&evt.value()) {
                            conditions.write().insert(item_id, level);
                        }
                    },
                    for (level, label) in CONDITION_OPTIONS.iter().copied() {
                        option {
                            key: "{level}",
                            value: level.as_str(),
                            selected: level == current,
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tr_types::web::{Client, LoanTool, ToolItem, ToolStatus};

    fn loan_with_units(ids: &[i64]) -> Loan {
        let day = NaiveDate::from_ymd_opt(2026, 10, 12).unwrap();
        Loan {
            id: 8,
            loan_date: day,
            loan_time: Some("10:15:00".into()),
            return_date: day,
            return_time: None,
            late_return_fee: Some(3500),
            status: "Activo".into(),
            validity: "Vigente".into(),
            client: Client {
                run: "12.345.678-5".into(),
                ..Default::default()
            },
            employee: None,
            loan_tools: ids
                .iter()
                .map(|&id| LoanTool {
                    id: Some(id * 10),
                    tool_item: ToolItem {
                        id,
                        serial_number: format!("SN-{id}"),
                        status: ToolStatus::Prestada,
                        damage_level: DamageLevel::NoDanada,
                        tool_type: None,
                    },
                })
                .collect(),
        }
    }

    #[test]
    fn units_default_to_good_condition() {
        let conditions = initial_conditions(&loan_with_units(&[1, 2]));
        assert_eq!(conditions.len(), 2);
        assert!(conditions.values().all(|c| *c == DamageLevel::NoDanada));
    }

    #[test]
    fn return_time_is_wall_clock_seconds() {
        let t = NaiveTime::from_hms_milli_opt(9, 5, 7, 450).unwrap();
        assert_eq!(return_time(t), "09:05:07");
    }

    #[test]
    fn return_body_carries_chosen_conditions() {
        let loan = loan_with_units(&[1, 2]);
        let mut conditions = initial_conditions(&loan);
        conditions.insert(2, DamageLevel::EnEvaluacion);

        let body = LoanReturn::for_loan(&loan, "empleado1", "18:00:00".into(), |id| conditions[&id]);
        assert_eq!(body.employee.run, "empleado1");
        assert_eq!(body.client.run, "12.345.678-5");
        assert_eq!(body.loan_tools[0].tool_item.damage_level, DamageLevel::NoDanada);
        assert_eq!(body.loan_tools[1].tool_item.damage_level, DamageLevel::EnEvaluacion);
        assert_eq!(body.loan_tools[1].id, Some(20));
    }

    #[test]
    fn only_good_and_evaluation_are_offered() {
        let levels: Vec<DamageLevel> = CONDITION_OPTIONS.iter().map(|(l, _)| *l).collect();
        assert_eq!(levels, vec![DamageLevel::NoDanada, DamageLevel::EnEvaluacion]);
    }
}
