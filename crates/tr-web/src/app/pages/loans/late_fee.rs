use dioxus::prelude::*;
use tr_types::validation::{parse_amount, sanitize_amount};

use crate::app::{
    api::loans, auth::hooks::use_api, components::{LoadingLine, PageCard, TextField, form::InputTransform, use_toaster}
};

#[component]
pub fn LoanLateFeeConfigPage() -> Element {
    let api = use_api();
    let mut toaster = use_toaster();

    let mut loading = use_signal(|| true);
    let mut current = use_signal(|| None::<i64>);
    let mut amount = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let load_api = api.clone();
    use_hook(move || {
        spawn(async move {
            match loans::late_return_fee(&load_api).await {
                Ok(fee) => {
                    current.set(Some(fee));
                    amount.set(fee.to_string());
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to load late return fee");
                    toaster.error("Error al cargar la tarifa actual del sistema.");
                }
            }
            loading.set(false);
        })
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let Some(value) = parse_amount(&amount()) else {
            toaster.error("Por favor, ingresa un monto válido y positivo.");
            return;
        };

        let api = api.clone();
        submitting.set(true);
        spawn(async move {
            match loans::set_late_fee(&api, value).await {
                Ok(()) => {
                    toaster.success(format!("¡Multa por atraso actualizada a ${value}!"));
                    current.set(Some(value));
                }
                Err(err) => {
                    tracing::warn!(error = %err, value, "late fee update failed");
                    toaster.error(err.describe("Error interno.", "Error al actualizar la multa."));
                }
            }
            submitting.set(false);
        });
    };

    if loading() {
        return rsx! { LoadingLine { message: "Cargando configuración..." } };
    }
    let fee = current().map(|f| format!("${f}")).unwrap_or_else(|| "-".to_string());

    rsx! {
        PageCard { title: "Configuración de Multa por Atraso",
            p { class: "text-center",
                "Multa diaria actual del sistema: "
                strong { "{fee}" }
                " (Aplica a futuros préstamos)"
            }
            form { class: "flex flex-col gap-2 max-w-xl mx-auto w-full", onsubmit: on_submit,
                TextField {
                    label: "Nuevo Monto de Multa Diaria ($):",
                    value: amount,
                    placeholder: "Ej: 3500",
                    required: true,
                    transform: sanitize_amount as InputTransform,
                }
                p { class: "text-xs opacity-70",
                    "* Este cambio afectará la tarifa de todos los préstamos que se registren a partir de ahora."
                }
                button { class: "btn btn-primary w-full mt-2", r#type: "submit", disabled: submitting(), "Guardar Configuración" }
            }
        }
    }
}
