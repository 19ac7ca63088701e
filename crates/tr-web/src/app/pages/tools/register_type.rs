use std::collections::HashMap;

use dioxus::prelude::*;
use tr_types::{
    validation::{ValidationError, parse_amount, required, sanitize_amount}, web::ToolType
};

use crate::app::{
    api::tool_types, auth::hooks::use_api, components::{PageCard, TextField, form::InputTransform, use_toaster}
};

struct ToolTypeForm {
    name: String,
    category: String,
    model: String,
    replacement_value: String,
    rental_fee: String,
    damage_fee: String,
}

impl ToolTypeForm {
    fn parse(&self) -> Result<ToolType, HashMap<String, ValidationError>> {
        let mut errors = required([
            ("name", self.name.as_str()),
            ("category", self.category.as_str()),
            ("model", self.model.as_str()),
            ("replacement_value", self.replacement_value.as_str()),
            ("rental_fee", self.rental_fee.as_str()),
            ("damage_fee", self.damage_fee.as_str()),
        ]);

        let mut amount = |field: &str, raw: &str| match parse_amount(raw) {
            Some(value) => value,
            None => {
                errors
                    .entry(field.to_string())
                    .or_insert_with(|| ValidationError::InvalidFormat("monto no válido".into()));
                0
            }
        };
        let replacement_value = amount("replacement_value", &self.replacement_value);
        let rental_fee = amount("rental_fee", &self.rental_fee);
        let damage_fee = amount("damage_fee", &self.damage_fee);

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ToolType {
            id: None,
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            model: self.model.trim().to_string(),
            replacement_value,
            rental_fee,
            damage_fee,
            total_stock: None,
            available_stock: None,
        })
    }
}

#[component]
pub fn ToolTypeRegisterPage() -> Element {
    let api = use_api();
    let nav = navigator();
    let mut toaster = use_toaster();

    let name = use_signal(String::new);
    let category = use_signal(String::new);
    let model = use_signal(String::new);
    let replacement_value = use_signal(String::new);
    let rental_fee = use_signal(String::new);
    let damage_fee = use_signal(String::new);

    let mut errors = use_signal(HashMap::<String, ValidationError>::new);
    let mut form_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        form_error.set(None);

        let form = ToolTypeForm {
            name: name(),
            category: category(),
            model: model(),
            replacement_value: replacement_value(),
            rental_fee: rental_fee(),
            damage_fee: damage_fee(),
        };
        let tool_type = match form.parse() {
            Ok(tool_type) => tool_type,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(HashMap::new());

        let api = api.clone();
        submitting.set(true);
        spawn(async move {
            match tool_types::create(&api, &tool_type).await {
                Ok(()) => {
                    toaster.success("Tipo de herramienta registrada con éxito");
                    nav.push("/tools");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "tool type registration failed");
                    form_error.set(Some(err.describe(
                        "Error interno del servidor.",
                        "Ocurrió un error inesperado al registrar la herramienta.",
                    )));
                }
            }
            submitting.set(false);
        });
    };

    let field_error = move |field: &str| errors.read().get(field).map(ToString::to_string);
    let digits = sanitize_amount as InputTransform;

    rsx! {
        PageCard { title: "Registrar Nuevo Tipo de Herramienta",
            form { class: "flex flex-col gap-2 max-w-xl", onsubmit: on_submit,
                TextField { label: "Nombre", value: name, required: true, error: field_error("name") }
                TextField { label: "Categoría", value: category, required: true, error: field_error("category") }
                TextField { label: "Modelo", value: model, required: true, error: field_error("model") }
                TextField {
                    label: "Valor de Reemplazo",
                    value: replacement_value,
                    input_type: "text",
                    required: true,
                    transform: digits,
                    error: field_error("replacement_value"),
                }
                TextField { label: "Tarifa de Arriendo", value: rental_fee, required: true, transform: digits, error: field_error("rental_fee") }
                TextField { label: "Tarifa por Daño", value: damage_fee, required: true, transform: digits, error: field_error("damage_fee") }
                if let Some(message) = form_error() {
                    div { role: "alert", class: "alert alert-error alert-soft", span { "{message}" } }
                }
                button { class: "btn btn-primary mt-2", r#type: "submit", disabled: submitting(), "Registrar Tipo de Herramienta" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(replacement: &str) -> ToolTypeForm {
        ToolTypeForm {
            name: "Taladro".into(),
            category: "Eléctricas".into(),
            model: "X200".into(),
            replacement_value: replacement.into(),
            rental_fee: "5000".into(),
            damage_fee: "15000".into(),
        }
    }

    #[test]
    fn amounts_are_parsed() {
        let tool_type = form("90000").parse().unwrap();
        assert_eq!(tool_type.replacement_value, 90000);
        assert_eq!(tool_type.rental_fee, 5000);
        assert_eq!(tool_type.damage_fee, 15000);
        assert_eq!(tool_type.id, None);
    }

    #[test]
    fn blank_amount_is_required_not_invalid() {
        let errors = form("").parse().unwrap_err();
        assert_eq!(errors.get("replacement_value"), Some(&ValidationError::Required));
    }

    #[test]
    fn non_numeric_amount_is_invalid() {
        let errors = form("12a").parse().unwrap_err();
        assert!(matches!(errors.get("replacement_value"), Some(ValidationError::InvalidFormat(_))));
    }
}
