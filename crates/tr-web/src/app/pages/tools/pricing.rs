use dioxus::prelude::*;
use tr_types::{
    validation::{parse_amount, sanitize_amount}, web::ToolType
};

use crate::app::{
    api::{ApiClient, ApiResult, tool_types}, auth::hooks::use_api, components::{ErrorLine, LoadingLine, PageCard, TextField, ToolTypePicker, form::InputTransform, use_toaster}
};

/// Which per-type price a config page edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceKind {
    RentalFee,
    ReplacementValue,
}

impl PriceKind {
    fn title(self) -> &'static str {
        match self {
            PriceKind::RentalFee => "Configuración de Tarifa de Arriendo por Tipo",
            PriceKind::ReplacementValue => "Configuración de Valor de Reposición por Tipo",
        }
    }

    fn current(self, tool_type: &ToolType) -> i64 {
        match self {
            PriceKind::RentalFee => tool_type.rental_fee,
            PriceKind::ReplacementValue => tool_type.replacement_value,
        }
    }

    fn apply(self, tool_type: &mut ToolType, amount: i64) {
        match self {
            PriceKind::RentalFee => tool_type.rental_fee = amount,
            PriceKind::ReplacementValue => tool_type.replacement_value = amount,
        }
    }

    fn option_detail(self) -> fn(&ToolType) -> String {
        match self {
            PriceKind::RentalFee => |t| format!("Tarifa Actual: ${}", t.rental_fee),
            PriceKind::ReplacementValue => |t| format!("Valor Actual: ${}", t.replacement_value),
        }
    }

    fn current_line(self, tool_type: &ToolType) -> String {
        match self {
            PriceKind::RentalFee => format!("Tarifa actual para {}: ${}", tool_type.name, tool_type.rental_fee),
            PriceKind::ReplacementValue => format!(
                "Valor de reposición actual para {}: ${}",
                tool_type.name, tool_type.replacement_value
            ),
        }
    }

    fn amount_label(self) -> &'static str {
        match self {
            PriceKind::RentalFee => "Nuevo Monto de Tarifa Diaria ($):",
            PriceKind::ReplacementValue => "Nuevo Valor de Reposición ($):",
        }
    }

    fn success(self, name: &str, amount: i64) -> String {
        match self {
            PriceKind::RentalFee => format!("¡Tarifa de arriendo para {name} actualizada a ${amount}!"),
            PriceKind::ReplacementValue => format!("¡Valor de reposición para {name} actualizado a ${amount}!"),
        }
    }

    fn failure(self) -> &'static str {
        match self {
            PriceKind::RentalFee => "Error al actualizar la tarifa.",
            PriceKind::ReplacementValue => "Error al actualizar el valor.",
        }
    }

    async fn save(self, api: &ApiClient, id: i64, amount: i64) -> ApiResult<ToolType> {
        match self {
            PriceKind::RentalFee => tool_types::update_rental_fee(api, id, amount).await,
            PriceKind::ReplacementValue => tool_types::update_replacement_value(api, id, amount).await,
        }
    }
}

/// Set `amount` on the matching entry of `list` without refetching.
fn apply_locally(list: &mut [ToolType], id: i64, kind: PriceKind, amount: i64) {
    if let Some(tool_type) = list.iter_mut().find(|t| t.id == Some(id)) {
        kind.apply(tool_type, amount);
    }
}

#[component]
pub fn RentalFeeConfigPage() -> Element {
    rsx! { PriceConfig { kind: PriceKind::RentalFee } }
}

#[component]
pub fn ReplacementValueConfigPage() -> Element {
    rsx! { PriceConfig { kind: PriceKind::ReplacementValue } }
}

#[component]
fn PriceConfig(kind: PriceKind) -> Element {
    let api = use_api();
    let mut toaster = use_toaster();

    let mut tool_types = use_signal(Vec::<ToolType>::new);
    let mut loaded = use_signal(|| None::<bool>);
    let mut selected = use_signal(|| None::<i64>);
    let mut amount = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let load_api = api.clone();
    use_hook(move || {
        spawn(async move {
            match tool_types::list(&load_api).await {
                Ok(list) => {
                    tool_types.set(list);
                    loaded.set(Some(true));
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to load tool types");
                    toaster.error("Error al cargar la lista de herramientas.");
                    loaded.set(Some(false));
                }
            }
        })
    });

    let current_line = selected().and_then(|id| {
        tool_types
            .read()
            .iter()
            .find(|t| t.id == Some(id))
            .map(|t| kind.current_line(t))
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let Some(id) = selected() else {
            toaster.error("Por favor, selecciona un tipo de herramienta.");
            return;
        };
        let Some(value) = parse_amount(&amount()) else {
            toaster.error("Por favor, ingresa un monto válido y positivo.");
            return;
        };
        let name = tool_types
            .read()
            .iter()
            .find(|t| t.id == Some(id))
            .map(|t| t.name.clone())
            .unwrap_or_default();

        let api = api.clone();
        submitting.set(true);
        spawn(async move {
            match kind.save(&api, id, value).await {
                Ok(_) => {
                    toaster.success(kind.success(&name, value));
                    apply_locally(&mut tool_types.write(), id, kind, value);
                }
                Err(err) => {
                    tracing::warn!(error = %err, id, ?kind, "price update failed");
                    toaster.error(err.user_message(kind.failure()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        PageCard { title: kind.title().to_string(),
            match loaded() {
                None => rsx! { LoadingLine { message: "Cargando lista de herramientas..." } },
                Some(false) => rsx! { ErrorLine { message: "Error al cargar la lista de herramientas." } },
                Some(true) => rsx! {
                    form { class: "flex flex-col gap-2 max-w-xl", onsubmit: on_submit,
                        ToolTypePicker {
                            tool_types: tool_types(),
                            selected: selected(),
                            detail: kind.option_detail(),
                            on_select: move |choice: Option<ToolType>| {
                                amount.set(choice.as_ref().map(|t| kind.current(t).to_string()).unwrap_or_default());
                                selected.set(choice.and_then(|t| t.id));
                            },
                        }
                        if let Some(line) = current_line {
                            p { class: "text-center font-bold", "{line}" }
                            TextField {
                                label: kind.amount_label(),
                                value: amount,
                                placeholder: "Ej: 5000",
                                required: true,
                                transform: sanitize_amount as InputTransform,
                            }
                            button { class: "btn btn-primary w-full mt-2", r#type: "submit", disabled: submitting(), "Guardar Configuración" }
                        }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types() -> Vec<ToolType> {
        vec![
            ToolType {
                id: Some(1),
                name: "Taladro".into(),
                rental_fee: 5000,
                replacement_value: 90000,
                ..Default::default()
            },
            ToolType {
                id: Some(2),
                name: "Sierra".into(),
                rental_fee: 7000,
                replacement_value: 120000,
                ..Default::default()
            },
        ]
    }

    #[test]
    fn local_update_touches_only_the_matching_type() {
        let mut list = types();
        apply_locally(&mut list, 2, PriceKind::RentalFee, 7500);
        assert_eq!(list[1].rental_fee, 7500);
        assert_eq!(list[1].replacement_value, 120000);
        assert_eq!(list[0].rental_fee, 5000);
    }

    #[test]
    fn local_update_ignores_unknown_ids() {
        let mut list = types();
        apply_locally(&mut list, 9, PriceKind::ReplacementValue, 1);
        assert_eq!(list, types());
    }

    #[test]
    fn messages_follow_the_price_kind() {
        assert_eq!(
            PriceKind::RentalFee.success("Taladro", 6000),
            "¡Tarifa de arriendo para Taladro actualizada a $6000!"
        );
        assert_eq!(
            PriceKind::ReplacementValue.success("Taladro", 95000),
            "¡Valor de reposición para Taladro actualizado a $95000!"
        );
        assert_eq!((PriceKind::RentalFee.option_detail())(&types()[0]), "Tarifa Actual: $5000");
        assert_eq!(PriceKind::ReplacementValue.current(&types()[1]), 120000);
    }
}
