use dioxus::prelude::*;
use tr_types::web::ToolType;

/// Extra text appended to each option, e.g. the current fee.
pub type OptionDetail = fn(&ToolType) -> String;

/// Filterable tool-type select. Typing narrows the list by name or model.
#[component]
pub fn ToolTypePicker(
    tool_types: Vec<ToolType>,
    selected: Option<i64>,
    on_select: EventHandler<Option<ToolType>>,
    #[props(default = "Seleccionar Tipo de Herramienta:")] label: &'static str,
    detail: Option<OptionDetail>,
) -> Element {
    let mut filter = use_signal(String::new);

    let visible: Vec<ToolType> = tool_types
        .iter()
        .filter(|tool_type| tool_type.matches_filter(&filter.read()))
        .cloned()
        .collect();
    let selected_value = selected.map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        fieldset { class: "fieldset w-full",
            legend { class: "fieldset-legend", "{label}" }
            input {
                class: "input input-bordered w-full",
                r#type: "search",
                placeholder: "Buscar por nombre o modelo",
                value: "{filter}",
                oninput: move |evt| filter.set(evt.value()),
            }
            select {
                class: "select select-bordered w-full",
                value: "{selected_value}",
                onchange: move |evt| {
                    let chosen = evt
                        .value()
                        .parse::<i64>()
                        .ok()
                        .and_then(|id| tool_types.iter().find(|t| t.id == Some(id)).cloned());
                    on_select.call(chosen);
                },
                option { value: "", "-- Seleccione --" }
                for tool_type in visible {
                    if let Some(id) = tool_type.id {
                        option {
                            key: "{id}",
                            value: "{id}",
                            selected: selected == Some(id),
                            {option_text(&tool_type, detail)}
                        }
                    }
                }
            }
        }
    }
}

fn option_text(tool_type: &ToolType, detail: Option<OptionDetail>) -> String {
    match detail {
        Some(detail) => format!("{} - {}", tool_type.label(), detail(tool_type)),
        None => tool_type.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drill() -> ToolType {
        ToolType {
            id: Some(3),
            name: "Taladro".into(),
            model: "X200".into(),
            rental_fee: 5000,
            ..Default::default()
        }
    }

    #[test]
    fn option_text_without_detail_is_the_label() {
        assert_eq!(option_text(&drill(), None), "Taladro (X200)");
    }

    #[test]
    fn option_text_appends_detail() {
        let fee: OptionDetail = |t| format!("Tarifa Actual: ${}", t.rental_fee);
        assert_eq!(option_text(&drill(), Some(fee)), "Taladro (X200) - Tarifa Actual: $5000");
    }
}
