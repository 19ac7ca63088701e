use dioxus::prelude::*;

/// Applied to every keystroke before it is stored, e.g. RUN formatting.
pub type InputTransform = fn(&str) -> String;

#[component]
pub fn TextField(
    label: &'static str,
    value: Signal<String>,
    #[props(default = "text")] input_type: &'static str,
    #[props(default = "")] placeholder: &'static str,
    #[props(default)] required: bool,
    min_length: Option<usize>,
    /// Lower bound for `date` and `number` inputs.
    min: Option<String>,
    transform: Option<InputTransform>,
    error: Option<String>,
) -> Element {
    let mut value = value;
    let input_class = if error.is_some() {
        "input input-bordered input-error w-full"
    } else {
        "input input-bordered w-full"
    };

    rsx! {
        fieldset { class: "fieldset w-full",
            legend { class: "fieldset-legend", "{label}" }
            input {
                class: input_class,
                r#type: input_type,
                placeholder,
                required,
                minlength: min_length.map(|n| n.to_string()),
                min,
                value: "{value}",
                oninput: move |evt| {
                    let raw = evt.value();
                    value.set(match transform {
                        Some(transform) => transform(&raw),
                        None => raw,
                    });
                },
            }
            if let Some(error) = error {
                p { class: "label text-error", "{error}" }
            }
        }
    }
}

/// Select over `(value, label)` pairs with a disabled placeholder entry.
#[component]
pub fn SelectField(
    label: &'static str,
    value: Signal<String>,
    options: Vec<(String, String)>,
    #[props(default = "Seleccione una opción")] placeholder: &'static str,
    error: Option<String>,
) -> Element {
    let mut value = value;

    rsx! {
        fieldset { class: "fieldset w-full",
            legend { class: "fieldset-legend", "{label}" }
            select {
                class: "select select-bordered w-full",
                value: "{value}",
                onchange: move |evt| value.set(evt.value()),
                option { value: "", disabled: true, selected: value.read().is_empty(), "{placeholder}" }
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        selected: *value.read() == option_value,
                        value: "{option_value}",
                        "{option_label}"
                    }
                }
            }
            if let Some(error) = error {
                p { class: "label text-error", "{error}" }
            }
        }
    }
}

/// Page body: a titled card, optional action row above the content.
#[component]
pub fn PageCard(title: String, actions: Option<Element>, children: Element) -> Element {
    rsx! {
        div { class: "card bg-base-200 shadow-xl",
            div { class: "card-body gap-4",
                h2 { class: "card-title text-2xl", "{title}" }
                if let Some(actions) = actions {
                    div { class: "flex flex-wrap gap-2", {actions} }
                }
                {children}
            }
        }
    }
}

#[component]
pub fn CardGrid(children: Element) -> Element {
    rsx! {
        div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4", {children} }
    }
}
