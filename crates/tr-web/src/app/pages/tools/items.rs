use dioxus::prelude::*;
use tr_types::web::{DamageLevel, IdRef, NewToolItem, ToolItem, ToolStatus, ToolType};

use crate::{
    app::{
        api::{tool_items, tool_types}, auth::hooks::use_api, components::{CardGrid, ErrorLine, LoadingLine, PageCard, SelectField, TextField, ToolItemCard, ToolTypePicker, use_toaster}
    },
    error::ApiError,
};

const STATUS_OPTIONS: &[(ToolStatus, &str)] = &[
    (ToolStatus::Disponible, "Disponible"),
    (ToolStatus::EnReparacion, "En Reparación"),
];

const DAMAGE_LEVEL_OPTIONS: &[(DamageLevel, &str)] = &[
    (DamageLevel::NoDanada, "No dañada"),
    (DamageLevel::LevementeDanada, "Levemente dañada"),
    (DamageLevel::Danada, "Dañada"),
    (DamageLevel::GravementeDanada, "Gravemente dañada"),
];

/// Reason for taking a unit out of service, and where it ends up.
const DISABLE_OPTIONS: &[(DamageLevel, &str)] = &[
    (DamageLevel::Desuso, "Baja Administrativa (Pérdida/Obsolescencia)/A Dada De Baja"),
    (DamageLevel::LevementeDanada, "Daño Leve/A En Reparación"),
    (DamageLevel::Danada, "Dañada/A En Reparación"),
    (DamageLevel::GravementeDanada, "Gravemente Dañada/A En Reparación"),
    (DamageLevel::Irreparable, "Irreparable/A Dada De Baja"),
];

const SERIAL_NOT_FOUND: &str = "No se encontró ninguna herramienta con ese Número de Serie.";

fn options<T: Copy>(entries: &[(T, &str)], value: impl Fn(T) -> &'static str) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(variant, label)| (value(*variant).to_string(), label.to_string()))
        .collect()
}

/// Toast text after a unit changed state.
fn updated_message(item: &ToolItem) -> String {
    format!("{} (Serie: {}) actualizada correctamente.", item.type_name(), item.serial_number)
}

fn state_change_error(err: &ApiError) -> String {
    if err.is_not_found() {
        SERIAL_NOT_FOUND.to_string()
    } else {
        err.user_message("Error al procesar la solicitud.")
    }
}

#[component]
pub fn ToolItemHomePage() -> Element {
    let api = use_api();
    let nav = navigator();
    let items = use_resource(move || {
        let api = api.clone();
        async move { tool_items::list(&api).await }
    });

    rsx! {
        PageCard {
            title: "Gestión de Unidades de Herramientas",
            actions: rsx! {
                button {
                    class: "btn btn-primary btn-sm",
                    onclick: move |_| {
                        nav.push("/tools/tool-items/register-tool-item");
                    },
                    "Registrar Unidad de Herramienta"
                }
                button {
                    class: "btn btn-primary btn-sm",
                    onclick: move |_| {
                        nav.push("/tools/tool-items/enable");
                    },
                    "Habilitar Unidad de Herramienta"
                }
                button {
                    class: "btn btn-primary btn-sm",
                    onclick: move |_| {
                        nav.push("/tools/tool-items/evaluation");
                    },
                    "Evaluar Daño de Unidad de Herramienta"
                }
                button {
                    class: "btn btn-error btn-sm",
                    onclick: move |_| {
                        nav.push("/tools/tool-items/disable");
                    },
                    "Deshabilitar Unidad de Herramienta"
                }
            },
            match items() {
                None => rsx! { LoadingLine { message: "Cargando unidades de herramientas..." } },
                Some(Err(err)) => {
                    tracing::warn!(error = %err, "failed to load tool items");
                    rsx! { ErrorLine { message: "Error al cargar las unidades de herramientas. ¿Tienes los permisos correctos?" } }
                }
                Some(Ok(list)) if list.is_empty() => rsx! { p { "No hay unidades de herramientas registradas." } },
                Some(Ok(list)) => rsx! {
                    CardGrid {
                        for item in list {
                            ToolItemCard { key: "{item.id}", item }
                        }
                    }
                },
            }
        }
    }
}

#[component]
pub fn ToolItemRegisterPage() -> Element {
    let api = use_api();
    let nav = navigator();
    let mut toaster = use_toaster();

    let load_api = api.clone();
    let tool_types = use_resource(move || {
        let api = load_api.clone();
        async move {
            let result = tool_types::list(&api).await;
            if let Err(err) = &result {
                tracing::warn!(error = %err, "failed to load tool types");
                toaster.error("Error al cargar los tipos de herramienta.");
            }
            result.unwrap_or_default()
        }
    });

    let mut selected = use_signal(|| None::<ToolType>);
    let serial_number = use_signal(String::new);
    let status = use_signal(String::new);
    let damage_level = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let Some(type_id) = selected.read().as_ref().and_then(|t| t.id) else {
            toaster.error("Por favor, seleccione un tipo de herramienta.");
            return;
        };
        let serial = serial_number().trim().to_string();
        if serial.is_empty() {
            toaster.error("El número de serie es obligatorio.");
            return;
        }
        let (Some(status), Some(damage_level)) = (ToolStatus::parse(&status()), DamageLevel::parse(&damage_level())) else {
            toaster.error("Seleccione el estado y el nivel de daño.");
            return;
        };

        let item = NewToolItem {
            serial_number: serial,
            status,
            damage_level,
            tool_type: IdRef { id: type_id },
        };
        let api = api.clone();
        submitting.set(true);
        spawn(async move {
            match tool_items::create(&api, &item).await {
                Ok(()) => {
                    toaster.success("Unidad de herramienta registrada con éxito");
                    nav.push("/tools/tool-items");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "tool item registration failed");
                    toaster.error(err.user_message("Ocurrió un error inesperado al registrar la herramienta."));
                }
            }
            submitting.set(false);
        });
    };

    let selected_id = selected.read().as_ref().and_then(|t| t.id);

    rsx! {
        PageCard { title: "Registrar Nueva Unidad de Herramienta",
            form { class: "flex flex-col gap-2 max-w-xl", onsubmit: on_submit,
                ToolTypePicker {
                    tool_types: tool_types().unwrap_or_default(),
                    selected: selected_id,
                    on_select: move |choice| selected.set(choice),
                }
                TextField { label: "Número de Serie", value: serial_number, required: true }
                SelectField {
                    label: "Estado",
                    value: status,
                    options: options(STATUS_OPTIONS, |s| s.as_str()),
                    placeholder: "Estado",
                }
                SelectField {
                    label: "Nivel de Daño",
                    value: damage_level,
                    options: options(DAMAGE_LEVEL_OPTIONS, |d| d.as_str()),
                    placeholder: "Nivel de Daño",
                }
                button { class: "btn btn-primary mt-2", r#type: "submit", disabled: submitting(), "Registrar Unidad de Herramienta" }
            }
        }
    }
}

#[component]
pub fn ToolItemEnablePage() -> Element {
    let api = use_api();
    let nav = navigator();
    let mut toaster = use_toaster();
    let serial_number = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let serial = serial_number().trim().to_string();
        if serial.is_empty() || submitting() {
            return;
        }

        let api = api.clone();
        submitting.set(true);
        spawn(async move {
            match tool_items::enable(&api, &serial).await {
                Ok(item) => {
                    toaster.success(updated_message(&item));
                    nav.push("/tools/tool-items");
                }
                Err(err) => {
                    tracing::warn!(error = %err, serial = %serial, "enable failed");
                    toaster.error(state_change_error(&err));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        PageCard { title: "Habilitar Unidad de Herramienta",
            form { class: "flex flex-col gap-2 max-w-xl", onsubmit: on_submit,
                TextField { label: "Número de Serie", value: serial_number, placeholder: "Ingrese Número de Serie", required: true }
                button { class: "btn btn-primary mt-2", r#type: "submit", disabled: submitting(), "Confirmar Estado" }
            }
        }
    }
}

#[component]
pub fn ToolItemDisablePage() -> Element {
    let api = use_api();
    let nav = navigator();
    let mut toaster = use_toaster();
    let serial_number = use_signal(String::new);
    let reason = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let serial = serial_number().trim().to_string();
        if serial.is_empty() {
            toaster.error("El número de serie es obligatorio.");
            return;
        }
        let Some(damage_level) = DamageLevel::parse(&reason()) else {
            toaster.error("Seleccione Motivo/Nivel de daño.");
            return;
        };

        let api = api.clone();
        submitting.set(true);
        spawn(async move {
            match tool_items::disable(&api, &serial, damage_level).await {
                Ok(item) => {
                    toaster.success(updated_message(&item));
                    nav.push("/tools/tool-items");
                }
                Err(err) => {
                    tracing::warn!(error = %err, serial = %serial, "disable failed");
                    toaster.error(state_change_error(&err));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        PageCard { title: "Deshabilitar o Enviar a Reparación",
            form { class: "flex flex-col gap-2 max-w-xl", onsubmit: on_submit,
                TextField { label: "Número de Serie", value: serial_number, placeholder: "Ingrese Número de Serie", required: true }
                SelectField {
                    label: "Motivo",
                    value: reason,
                    options: options(DISABLE_OPTIONS, |d| d.as_str()),
                    placeholder: "Seleccione Motivo/Nivel de daño",
                }
                button { class: "btn btn-error mt-2", r#type: "submit", disabled: submitting(), "Confirmar Estado" }
            }
        }
    }
}
