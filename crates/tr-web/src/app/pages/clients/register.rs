use std::collections::HashMap;

use dioxus::prelude::*;
use tr_types::{
    validation::{ValidationError, format_run, is_email, required}, web::NewClient
};

use crate::app::{
    api::clients, auth::hooks::use_api, components::{PageCard, TextField, form::InputTransform, use_toaster}
};

fn validate(client: &NewClient) -> HashMap<String, ValidationError> {
    let mut errors = required([
        ("run", client.run.as_str()),
        ("name", client.name.as_str()),
        ("surname", client.surname.as_str()),
        ("email", client.email.as_str()),
        ("cellphone", client.cellphone.as_str()),
    ]);
    if !client.email.trim().is_empty() && !is_email(&client.email) {
        errors.insert("email".into(), ValidationError::InvalidFormat("correo no válido".into()));
    }
    errors
}

#[component]
pub fn ClientRegisterPage() -> Element {
    let api = use_api();
    let nav = navigator();
    let mut toaster = use_toaster();

    let run = use_signal(String::new);
    let name = use_signal(String::new);
    let surname = use_signal(String::new);
    let email = use_signal(String::new);
    let cellphone = use_signal(String::new);

    let mut errors = use_signal(HashMap::<String, ValidationError>::new);
    let mut form_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        form_error.set(None);

        let client = NewClient {
            run: run().trim().to_string(),
            name: name().trim().to_string(),
            surname: surname().trim().to_string(),
            email: email().trim().to_string(),
            cellphone: cellphone().trim().to_string(),
        };
        let field_errors = validate(&client);
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(HashMap::new());

        let api = api.clone();
        submitting.set(true);
        spawn(async move {
            match clients::create(&api, &client).await {
                Ok(()) => {
                    toaster.success("Cliente registrado con éxito");
                    nav.push("/clients");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "client registration failed");
                    form_error.set(Some(err.describe(
                        "Ocurrió un error al registrar al cliente.",
                        "Ocurrió un error inesperado al registrar al cliente.",
                    )));
                }
            }
            submitting.set(false);
        });
    };

    let field_error = move |field: &str| errors.read().get(field).map(ToString::to_string);

    rsx! {
        PageCard { title: "Registrar Nuevo Cliente",
            form { class: "flex flex-col gap-2 max-w-xl", onsubmit: on_submit,
                TextField { label: "Run", value: run, placeholder: "12.345.678-9", required: true, transform: format_run as InputTransform, error: field_error("run") }
                TextField { label: "Nombre", value: name, required: true, error: field_error("name") }
                TextField { label: "Apellido", value: surname, required: true, error: field_error("surname") }
                TextField { label: "E-mail", value: email, input_type: "email", required: true, error: field_error("email") }
                TextField { label: "Celular", value: cellphone, required: true, error: field_error("cellphone") }
                if let Some(message) = form_error() {
                    div { role: "alert", class: "alert alert-error alert-soft", span { "{message}" } }
                }
                button { class: "btn btn-primary mt-2", r#type: "submit", disabled: submitting(), "Registrar Cliente" }
            }
        }
    }
}
