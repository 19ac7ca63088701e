use std::collections::HashMap;

use dioxus::prelude::*;
use tr_types::{
    validation::{MIN_PASSWORD_LEN, ValidationError, format_run, is_email, required}, web::Employee
};

use crate::app::{
    api::employees, auth::hooks::use_api, components::{PageCard, SelectField, TextField, form::InputTransform, use_toaster}
};

const ROLE_OPTIONS: &[(&str, &str)] = &[("false", "Empleado"), ("true", "Administrador")];

struct EmployeeForm<'a> {
    run: &'a str,
    name: &'a str,
    surname: &'a str,
    password: &'a str,
    email: &'a str,
    cellphone: &'a str,
    role: &'a str,
}

impl EmployeeForm<'_> {
    fn validate(&self) -> HashMap<String, ValidationError> {
        let mut errors = required([
            ("run", self.run),
            ("name", self.name),
            ("surname", self.surname),
            ("password", self.password),
            ("email", self.email),
            ("cellphone", self.cellphone),
            ("role", self.role),
        ]);
        if !self.password.is_empty() && self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert("password".into(), ValidationError::TooShort(MIN_PASSWORD_LEN));
        }
        if !self.email.trim().is_empty() && !is_email(self.email) {
            errors.insert("email".into(), ValidationError::InvalidFormat("correo no válido".into()));
        }
        errors
    }

    fn to_employee(&self) -> Employee {
        Employee {
            run: self.run.trim().to_string(),
            name: self.name.trim().to_string(),
            surname: self.surname.trim().to_string(),
            email: self.email.trim().to_string(),
            cellphone: self.cellphone.trim().to_string(),
            is_admin: self.role == "true",
        }
    }
}

#[component]
pub fn EmployeeRegisterPage() -> Element {
    let api = use_api();
    let nav = navigator();
    let mut toaster = use_toaster();

    let run = use_signal(String::new);
    let name = use_signal(String::new);
    let surname = use_signal(String::new);
    let password = use_signal(String::new);
    let email = use_signal(String::new);
    let cellphone = use_signal(String::new);
    let role = use_signal(String::new);

    let mut errors = use_signal(HashMap::<String, ValidationError>::new);
    let mut form_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        form_error.set(None);

        let (run, name, surname, password, email, cellphone, role) =
            (run(), name(), surname(), password(), email(), cellphone(), role());
        let form = EmployeeForm {
            run: &run,
            name: &name,
            surname: &surname,
            password: &password,
            email: &email,
            cellphone: &cellphone,
            role: &role,
        };

        let field_errors = form.validate();
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(HashMap::new());

        let employee = form.to_employee();
        let api = api.clone();
        submitting.set(true);
        spawn(async move {
            match employees::create(&api, &employee, &password).await {
                Ok(()) => {
                    toaster.success("Empleado registrado con éxito");
                    nav.push("/employees");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "employee registration failed");
                    form_error.set(Some(err.describe(
                        "Ocurrió un error al registrar al empleado.",
                        "Ocurrió un error inesperado al registrar al empleado.",
                    )));
                }
            }
            submitting.set(false);
        });
    };

    let field_error = move |field: &str| errors.read().get(field).map(ToString::to_string);
    let role_options = ROLE_OPTIONS
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect::<Vec<_>>();

    rsx! {
        PageCard { title: "Registrar Nuevo Empleado",
            form { class: "flex flex-col gap-2 max-w-xl", onsubmit: on_submit,
                TextField { label: "Run", value: run, placeholder: "12.345.678-9", required: true, transform: format_run as InputTransform, error: field_error("run") }
                TextField { label: "Nombre", value: name, required: true, error: field_error("name") }
                TextField { label: "Apellido", value: surname, required: true, error: field_error("surname") }
                TextField {
                    label: "Contraseña",
                    value: password,
                    input_type: "password",
                    required: true,
                    min_length: MIN_PASSWORD_LEN,
                    error: field_error("password"),
                }
                TextField { label: "E-mail", value: email, input_type: "email", required: true, error: field_error("email") }
                TextField { label: "Celular", value: cellphone, required: true, error: field_error("cellphone") }
                SelectField {
                    label: "Rol en el Sistema",
                    value: role,
                    options: role_options,
                    placeholder: "Seleccione un Rol",
                    error: field_error("role"),
                }
                if let Some(message) = form_error() {
                    div { role: "alert", class: "alert alert-error alert-soft", span { "{message}" } }
                }
                button { class: "btn btn-primary mt-2", r#type: "submit", disabled: submitting(), "Registrar Empleado" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form<'a>(password: &'a str, email: &'a str, role: &'a str) -> EmployeeForm<'a> {
        EmployeeForm {
            run: "12.345.678-5",
            name: "Ana",
            surname: "Pérez",
            password,
            email,
            cellphone: "+56911112222",
            role,
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(form("secreto", "ana@toolrent.cl", "false").validate().is_empty());
    }

    #[test]
    fn short_password_and_bad_email_are_reported() {
        let errors = form("abc", "ana", "true").validate();
        assert_eq!(errors.get("password"), Some(&ValidationError::TooShort(MIN_PASSWORD_LEN)));
        assert!(matches!(errors.get("email"), Some(ValidationError::InvalidFormat(_))));
    }

    #[test]
    fn role_must_be_chosen() {
        let errors = form("secreto", "ana@toolrent.cl", "").validate();
        assert_eq!(errors.get("role"), Some(&ValidationError::Required));
    }

    #[test]
    fn role_maps_to_admin_flag() {
        assert!(form("secreto", "ana@toolrent.cl", "true").to_employee().is_admin);
        assert!(!form("secreto", "ana@toolrent.cl", "false").to_employee().is_admin);
    }
}
