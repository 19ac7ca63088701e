use dioxus::prelude::*;

const DASHBOARD: &[(&str, &str)] = &[
    ("/loan/register", "Realizar un Arriendo"),
    ("/loan/return", "Realizar una Devolución"),
    ("/loans", "Gestión de Préstamos"),
    ("/employees", "Gestión de Empleados"),
    ("/clients", "Gestión de Clientes"),
    ("/tools", "Gestión de Herramientas"),
];

#[component]
pub fn HomePage() -> Element {
    let nav = navigator();

    rsx! {
        div { class: "max-w-4xl mx-auto py-8 text-center",
            h1 { class: "text-4xl font-bold", "Panel de Control" }
            p { class: "py-4 opacity-80", "Selecciona una opción para comenzar." }
            div { class: "grid gap-4 sm:grid-cols-2 md:grid-cols-3 mt-4",
                for (to, label) in DASHBOARD.iter().copied() {
                    button {
                        key: "{to}",
                        class: "btn btn-primary btn-lg h-24",
                        onclick: move |_| {
                            nav.push(to);
                        },
                        "{label}"
                    }
                }
            }
        }
    }
}
