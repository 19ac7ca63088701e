use dioxus::prelude::*;

/// Sidebar entries in display order.
pub const SIDEBAR_LINKS: &[(&str, &str)] = &[
    ("/loan/register", "Realizar un Prestamo"),
    ("/loan/return", "Realizar una Devolución"),
    ("/loans", "Gestión de Prestamos"),
    ("/employees", "Gestión de Empleados"),
    ("/clients", "Gestión de Clientes"),
    ("/tools", "Gestión de Herramientas"),
];

#[component]
pub fn Sidebar(open: bool) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        aside { class: "w-64 shrink-0 bg-base-200 min-h-full flex flex-col",
            ul { class: "menu flex-1 w-full gap-1",
                for (to, label) in SIDEBAR_LINKS.iter().copied() {
                    li { key: "{to}",
                        Link { to, active_class: "menu-active", "{label}" }
                    }
                }
            }
            ul { class: "menu w-full border-t border-base-300",
                li {
                    Link { to: "/home", active_class: "menu-active", "Página Principal" }
                }
            }
        }
    }
}
