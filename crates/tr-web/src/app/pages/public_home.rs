use dioxus::prelude::*;

use crate::app::auth::hooks::use_auth;

/// Landing view for visitors without a session.
#[component]
pub fn PublicHomePage() -> Element {
    let auth = use_auth();

    rsx! {
        div { class: "min-h-screen flex flex-col",
            header { class: "navbar bg-base-200 shadow-sm",
                div { class: "flex-1",
                    h1 { class: "text-2xl font-bold px-4", "Bienvenido a Tool Rent" }
                }
                div { class: "flex-none px-2",
                    button { class: "btn btn-primary", onclick: move |_| auth.login(), "Iniciar sesión" }
                }
            }
            main { class: "hero flex-grow",
                div { class: "hero-content text-center",
                    div { class: "max-w-md",
                        h2 { class: "text-3xl font-bold", "Gestión de Herramientas Simplificada" }
                        p { class: "py-6",
                            "Arriendo, devolución e inventario de herramientas en un solo lugar."
                        }
                    }
                }
            }
        }
    }
}
