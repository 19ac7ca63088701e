use dioxus::prelude::*;

use crate::app::auth::hooks::use_auth;

/// Top bar shared by both layouts. The ☰ toggle only shows when the layout
/// owns a sidebar.
#[component]
pub fn Header(sidebar_open: Option<Signal<bool>>) -> Element {
    let mut auth = use_auth();
    let nav = navigator();
    let greeting = auth
        .principal()
        .map(|principal| principal.greeting_name().to_string())
        .unwrap_or_default();

    rsx! {
        div { class: "navbar bg-base-200 shadow-sm gap-2",
            if let Some(mut open) = sidebar_open {
                button {
                    class: "btn btn-ghost btn-square text-xl",
                    title: "Mostrar u ocultar menú",
                    onclick: move |_| open.toggle(),
                    "☰"
                }
            }
            div { class: "flex-1",
                button {
                    class: "btn btn-ghost text-xl normal-case",
                    onclick: move |_| {
                        nav.push("/home");
                    },
                    "Bienvenido, {greeting}"
                }
            }
            div { class: "flex-none",
                button {
                    class: "btn btn-outline btn-error btn-sm",
                    onclick: move |_| auth.logout(),
                    "Cerrar sesión"
                }
            }
        }
    }
}
