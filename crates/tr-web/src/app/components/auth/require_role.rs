use dioxus::prelude::*;
use tr_types::navigation::Access;

/// Route guard for an already-decided [`Access`].
///
/// The decision itself is made by the navigation resolver; this only picks
/// between the page and the fixed access-denied view. It never navigates.
///
/// ```text
/// RequireRole { access: Access::Granted, ClientHomePage {} }
/// ```
#[component]
pub fn RequireRole(access: Access, children: Element) -> Element {
    match access {
        Access::Granted => rsx! { {children} },
        Access::Denied => {
            tracing::info!("access denied to current route");
            rsx! { AccessDenied {} }
        }
    }
}

#[component]
pub fn AccessDenied() -> Element {
    rsx! {
        div { class: "hero min-h-[60vh]",
            div { class: "hero-content text-center",
                div {
                    h1 { class: "text-4xl font-bold", "Acceso Denegado" }
                    p { class: "py-6", "No tienes permiso para acceder a esta página." }
                    Link { to: "/home", class: "btn btn-primary", "Volver al inicio" }
                }
            }
        }
    }
}
