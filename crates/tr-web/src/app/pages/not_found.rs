use dioxus::prelude::*;

#[component]
pub fn NotFoundPage() -> Element {
    rsx! {
        div { class: "hero min-h-screen",
            div { class: "hero-content text-center",
                h1 { class: "text-4xl font-bold", "404: Página no encontrada" }
            }
        }
    }
}

/// Shown until the session check settles.
#[component]
pub fn LoadingPage() -> Element {
    rsx! {
        div { class: "flex items-center justify-center min-h-screen gap-3",
            span { class: "loading loading-spinner loading-lg" }
            p { "Cargando..." }
        }
    }
}
