use dioxus::prelude::*;
use tr_types::navigation::{Resolution, resolve};

use crate::app::{
    auth::hooks::use_session_state, components::{LayoutShell, RequireRole}, pages::{LoadingPage, NotFoundPage, PublicHomePage, ViewOutlet}
};

#[component]
pub fn AppRouter() -> Element {
    rsx! {
        Router::<Routes> {}
    }
}

/// Dioxus only tracks the location; which view renders is decided by
/// [`resolve`] against the session, so every path lands in [`Shell`].
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Routes {
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    Shell { segments: Vec<String> },
}

#[component]
pub fn Root() -> Element {
    rsx! { Shell { segments: Vec::new() } }
}

#[component]
pub fn Shell(segments: Vec<String>) -> Element {
    let state = use_session_state();
    let path = format!("/{}", segments.join("/"));
    let resolution = resolve(&state.read(), &path);

    match resolution {
        Resolution::Loading => rsx! { LoadingPage {} },
        Resolution::Redirect(to) => rsx! { Redirect { to } },
        Resolution::Public(_) => rsx! { PublicHomePage {} },
        Resolution::NotFound => rsx! { NotFoundPage {} },
        Resolution::Render { layout, view, params, access } => rsx! {
            LayoutShell { layout,
                RequireRole { access,
                    ViewOutlet { key: "{path}", view, params }
                }
            }
        },
    }
}

/// Replace the current history entry once mounted.
#[component]
fn Redirect(to: String) -> Element {
    let nav = navigator();
    use_effect(use_reactive((&to,), move |(to,)| {
        tracing::debug!(%to, "redirecting");
        nav.replace(to);
    }));
    rsx! {}
}
