use dioxus::prelude::*;
use tr_types::navigation::Layout;

use crate::app::components::{Header, Sidebar, ToastHost};

/// Picks the chrome for a resolved route. `Bare` renders the page alone.
#[component]
pub fn LayoutShell(layout: Layout, children: Element) -> Element {
    match layout {
        Layout::Bare => rsx! { {children} },
        Layout::Minimal => rsx! { MinimalLayout { {children} } },
        Layout::Full => rsx! { FullLayout { {children} } },
    }
}

#[component]
pub fn MinimalLayout(children: Element) -> Element {
    rsx! {
        div { class: "tr-layout min-h-screen flex flex-col",
            header { Header {} }
            main { class: "tr-main flex-grow p-4", {children} }
        }
    }
}

#[component]
pub fn FullLayout(children: Element) -> Element {
    // Not persisted; every full-layout mount starts open.
    let sidebar_open = use_signal(|| true);

    rsx! {
        div { class: "tr-layout min-h-screen flex flex-col",
            header { Header { sidebar_open } }
            div { class: "flex flex-grow",
                Sidebar { open: sidebar_open() }
                main { class: "tr-main flex-grow p-4 overflow-x-auto", {children} }
            }
            ToastHost {}
        }
    }
}
