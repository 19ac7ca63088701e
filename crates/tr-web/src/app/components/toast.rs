use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::future::sleep;

const AUTO_DISMISS: Duration = Duration::from_secs(5);
const MAX_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastType {
    fn alert_class(self) -> &'static str {
        match self {
            ToastType::Success => "alert-success",
            ToastType::Error => "alert-error",
            ToastType::Warning => "alert-warning",
            ToastType::Info => "alert-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: u64,
    pub message: String,
    pub toast_type: ToastType,
}

/// App-wide toast queue. Views push messages; the host in the full layout shows them.
#[derive(Clone, Copy)]
pub struct Toaster {
    messages: Signal<Vec<ToastMessage>>,
    next_id: Signal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            messages: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn show(&mut self, toast_type: ToastType, message: impl Into<String>) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);

        let message = message.into();
        tracing::debug!(?toast_type, %message, "toast");

        let mut messages = self.messages.write();
        messages.push(ToastMessage { id, message, toast_type });
        if messages.len() > MAX_VISIBLE {
            let overflow = messages.len() - MAX_VISIBLE;
            messages.drain(..overflow);
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(ToastType::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(ToastType::Error, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.show(ToastType::Warning, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(ToastType::Info, message);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.messages.write().retain(|t| t.id != id);
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

#[component]
pub fn ToastHost() -> Element {
    let toaster = use_toaster();
    let messages = toaster.messages.read().clone();

    rsx! {
        div { class: "toast toast-bottom toast-end z-50",
            for toast in messages {
                ToastItem { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastItem(toast: ToastMessage) -> Element {
    let mut toaster = use_toaster();
    let id = toast.id;

    // Auto-dismiss; the timer dies with this item if it is closed first
    use_hook(move || {
        spawn(async move {
            sleep(AUTO_DISMISS).await;
            toaster.dismiss(id);
        })
    });

    let alert_class = toast.toast_type.alert_class();
    rsx! {
        div {
            class: "alert {alert_class}",
            style: "max-width: 30vw; word-wrap: break-word; white-space: normal;",
            span { "{toast.message}" }
            button {
                class: "btn btn-sm btn-circle btn-ghost ml-2",
                onclick: move |_| toaster.dismiss(id),
                "✕"
            }
        }
    }
}
