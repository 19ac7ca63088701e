//! ToolRent web client.
//!
//! A Dioxus single-page app for the ToolRent rental counter: sign-in through
//! Keycloak, role-gated routing and the client, employee, tool and loan
//! screens over the ToolRent REST backend.

pub mod app;
pub mod app_root;
pub mod config;
pub mod error;

pub use app::{components, pages, routes};
