//! Shared type definitions for ToolRent Web
//!
//! Framework-free pieces of the browser client: identity and roles, the
//! session state machine, route resolution, REST payloads and form helpers.
//! Everything here builds natively so it can be unit-tested without a browser.

pub mod auth;
pub mod navigation;
pub mod session;
pub mod validation;
pub mod web;
