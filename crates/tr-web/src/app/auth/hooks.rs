use dioxus::prelude::*;
use tr_types::session::SessionState;

use super::context::AuthContext;
use crate::{app::api::ApiClient, config::WebConfig};

/// Get the auth context provided by the session provider
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

pub fn use_session_state() -> Signal<SessionState> {
    use_auth().state
}

/// REST client that sends the session's current bearer token on every call.
pub fn use_api() -> ApiClient {
    let auth = use_auth();
    let config = use_context::<Signal<WebConfig>>();
    ApiClient::new(&config.read().api_base_url, Some(auth.tokens))
}
