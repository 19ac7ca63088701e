use dioxus::prelude::*;
use tr_types::{
    auth::{Principal, oidc::TokenSet}, session::{AuthInitError, SessionState}
};

use super::keycloak;
use crate::config::WebConfig;

/// Session state plus the tokens backing it.
///
/// Owned by the session provider; everything else reads it through hooks.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: Signal<SessionState>,
    pub tokens: Signal<Option<TokenSet>>,
    config: Signal<WebConfig>,
}

impl AuthContext {
    pub fn new(state: Signal<SessionState>, tokens: Signal<Option<TokenSet>>, config: Signal<WebConfig>) -> Self {
        Self { state, tokens, config }
    }

    pub fn principal(&self) -> Option<Principal> {
        self.state.read().principal().cloned()
    }

    /// Apply the outcome of the page-load session check.
    pub fn settle(&mut self, outcome: Result<Option<(Principal, TokenSet)>, AuthInitError>) {
        let (principal, tokens) = match outcome {
            Ok(Some((principal, tokens))) => (Ok(Some(principal)), Some(tokens)),
            Ok(None) => (Ok(None), None),
            Err(err) => {
                keycloak::clear_tokens();
                (Err(err), None)
            }
        };

        if let Err(err) = self.state.write().settle(principal) {
            tracing::error!(error = %err, "session settled twice");
            return;
        }
        self.tokens.set(tokens);
    }

    /// Swap in renewed tokens after a successful refresh.
    pub fn renew(&mut self, principal: Principal, tokens: TokenSet) {
        match self.state.write().refresh(principal) {
            Ok(()) => self.tokens.set(Some(tokens)),
            Err(err) => tracing::warn!(error = %err, "ignoring token refresh for a closed session"),
        }
    }

    /// End the session locally (expiry). Does not contact the provider.
    pub fn expire(&mut self) {
        keycloak::clear_tokens();
        self.tokens.set(None);
        if let Err(err) = self.state.write().end() {
            tracing::debug!(error = %err, "session already closed");
        }
    }

    pub fn login(&self) {
        keycloak::begin_login(&self.config.peek().identity, "/home");
    }

    /// Close the session here and at the provider, then return to the origin.
    pub fn logout(&mut self) {
        let id_token = self.tokens.peek().as_ref().and_then(|t| t.id_token.clone());
        self.expire();
        keycloak::end_session(&self.config.peek().identity, id_token.as_deref());
    }
}
