//! Session lifecycle for the browser client.
//!
//! The session starts `Uninitialized`, settles exactly once into either
//! `Unauthenticated` or `Authenticated`, and can only fall back from
//! `Authenticated` to `Unauthenticated` afterwards (logout or expiry).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::{Principal, TokenError};

/// Why the initial session check did not produce a principal.
#[derive(Debug, Error)]
pub enum AuthInitError {
    #[error("identity provider unreachable: {0}")]
    Network(String),
    #[error("stored token is unusable: {0}")]
    Token(#[from] TokenError),
    #[error("identity provider rejected the session: {0}")]
    Rejected(String),
    #[error("authorization response state does not match the pending login")]
    StateMismatch,
    #[error("identity provider error: {0}")]
    Provider(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("invalid session transition from {from} to {to}")]
    InvalidTransition { from: &'static str, to: &'static str },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Uninitialized,
    Unauthenticated,
    Authenticated(Principal),
}

impl SessionState {
    fn name(&self) -> &'static str {
        match self {
            SessionState::Uninitialized => "Uninitialized",
            SessionState::Unauthenticated => "Unauthenticated",
            SessionState::Authenticated(_) => "Authenticated",
        }
    }

    pub fn is_initialized(&self) -> bool {
        !matches!(self, SessionState::Uninitialized)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn principal(&self) -> Option<&Principal> {
        match self {
            SessionState::Authenticated(principal) => Some(principal),
            _ => None,
        }
    }

    /// Apply the outcome of the initial session check.
    ///
    /// A failed check settles as `Unauthenticated`; the error is only logged.
    pub fn settle(&mut self, outcome: Result<Option<Principal>, AuthInitError>) -> Result<(), SessionError> {
        if self.is_initialized() {
            return Err(SessionError::InvalidTransition {
                from: self.name(),
                to: "settled",
            });
        }

        *self = match outcome {
            Ok(Some(principal)) => {
                tracing::info!(user = %principal.username, roles = ?principal.roles, "session authenticated");
                SessionState::Authenticated(principal)
            }
            Ok(None) => {
                tracing::debug!("no existing session");
                SessionState::Unauthenticated
            }
            Err(err) => {
                tracing::warn!(error = %err, "session check failed, continuing unauthenticated");
                SessionState::Unauthenticated
            }
        };
        Ok(())
    }

    /// Replace the principal of an authenticated session (token refresh).
    pub fn refresh(&mut self, principal: Principal) -> Result<(), SessionError> {
        match self {
            SessionState::Authenticated(current) => {
                *current = principal;
                Ok(())
            }
            other => Err(SessionError::InvalidTransition {
                from: other.name(),
                to: "Authenticated",
            }),
        }
    }

    /// End an authenticated session (logout or token expiry).
    pub fn end(&mut self) -> Result<(), SessionError> {
        match self {
            SessionState::Authenticated(principal) => {
                tracing::info!(user = %principal.username, "session ended");
                *self = SessionState::Unauthenticated;
                Ok(())
            }
            other => Err(SessionError::InvalidTransition {
                from: other.name(),
                to: "Unauthenticated",
            }),
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
