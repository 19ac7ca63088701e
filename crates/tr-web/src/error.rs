//! REST client errors for tr-web.
//!
//! Failures are split the same three ways everywhere in the UI: the backend
//! answered with an error status, the request went out but nothing came back,
//! or the request could not be built (or its answer could not be read).

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NO_RESPONSE_MESSAGE: &str = "No se recibió respuesta del servidor.";

#[derive(Error, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Backend responded with a non-success status.
    #[error("server responded {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Server { status: u16, message: Option<String> },

    /// Request was sent but no response arrived.
    #[error("no response from server")]
    NoResponse,

    /// Request could not be built, or a success body could not be decoded.
    #[error("request setup failed: {detail}")]
    RequestSetup { detail: String },
}

impl ApiError {
    /// Build a `Server` error from a status and the raw response body.
    ///
    /// The message is taken from a JSON string body, the `message` field of a
    /// JSON object, or the raw text, in that order.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Server {
            status,
            message: extract_message(body),
        }
    }

    /// Classify a transport-level failure.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_builder() || err.is_decode() || err.is_body() {
            Self::RequestSetup { detail: err.to_string() }
        } else {
            tracing::warn!(error = %err, "request got no response");
            Self::NoResponse
        }
    }

    pub fn setup(detail: impl Into<String>) -> Self {
        Self::RequestSetup { detail: detail.into() }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Text shown to the user.
    ///
    /// `fallback` covers both a server error without a readable message and a
    /// request that could not be set up.
    pub fn user_message(&self, fallback: &str) -> String {
        self.describe(fallback, fallback)
    }

    /// Like [`user_message`](Self::user_message), with separate fallbacks for a
    /// message-less server error and a setup failure.
    pub fn describe(&self, server_fallback: &str, unexpected: &str) -> String {
        match self {
            Self::Server { message: Some(message), .. } => message.clone(),
            Self::Server { message: None, .. } => server_fallback.to_string(),
            Self::NoResponse => NO_RESPONSE_MESSAGE.to_string(),
            Self::RequestSetup { .. } => unexpected.to_string(),
        }
    }
}

fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(text)) => Some(text).filter(|t| !t.trim().is_empty()),
        Ok(serde_json::Value::Object(map)) => map
            .get("message")
            .and_then(|m| m.as_str())
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string),
        Ok(_) => None,
        Err(_) => Some(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_body_is_the_message() {
        let err = ApiError::from_response(409, "El cliente ya existe en la base de datos");
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.user_message("x"), "El cliente ya existe en la base de datos");
    }

    #[test]
    fn json_message_field_is_used() {
        let err = ApiError::from_response(400, r#"{"timestamp":"2025-01-01","message":"RUN inválido"}"#);
        assert_eq!(err.user_message("x"), "RUN inválido");
    }

    #[test]
    fn json_string_body_is_unquoted() {
        let err = ApiError::from_response(404, r#""Cliente no encontrado""#);
        assert_eq!(err.user_message("x"), "Cliente no encontrado");
        assert!(err.is_not_found());
    }

    #[test]
    fn missing_message_uses_server_fallback() {
        for body in ["", "   ", r#"{"error":"Bad Request"}"#, "[1,2]", r#"{"message":""}"#] {
            let err = ApiError::from_response(500, body);
            assert_eq!(
                err.describe("Ocurrió un error al registrar al cliente.", "inesperado"),
                "Ocurrió un error al registrar al cliente.",
                "body {body:?}"
            );
        }
    }

    #[test]
    fn no_response_has_fixed_message() {
        assert_eq!(ApiError::NoResponse.user_message("x"), NO_RESPONSE_MESSAGE);
        assert_eq!(ApiError::NoResponse.status(), None);
        assert!(!ApiError::NoResponse.is_not_found());
    }

    #[test]
    fn setup_failure_uses_unexpected_fallback() {
        let err = ApiError::setup("bad url");
        assert_eq!(
            err.describe("server", "Ocurrió un error inesperado al registrar al cliente."),
            "Ocurrió un error inesperado al registrar al cliente."
        );
        assert_eq!(err.to_string(), "request setup failed: bad url");
    }
}
