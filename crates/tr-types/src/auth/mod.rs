mod claims;

use std::collections::BTreeSet;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
pub use claims::Role;
use serde::{Deserialize, Serialize};
use thiserror::Error;
pub mod oidc;

/// Errors raised while reading an access token on the client.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not valid base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("token is missing the '{0}' claim")]
    MissingClaim(&'static str),
    #[error("token carries an out-of-range timestamp: {0}")]
    InvalidTimestamp(i64),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Realm-level role assignment as issued by the identity provider.
pub struct RealmAccess {
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Subset of the access-token payload the client reads.
///
/// Signature verification is left to the identity provider; the client only
/// trusts a token after the provider has accepted it (userinfo or token grant).
pub struct TokenClaims {
    /// Login name, used as the employee RUN when registering returns.
    #[serde(default)]
    pub preferred_username: String,
    /// Full display name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub realm_access: Option<RealmAccess>,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
    /// Issue time, seconds since the epoch.
    #[serde(default)]
    pub iat: Option<i64>,
}

impl TokenClaims {
    /// Decode the payload segment of a compact JWT.
    pub fn decode(token: &str) -> Result<Self, TokenError> {
        let mut parts = token.split('.');
        let (Some(_header), Some(payload), Some(_signature), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TokenError::Malformed);
        };

        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn role_names(&self) -> &[String] {
        self.realm_access.as_ref().map(|r| r.roles.as_slice()).unwrap_or(&[])
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// The authenticated identity behind the current session.
pub struct Principal {
    /// Unique login name.
    pub username: String,
    /// Display name, when the provider has one.
    pub display_name: Option<String>,
    /// Application roles held by the principal.
    pub roles: BTreeSet<Role>,
    pub issued_at: Option<DateTime<Utc>>,
    pub expires_at: DateTime<Utc>,
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.username)
    }
}

impl Principal {
    /// Build a principal from decoded token claims.
    ///
    /// Realm roles the application does not know about are dropped.
    pub fn from_claims(claims: &TokenClaims) -> Result<Self, TokenError> {
        if claims.preferred_username.trim().is_empty() {
            return Err(TokenError::MissingClaim("preferred_username"));
        }

        let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or(TokenError::InvalidTimestamp(claims.exp))?;
        let issued_at = match claims.iat {
            Some(iat) => Some(DateTime::from_timestamp(iat, 0).ok_or(TokenError::InvalidTimestamp(iat))?),
            None => None,
        };

        let roles = claims
            .role_names()
            .iter()
            .filter_map(|name| match name.parse::<Role>() {
                Ok(role) => Some(role),
                Err(_) => {
                    tracing::trace!(role = %name, "ignoring realm role without application meaning");
                    None
                }
            })
            .collect();

        Ok(Self {
            username: claims.preferred_username.clone(),
            display_name: claims.name.clone().filter(|n| !n.trim().is_empty()),
            roles,
            issued_at,
            expires_at,
        })
    }

    /// Decode a compact JWT straight into a principal.
    pub fn from_token(token: &str) -> Result<Self, TokenError> {
        Self::from_claims(&TokenClaims::decode(token)?)
    }

    /// Check if this principal holds any of the specified roles
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|role| self.roles.contains(role))
    }

    /// Name shown in the header greeting.
    pub fn greeting_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
