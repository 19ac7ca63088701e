//! Build-time configuration for the web client.
//!
//! WASM bundles have no process environment, so overrides are read with
//! `option_env!` when the bundle is compiled.

use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "http://localhost:8090";
const DEFAULT_KEYCLOAK_URL: &str = "http://localhost:8080";
const DEFAULT_REALM: &str = "toolrent";
const DEFAULT_CLIENT_ID: &str = "toolrent-frontend";

/// Keycloak realm and public client used for sign-in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Keycloak base URL, without a trailing slash.
    pub url: String,
    pub realm: String,
    pub client_id: String,
}

impl IdentityConfig {
    /// `{url}/realms/{realm}/protocol/openid-connect`
    pub fn oidc_base(&self) -> String {
        format!("{}/realms/{}/protocol/openid-connect", self.url, self.realm)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebConfig {
    /// Backend base URL, without a trailing slash. Paths start with `/api`.
    pub api_base_url: String,
    pub identity: IdentityConfig,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            identity: IdentityConfig {
                url: DEFAULT_KEYCLOAK_URL.to_string(),
                realm: DEFAULT_REALM.to_string(),
                client_id: DEFAULT_CLIENT_ID.to_string(),
            },
        }
    }
}

impl WebConfig {
    /// Defaults overridden by `TOOLRENT_*` variables set at build time.
    pub fn from_env() -> Self {
        Self::from_overrides(
            option_env!("TOOLRENT_API_URL"),
            option_env!("TOOLRENT_KEYCLOAK_URL"),
            option_env!("TOOLRENT_KEYCLOAK_REALM"),
            option_env!("TOOLRENT_KEYCLOAK_CLIENT_ID"),
        )
    }

    fn from_overrides(api_url: Option<&str>, keycloak_url: Option<&str>, realm: Option<&str>, client_id: Option<&str>) -> Self {
        let defaults = Self::default();
        let pick = |value: Option<&str>, default: String| match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => v.to_string(),
            None => default,
        };

        let config = Self {
            api_base_url: trim_url(pick(api_url, defaults.api_base_url)),
            identity: IdentityConfig {
                url: trim_url(pick(keycloak_url, defaults.identity.url)),
                realm: pick(realm, defaults.identity.realm),
                client_id: pick(client_id, defaults.identity.client_id),
            },
        };
        tracing::debug!(api = %config.api_base_url, keycloak = %config.identity.url, realm = %config.identity.realm, "web config loaded");
        config
    }
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
