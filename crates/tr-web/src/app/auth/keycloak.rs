//! Keycloak (OpenID Connect) adapter for a public client.
//!
//! Implements the authorization-code flow by hand: the browser is sent to the
//! realm's `auth` endpoint, comes back with `code` and `state`, and the code is
//! exchanged at the `token` endpoint. Tokens are kept in `sessionStorage` and
//! re-validated against `userinfo` on page load. A tab with no tokens asks the
//! provider once with `prompt=none`, so an existing SSO session signs it in
//! without showing the login page.

use serde::{Deserialize, Serialize};
use tr_types::{
    auth::{
        Principal, oidc::{TokenErrorResponse, TokenSet}
    }, session::AuthInitError
};
use url::Url;

use crate::{
    app::storage::{BrowserStorage, StorageType},
    config::IdentityConfig,
};

const TOKENS_KEY: &str = "tr_web_tokens";
const PENDING_LOGIN_KEY: &str = "tr_web_pending_login";
const SILENT_CHECK_KEY: &str = "tr_web_silent_check";

/// Errors a `prompt=none` request returns when the provider has no session
/// it can use without the user (OIDC Core 3.1.2.6).
const NO_SESSION_ERRORS: &[&str] = &[
    "login_required",
    "interaction_required",
    "consent_required",
    "account_selection_required",
];

/// Where a login started, so the callback can be checked against it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingLogin {
    pub state: String,
    pub redirect_uri: String,
}

/// Parameters of an authorization response found in the page URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Callback {
    Code { code: String, state: String },
    Error { error: String, description: Option<String> },
}

/// First thing the page-load check has to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StartupStep {
    /// The URL carries an authorization response.
    Finish(Callback),
    /// This tab already holds tokens.
    Resume(TokenSet),
    /// Ask the provider, without a login page, whether an SSO session exists.
    AskProvider,
    SignedOut,
}

/// Pick the startup step. The provider is asked at most once per tab.
pub fn startup_step(callback: Option<Callback>, stored: Option<TokenSet>, provider_asked: bool) -> StartupStep {
    match (callback, stored) {
        (Some(callback), _) => StartupStep::Finish(callback),
        (None, Some(tokens)) => StartupStep::Resume(tokens),
        (None, None) if provider_asked => StartupStep::SignedOut,
        (None, None) => StartupStep::AskProvider,
    }
}

pub fn is_no_session_error(error: &str) -> bool {
    NO_SESSION_ERRORS.contains(&error)
}

/// Map an error callback. A silent check that found no SSO session is a
/// signed-out visitor, anything else is a failed sign-in.
pub fn callback_error(error: String, description: Option<String>) -> Result<Option<(Principal, TokenSet)>, AuthInitError> {
    if is_no_session_error(&error) {
        tracing::debug!(%error, "no provider session to resume");
        return Ok(None);
    }
    Err(AuthInitError::Provider(match description {
        Some(description) => format!("{}: {}", error, description),
        None => error,
    }))
}

/// Authorization endpoint URL. `prompt` of `Some("none")` makes it a silent check.
pub fn authorize_url(
    identity: &IdentityConfig,
    redirect_uri: &str,
    state: &str,
    prompt: Option<&str>,
) -> Result<Url, url::ParseError> {
    let mut url = Url::parse_with_params(
        &format!("{}/auth", identity.oidc_base()),
        &[
            ("client_id", identity.client_id.as_str()),
            ("redirect_uri", redirect_uri),
            ("response_type", "code"),
            ("scope", "openid"),
            ("state", state),
        ],
    )?;
    if let Some(prompt) = prompt {
        url.query_pairs_mut().append_pair("prompt", prompt);
    }
    Ok(url)
}

pub fn token_url(identity: &IdentityConfig) -> String {
    format!("{}/token", identity.oidc_base())
}

pub fn userinfo_url(identity: &IdentityConfig) -> String {
    format!("{}/userinfo", identity.oidc_base())
}

pub fn logout_url(identity: &IdentityConfig, origin: &str, id_token: Option<&str>) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&format!("{}/logout", identity.oidc_base()))?;
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("client_id", &identity.client_id)
            .append_pair("post_logout_redirect_uri", origin);
        if let Some(token) = id_token {
            query.append_pair("id_token_hint", token);
        }
    }
    Ok(url)
}

pub fn code_grant_form(identity: &IdentityConfig, code: &str, redirect_uri: &str) -> Vec<(&'static str, String)> {
    vec![
        ("grant_type", "authorization_code".to_string()),
        ("client_id", identity.client_id.clone()),
        ("code", code.to_string()),
        ("redirect_uri", redirect_uri.to_string()),
    ]
}

pub fn refresh_grant_form(identity: &IdentityConfig, refresh_token: &str) -> Vec<(&'static str, String)> {
    vec![
        ("grant_type", "refresh_token".to_string()),
        ("client_id", identity.client_id.clone()),
        ("refresh_token", refresh_token.to_string()),
    ]
}

/// Read an authorization response out of a query string (with or without `?`).
pub fn parse_callback(search: &str) -> Option<Callback> {
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        return None;
    }

    let mut code = None;
    let mut state = None;
    let mut error = None;
    let mut description = None;
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "code" => code = Some(value.into_owned()),
            "state" => state = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            "error_description" => description = Some(value.into_owned()),
            _ => {}
        }
    }

    match (error, code, state) {
        (Some(error), _, _) => Some(Callback::Error { error, description }),
        (None, Some(code), Some(state)) => Some(Callback::Code { code, state }),
        _ => None,
    }
}

async fn token_request(identity: &IdentityConfig, form: Vec<(&'static str, String)>) -> Result<TokenSet, AuthInitError> {
    let response = reqwest::Client::new()
        .post(token_url(identity))
        .form(&form)
        .send()
        .await
        .map_err(|e| AuthInitError::Network(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return response.json::<TokenSet>().await.map_err(|e| AuthInitError::Provider(e.to_string()));
    }

    let body = response.text().await.unwrap_or_default();
    let reason = match serde_json::from_str::<TokenErrorResponse>(&body) {
        Ok(err) => err.to_string(),
        Err(_) => format!("token endpoint returned {}", status),
    };
    Err(AuthInitError::Rejected(reason))
}

pub async fn exchange_code(identity: &IdentityConfig, code: &str, redirect_uri: &str) -> Result<TokenSet, AuthInitError> {
    tracing::debug!("exchanging authorization code");
    token_request(identity, code_grant_form(identity, code, redirect_uri)).await
}

pub async fn refresh(identity: &IdentityConfig, refresh_token: &str) -> Result<TokenSet, AuthInitError> {
    tracing::debug!("refreshing access token");
    token_request(identity, refresh_grant_form(identity, refresh_token)).await
}

/// Ask the provider whether `access_token` is still accepted.
pub async fn validate(identity: &IdentityConfig, access_token: &str) -> Result<(), AuthInitError> {
    let response = reqwest::Client::new()
        .get(userinfo_url(identity))
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| AuthInitError::Network(e.to_string()))?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(AuthInitError::Rejected(format!("userinfo returned {}", response.status())))
    }
}

fn session_storage() -> BrowserStorage {
    BrowserStorage::new(StorageType::Session)
}

pub fn load_tokens() -> Option<TokenSet> {
    session_storage().get_json(TOKENS_KEY)
}

pub fn store_tokens(tokens: &TokenSet) {
    if let Err(err) = session_storage().set_json(TOKENS_KEY, tokens) {
        tracing::warn!(error = %err, "could not store session tokens");
    }
}

pub fn clear_tokens() {
    session_storage().discard(TOKENS_KEY);
}

fn take_pending_login() -> Option<PendingLogin> {
    let storage = session_storage();
    let pending = storage.get_json(PENDING_LOGIN_KEY);
    storage.discard(PENDING_LOGIN_KEY);
    pending
}

fn provider_asked() -> bool {
    session_storage().get(SILENT_CHECK_KEY).is_some()
}

/// Turn a fresh token set into a principal, keeping the tokens on success.
fn accept(tokens: TokenSet) -> Result<(Principal, TokenSet), AuthInitError> {
    let principal = Principal::from_token(&tokens.access_token)?;
    store_tokens(&tokens);
    Ok((principal, tokens))
}

/// Silent session check run once on page load.
///
/// Finishes a pending login if the URL carries its callback, re-validates
/// stored tokens, or asks the provider for an SSO session. `Ok(None)` means
/// nobody is signed in.
pub async fn check_session(identity: &IdentityConfig, search: &str) -> Result<Option<(Principal, TokenSet)>, AuthInitError> {
    let tokens = match startup_step(parse_callback(search), load_tokens(), provider_asked()) {
        StartupStep::Finish(callback) => {
            let pending = take_pending_login();
            browser::strip_query();

            return match callback {
                Callback::Error { error, description } => callback_error(error, description),
                Callback::Code { code, state } => {
                    let pending = pending.filter(|p| p.state == state).ok_or(AuthInitError::StateMismatch)?;
                    let tokens = exchange_code(identity, &code, &pending.redirect_uri).await?;
                    accept(tokens).map(Some)
                }
            };
        }
        StartupStep::Resume(tokens) => tokens,
        StartupStep::AskProvider => {
            if let Err(err) = session_storage().set(SILENT_CHECK_KEY, "1") {
                tracing::warn!(error = %err, "skipping provider session check");
                return Ok(None);
            }
            if !redirect_to_provider(identity, &browser::pathname(), Some("none")) {
                return Ok(None);
            }
            // The page is unloading; the session stays unsettled until it does
            return std::future::pending().await;
        }
        StartupStep::SignedOut => return Ok(None),
    };

    let principal = Principal::from_token(&tokens.access_token)?;
    if principal.is_expired_at(chrono::Utc::now()) {
        let refresh_token = tokens
            .refresh_token
            .as_deref()
            .ok_or_else(|| AuthInitError::Rejected("stored token expired".to_string()))?;
        let renewed = refresh(identity, refresh_token).await?;
        return accept(renewed).map(Some);
    }

    validate(identity, &tokens.access_token).await?;
    Ok(Some((principal, tokens)))
}

/// Send the browser to the provider's login page. Returns to `redirect_path`.
pub fn begin_login(identity: &IdentityConfig, redirect_path: &str) {
    redirect_to_provider(identity, redirect_path, None);
}

/// Start an authorization request that comes back to `redirect_path`.
/// Returns `false` when no redirect happened.
fn redirect_to_provider(identity: &IdentityConfig, redirect_path: &str, prompt: Option<&str>) -> bool {
    let redirect_uri = format!("{}{}", browser::origin(), redirect_path);
    let pending = PendingLogin {
        state: uuid::Uuid::new_v4().simple().to_string(),
        redirect_uri,
    };

    match authorize_url(identity, &pending.redirect_uri, &pending.state, prompt) {
        Ok(url) => {
            if let Err(err) = session_storage().set_json(PENDING_LOGIN_KEY, &pending) {
                tracing::warn!(error = %err, "could not remember pending login");
            }
            tracing::info!(silent = prompt.is_some(), "redirecting to identity provider");
            browser::navigate(url.as_str());
            true
        }
        Err(err) => {
            tracing::error!(error = %err, "invalid identity provider URL");
            false
        }
    }
}

/// Drop local tokens and end the provider session, coming back to the origin.
pub fn end_session(identity: &IdentityConfig, id_token: Option<&str>) {
    clear_tokens();
    match logout_url(identity, &browser::origin(), id_token) {
        Ok(url) => browser::navigate(url.as_str()),
        Err(err) => tracing::error!(error = %err, "invalid identity provider URL"),
    }
}

/// Access to `window.location` and `history`. No-ops outside the browser.
pub mod browser {
    pub fn origin() -> String {
        #[cfg(feature = "web")]
        {
            web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "web"))]
        {
            String::new()
        }
    }

    pub fn pathname() -> String {
        #[cfg(feature = "web")]
        {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_else(|| "/".to_string())
        }
        #[cfg(not(feature = "web"))]
        {
            "/".to_string()
        }
    }

    pub fn search() -> String {
        #[cfg(feature = "web")]
        {
            web_sys::window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "web"))]
        {
            String::new()
        }
    }

    pub fn navigate(url: &str) {
        #[cfg(feature = "web")]
        {
            if let Some(window) = web_sys::window()
                && let Err(err) = window.location().assign(url)
            {
                tracing::error!(error = ?err, "browser navigation failed");
            }
        }
        #[cfg(not(feature = "web"))]
        let _ = url;
    }

    /// Remove the query string from the address bar without reloading.
    pub fn strip_query() {
        #[cfg(feature = "web")]
        {
            if let Some(window) = web_sys::window() {
                let path = window.location().pathname().unwrap_or_else(|_| "/".to_string());
                if let Ok(history) = window.history() {
                    let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WebConfig;

    fn identity() -> IdentityConfig {
        WebConfig::default().identity
    }

    #[test]
    fn authorize_url_carries_code_flow_params() {
        let url = authorize_url(&identity(), "http://localhost:5173/home", "abc123", None).unwrap();
        assert_eq!(url.path(), "/realms/toolrent/protocol/openid-connect/auth");

        let params: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(params.contains(&("client_id".into(), "toolrent-frontend".into())));
        assert!(params.contains(&("redirect_uri".into(), "http://localhost:5173/home".into())));
        assert!(params.contains(&("response_type".into(), "code".into())));
        assert!(params.contains(&("scope".into(), "openid".into())));
        assert!(params.contains(&("state".into(), "abc123".into())));
        assert!(!params.iter().any(|(key, _)| key == "prompt"));
    }

    #[test]
    fn silent_authorize_url_asks_without_prompting() {
        let url = authorize_url(&identity(), "http://localhost:5173/loans", "s9", Some("none")).unwrap();
        let params: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(params.contains(&("prompt".into(), "none".into())));
        assert!(params.contains(&("redirect_uri".into(), "http://localhost:5173/loans".into())));
    }

    fn stored() -> TokenSet {
        TokenSet {
            access_token: "a.b.c".into(),
            refresh_token: None,
            id_token: None,
            expires_in: None,
        }
    }

    #[test]
    fn startup_asks_provider_once_per_tab() {
        assert_eq!(startup_step(None, None, false), StartupStep::AskProvider);
        assert_eq!(startup_step(None, None, true), StartupStep::SignedOut);
        assert_eq!(startup_step(None, Some(stored()), false), StartupStep::Resume(stored()));
        assert_eq!(startup_step(None, Some(stored()), true), StartupStep::Resume(stored()));
    }

    #[test]
    fn startup_finishes_callback_first() {
        let callback = parse_callback("?error=login_required&state=s9").unwrap();
        assert_eq!(
            startup_step(Some(callback.clone()), Some(stored()), true),
            StartupStep::Finish(callback)
        );
    }

    #[test]
    fn no_provider_session_means_signed_out() {
        let Some(Callback::Error { error, description }) = parse_callback("?error=login_required&state=s9") else {
            panic!("expected an error callback");
        };
        assert!(matches!(callback_error(error, description), Ok(None)));

        for error in ["interaction_required", "consent_required", "account_selection_required"] {
            assert!(is_no_session_error(error));
            assert!(matches!(callback_error(error.into(), None), Ok(None)));
        }
    }

    #[test]
    fn other_callback_errors_fail_sign_in() {
        assert!(!is_no_session_error("access_denied"));
        assert!(matches!(
            callback_error("access_denied".into(), Some("User cancelled".into())),
            Err(AuthInitError::Provider(reason)) if reason == "access_denied: User cancelled"
        ));
        assert!(matches!(
            callback_error("server_error".into(), None),
            Err(AuthInitError::Provider(reason)) if reason == "server_error"
        ));
    }

    #[test]
    fn logout_url_returns_to_origin() {
        let url = logout_url(&identity(), "http://localhost:5173", None).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/realms/toolrent/protocol/openid-connect/logout?client_id=toolrent-frontend&post_logout_redirect_uri=http%3A%2F%2Flocalhost%3A5173"
        );

        let with_hint = logout_url(&identity(), "http://localhost:5173", Some("id.tok.en")).unwrap();
        assert!(with_hint.as_str().ends_with("&id_token_hint=id.tok.en"));
    }

    #[test]
    fn token_endpoints() {
        assert_eq!(
            token_url(&identity()),
            "http://localhost:8080/realms/toolrent/protocol/openid-connect/token"
        );
        assert_eq!(
            userinfo_url(&identity()),
            "http://localhost:8080/realms/toolrent/protocol/openid-connect/userinfo"
        );
    }

    #[test]
    fn grant_forms() {
        let form = code_grant_form(&identity(), "the-code", "http://app/home");
        assert!(form.contains(&("grant_type", "authorization_code".to_string())));
        assert!(form.contains(&("code", "the-code".to_string())));
        assert!(form.contains(&("redirect_uri", "http://app/home".to_string())));

        let form = refresh_grant_form(&identity(), "r-token");
        assert!(form.contains(&("grant_type", "refresh_token".to_string())));
        assert!(form.contains(&("refresh_token", "r-token".to_string())));
        assert!(form.contains(&("client_id", "toolrent-frontend".to_string())));
    }

    #[test]
    fn parse_callback_variants() {
        assert_eq!(parse_callback(""), None);
        assert_eq!(parse_callback("?"), None);
        assert_eq!(parse_callback("?tab=2"), None);
        assert_eq!(parse_callback("?code=only"), None);

        assert_eq!(
            parse_callback("?state=s1&session_state=x&code=c%2F1"),
            Some(Callback::Code {
                code: "c/1".into(),
                state: "s1".into()
            })
        );
        assert_eq!(
            parse_callback("error=access_denied&error_description=User+cancelled&state=s1"),
            Some(Callback::Error {
                error: "access_denied".into(),
                description: Some("User cancelled".into())
            })
        );
    }
}
