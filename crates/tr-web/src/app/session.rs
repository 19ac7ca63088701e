use std::time::Duration;

use chrono::{DateTime, Utc};
use dioxus::{core::Task, prelude::*};
use tr_types::{
    auth::Principal, session::{AuthInitError, SessionState}
};

use crate::{
    app::auth::{context::AuthContext, keycloak},
    config::WebConfig,
};

/// Renew this long before the access token runs out.
const REFRESH_MARGIN_SECS: i64 = 30;

/// How long to wait before refreshing a token that expires at `expires_at`.
pub fn refresh_delay(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    let secs = (expires_at - now).num_seconds() - REFRESH_MARGIN_SECS;
    Duration::from_secs(secs.max(0) as u64)
}

/// Owns the session: runs the silent check on load, keeps tokens fresh, and
/// exposes [`AuthContext`] to everything below it.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let config = use_context::<Signal<WebConfig>>();
    let state = use_signal(SessionState::default);
    let tokens = use_signal(|| None);
    let mut auth = use_context_provider(|| AuthContext::new(state, tokens, config));

    use_hook(move || {
        spawn(async move {
            let identity = config.peek().identity.clone();
            let outcome = keycloak::check_session(&identity, &keycloak::browser::search()).await;
            auth.settle(outcome);
        });
    });

    let mut refresh_task = use_signal(|| None::<Task>);
    use_effect(move || {
        let current = tokens.read().clone();
        if let Some(task) = refresh_task.write().take() {
            task.cancel();
        }
        let Some(current) = current else {
            return;
        };
        let expires_at = match Principal::from_token(&current.access_token) {
            Ok(principal) => principal.expires_at,
            Err(err) => {
                tracing::warn!(error = %err, "cannot schedule refresh for unreadable token");
                return;
            }
        };

        let delay = refresh_delay(expires_at, Utc::now());
        tracing::debug!(seconds = delay.as_secs(), "token refresh scheduled");

        let task = spawn(async move {
            gloo_timers::future::sleep(delay).await;

            let Some(refresh_token) = current.refresh_token.clone() else {
                tracing::info!("access token expired without a refresh token");
                auth.expire();
                return;
            };

            let identity = config.peek().identity.clone();
            let renewed = match keycloak::refresh(&identity, &refresh_token).await {
                Ok(renewed) => Principal::from_token(&renewed.access_token)
                    .map(|principal| (principal, renewed))
                    .map_err(AuthInitError::from),
                Err(err) => Err(err),
            };

            match renewed {
                Ok((principal, renewed)) => {
                    keycloak::store_tokens(&renewed);
                    auth.renew(principal, renewed);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "token refresh failed, ending session");
                    auth.expire();
                }
            }
        });
        refresh_task.set(Some(task));
    });

    children
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::app::auth::hooks::use_session_state;

    thread_local! {
        static SEEN_INITIALIZED: Cell<Option<bool>> = const { Cell::new(None) };
    }

    #[test]
    fn provider_mounts_with_an_unsettled_session() {
        fn app() -> Element {
            use_context_provider(|| Signal::new(WebConfig::default()));
            rsx! {
                SessionProvider { SessionReader {} }
            }
        }

        #[component]
        fn SessionReader() -> Element {
            let state = use_session_state();
            SEEN_INITIALIZED.set(Some(state.read().is_initialized()));
            rsx! {}
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();

        assert_eq!(SEEN_INITIALIZED.get(), Some(false));
    }

    #[test]
    fn refresh_happens_before_expiry() {
        let now = DateTime::from_timestamp(1_000, 0).unwrap();
        let expires = DateTime::from_timestamp(1_300, 0).unwrap();
        assert_eq!(refresh_delay(expires, now), Duration::from_secs(270));
    }

    #[test]
    fn nearly_expired_tokens_refresh_immediately() {
        let now = DateTime::from_timestamp(1_000, 0).unwrap();
        assert_eq!(refresh_delay(DateTime::from_timestamp(1_010, 0).unwrap(), now), Duration::ZERO);
        assert_eq!(refresh_delay(DateTime::from_timestamp(900, 0).unwrap(), now), Duration::ZERO);
    }
}
