//! REST client for the ToolRent backend.
//!
//! One module per backend resource. Every call goes through [`ApiClient`],
//! which attaches the session's bearer token and maps failures to
//! [`ApiError`].

use dioxus::prelude::*;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tr_types::auth::oidc::TokenSet;
use url::Url;

use crate::error::ApiError;

pub mod clients;
pub mod employees;
pub mod kardex;
pub mod loans;
pub mod tool_items;
pub mod tool_types;

pub type ApiResult<T> = Result<T, ApiError>;

/// Client for one backend base URL.
///
/// Holds the session's token signal rather than a copy of the token, so a
/// client kept across renders (inside a resource closure, say) sends
/// whatever access token the session holds when the request is built.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    tokens: Option<Signal<Option<TokenSet>>>,
}

impl ApiClient {
    pub fn new(base_url: &str, tokens: Option<Signal<Option<TokenSet>>>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    /// Access token as of now, if signed in.
    pub fn bearer(&self) -> Option<String> {
        let tokens = self.tokens?;
        let current = tokens.try_peek().ok()?;
        current.as_ref().map(|set| set.access_token.clone())
    }

    /// Absolute URL for `segments` under the base, each segment percent-encoded.
    ///
    /// An empty last segment produces a trailing slash (`/api/clients/`).
    pub fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| ApiError::setup(format!("invalid API base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::setup("API base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = reqwest::Client::new().request(method, url);
        match self.bearer() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder.send().await.map_err(|e| ApiError::from_transport(&e))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(status.as_u16(), &body);
        tracing::debug!(status = status.as_u16(), error = %err, "backend returned an error");
        Err(err)
    }

    async fn json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        decode(self.send(builder).await?).await
    }

    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> ApiResult<T> {
        let url = self.endpoint(segments)?;
        tracing::trace!(%url, "GET");
        self.json(self.request(Method::GET, url)).await
    }

    /// GET that reads `204 No Content` as `T::default()`.
    pub async fn get_or_default<T: DeserializeOwned + Default>(&self, segments: &[&str]) -> ApiResult<T> {
        let url = self.endpoint(segments)?;
        tracing::trace!(%url, "GET");
        let response = self.send(self.request(Method::GET, url)).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(T::default());
        }
        decode(response).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(&self, segments: &[&str], query: &[(&str, String)]) -> ApiResult<T> {
        let url = self.endpoint(segments)?;
        tracing::trace!(%url, "GET");
        self.json(self.request(Method::GET, url).query(query)).await
    }

    /// POST whose response body is ignored.
    pub async fn post_unit<B: Serialize>(&self, segments: &[&str], query: &[(&str, String)], body: &B) -> ApiResult<()> {
        let url = self.endpoint(segments)?;
        tracing::trace!(%url, "POST");
        self.send(self.request(Method::POST, url).query(query).json(body)).await?;
        Ok(())
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, segments: &[&str], body: &B) -> ApiResult<T> {
        let url = self.endpoint(segments)?;
        tracing::trace!(%url, "PUT");
        self.json(self.request(Method::PUT, url).json(body)).await
    }

    /// PUT with no request body.
    pub async fn put_empty<T: DeserializeOwned>(&self, segments: &[&str]) -> ApiResult<T> {
        let url = self.endpoint(segments)?;
        tracing::trace!(%url, "PUT");
        self.json(self.request(Method::PUT, url)).await
    }

    /// PUT whose response body is ignored. `body` of `None` sends no body.
    pub async fn put_unit<B: Serialize>(&self, segments: &[&str], query: &[(&str, String)], body: Option<&B>) -> ApiResult<()> {
        let url = self.endpoint(segments)?;
        tracing::trace!(%url, "PUT");
        let mut builder = self.request(Method::PUT, url).query(query);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.send(builder).await?;
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response.json::<T>().await.map_err(|e| {
        tracing::warn!(error = %e, "unreadable response body");
        ApiError::setup(e.to_string())
    })
}
