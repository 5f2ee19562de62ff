//! Authenticated request layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every REST call in the console goes through [`ApiClient::execute`]. It
//! reads the session before sending, attaches `Authorization: Bearer <token>`
//! when one is stored, and turns every 401 into a forced
//! logout: the session is cleared, the expiry handler shows a notice and
//! schedules navigation to `/login`, and the caller still receives the error.
//!
//! DESIGN
//! ======
//! The wire is behind [`Transport`] so the layer runs unchanged over
//! `gloo-net` in the browser and over a recording fake in tests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::config::{ApiBase, ApiConfig};
use super::error::ApiError;
use crate::state::session::SessionStore;
use crate::util::route_guard::LOGIN_PATH;
use crate::util::storage::KeyValueStore;

/// Notice shown when the backend rejects the stored token.
pub const SESSION_EXPIRED_NOTICE: &str = "Session expired. Redirecting to login...";
/// Delay between the expiry notice and the forced navigation.
pub const EXPIRY_REDIRECT_DELAY_MS: u32 = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    Empty,
    /// Serialized JSON text.
    Json(String),
    /// Text fields of a `multipart/form-data` body.
    Multipart(Vec<(String, String)>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Body,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON. An empty body decodes as `null`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let text = if self.body.trim().is_empty() { "null" } else { self.body.as_str() };
        serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Sends one request and returns whatever status came back.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns an error only when no response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Transport for builds without a browser: every call fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineTransport;

impl Transport for OfflineTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// `fetch`-backed transport via `gloo-net`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        use gloo_net::http::Request;

        fn net(e: impl std::fmt::Display) -> ApiError {
            ApiError::Network(e.to_string())
        }

        let url = request.url.as_str();
        let mut builder = match request.method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let resp = match request.body {
            Body::Empty => builder.send().await.map_err(net)?,
            Body::Json(text) => builder.body(text).map_err(net)?.send().await.map_err(net)?,
            Body::Multipart(fields) => {
                let form = web_sys::FormData::new().map_err(|e| ApiError::Encode(format!("{e:?}")))?;
                for (name, value) in &fields {
                    form.append_with_str(name, value)
                        .map_err(|e| ApiError::Encode(format!("{e:?}")))?;
                }
                builder.body(form).map_err(net)?.send().await.map_err(net)?
            }
        };

        let status = resp.status();
        let body = resp.text().await.map_err(net)?;
        Ok(HttpResponse { status, body })
    }
}

/// Transport used by the running app.
#[cfg(feature = "hydrate")]
pub type DefaultTransport = GlooTransport;

/// Transport used by the running app.
#[cfg(not(feature = "hydrate"))]
pub type DefaultTransport = OfflineTransport;

/// What the UI must do after a forced logout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpiryAction {
    pub notice: &'static str,
    pub redirect_to: &'static str,
    pub delay_ms: u32,
}

pub const SESSION_EXPIRY: ExpiryAction = ExpiryAction {
    notice: SESSION_EXPIRED_NOTICE,
    redirect_to: LOGIN_PATH,
    delay_ms: EXPIRY_REDIRECT_DELAY_MS,
};

/// UI side of a forced logout. Called after the session is cleared.
pub trait SessionExpiredHandler: Send + Sync {
    fn session_expired(&self, action: &ExpiryAction);
}

/// Handler that only logs; used until the app installs its own.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogOnlyExpiryHandler;

impl SessionExpiredHandler for LogOnlyExpiryHandler {
    fn session_expired(&self, action: &ExpiryAction) {
        log::warn!("{}", action.notice);
    }
}

/// REST client bound to a session store.
#[derive(Clone)]
pub struct ApiClient<T, S> {
    config: ApiConfig,
    session: SessionStore<S>,
    transport: T,
    on_expired: Arc<dyn SessionExpiredHandler>,
}

impl<T, S> std::fmt::Debug for ApiClient<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("config", &self.config).finish_non_exhaustive()
    }
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(config: ApiConfig, transport: T, storage: S) -> Self {
        Self {
            config,
            session: SessionStore::new(storage),
            transport,
            on_expired: Arc::new(LogOnlyExpiryHandler),
        }
    }

    #[must_use]
    pub fn with_expiry_handler(mut self, handler: Arc<dyn SessionExpiredHandler>) -> Self {
        self.on_expired = handler;
        self
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Send one request through the session-aware pipeline.
    ///
    /// # Errors
    ///
    /// - [`ApiError::SessionExpired`] on any 401, with or without a token
    ///   (the session is cleared and the expiry handler runs first).
    /// - [`ApiError::Status`] on any other non-2xx status.
    /// - Transport errors unchanged.
    pub async fn execute(
        &self,
        method: Method,
        base: ApiBase,
        path: &str,
        body: Body,
    ) -> Result<HttpResponse, ApiError> {
        let token = self.session.get().bearer().map(str::to_owned);
        let mut headers = Vec::new();
        if let Some(token) = &token {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        if matches!(body, Body::Json(_)) {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        let request = HttpRequest { method, url: self.config.url(base, path), headers, body };

        let resp = self.transport.send(request).await?;
        if resp.status == 401 {
            log::warn!("{method:?} {path}: 401 (token sent: {}), ending session", token.is_some());
            self.session.clear();
            self.on_expired.session_expired(&SESSION_EXPIRY);
            return Err(ApiError::SessionExpired);
        }
        if !resp.is_success() {
            return Err(ApiError::Status { status: resp.status, message: error_message(&resp.body) });
        }
        Ok(resp)
    }

    pub(crate) async fn get_json<R: DeserializeOwned>(&self, base: ApiBase, path: &str) -> Result<R, ApiError> {
        self.execute(Method::Get, base, path, Body::Empty).await?.json()
    }

    pub(crate) async fn send_json<B, R>(
        &self,
        method: Method,
        base: ApiBase,
        path: &str,
        payload: &B,
    ) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let text = serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.execute(method, base, path, Body::Json(text)).await?.json()
    }

    pub(crate) async fn send_multipart<R: DeserializeOwned>(
        &self,
        base: ApiBase,
        path: &str,
        fields: Vec<(String, String)>,
    ) -> Result<R, ApiError> {
        self.execute(Method::Post, base, path, Body::Multipart(fields)).await?.json()
    }

    pub(crate) async fn delete(&self, base: ApiBase, path: &str) -> Result<(), ApiError> {
        self.execute(Method::Delete, base, path, Body::Empty).await.map(|_| ())
    }
}

/// Extract a human-readable message from an error body: the JSON `error` or
/// `message` field, else the raw text.
pub(crate) fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(msg) = value.get(key).and_then(serde_json::Value::as_str) {
                return msg.to_owned();
            }
        }
    }
    body.trim().to_owned()
}
