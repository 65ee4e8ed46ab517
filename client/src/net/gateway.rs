//! HTTP gateway for the storefront REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every request fails with [`ApiError::Unavailable`]
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (transport, non-2xx status, `success: false` bodies,
//! malformed JSON) is folded into [`ApiError`] so callers can turn it into a
//! single user-visible message with [`ApiError::user_message`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use serde::Serialize;
use serde_json::Value;

/// Normalized failure of a gateway request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("request rejected by server")]
    Rejected { message: Option<String> },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("invalid request body: {0}")]
    Encode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Human-readable message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } | Self::Rejected { message } => {
                message.as_deref().map(str::trim).filter(|m| !m.is_empty())
            }
            _ => None,
        }
    }

    /// Server message when present, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// A single JSON request against the API, relative to the gateway base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None, bearer: None }
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be represented as JSON.
    pub fn post<T: Serialize>(path: impl Into<String>, body: &T) -> Result<Self, ApiError> {
        Ok(Self { method: Method::Post, path: path.into(), body: Some(encode(body)?), bearer: None })
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be represented as JSON.
    pub fn put<T: Serialize>(path: impl Into<String>, body: &T) -> Result<Self, ApiError> {
        Ok(Self { method: Method::Put, path: path.into(), body: Some(encode(body)?), bearer: None })
    }

    #[must_use]
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_owned());
        self
    }
}

fn encode<T: Serialize>(body: &T) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Seam between the session store and the network.
#[allow(async_fn_in_trait)]
pub trait Gateway {
    /// Issue `request` and return the normalized JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, non-2xx responses,
    /// `success: false` bodies and undecodable payloads.
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

/// Join the configured base URL and an API path without doubling slashes.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Turn a raw HTTP status + body into the gateway result.
///
/// Mirrors the usual REST client contract: 2xx bodies are returned unless
/// they carry `success: false`; anything else becomes an error carrying the
/// body's `message` when one is present.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn normalize_response(status: u16, body: &str) -> Result<Value, ApiError> {
    let parsed = if body.trim().is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_str::<Value>(body)
    };
    let message = parsed
        .as_ref()
        .ok()
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str)
        .map(str::to_owned);

    if !(200..300).contains(&status) {
        return Err(ApiError::Status { status, message });
    }

    let value = parsed.map_err(|e| ApiError::Decode(e.to_string()))?;
    if value.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(ApiError::Rejected { message });
    }
    Ok(value)
}

/// Gateway backed by the browser `fetch` API.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Gateway for HttpGateway {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = join_url(&self.base_url, &request.path);
            let mut builder = match request.method {
                Method::Get => gloo_net::http::Request::get(&url),
                Method::Post => gloo_net::http::Request::post(&url),
                Method::Put => gloo_net::http::Request::put(&url),
            };
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &bearer_header(token));
            }
            let prepared = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Encode(e.to_string()))?;

            let resp = prepared.send().await.map_err(|e| {
                log::warn!("request to {url} failed: {e}");
                ApiError::Transport(e.to_string())
            })?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            log::debug!("{:?} {url} -> {status}", request.method);
            normalize_response(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.base_url, request);
            Err(ApiError::Unavailable)
        }
    }
}
