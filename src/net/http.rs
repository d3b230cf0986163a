//! Reqwest-backed `AuthApi` implementation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auth against the backend is session-cookie based, so the client carries a
//! cookie store and every call goes through the same `reqwest::Client`. The
//! transport owns its own timeout; callers never add one on top.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::api::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{ApiResponse, LoginRequest, PasswordUpdateRequest, StatusPayload, UserPayload};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Fallback used when a failure body carries no extractable message.
pub(crate) const GENERIC_REQUEST_FAILED: &str = "request failed";

/// Transport configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Backend origin, no trailing slash required.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS }
    }
}

impl HttpConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `API_BASE_URL`: backend origin, default `http://127.0.0.1:8080`
    /// - `API_TIMEOUT_SECS`: per-request timeout, default 15
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let timeout_secs = std::env::var("API_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        Self { base_url, timeout_secs }
    }
}

/// Production `AuthApi` speaking HTTP with a persistent cookie store.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Build the client from config.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &HttpConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self { client, base_url: config.base_url.trim_end_matches('/').to_owned() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_envelope<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_envelope(resp).await
    }

    async fn post_envelope<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>, ApiError> {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_envelope(resp).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        let resp = self
            .client
            .post(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_envelope(resp).await
    }
}

#[async_trait]
impl AuthApi for HttpApi {
    async fn me(&self) -> Result<ApiResponse<UserPayload>, ApiError> {
        self.get_envelope("/api/me").await
    }

    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<UserPayload>, ApiError> {
        self.post_envelope("/api/login", req).await
    }

    async fn update_password(&self, req: &PasswordUpdateRequest) -> Result<ApiResponse<StatusPayload>, ApiError> {
        self.post_envelope("/api/password", req).await
    }

    async fn logout(&self) -> Result<ApiResponse<StatusPayload>, ApiError> {
        self.post_empty("/api/logout").await
    }
}

async fn read_envelope<T: DeserializeOwned>(resp: reqwest::Response) -> Result<ApiResponse<T>, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    if !status.is_success() {
        return Err(ApiError::Status { status: status.as_u16(), message: extract_error_message(&body) });
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Pull a human-readable message out of a failure body: the envelope's
/// `error` field, then a bare `message` field, then a generic fallback.
pub(crate) fn extract_error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return GENERIC_REQUEST_FAILED.to_owned();
    };
    for key in ["error", "message"] {
        if let Some(message) = value.get(key).and_then(serde_json::Value::as_str) {
            if !message.is_empty() {
                return message.to_owned();
            }
        }
    }
    GENERIC_REQUEST_FAILED.to_owned()
}
