//! The `AuthApi` trait — the seam between session state and HTTP.

use async_trait::async_trait;

use crate::net::error::ApiError;
use crate::net::types::{ApiResponse, LoginRequest, PasswordUpdateRequest, StatusPayload, UserPayload};

/// Backend auth endpoints consumed by the session container.
///
/// Implementations return the envelope as-is for 2xx responses, including
/// `success: false` ones; only transport-level failures (no response, non-2xx
/// status, unparseable body) become `ApiError`.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `GET /api/me` — who is attached to the current session cookie.
    async fn me(&self) -> Result<ApiResponse<UserPayload>, ApiError>;

    /// `POST /api/login` — establish a session from credentials.
    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<UserPayload>, ApiError>;

    /// `POST /api/password` — change the current user's password.
    async fn update_password(&self, req: &PasswordUpdateRequest) -> Result<ApiResponse<StatusPayload>, ApiError>;

    /// `POST /api/logout` — invalidate the current session.
    async fn logout(&self) -> Result<ApiResponse<StatusPayload>, ApiError>;
}
