//! Wire shapes shared by every backend auth endpoint.
//!
//! DESIGN
//! ======
//! The backend wraps every response in a uniform envelope. `data` is optional
//! because failure envelopes omit it entirely; interpreting the `success`
//! flag is deliberately left to the session layer so the transport stays a
//! dumb pipe.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Uniform response envelope returned by every backend endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    /// Whether the backend considers the request to have succeeded.
    pub success: bool,
    /// Payload; present on success, omitted on failure envelopes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable failure message; present on failure envelopes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Identity record for the currently known user.
///
/// Field names match the backend wire format. `require_reset` marks a user
/// who is identified but must change their password before using the app.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub id: i64,
    pub username: String,
    pub require_reset: bool,
}

/// Credentials submitted to `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body for `POST /api/password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordUpdateRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Status-only payload returned by the password and logout endpoints
/// (`"password_updated"`, `"logged_out"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPayload {
    pub status: String,
}
