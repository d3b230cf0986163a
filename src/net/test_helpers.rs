//! Shared test doubles for the transport seam.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::net::api::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{ApiResponse, LoginRequest, PasswordUpdateRequest, StatusPayload, UserPayload};

type Scripted<T> = Mutex<Vec<Result<ApiResponse<T>, ApiError>>>;

/// Scripted `AuthApi`: each endpoint pops queued responses front-first and
/// falls back to a realistic backend default when its script runs dry.
pub struct MockApi {
    me: Scripted<UserPayload>,
    login: Scripted<UserPayload>,
    password: Scripted<StatusPayload>,
    logout: Scripted<StatusPayload>,
    me_calls: Arc<AtomicUsize>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            me: Mutex::new(Vec::new()),
            login: Mutex::new(Vec::new()),
            password: Mutex::new(Vec::new()),
            logout: Mutex::new(Vec::new()),
            me_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Counter handle that survives moving the mock into a `Session`.
    pub fn me_calls_handle(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.me_calls)
    }

    pub fn queue_me(&self, response: Result<ApiResponse<UserPayload>, ApiError>) {
        self.me.lock().unwrap().push(response);
    }

    pub fn queue_login(&self, response: Result<ApiResponse<UserPayload>, ApiError>) {
        self.login.lock().unwrap().push(response);
    }

    pub fn queue_password(&self, response: Result<ApiResponse<StatusPayload>, ApiError>) {
        self.password.lock().unwrap().push(response);
    }

    pub fn queue_logout(&self, response: Result<ApiResponse<StatusPayload>, ApiError>) {
        self.logout.lock().unwrap().push(response);
    }
}

#[async_trait]
impl AuthApi for MockApi {
    async fn me(&self) -> Result<ApiResponse<UserPayload>, ApiError> {
        self.me_calls.fetch_add(1, Ordering::SeqCst);
        pop(&self.me).unwrap_or_else(|| Ok(rejected("invalid session")))
    }

    async fn login(&self, _req: &LoginRequest) -> Result<ApiResponse<UserPayload>, ApiError> {
        pop(&self.login).unwrap_or_else(|| Ok(rejected("invalid credentials")))
    }

    async fn update_password(&self, _req: &PasswordUpdateRequest) -> Result<ApiResponse<StatusPayload>, ApiError> {
        pop(&self.password).unwrap_or_else(|| Ok(rejected("old password incorrect")))
    }

    async fn logout(&self) -> Result<ApiResponse<StatusPayload>, ApiError> {
        pop(&self.logout).unwrap_or_else(|| Ok(accepted(status("logged_out"))))
    }
}

fn pop<T>(script: &Scripted<T>) -> Option<Result<ApiResponse<T>, ApiError>> {
    let mut queued = script.lock().unwrap();
    if queued.is_empty() { None } else { Some(queued.remove(0)) }
}

/// A user identity payload for tests.
pub fn user(id: i64, username: &str, require_reset: bool) -> UserPayload {
    UserPayload { id, username: username.to_owned(), require_reset }
}

/// A status payload for tests.
pub fn status(value: &str) -> StatusPayload {
    StatusPayload { status: value.to_owned() }
}

/// A `success: true` envelope carrying `data`.
pub fn accepted<T>(data: T) -> ApiResponse<T> {
    ApiResponse { success: true, data: Some(data), error: None }
}

/// A `success: false` envelope carrying `message`.
pub fn rejected<T>(message: &str) -> ApiResponse<T> {
    ApiResponse { success: false, data: None, error: Some(message.to_owned()) }
}
