//! Session state — the record of who is using the application right now.
//!
//! ARCHITECTURE
//! ============
//! One `Session` is constructed at startup with its transport and injected
//! into whatever needs it (the navigation guard, the login view). All
//! mutation goes through `&mut self`, so overlapping operations against one
//! session cannot interleave; the "fetch identity at most once" rule needs no
//! locking beyond ordinary exclusive borrows.
//!
//! TRADE-OFFS
//! ==========
//! A failed identity probe does not clear a previously known user: a
//! transient network error while already signed in should degrade to "keep
//! what we knew", not sign the user out. Signing out is only ever explicit.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, PasswordUpdateRequest, StatusPayload, UserPayload};

/// Fallback message when a login failure envelope carries no message.
pub(crate) const LOGIN_FAILED: &str = "login failed";
/// Fallback message when a password-update failure envelope carries no message.
pub(crate) const PASSWORD_UPDATE_FAILED: &str = "password update failed";

/// Initialization lifecycle of the session.
///
/// Monotonic in practice: no public operation moves a session out of
/// `Initialized`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InitPhase {
    /// No attempt to resolve the current user has started yet.
    #[default]
    Uninitialized,
    /// The first identity probe is in flight.
    Initializing,
    /// The first resolution attempt has settled, successfully or not.
    Initialized,
}

/// Error surfaced by `login` and `update_password`, carrying the message the
/// view layer shows the user.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        Self { message: err.to_string() }
    }
}

/// Per-process authentication state plus the operations that mutate it.
#[derive(Debug)]
pub struct Session<A> {
    api: A,
    user: Option<UserPayload>,
    phase: InitPhase,
}

impl<A: AuthApi> Session<A> {
    /// Create an empty session over the given transport.
    pub fn new(api: A) -> Self {
        Self { api, user: None, phase: InitPhase::Uninitialized }
    }

    /// The currently known user, if any.
    pub fn user(&self) -> Option<&UserPayload> {
        self.user.as_ref()
    }

    /// Whether the first identity resolution attempt has settled.
    pub fn initialized(&self) -> bool {
        self.phase == InitPhase::Initialized
    }

    /// User is known AND does not owe a password reset.
    ///
    /// A user flagged for reset is *identified* but not *authorized*; access
    /// checks treat them exactly like an anonymous visitor.
    pub fn is_authenticated(&self) -> bool {
        self.user.as_ref().is_some_and(|u| !u.require_reset)
    }

    /// User is known but must change their password before using the app.
    pub fn needs_reset(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.require_reset)
    }

    /// Resolve the current user from the backend.
    ///
    /// Never fails: any failure collapses to "identity unknown" and leaves
    /// `user` untouched. The session is marked initialized on every exit
    /// path, which is what stops the guard from probing again.
    pub async fn fetch_me(&mut self) {
        if self.phase == InitPhase::Uninitialized {
            self.phase = InitPhase::Initializing;
        }
        match self.api.me().await {
            Ok(env) if env.success => {
                if let Some(user) = env.data {
                    self.user = Some(user);
                }
            }
            Ok(env) => {
                tracing::debug!(error = env.error.as_deref().unwrap_or(""), "identity probe rejected");
            }
            Err(err) => {
                tracing::debug!(error = %err, "identity probe failed");
            }
        }
        self.phase = InitPhase::Initialized;
    }

    /// Run `fetch_me` once if no resolution attempt has settled yet.
    pub async fn ensure_initialized(&mut self) {
        if self.phase == InitPhase::Initialized {
            return;
        }
        self.fetch_me().await;
    }

    /// Establish a session from credentials.
    ///
    /// # Errors
    ///
    /// `AuthError` with the backend's message (or a generic fallback) on a
    /// rejected login or transport failure; `user` is left unchanged.
    pub async fn login(&mut self, req: &LoginRequest) -> Result<UserPayload, AuthError> {
        let env = self.api.login(req).await?;
        if env.success {
            // A success envelope without a payload is a malformed response.
            let user = env.data.ok_or_else(|| AuthError::new(LOGIN_FAILED))?;
            self.user = Some(user.clone());
            // Login affirmatively resolves identity, so the lazy probe is moot.
            self.phase = InitPhase::Initialized;
            return Ok(user);
        }
        Err(AuthError::new(env.error.unwrap_or_else(|| LOGIN_FAILED.to_owned())))
    }

    /// Change the current user's password.
    ///
    /// On success the `require_reset` flag on the known user is cleared in
    /// place, promoting a reset-required session to an authenticated one.
    ///
    /// # Errors
    ///
    /// `AuthError` with the backend's message (or a generic fallback); state
    /// is left unchanged.
    pub async fn update_password(&mut self, old_password: &str, new_password: &str) -> Result<StatusPayload, AuthError> {
        let req = PasswordUpdateRequest {
            old_password: old_password.to_owned(),
            new_password: new_password.to_owned(),
        };
        let env = self.api.update_password(&req).await?;
        if env.success {
            let payload = env.data.ok_or_else(|| AuthError::new(PASSWORD_UPDATE_FAILED))?;
            if let Some(user) = &mut self.user {
                user.require_reset = false;
            }
            return Ok(payload);
        }
        Err(AuthError::new(env.error.unwrap_or_else(|| PASSWORD_UPDATE_FAILED.to_owned())))
    }

    /// End the session.
    ///
    /// The backend call is best-effort: whatever it returns, the local user
    /// is cleared and the session stays initialized.
    pub async fn logout(&mut self) {
        match self.api.logout().await {
            Ok(env) if env.success => {}
            Ok(env) => {
                tracing::debug!(error = env.error.as_deref().unwrap_or(""), "logout rejected; clearing locally");
            }
            Err(err) => {
                tracing::debug!(error = %err, "logout request failed; clearing locally");
            }
        }
        self.user = None;
        self.phase = InitPhase::Initialized;
    }
}
