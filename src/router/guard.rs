//! Pre-navigation guard — the authorization decision for every transition.
//!
//! SYSTEM CONTEXT
//! ==============
//! Registered once against the application router and consulted before every
//! transition commits. The guard is the only caller of the session's lazy
//! initialization, so the first navigation of a process pays one identity
//! probe and every later one reuses the settled answer.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::api::AuthApi;
use crate::router::{LOGIN_ROUTE, RouteTable};
use crate::state::session::Session;

/// Outcome of a guard run for one requested transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Commit the navigation unmodified.
    Proceed,
    /// Abort and go to the login view; `redirect` is the originally requested
    /// full path so login can return the user afterward.
    RedirectToLogin { redirect: String },
    /// Abort and go to the default authenticated destination.
    RedirectToOverview,
}

/// Decide whether the transition to `to` may commit.
///
/// `to` is the requested full path (query string included — it is preserved
/// in the login redirect parameter). `from` is the currently active path,
/// observed for tracing only.
///
/// A user who owes a password reset fails `is_authenticated` and is turned
/// away from protected routes exactly like an anonymous visitor; telling the
/// two apart is the login view's job, not the guard's.
pub async fn before_navigation<A: AuthApi>(
    session: &mut Session<A>,
    routes: &RouteTable,
    to: &str,
    from: &str,
) -> GuardDecision {
    session.ensure_initialized().await;

    let target = routes.resolve(to);
    let requires_auth = target.is_some_and(|t| t.requires_auth);

    if requires_auth && !session.is_authenticated() {
        tracing::debug!(to, from, "unauthenticated; redirecting to login");
        return GuardDecision::RedirectToLogin { redirect: to.to_owned() };
    }

    if target.and_then(|t| t.name) == Some(LOGIN_ROUTE) && session.is_authenticated() {
        tracing::debug!(to, from, "already authenticated; redirecting to overview");
        return GuardDecision::RedirectToOverview;
    }

    GuardDecision::Proceed
}
