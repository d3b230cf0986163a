//! Session and navigation-guard core for the ops dashboard web client.
//!
//! ARCHITECTURE
//! ============
//! Three layers, leaves first: `net` owns the transport seam to the backend
//! (the `AuthApi` trait plus a reqwest implementation of it), `state` owns the
//! per-process session container built on that seam, and `router` owns the
//! static route table and the pre-navigation guard that consults the session.
//!
//! The session is constructed explicitly and injected wherever it is needed;
//! nothing in this crate reaches for ambient global state. View rendering and
//! the domain data shapes behind the dashboard (accounts, tasks, articles)
//! live elsewhere — this crate only decides who may navigate where.

pub mod net;
pub mod router;
pub mod state;

pub use net::api::AuthApi;
pub use net::error::ApiError;
pub use net::http::{HttpApi, HttpConfig};
pub use net::types::{ApiResponse, LoginRequest, PasswordUpdateRequest, StatusPayload, UserPayload};
pub use router::guard::{GuardDecision, before_navigation};
pub use router::{ResolvedRoute, Route, RouteTable, route_table};
pub use state::session::{AuthError, InitPhase, Session};
