//! Transport error taxonomy.
//!
//! DESIGN
//! ======
//! `Status` carries a message already extracted from the response body, and
//! its `Display` is that message alone — upper layers surface transport
//! failures to users verbatim, so the formatting decision lives here, once.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by `AuthApi` implementations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (connect, timeout, DNS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success HTTP status; `message` is
    /// extracted from the body's `error` field, then `message`, then a
    /// generic fallback.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A 2xx response body that could not be deserialized as an envelope.
    #[error("response parse failed: {0}")]
    Parse(String),
}
