//! Transport layer — wire shapes, error taxonomy, and the `AuthApi` seam.

pub mod api;
pub mod error;
pub mod http;
pub mod types;

#[cfg(test)]
pub mod test_helpers;
