//! Client-side mutable state owned for the lifetime of the process.

pub mod session;
