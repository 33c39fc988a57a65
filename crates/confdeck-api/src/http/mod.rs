//! HTTP surface modules (routers, handlers, problem documents).

/// Configuration catalog handlers.
pub(crate) mod configurations;
/// Shared constants for route prefixes and problem URIs.
pub(crate) mod constants;
/// Problem response helpers and error types.
pub(crate) mod errors;
/// Health endpoint.
pub(crate) mod health;
/// Router construction and server host.
pub mod router;
