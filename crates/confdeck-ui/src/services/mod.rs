//! Browser-only service implementations.

pub mod api;
