#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(
    unused,
    unreachable_pub,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
//! Telemetry primitives shared across the Confdeck workspace.
//!
//! Centralises logging setup and request-id plumbing so the REST service and
//! the application binary log the same way.

pub mod context;
pub mod error;
pub mod init;
pub mod layers;

pub use context::GlobalContextGuard;
pub use error::{Result, TelemetryError};
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha, init_logging};
pub use layers::{HEADER_REQUEST_ID, propagate_request_id_layer, set_request_id_layer};
