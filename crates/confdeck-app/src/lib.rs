#![forbid(unsafe_code)]
#![deny(unused_must_use, rustdoc::broken_intra_doc_links, rustdoc::bare_urls)]
#![warn(
    unused,
    unreachable_pub,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]

//! Confdeck application bootstrap wiring.
//!
//! Layout: `config.rs` (environment settings), `bootstrap.rs` (catalog loading and server launch).

/// Application bootstrap.
pub mod bootstrap;
/// Environment-driven settings.
pub mod config;
/// Application error types.
pub mod error;

pub use bootstrap::run_app;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
