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
//! REST service exposing the Confdeck configuration catalog.
//!
//! Routes live under `/rest`, errors are RFC9457 problem documents, and an
//! optional UI bundle is served for every other path.

pub mod error;
pub mod http;
pub(crate) mod state;

pub use error::{ApiServerError, ApiServerResult};
pub use http::router::{ApiServer, ServerOptions};
