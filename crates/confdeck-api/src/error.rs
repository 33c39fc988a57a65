//! # Design
//!
//! - Provide a single crate-level error type for API server bootstrap/serve failures.
//! - Keep error messages constant; capture operational context in structured fields.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Result alias for API server operations.
pub type ApiServerResult<T> = std::result::Result<T, ApiServerError>;

/// Errors raised while bootstrapping or serving the API.
#[derive(Debug)]
pub enum ApiServerError {
    /// The configured UI bundle directory has no `index.html`.
    UiBundleMissing {
        /// Expected entry point path.
        path: PathBuf,
    },
    /// Binding the API listener failed.
    Bind {
        /// Address attempted.
        addr: SocketAddr,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Serving the API failed.
    Serve {
        /// Underlying IO error.
        source: std::io::Error,
    },
}

impl Display for ApiServerError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UiBundleMissing { .. } => formatter.write_str("ui bundle entry point is missing"),
            Self::Bind { .. } => formatter.write_str("failed to bind api listener"),
            Self::Serve { .. } => formatter.write_str("api server terminated unexpectedly"),
        }
    }
}

impl Error for ApiServerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Bind { source, .. } | Self::Serve { source } => Some(source),
            Self::UiBundleMissing { .. } => None,
        }
    }
}
