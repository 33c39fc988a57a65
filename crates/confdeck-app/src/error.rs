//! # Design
//!
//! - Centralize application-level errors for bootstrap.
//! - Keep error messages constant while carrying context fields for debugging.
//! - Preserve source errors without re-logging at call sites.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration values were invalid.
    #[error("invalid configuration")]
    InvalidConfig {
        /// Environment variable that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
        /// Optional value associated with the failure.
        value: Option<String>,
    },
    /// API server operations failed.
    #[error("api server operation failed")]
    ApiServer {
        /// Operation identifier.
        operation: &'static str,
        /// Source API server error.
        source: confdeck_api::ApiServerError,
    },
    /// Telemetry operations failed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        source: confdeck_telemetry::TelemetryError,
    },
    /// Reading the seed file failed.
    #[error("failed to read seed file")]
    SeedIo {
        /// Seed file path.
        path: PathBuf,
        /// Source IO error.
        source: io::Error,
    },
    /// The seed file did not describe a valid catalog.
    #[error("seed file is not a valid catalog")]
    Seed {
        /// Seed file path.
        path: PathBuf,
        /// Source catalog error.
        source: confdeck_model::CatalogError,
    },
}

impl AppError {
    pub(crate) const fn api_server(
        operation: &'static str,
        source: confdeck_api::ApiServerError,
    ) -> Self {
        Self::ApiServer { operation, source }
    }

    pub(crate) const fn telemetry(
        operation: &'static str,
        source: confdeck_telemetry::TelemetryError,
    ) -> Self {
        Self::Telemetry { operation, source }
    }
}
