//! Error types for catalog operations.

use thiserror::Error;

/// Primary error type for catalog lookups and mutations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No configuration is registered under the requested name.
    #[error("configuration not found")]
    NotFound {
        /// Requested configuration name.
        name: String,
    },
    /// The configuration exists but does not declare the requested property.
    #[error("property not found")]
    PropertyNotFound {
        /// Configuration name.
        name: String,
        /// Normalised property key.
        property: String,
    },
    /// An update payload or seed entry failed validation.
    #[error("invalid configuration field")]
    InvalidField {
        /// JSON pointer style field path.
        field: String,
        /// Machine-readable reason for the failure.
        reason: &'static str,
        /// Offending value when available.
        value: Option<String>,
    },
    /// Two configurations share the same name.
    #[error("duplicate configuration name")]
    DuplicateName {
        /// Name declared more than once.
        name: String,
    },
    /// The target configuration is flagged as not updateable.
    #[error("configuration is read-only")]
    ReadOnly {
        /// Configuration name.
        name: String,
    },
    /// A configuration document could not be decoded.
    #[error("failed to decode configuration document")]
    Decode {
        /// Source serde error.
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub(crate) fn invalid(field: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason,
            value: None,
        }
    }
}

/// Convenience alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;
