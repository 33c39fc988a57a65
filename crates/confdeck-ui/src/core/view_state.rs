//! Per-view load state.

use crate::core::service::{ServiceError, ServiceResult};

/// What a view currently knows about the data it displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Request in flight.
    Loading,
    /// Data available.
    Ready(T),
    /// The named configuration does not exist.
    NotFound(String),
    /// Any other failure, rendered as a message.
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> LoadState<T> {
    /// Map a service result onto view state.
    #[must_use]
    pub fn from_result(result: ServiceResult<T>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(ServiceError::NotFound { name }) => Self::NotFound(name),
            Err(ServiceError::Network { message }) => Self::Failed(message),
            Err(err @ ServiceError::Validation { .. }) => Self::Failed(err.describe()),
        }
    }

    /// Whether a request is still in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded data, if any.
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}
