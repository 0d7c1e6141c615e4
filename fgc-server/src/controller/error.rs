//! Controller error type.

use crate::domain::{DomainError, InvalidStation};
use crate::store::StoreError;
use crate::validation::ValidationError;

/// Everything a controller operation can fail with.
///
/// Messages are passed through unchanged from the wrapped error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    /// The input had the wrong shape
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request broke a business rule
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A station could not be built from the request
    #[error(transparent)]
    Station(#[from] InvalidStation),

    /// The storage backend failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ControllerError {
    /// The business-rule error, if this is one.
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            ControllerError::Domain(e) => Some(e),
            _ => None,
        }
    }
}
