//! Error types for the Product service.

use super::validation::ValidationError;
use resource_store::StoreError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The draft was rejected before reaching the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested product was not found.
    #[error("Product not found with id: {0}")]
    NotFound(String),

    /// The store could not be reached.
    #[error("Product store error: {0}")]
    Store(String),
}

impl From<StoreError> for ProductError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => ProductError::NotFound(id),
            other => ProductError::Store(other.to_string()),
        }
    }
}
