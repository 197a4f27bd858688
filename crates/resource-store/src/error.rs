//! # Store Errors
//!
//! Errors surfaced by the resource store and its client. The store itself only
//! ever signals `NotFound`; the other variants describe a broken channel between
//! a [`StoreClient`](crate::StoreClient) and its [`StoreActor`](crate::StoreActor).

/// Errors that can occur within the resource store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
}

impl StoreError {
    /// Returns `true` for the not-found signal.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
