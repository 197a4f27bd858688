//! # Store Messages
//!
//! This module defines the request messages exchanged between a `StoreClient`
//! and its `StoreActor`.

use crate::entity::StoreEntity;
use crate::error::StoreError;
use std::fmt;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// A caller-supplied test over an entity, evaluated inside the actor task.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Operations
/// Each variant maps to one operation of [`EntityStore`](crate::EntityStore):
///
/// - **Create**: assigns the next id and stores the draft.
/// - **Get**: fetches one entity by id.
/// - **List**: snapshot of every entity.
/// - **Replace**: overwrites an existing entity; never inserts.
/// - **Delete**: removes an entity.
/// - **Exists** / **Count**: cheap membership and size checks.
/// - **FindBy**: evaluates a [`Predicate`] against every entity.
///
/// The store has no query language of its own. Query shapes are built by the
/// caller and arrive here as closures.
pub enum StoreRequest<T: StoreEntity> {
    Create {
        draft: T::Draft,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Replace {
        id: T::Id,
        draft: T::Draft,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Exists {
        id: T::Id,
        respond_to: Response<bool>,
    },
    FindBy {
        predicate: Predicate<T>,
        respond_to: Response<Vec<T>>,
    },
    Count {
        respond_to: Response<usize>,
    },
}

impl<T: StoreEntity> StoreRequest<T> {
    /// Short operation name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreRequest::Create { .. } => "Create",
            StoreRequest::Get { .. } => "Get",
            StoreRequest::List { .. } => "List",
            StoreRequest::Replace { .. } => "Replace",
            StoreRequest::Delete { .. } => "Delete",
            StoreRequest::Exists { .. } => "Exists",
            StoreRequest::FindBy { .. } => "FindBy",
            StoreRequest::Count { .. } => "Count",
        }
    }
}

// Closures are not `Debug`, so the derive is out.
impl<T: StoreEntity> fmt::Debug for StoreRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreRequest::Create { draft, .. } => {
                f.debug_struct("Create").field("draft", draft).finish()
            }
            StoreRequest::Get { id, .. } => f.debug_struct("Get").field("id", id).finish(),
            StoreRequest::Replace { id, draft, .. } => f
                .debug_struct("Replace")
                .field("id", id)
                .field("draft", draft)
                .finish(),
            StoreRequest::Delete { id, .. } => f.debug_struct("Delete").field("id", id).finish(),
            StoreRequest::Exists { id, .. } => f.debug_struct("Exists").field("id", id).finish(),
            other => f.write_str(other.kind()),
        }
    }
}
