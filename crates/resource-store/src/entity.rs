//! # StoreEntity Trait
//!
//! The `StoreEntity` trait is the contract every resource kept in an
//! [`EntityStore`](crate::EntityStore) must satisfy. It names the identifier type
//! and the draft type (the field values a caller supplies before an id exists),
//! and tells the store how to build an entity from a draft and how to overwrite
//! one in place.
//!
//! # Associated Types
//! A `Product` entity takes a `ProductFields` draft, and you can't accidentally
//! hand it a draft meant for another resource. The compiler rules this out.
//!
//! # No Validation Here
//! Implementations must not validate. The store trusts its caller: checking
//! prices, names and the like belongs to the orchestration layer sitting above
//! the store, so `from_draft` and `apply_draft` are infallible.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource must implement to be managed by an `EntityStore`.
pub trait StoreEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from `u64` so the store can assign ids itself.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The field values supplied by a caller, without an id.
    type Draft: Send + Debug;

    /// The id assigned to this entity by the store.
    fn id(&self) -> &Self::Id;

    /// Build the stored entity from its freshly assigned id and the draft.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    /// Overwrite every field except the id with the draft's values.
    fn apply_draft(&mut self, draft: Self::Draft);
}
