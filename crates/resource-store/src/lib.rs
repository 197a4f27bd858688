//! # Resource Store
//!
//! This crate provides an in-memory, concurrency-safe store for entities keyed by
//! a store-assigned identifier. It follows the **Actor Model**: one task owns the
//! collection and applies requests sequentially, and any number of cheap client
//! handles talk to it over channels.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`StoreEntity`]) - How a resource is built from a draft and overwritten
//! 2. **Storage Layer** ([`EntityStore`], [`StoreActor`]) - The keyed collection and the task that owns it
//! 3. **Interface Layer** ([`StoreClient`], [`EntityClient`]) - Type-safe async access
//!
//! ## Operations
//!
//! | Operation | Result | Fails with |
//! |-----------|--------|------------|
//! | `create(draft)` | the stored entity, with a fresh id | never |
//! | `get(id)` | a copy of the entity | `NotFound` |
//! | `list()` | snapshot of all entities, unordered | never |
//! | `replace(id, draft)` | the updated copy | `NotFound` (no upsert) |
//! | `delete(id)` | `()` | `NotFound` |
//! | `exists(id)` | `bool` | never |
//! | `find_by(predicate)` | snapshot of the matching entities | never |
//! | `count()` | number of live entities | never |
//!
//! Ids start at 1 and strictly increase for the lifetime of the store; deleted
//! ids are never handed out again.
//!
//! The store never validates. Whatever sits above it is responsible for rejecting
//! bad drafts before they arrive.
//!
//! ## Concurrency Model
//!
//! - Each store runs in its own Tokio task
//! - Requests are processed **sequentially**, which makes the task the single
//!   exclusive lock over the collection and its id counter
//! - Reads hand back clones taken inside the task, so results are point-in-time
//!   snapshots
//!
//! ## Testing
//!
//! The [`mock`] module answers client requests from canned expectations, so the
//! code around a client can be tested without a running store.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::EntityClient;
pub use entity::StoreEntity;
pub use error::StoreError;
pub use message::{Predicate, Response, StoreRequest};
pub use store::EntityStore;
