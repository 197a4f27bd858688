//! # System Lifecycle
//!
//! Starting and stopping the product store.
//!
//! Individual pieces are simple; the lifecycle module is where they get wired
//! together. [`ProductSystem`] creates the store actor, spawns it on the Tokio
//! runtime and hands out the [`ProductService`](crate::service::ProductService)
//! that talks to it.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop every service handle** - closes the sender side of the channel
//! 2. **The actor detects closure** - `receiver.recv()` returns `None` once queued
//!    requests are drained
//! 3. **Await completion** - [`ProductSystem::shutdown`] joins the actor task
//!
//! Clones of the service held elsewhere (for example by a router that is still
//! serving) keep the store alive until they are dropped too.

pub mod product_system;

pub use product_system::*;
