//! # Product Actor
//!
//! This module wires [`Product`] into the generic resource store and holds the
//! product-specific rules that sit in front of it.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](resource_store::StoreEntity) implementation for [`Product`]
//! - [`validation`] - [`ValidationError`] and [`ProductDraft::validate`](crate::model::ProductDraft::validate)
//! - [`query`] - [`ProductQuery`], the derived "find by" conditions
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use product_service::product_actor;
//! use product_service::service::ProductService;
//! use product_service::model::ProductDraft;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create actor and client
//!     let (actor, client) = product_actor::new(32);
//!     let service = ProductService::new(client);
//!
//!     // Start the actor
//!     tokio::spawn(actor.run());
//!
//!     // Create a product
//!     let product = service
//!         .create_product(ProductDraft::new("Widget", 29.99).with_quantity(100))
//!         .await?;
//!     assert_eq!(product.id.0, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod query;
pub mod validation;

pub use error::*;
pub use query::*;
pub use validation::*;

use crate::model::Product;
use resource_store::{StoreActor, StoreClient};

/// Creates a new Product store actor and its client.
pub fn new(buffer_size: usize) -> (StoreActor<Product>, StoreClient<Product>) {
    StoreActor::new(buffer_size)
}
