//! # Product Service
//!
//! An in-memory product catalogue built on [`resource_store`].
//!
//! - **[model]**: [`Product`](model::Product) and the drafts that create or replace it
//! - **[product_actor]**: the store wiring plus validation and derived queries
//! - **[service]**: [`ProductService`](service::ProductService), the orchestration layer
//!   that validates before anything reaches the store
//! - **[lifecycle]**: starting and stopping the store task
//! - **[http]**: the axum router exposing `/api/products`
//! - **[config]**: command line and environment settings
//!
//! The binary in `main.rs` ties these together.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod service;
