//! Orchestration in front of the product store: validation, not-found mapping,
//! and derived queries.

pub mod product_service;

pub use product_service::*;
