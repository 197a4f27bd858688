use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
///
/// Serialized as a bare integer, so `{"id": 1, ...}` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a product in the catalogue.
///
/// # Resource Store
/// This struct implements the [`StoreEntity`](resource_store::StoreEntity) trait,
/// allowing it to be managed by a [`StoreActor`](resource_store::StoreActor).
///
/// See [`impl StoreEntity for Product`](#impl-StoreEntity-for-Product) for details on:
/// - The wire draft ([`ProductDraft`](crate::model::ProductDraft))
/// - The validated draft handed to the store ([`ProductFields`](crate::model::ProductFields))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub quantity: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (assigned by the store)
    /// * `fields` - Already validated field values
    pub fn new(id: ProductId, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            price: fields.price,
            description: fields.description,
            quantity: fields.quantity,
        }
    }
}

/// Product fields as a caller sends them, before validation.
///
/// Any `id` in the incoming JSON is ignored; ids only come from the store.
/// `quantity` is signed so a negative value reaches validation instead of
/// failing to decode, and defaults to 0 when absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductDraft {
    #[serde(default)]
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            description: None,
            quantity: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }
}

/// Validated product fields, the store's draft type.
///
/// Only [`ProductDraft::validate`](crate::product_actor::validation) produces
/// these outside of tests.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub quantity: u32,
}
