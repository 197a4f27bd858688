//! StoreEntity trait implementation for the Product domain type.
//!
//! This module contains the [`StoreEntity`] implementation that lets
//! [`Product`] live in a generic [`resource_store::EntityStore`].

use crate::model::{Product, ProductFields, ProductId};
use resource_store::StoreEntity;

impl StoreEntity for Product {
    type Id = ProductId;
    type Draft = ProductFields;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn from_draft(id: ProductId, fields: ProductFields) -> Self {
        Self::new(id, fields)
    }

    /// Overwrites name, price, description and quantity. The id never changes.
    fn apply_draft(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.price = fields.price;
        self.description = fields.description;
        self.quantity = fields.quantity;
    }
}
