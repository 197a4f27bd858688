//! # Product Service
//!
//! Provides a high-level API for the product catalogue.
//! It wraps a `StoreClient<Product>`, validates drafts before they reach the
//! store, and turns store signals into [`ProductError`]s.
use crate::model::{Product, ProductDraft, ProductId};
use crate::product_actor::{ProductError, ProductQuery};
use resource_store::{EntityClient, StoreClient, StoreError};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Service for interacting with the Product store.
///
/// Built from an explicit [`StoreClient`]; cloning shares the same store.
#[derive(Clone)]
pub struct ProductService {
    inner: StoreClient<Product>,
}

#[async_trait]
impl EntityClient<Product> for ProductService {
    type Error = ProductError;

    fn inner(&self) -> &StoreClient<Product> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductService {
    pub fn new(inner: StoreClient<Product>) -> Self {
        Self { inner }
    }

    /// Every product, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        let mut products = self.fetch_all().await?;
        products.sort_by_key(|product| product.id);
        Ok(products)
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.fetch(id).await
    }

    /// Validates the draft, then stores it under a fresh id.
    #[instrument(skip(self))]
    pub async fn create_product(&self, draft: ProductDraft) -> Result<Product, ProductError> {
        let fields = draft.validate().inspect_err(|e| {
            warn!(error = %e, "Rejected product draft");
        })?;
        debug!("Sending request");
        Ok(self.inner.create(fields).await?)
    }

    /// Validates the draft, then overwrites the product with that id.
    ///
    /// A rejected draft leaves the store untouched; a missing id is `NotFound`.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, ProductError> {
        let fields = draft.validate().inspect_err(|e| {
            warn!(%id, error = %e, "Rejected product draft");
        })?;
        debug!("Sending request");
        Ok(self.inner.replace(id, fields).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ProductError> {
        debug!("Sending request");
        Ok(self.inner.delete(id).await?)
    }

    #[instrument(skip(self))]
    pub async fn product_exists(&self, id: ProductId) -> Result<bool, ProductError> {
        self.contains(id).await
    }

    /// Products matching `query`, ordered by id.
    #[instrument(skip(self))]
    pub async fn search(&self, query: ProductQuery) -> Result<Vec<Product>, ProductError> {
        let mut products = self.inner.find_by(query.into_predicate()).await?;
        products.sort_by_key(|product| product.id);
        debug!(count = products.len(), "Search complete");
        Ok(products)
    }

    /// Case-insensitive name search.
    #[instrument(skip(self))]
    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<Product>, ProductError> {
        self.search(ProductQuery::NameContains(fragment.to_string()))
            .await
    }

    #[instrument(skip(self))]
    pub async fn count_products(&self) -> Result<usize, ProductError> {
        Ok(self.inner.count().await?)
    }
}
