//! # EntityClient Trait
//!
//! Provides a common interface for resource-specific wrappers, adding default
//! read operations built on top of a generic `StoreClient`.
use crate::{StoreClient, StoreEntity, StoreError};
use async_trait::async_trait;

/// Trait for resource-specific wrappers to inherit the standard read operations.
///
/// Implementors provide the inner client and a mapping from [`StoreError`] to
/// their own error type; `fetch`, `fetch_all` and `contains` come for free.
///
/// # Example
///
/// ```rust
/// use resource_store::{EntityClient, StoreClient, StoreEntity, StoreError};
///
/// #[derive(Clone, Debug)]
/// struct Tag { id: u64, label: String }
///
/// impl StoreEntity for Tag {
///     type Id = u64;
///     type Draft = String;
///     fn id(&self) -> &u64 { &self.id }
///     fn from_draft(id: u64, label: String) -> Self { Self { id, label } }
///     fn apply_draft(&mut self, label: String) { self.label = label; }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("tag error: {0}")]
/// struct TagError(String);
///
/// struct TagClient { inner: StoreClient<Tag> }
///
/// impl EntityClient<Tag> for TagClient {
///     type Error = TagError;
///     fn inner(&self) -> &StoreClient<Tag> { &self.inner }
///     fn map_error(e: StoreError) -> TagError { TagError(e.to_string()) }
/// }
///
/// async fn usage(client: TagClient) {
///     // fetch() and contains() are provided automatically
///     let _ = client.fetch(1).await;
///     let _ = client.contains(1).await;
/// }
/// ```
#[async_trait]
pub trait EntityClient<T: StoreEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map store errors to the resource error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, in no particular order.
    #[tracing::instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Whether an entity with this ID is currently stored.
    #[tracing::instrument(skip(self))]
    async fn contains(&self, id: T::Id) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().exists(id).await.map_err(Self::map_error)
    }
}
