//! # Store Client
//!
//! This module defines the async handle used to talk to a `StoreActor`.

use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::{Predicate, StoreRequest};
use tokio::sync::{mpsc, oneshot};

/// ## StoreClient
///
/// The `StoreClient<T>` forwards store operations over a Tokio mpsc channel and
/// waits for the reply on a oneshot channel. It holds only a sender, so cloning is
/// cheap and every request-handling task can own its copy.
///
/// Results are clones of the stored entities; mutating them has no effect on the
/// store.
pub struct StoreClient<T: StoreEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

// Manual impl: deriving would demand `T: Clone` on the sender's behalf only.
impl<T: StoreEntity> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn create(&self, draft: T::Draft) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Create { draft, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::List { respond_to })
            .await
    }

    pub async fn replace(&self, id: T::Id, draft: T::Draft) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Replace {
            id,
            draft,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        self.request(|respond_to| StoreRequest::Delete { id, respond_to })
            .await
    }

    pub async fn exists(&self, id: T::Id) -> Result<bool, StoreError> {
        self.request(|respond_to| StoreRequest::Exists { id, respond_to })
            .await
    }

    /// Returns every entity matching `predicate`.
    ///
    /// The predicate runs inside the actor task against a consistent view of the
    /// store, so it must be `Send + 'static`.
    pub async fn find_by<P>(&self, predicate: P) -> Result<Vec<T>, StoreError>
    where
        P: Fn(&T) -> bool + Send + 'static,
    {
        let predicate: Predicate<T> = Box::new(predicate);
        self.request(|respond_to| StoreRequest::FindBy {
            predicate,
            respond_to,
        })
        .await
    }

    pub async fn count(&self) -> Result<usize, StoreError> {
        self.request(|respond_to| StoreRequest::Count { respond_to })
            .await
    }
}
