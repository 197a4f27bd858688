//! # Store Actor
//!
//! This module defines the `StoreActor`, the task that owns an [`EntityStore`] and
//! applies every request to it, one at a time. It is the "Server" side of the
//! store: clients never touch the collection directly.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::message::StoreRequest;
use crate::store::EntityStore;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that serializes access to one entity store.
///
/// # Concurrency Model
/// Any number of cloned [`StoreClient`]s may send requests at the same time.
/// The actor drains its channel sequentially, so each request runs to completion
/// before the next one starts. That single owner is the exclusive lock over the
/// collection and its id counter:
///
/// * no request observes a half-applied write,
/// * `List` and `FindBy` clone their results before replying, so the caller
///   holds a snapshot that later mutations cannot reach,
/// * requests are applied in the order the channel delivers them.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StoreActor::new()` to get the `actor` and its `client`.
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Clone the client freely. Dropping every client stops the actor.
///
/// ```rust
/// use resource_store::{StoreActor, StoreEntity};
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u64, text: String }
///
/// impl StoreEntity for Note {
///     type Id = u64;
///     type Draft = String;
///     fn id(&self) -> &u64 { &self.id }
///     fn from_draft(id: u64, text: String) -> Self { Self { id, text } }
///     fn apply_draft(&mut self, text: String) { self.text = text; }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///
///     let note = client.create("hello".to_string()).await.unwrap();
///     assert_eq!(note.id, 1);
/// }
/// ```
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: EntityStore<T>,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: EntityStore::new(),
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Just the type name ("Product" rather than "product_service::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(entity_type, msg);
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn handle(&mut self, entity_type: &str, msg: StoreRequest<T>) {
        match msg {
            StoreRequest::Create { draft, respond_to } => {
                debug!(entity_type, ?draft, "Create");
                let entity = self.store.create(draft);
                info!(entity_type, id = %entity.id(), size = self.store.len(), "Created");
                let _ = respond_to.send(Ok(entity));
            }
            StoreRequest::Get { id, respond_to } => {
                let result = self.store.get(&id);
                debug!(entity_type, %id, found = result.is_ok(), "Get");
                let _ = respond_to.send(result);
            }
            StoreRequest::List { respond_to } => {
                let entities = self.store.list();
                debug!(entity_type, count = entities.len(), "List");
                let _ = respond_to.send(Ok(entities));
            }
            StoreRequest::Replace {
                id,
                draft,
                respond_to,
            } => {
                debug!(entity_type, %id, ?draft, "Replace");
                let result = self.store.replace(&id, draft);
                match &result {
                    Ok(_) => info!(entity_type, %id, "Replaced"),
                    Err(_) => warn!(entity_type, %id, "Not found"),
                }
                let _ = respond_to.send(result);
            }
            StoreRequest::Delete { id, respond_to } => {
                debug!(entity_type, %id, "Delete");
                let result = self.store.delete(&id);
                match &result {
                    Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                    Err(_) => warn!(entity_type, %id, "Not found"),
                }
                let _ = respond_to.send(result);
            }
            StoreRequest::Exists { id, respond_to } => {
                let exists = self.store.exists(&id);
                debug!(entity_type, %id, exists, "Exists");
                let _ = respond_to.send(Ok(exists));
            }
            StoreRequest::FindBy {
                predicate,
                respond_to,
            } => {
                let matches = self.store.find_by(predicate);
                debug!(entity_type, count = matches.len(), "FindBy");
                let _ = respond_to.send(Ok(matches));
            }
            StoreRequest::Count { respond_to } => {
                let count = self.store.len();
                debug!(entity_type, count, "Count");
                let _ = respond_to.send(Ok(count));
            }
        }
    }
}
