use crate::product_actor;
use crate::service::ProductService;
use tokio::task::JoinHandle;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    #[error("Product store task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Owns the running product store.
///
/// # Example
///
/// ```ignore
/// let system = ProductSystem::new(32);
/// let product = system.service.create_product(draft).await?;
/// system.shutdown().await?;
/// ```
pub struct ProductSystem {
    /// Handle for talking to the store. Clone it freely.
    pub service: ProductService,

    handle: JoinHandle<()>,
}

impl ProductSystem {
    /// Spawns the store actor with a request queue of `buffer_size` and returns
    /// the running system. Must be called inside a Tokio runtime.
    pub fn new(buffer_size: usize) -> Self {
        let (actor, client) = product_actor::new(buffer_size);
        let handle = tokio::spawn(actor.run());
        info!(buffer_size, "Product system started");

        Self {
            service: ProductService::new(client),
            handle,
        }
    }

    /// Drops this system's service handle and waits for the store to stop.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down product system");
        drop(self.service);
        self.handle.await?;
        info!("Product system stopped");
        Ok(())
    }
}
