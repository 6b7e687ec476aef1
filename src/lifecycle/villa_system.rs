use crate::api::Dispatcher;
use crate::clients::VillaClient;
use crate::config::{ConfigError, VillaConfig};
use crate::logging::{SharedSink, TracingSink};
use crate::model::Villa;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator of the Villa API.
///
/// `VillaSystem` is responsible for:
/// - **Lifecycle Management**: starting the Villa actor and stopping it again
/// - **Dependency Wiring**: handing the log sink to the actor and the dispatcher
///
/// # Example
///
/// ```ignore
/// let system = VillaSystem::start(VillaConfig::from_env()?, Arc::new(TracingSink))?;
///
/// let stored = system.villa_client.create_villa(candidate).await?;
/// let response = system.dispatcher().dispatch(VillaRequest::List).await;
///
/// system.shutdown().await?;
/// ```
pub struct VillaSystem {
    /// Client for interacting with the Villa actor
    pub villa_client: VillaClient,

    sink: SharedSink,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: JoinHandle<()>,
}

impl VillaSystem {
    /// Starts an empty system with default settings, logging through `tracing`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let config = VillaConfig::default();
        Self::spawn(config.channel_capacity, Vec::new(), Arc::new(TracingSink))
    }

    /// Validates `config` and starts the Villa actor pre-seeded with `config.seed`.
    ///
    /// `sink` receives the `(message, severity)` pairs of the Villa hooks and of every
    /// dispatcher handed out by [`VillaSystem::dispatcher`].
    pub fn start(config: VillaConfig, sink: SharedSink) -> Result<Self, SystemError> {
        config.validate()?;
        info!(
            channel_capacity = config.channel_capacity,
            seeded = config.seed.len(),
            "Starting villa system"
        );
        Ok(Self::spawn(config.channel_capacity, config.seed, sink))
    }

    fn spawn(channel_capacity: usize, seed: Vec<Villa>, sink: SharedSink) -> Self {
        let (villa_actor, villa_client) = crate::villa_actor::new(channel_capacity, seed);
        let handle = tokio::spawn(villa_actor.run(sink.clone()));

        Self {
            villa_client,
            sink,
            handle,
        }
    }

    /// A dispatcher bound to this system's client and sink.
    ///
    /// Each dispatcher holds a client handle; drop them all before
    /// [`shutdown`](Self::shutdown) or the actor keeps running.
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(self.villa_client.clone(), self.sink.clone())
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the request channel; the actor drains what is queued,
    /// logs its final size and exits. Returns an error if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.villa_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Actor task failed");
            return Err(e.into());
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for VillaSystem {
    fn default() -> Self {
        Self::new()
    }
}
