//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the single writer that owns a collection of
//! entities. It implements the "Server" side of the Actor Model: requests are processed
//! sequentially, so every mutation is serialized against every other request without a lock.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and the
/// receiver end of the channel. The store is a `Vec` because the collection is
/// insertion-ordered: `List` returns records in the order they were created, and deleting a
/// record keeps the relative order of the rest.
///
/// **Concurrency Model**:
/// The actor processes one message at a time in its own Tokio task. A request runs to
/// completion (including its hooks) before the next one is read, so readers never observe
/// a half-applied mutation and writers never interleave.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust,ignore
/// let (actor, client) = ResourceActor::<Villa>::new(32);
/// tokio::spawn(actor.run(context));
/// let stored = client.create(candidate).await?;
/// ```
///
/// # Implementation Details
///
/// * **Create**:
///     1. Calls `before_create` with the payload and the current store.
///     2. Builds the entity with `from_create_params`.
///     3. Allocates an id with `next_id` over the current store and assigns it.
///     4. Appends the entity and returns a copy of it.
///
/// * **Replace** / **Patch**:
///     1. (Replace only) calls `before_replace`, before any lookup.
///     2. Looks up the entity; `NotFound` if absent.
///     3. Applies `on_replace` / `on_patch` to a *working copy*.
///     4. Runs `validate` on the working copy.
///     5. Restores the stored id and overwrites the stored entity in place.
///
///   A failure in steps 3-4 drops the working copy, leaving the stored entity untouched.
///
/// * **Delete**: looks up the entity, calls `on_delete`, removes it.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` with an empty collection and its `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_records(buffer_size, Vec::new())
    }

    /// Creates a new `ResourceActor` whose collection starts with `records`.
    ///
    /// The records are taken as-is; callers are responsible for their ids and uniqueness.
    pub fn with_records(buffer_size: usize, records: Vec<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: records,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Villa" instead of "villa_api::model::villa::Villa")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let result = match self.position(&id) {
                        Some(index) => Ok(self.store[index].clone()),
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    debug!(entity_type, %id, found = result.is_ok(), "Get");
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = %item.id(), size = self.store.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Replace {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?params, "Replace");
                    let result = self.replace(&id, params, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Replaced"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Replace failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Patch {
                    id,
                    patch,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?patch, "Patch");
                    let result = self.patch(&id, patch, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Patched"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Patch failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(index) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = self.store[index].on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::entity(e)));
                        continue;
                    }
                    self.store.remove(index);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(&mut self, params: T::Create, context: &T::Context) -> Result<T, FrameworkError> {
        T::before_create(&params, &self.store, context)
            .await
            .map_err(FrameworkError::entity)?;
        let mut item = T::from_create_params(params).map_err(FrameworkError::entity)?;
        let id = T::next_id(&self.store).map_err(FrameworkError::entity)?;
        item.assign_id(id);
        self.store.push(item.clone());
        Ok(item)
    }

    async fn replace(
        &mut self,
        id: &T::Id,
        params: T::Replace,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        T::before_replace(id, &params, context)
            .await
            .map_err(FrameworkError::entity)?;
        let mut working = self.working_copy(id)?;
        working
            .on_replace(params, context)
            .await
            .map_err(FrameworkError::entity)?;
        self.commit(id, working)
    }

    async fn patch(
        &mut self,
        id: &T::Id,
        patch: T::Patch,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let mut working = self.working_copy(id)?;
        working
            .on_patch(patch, context)
            .await
            .map_err(FrameworkError::entity)?;
        self.commit(id, working)
    }

    fn working_copy(&self, id: &T::Id) -> Result<T, FrameworkError> {
        self.position(id)
            .map(|index| self.store[index].clone())
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))
    }

    /// Validates `candidate` and writes it over the entity stored under `id`, keeping the
    /// stored id. Nothing is written when validation fails.
    fn commit(&mut self, id: &T::Id, mut candidate: T) -> Result<T, FrameworkError> {
        candidate.validate().map_err(FrameworkError::entity)?;
        let index = self
            .position(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        candidate.assign_id(id.clone());
        self.store[index] = candidate.clone();
        Ok(candidate)
    }
}
