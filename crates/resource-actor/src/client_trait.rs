//! # ActorClient Trait
//!
//! Provides a common interface for resource-specific clients, adding default `list`, `get`
//! and `delete` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read and delete operations.
///
/// A wrapper only has to expose its inner [`ResourceClient`] and say how a
/// [`FrameworkError`] becomes its own error type; the payload-carrying operations
/// (create, replace, patch) stay on the wrapper where they can convert domain inputs.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<Villa> for VillaClient {
///     type Error = VillaError;
///
///     fn inner(&self) -> &ResourceClient<Villa> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         VillaError::from_framework(e)
///     }
/// }
///
/// // list(), get() and delete() are provided automatically
/// let villas = client.list().await?;
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// Error type the wrapper exposes.
    type Error: Send + Sync;

    /// The generic client being wrapped.
    fn inner(&self) -> &ResourceClient<T>;

    /// Converts an engine error into the wrapper's error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a snapshot of the whole collection, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Fetch one entity; `NotFound` is mapped through `map_error`.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Remove one entity, keeping the order of the rest.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
