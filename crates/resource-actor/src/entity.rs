//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a record type must implement to be managed by
//! the generic [`ResourceActor`](crate::ResourceActor). It names the associated types for ids,
//! payloads, context and errors, and provides the hooks the actor calls around every mutation.
//!
//! # Architecture Note
//! The actor owns the collection and decides *when* things happen (lookup, working copy,
//! commit). The entity decides *what* is allowed: how ids are allocated, what a valid record
//! looks like, and how a replacement or patch reshapes a record.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::validate`]
//! - [`ActorEntity::before_create`]
//! - [`ActorEntity::before_replace`]
//! - [`ActorEntity::on_delete`]
//!
//! The default implementations accept everything (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// The hooks are `#[async_trait]` so they can await other actors if they need to. Every hook
/// receives the `Context` handed to [`ResourceActor::run`](crate::ResourceActor::run), which
/// lets dependencies be bound late (after the actor was built, before its loop starts).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// The candidate submitted to create a new instance.
    type Create: Send + Sync + Debug;

    /// The full replacement submitted for an existing instance.
    type Replace: Send + Sync + Debug;

    /// A partial update (for example an ordered list of patch operations).
    type Patch: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per operation. Clients match on a single type,
    /// at the cost of every operation nominally being able to return every variant.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier of this instance.
    fn id(&self) -> &Self::Id;

    /// Overwrite the identifier. The actor calls this when it allocates an id on create and
    /// when it restores the stored id before committing a replace or patch.
    fn assign_id(&mut self, id: Self::Id);

    /// Derive the id for the next insert from the current collection.
    ///
    /// Called at the moment of insertion, never cached.
    fn next_id(store: &[Self]) -> Result<Self::Id, Self::Error>;

    /// Build the entity from a create payload. Runs after `before_create` succeeded and
    /// before an id is assigned.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    /// Field-level constraints of a single record. Gates every replace and patch commit.
    fn validate(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Lifecycle Hooks (Async) ---

    /// Checks a create payload against the current collection, before any id is allocated.
    async fn before_create(
        _params: &Self::Create,
        _store: &[Self],
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Checks a replace request before the target is looked up.
    async fn before_replace(
        _id: &Self::Id,
        _params: &Self::Replace,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies a full replacement to a working copy of the stored record.
    async fn on_replace(
        &mut self,
        params: Self::Replace,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Applies a partial update to a working copy of the stored record.
    async fn on_patch(&mut self, patch: Self::Patch, _ctx: &Self::Context)
        -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the collection.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
