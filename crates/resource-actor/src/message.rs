//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages exactly one type of resource (the [`ActorEntity`]). Instead of ad-hoc
/// messages, the actor speaks a fixed vocabulary that maps onto the HTTP verbs of a REST
/// resource:
///
/// - **List** (`GET /items`): a snapshot of the whole collection, in insertion order.
/// - **Get** (`GET /items/{id}`): one record, or `NotFound`.
/// - **Create** (`POST /items`): uses [`ActorEntity::Create`] and returns the stored record.
/// - **Replace** (`PUT /items/{id}`): uses [`ActorEntity::Replace`].
/// - **Patch** (`PATCH /items/{id}`): uses [`ActorEntity::Patch`], all-or-nothing.
/// - **Delete** (`DELETE /items/{id}`).
///
/// The payload types come from the entity, so a "Villa Patch" can never reach a
/// different actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Replace {
        id: T::Id,
        params: T::Replace,
        respond_to: Response<T>,
    },
    Patch {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
