//! # Villa Actor
//!
//! The Villa resource: one [`ResourceActor<Villa>`] owns the collection and serializes every
//! operation on it.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Villa`]
//! - [`error`] - [`VillaError`], [`ValidationError`] and [`PatchError`]
//! - [`validator`] - field constraints of a single villa
//! - [`allocator`] - `1 + max(id)` id allocation
//! - [`patch`] - patch documents and the patch applier
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use villa_api::logging::TracingSink;
//! use villa_api::model::Villa;
//! use villa_api::villa_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = villa_actor::new(32, Vec::new());
//!
//!     // The Villa hooks report to the sink passed as context
//!     tokio::spawn(actor.run(Arc::new(TracingSink)));
//!
//!     let stored = client.create_villa(Villa::new("Pool View", 4, 750)).await?;
//!     assert_eq!(stored.id.0, 1);
//!     Ok(())
//! }
//! ```

pub mod allocator;
pub mod entity;
pub mod error;
pub mod patch;
pub mod validator;

pub use error::*;
pub use patch::{PatchOp, PatchOperation, VillaField};

use crate::clients::VillaClient;
use crate::model::Villa;
use resource_actor::ResourceActor;

/// Creates a new Villa actor, pre-seeded with `seed`, and its client.
///
/// `seed` is taken as-is; run it through
/// [`VillaConfig::validate`](crate::config::VillaConfig::validate) first.
pub fn new(channel_capacity: usize, seed: Vec<Villa>) -> (ResourceActor<Villa>, VillaClient) {
    let (actor, generic_client) = ResourceActor::with_records(channel_capacity, seed);
    let client = VillaClient::new(generic_client);

    (actor, client)
}
