//! Pure data structures implementing the [`ActorEntity`](resource_actor::ActorEntity) trait.

pub mod villa;

pub use villa::*;
