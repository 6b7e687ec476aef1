//! # Resource Actor
//!
//! This crate provides the building blocks for serving a REST-style resource from an
//! in-memory collection owned by a single actor. It implements a **Resource-Oriented
//! Architecture (ROA)** on top of the **Actor Model**: every resource type gets one actor
//! that owns its collection, and every HTTP verb becomes one message to that actor.
//!
//! ## Why ROA + Actor Model?
//!
//! ### Resource-Oriented Architecture (ROA)
//!
//! - A fixed vocabulary per resource: List, Get, Create, Replace, Patch, Delete
//! - Server-assigned identifiers
//! - Clean, uniform API surface across all resource types
//!
//! ### Actor Model
//!
//! - The collection is owned by exactly one task (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each actor eliminates race conditions
//!
//! Request handlers never touch the collection. They hold a cloneable
//! [`ResourceClient`] and await answers; the actor applies one request at a time, so a
//! mutation is never observed half-done and two mutations never interleave.
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Id allocation, validation and update rules of a record type
//! 2. **Runtime Layer** ([`ResourceActor`]) - Collection ownership, ordering and commit discipline
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Mutation Discipline
//!
//! - **Create** runs `before_create` against the current collection, then allocates an id
//!   from that same collection and appends.
//! - **Replace** and **Patch** work on a clone of the stored record, run
//!   [`ActorEntity::validate`] on it, and only then write it back (keeping the stored id).
//!   A failure leaves the stored record exactly as it was.
//! - **Delete** removes one record and keeps the order of the rest.
//!
//! ```rust,ignore
//! let (actor, client) = ResourceActor::<Villa>::new(32);
//! tokio::spawn(actor.run(context));
//!
//! let stored = client.create(candidate).await?;
//! let patched = client.patch(stored.id, operations).await?;
//! let everything = client.list().await?;
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via [`ResourceActor::run`], not at construction
//! time. Every hook receives the context, so an entity can log to an injected sink or call
//! other actors without the actor knowing about them.
//!
//! ## Testing
//!
//! [`mock::MockClient`] hands out a real `ResourceClient<T>` answered from scripted
//! expectations, for testing code that sits in front of an actor without spawning one.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
