//! # Villa API
//!
//! An in-memory REST resource for villa records, built on the single-writer
//! [`resource_actor`] engine.
//!
//! ## Design
//!
//! - One [`ResourceActor<Villa>`](resource_actor::ResourceActor) owns the collection. Every
//!   request is a message; the actor applies them one at a time, so there are no locks
//!   and no global state.
//! - [`Villa`](model::Villa) implements [`ActorEntity`](resource_actor::ActorEntity): name
//!   uniqueness, field validation, `1 + max(id)` allocation and patch application are its
//!   hooks.
//! - Replace and patch work on a copy that is validated before it is committed, so a
//!   failed update never leaves a half-written villa behind.
//!
//! ## Module Tour
//!
//! - [`model`] - the [`Villa`](model::Villa) record and its JSON shape
//! - [`villa_actor`] - the Villa entity: validator, id allocator, patch applier, errors
//! - [`clients`] - [`VillaClient`](clients::VillaClient), the typed handle request handlers hold
//! - [`api`] - the transport-free [`Dispatcher`](api::Dispatcher) mapping verbs to status codes
//! - [`lifecycle`] - [`VillaSystem`](lifecycle::VillaSystem): startup, wiring, shutdown
//! - [`config`] - [`VillaConfig`](config::VillaConfig) from JSON and the environment
//! - [`logging`] - the `(message, severity)` [`LogSink`](logging::LogSink)
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! VILLA_API_CONFIG=villas.json RUST_LOG=debug cargo run
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod logging;
pub mod model;
pub mod villa_actor;
