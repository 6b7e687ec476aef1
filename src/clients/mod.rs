//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient).

pub mod villa_client;

pub use villa_client::*;
