//! # Framework Errors
//!
//! This module defines the common error types used throughout the actor framework.
//! Entity-specific failures travel inside [`FrameworkError::EntityError`] and are
//! recovered by the typed clients with a downcast.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Wraps an entity error for transport back to the client.
    pub fn entity<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        FrameworkError::EntityError(Box::new(error))
    }
}
