//! Error types for the Villa actor.

use crate::model::VillaId;
use crate::villa_actor::patch::{PatchOp, VillaField};
use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during villa operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VillaError {
    /// The requested villa was not found.
    #[error("Villa not found: {0}")]
    NotFound(String),

    /// A field constraint, name uniqueness or identity rule was violated.
    #[error("Villa validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A patch operation was malformed or did not fit the Villa shape.
    #[error("Villa patch error: {0}")]
    Patch(#[from] PatchError),

    /// No id above the current maximum fits in an `i32`.
    #[error("Villa id space exhausted after {0}")]
    IdExhausted(VillaId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl VillaError {
    /// Recovers the Villa error carried by a framework error.
    ///
    /// `EntityError`s raised by the Villa hooks are unwrapped back into the
    /// `VillaError`; everything else is a communication failure.
    pub fn from_framework(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => VillaError::NotFound(id),
            FrameworkError::EntityError(source) => match source.downcast::<VillaError>() {
                Ok(villa_error) => *villa_error,
                Err(other) => VillaError::ActorCommunicationError(other.to_string()),
            },
            other => VillaError::ActorCommunicationError(other.to_string()),
        }
    }
}

/// Record-level rule violations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Villa Name Already Exist: {0}")]
    DuplicateName(String),

    #[error("Villa name is required")]
    NameRequired,

    #[error("Villa name is {length} characters long, the maximum is {max}")]
    NameTooLong { length: usize, max: usize },

    /// Ids are assigned by the server; a create candidate must not carry one.
    #[error("Villa id must not be set on create (got {0})")]
    IdPreassigned(VillaId),

    #[error("Villa id {body} does not match the target id {target}")]
    IdMismatch { target: VillaId, body: VillaId },
}

/// Patch document problems, detected before validation runs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PatchError {
    #[error("malformed patch document: {0}")]
    Malformed(String),

    #[error("unsupported patch operation: {0}")]
    UnsupportedOp(String),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("{op} on {field} requires a value")]
    MissingValue { op: PatchOp, field: VillaField },

    #[error("{field} expects {expected}")]
    IncompatibleValue {
        field: VillaField,
        expected: &'static str,
    },
}
