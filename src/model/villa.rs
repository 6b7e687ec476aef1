//! Represents one rentable villa.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
//!
//! See [`impl ActorEntity for Villa`](#impl-ActorEntity-for-Villa) for details on:
//! - Creation and replacement (both take a full [`Villa`] candidate)
//! - Partial updates ([`PatchOperation`](crate::villa_actor::PatchOperation))

use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Villas.
///
/// `0` means "not assigned yet"; stored villas always carry a positive id.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct VillaId(pub i32);

impl VillaId {
    pub const UNASSIGNED: VillaId = VillaId(0);

    pub fn is_assigned(self) -> bool {
        self != Self::UNASSIGNED
    }
}

impl From<i32> for VillaId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl Display for VillaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A villa record as stored and as exchanged with clients.
///
/// Serialized as `{"id":1,"name":"Pool View","occupancy":4,"squareFootage":750}`. Missing
/// fields default to their zero value; `sqft` is accepted as an alias for `squareFootage`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Villa {
    #[serde(default)]
    pub id: VillaId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub occupancy: i32,
    #[serde(default, alias = "sqft", alias = "sqFt")]
    pub square_footage: i32,
}

impl Villa {
    /// Creates a new, unassigned Villa.
    ///
    /// # Notes
    /// The `id` is left at [`VillaId::UNASSIGNED`] and will be set by the actor system.
    pub fn new(name: impl Into<String>, occupancy: i32, square_footage: i32) -> Self {
        Self {
            id: VillaId::UNASSIGNED,
            name: name.into(),
            occupancy,
            square_footage,
        }
    }

    /// Returns the same villa carrying `id`.
    pub fn with_id(mut self, id: impl Into<VillaId>) -> Self {
        self.id = id.into();
        self
    }

    /// Names are unique ignoring case.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
