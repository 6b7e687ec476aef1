//! ActorEntity implementation for [`Villa`].
//!
//! This is where the record-level rules meet the generic engine:
//! - name uniqueness and the create check order live in `before_create`,
//! - the id-mismatch check of a replace lives in `before_replace`,
//! - field constraints are delegated to the [validator](super::validator),
//! - ids come from the [allocator](super::allocator),
//! - patches go through the [patch applier](super::patch).

use super::allocator::next_villa_id;
use super::error::{ValidationError, VillaError};
use super::patch::{self, PatchOperation};
use super::validator;
use crate::logging::{Severity, SharedSink};
use crate::model::{Villa, VillaId};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Villa {
    type Id = VillaId;
    type Create = Villa;
    type Replace = Villa;
    type Patch = Vec<PatchOperation>;
    type Context = SharedSink;
    type Error = VillaError;

    fn id(&self) -> &VillaId {
        &self.id
    }

    fn assign_id(&mut self, id: VillaId) {
        self.id = id;
    }

    fn next_id(store: &[Self]) -> Result<VillaId, VillaError> {
        next_villa_id(store)
    }

    fn from_create_params(candidate: Villa) -> Result<Self, VillaError> {
        Ok(candidate)
    }

    fn validate(&self) -> Result<(), VillaError> {
        validator::validate(self).map_err(VillaError::from)
    }

    /// Create checks, in order: duplicate name, field constraints, pre-assigned id.
    async fn before_create(
        candidate: &Villa,
        store: &[Villa],
        sink: &SharedSink,
    ) -> Result<(), VillaError> {
        if store.iter().any(|villa| villa.has_name(&candidate.name)) {
            sink.log("Villa Name Already Exist", Severity::Error);
            return Err(ValidationError::DuplicateName(candidate.name.clone()).into());
        }
        validator::validate(candidate)?;
        if candidate.id.is_assigned() {
            return Err(ValidationError::IdPreassigned(candidate.id).into());
        }
        Ok(())
    }

    async fn before_replace(
        id: &VillaId,
        candidate: &Villa,
        _sink: &SharedSink,
    ) -> Result<(), VillaError> {
        if candidate.id != *id {
            return Err(ValidationError::IdMismatch {
                target: *id,
                body: candidate.id,
            }
            .into());
        }
        Ok(())
    }

    /// Overwrites the mutable fields. Name uniqueness against the other villas is not
    /// re-checked here.
    async fn on_replace(&mut self, candidate: Villa, _sink: &SharedSink) -> Result<(), VillaError> {
        self.name = candidate.name;
        self.occupancy = candidate.occupancy;
        self.square_footage = candidate.square_footage;
        Ok(())
    }

    async fn on_patch(
        &mut self,
        operations: Vec<PatchOperation>,
        _sink: &SharedSink,
    ) -> Result<(), VillaError> {
        *self = patch::apply(self, &operations)?;
        Ok(())
    }
}
