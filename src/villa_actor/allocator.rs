//! Villa id allocation.

use super::error::VillaError;
use crate::model::{Villa, VillaId};

/// Returns `1 + max(id)` over `villas`, or `1` for an empty collection.
///
/// Must be computed at insertion time: deleting the highest id lowers the next one.
pub fn next_villa_id(villas: &[Villa]) -> Result<VillaId, VillaError> {
    let Some(max) = villas.iter().map(|villa| villa.id).max() else {
        return Ok(VillaId(1));
    };
    max.0
        .checked_add(1)
        .map(VillaId)
        .ok_or(VillaError::IdExhausted(max))
}
