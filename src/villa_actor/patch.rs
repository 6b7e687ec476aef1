//! Partial updates of a Villa.
//!
//! A patch is an ordered list of [`PatchOperation`]s. Each one names an operation kind, a
//! field and (for `add`/`replace`) a JSON value:
//!
//! ```json
//! [
//!   {"op": "replace", "path": "/occupancy", "value": 10},
//!   {"op": "remove", "path": "/squareFootage"}
//! ]
//! ```
//!
//! Villa has only scalar fields, so `add` behaves exactly like `replace`, and `remove`
//! resets a field to its zero value. [`apply`] works on a copy and either returns the
//! whole candidate or the first error; field validation of the candidate is left to the
//! caller.

use super::error::PatchError;
use crate::model::{Villa, VillaId};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Operation kinds understood by the applier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOp {
    Add,
    Replace,
    Remove,
}

impl fmt::Display for PatchOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PatchOp::Add => "add",
            PatchOp::Replace => "replace",
            PatchOp::Remove => "remove",
        })
    }
}

impl FromStr for PatchOp {
    type Err = PatchError;

    fn from_str(op: &str) -> Result<Self, Self::Err> {
        match op.to_ascii_lowercase().as_str() {
            "add" => Ok(PatchOp::Add),
            "replace" => Ok(PatchOp::Replace),
            "remove" => Ok(PatchOp::Remove),
            _ => Err(PatchError::UnsupportedOp(op.to_string())),
        }
    }
}

/// The patchable fields of a Villa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VillaField {
    Id,
    Name,
    Occupancy,
    SquareFootage,
}

impl fmt::Display for VillaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VillaField::Id => "/id",
            VillaField::Name => "/name",
            VillaField::Occupancy => "/occupancy",
            VillaField::SquareFootage => "/squareFootage",
        })
    }
}

impl FromStr for VillaField {
    type Err = PatchError;

    /// Parses a JSON pointer such as `/occupancy`. Matching ignores case and the leading
    /// slash is optional.
    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let name = path.strip_prefix('/').unwrap_or(path);
        match name.to_ascii_lowercase().as_str() {
            "id" => Ok(VillaField::Id),
            "name" => Ok(VillaField::Name),
            "occupancy" => Ok(VillaField::Occupancy),
            "squarefootage" | "sqft" => Ok(VillaField::SquareFootage),
            _ => Err(PatchError::UnknownField(path.to_string())),
        }
    }
}

/// One step of a partial update.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOperation {
    Add { field: VillaField, value: Value },
    Replace { field: VillaField, value: Value },
    Remove { field: VillaField },
}

impl PatchOperation {
    pub fn replace(field: VillaField, value: impl Into<Value>) -> Self {
        PatchOperation::Replace {
            field,
            value: value.into(),
        }
    }

    pub fn add(field: VillaField, value: impl Into<Value>) -> Self {
        PatchOperation::Add {
            field,
            value: value.into(),
        }
    }

    pub fn remove(field: VillaField) -> Self {
        PatchOperation::Remove { field }
    }

    /// Parses a JSON patch document (an array of operation objects).
    pub fn parse_document(document: &Value) -> Result<Vec<PatchOperation>, PatchError> {
        let entries = document
            .as_array()
            .ok_or_else(|| PatchError::Malformed("expected an array of operations".into()))?;
        entries.iter().map(Self::parse_entry).collect()
    }

    fn parse_entry(entry: &Value) -> Result<PatchOperation, PatchError> {
        let object = entry
            .as_object()
            .ok_or_else(|| PatchError::Malformed(format!("operation is not an object: {entry}")))?;
        let op: PatchOp = string_member(object, "op")?.parse()?;
        let field: VillaField = string_member(object, "path")?.parse()?;
        match op {
            PatchOp::Remove => Ok(PatchOperation::Remove { field }),
            PatchOp::Add | PatchOp::Replace => {
                let value = object
                    .get("value")
                    .cloned()
                    .ok_or(PatchError::MissingValue { op, field })?;
                Ok(match op {
                    PatchOp::Add => PatchOperation::Add { field, value },
                    _ => PatchOperation::Replace { field, value },
                })
            }
        }
    }
}

fn string_member<'a>(
    object: &'a serde_json::Map<String, Value>,
    key: &str,
) -> Result<&'a str, PatchError> {
    object
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| PatchError::Malformed(format!("operation is missing \"{key}\"")))
}

/// Applies `operations` in order to a copy of `villa`.
///
/// `villa` is never modified; on success the patched copy is returned.
pub fn apply(villa: &Villa, operations: &[PatchOperation]) -> Result<Villa, PatchError> {
    let mut working = villa.clone();
    for operation in operations {
        match operation {
            PatchOperation::Add { field, value } | PatchOperation::Replace { field, value } => {
                set_field(&mut working, *field, value)?
            }
            PatchOperation::Remove { field } => clear_field(&mut working, *field),
        }
    }
    Ok(working)
}

fn set_field(villa: &mut Villa, field: VillaField, value: &Value) -> Result<(), PatchError> {
    match field {
        VillaField::Id => villa.id = VillaId(integer(field, value)?),
        VillaField::Name => {
            villa.name = match value {
                Value::String(name) => name.clone(),
                // null clears the name; the validator rejects the result
                Value::Null => String::new(),
                _ => {
                    return Err(PatchError::IncompatibleValue {
                        field,
                        expected: "a string",
                    })
                }
            }
        }
        VillaField::Occupancy => villa.occupancy = integer(field, value)?,
        VillaField::SquareFootage => villa.square_footage = integer(field, value)?,
    }
    Ok(())
}

fn clear_field(villa: &mut Villa, field: VillaField) {
    match field {
        VillaField::Id => villa.id = VillaId::UNASSIGNED,
        VillaField::Name => villa.name.clear(),
        VillaField::Occupancy => villa.occupancy = 0,
        VillaField::SquareFootage => villa.square_footage = 0,
    }
}

fn integer(field: VillaField, value: &Value) -> Result<i32, PatchError> {
    value
        .as_i64()
        .and_then(|number| i32::try_from(number).ok())
        .ok_or(PatchError::IncompatibleValue {
            field,
            expected: "a 32-bit integer",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lake_house() -> Villa {
        Villa::new("Lake House", 6, 1200).with_id(2)
    }

    #[test]
    fn test_replace_sets_one_field() {
        let patched = apply(
            &lake_house(),
            &[PatchOperation::replace(VillaField::Occupancy, 10)],
        )
        .unwrap();
        assert_eq!(patched.occupancy, 10);
        assert_eq!(patched.name, "Lake House");
        assert_eq!(patched.square_footage, 1200);
    }

    #[test]
    fn test_add_behaves_like_replace() {
        let ops = [PatchOperation::add(VillaField::Name, "Lake Cabin")];
        assert_eq!(apply(&lake_house(), &ops).unwrap().name, "Lake Cabin");
    }

    #[test]
    fn test_remove_resets_to_zero_values() {
        let ops = [
            PatchOperation::remove(VillaField::Name),
            PatchOperation::remove(VillaField::Occupancy),
            PatchOperation::remove(VillaField::SquareFootage),
        ];
        let patched = apply(&lake_house(), &ops).unwrap();
        assert_eq!(patched.name, "");
        assert_eq!(patched.occupancy, 0);
        assert_eq!(patched.square_footage, 0);
    }

    #[test]
    fn test_operations_apply_in_order() {
        let ops = [
            PatchOperation::replace(VillaField::Occupancy, 3),
            PatchOperation::remove(VillaField::Occupancy),
            PatchOperation::add(VillaField::Occupancy, 8),
        ];
        assert_eq!(apply(&lake_house(), &ops).unwrap().occupancy, 8);
    }

    #[test]
    fn test_incompatible_value_fails_whole_patch() {
        let original = lake_house();
        let ops = [
            PatchOperation::replace(VillaField::Name, "Renamed"),
            PatchOperation::replace(VillaField::SquareFootage, "large"),
        ];
        assert_eq!(
            apply(&original, &ops),
            Err(PatchError::IncompatibleValue {
                field: VillaField::SquareFootage,
                expected: "a 32-bit integer",
            })
        );
        assert_eq!(original, lake_house());
    }

    #[test]
    fn test_integer_values_must_fit() {
        let ops = [PatchOperation::replace(VillaField::Occupancy, 4_000_000_000_i64)];
        assert!(apply(&lake_house(), &ops).is_err());
        let ops = [PatchOperation::replace(VillaField::Occupancy, 2.5)];
        assert!(apply(&lake_house(), &ops).is_err());
        let ops = [PatchOperation::replace(VillaField::Occupancy, -4)];
        assert_eq!(apply(&lake_house(), &ops).unwrap().occupancy, -4);
    }

    #[test]
    fn test_null_name_clears_it() {
        let ops = [PatchOperation::replace(VillaField::Name, Value::Null)];
        assert_eq!(apply(&lake_house(), &ops).unwrap().name, "");
    }

    #[test]
    fn test_parse_document() {
        let document = json!([
            {"op": "replace", "path": "/occupancy", "value": 10},
            {"op": "ADD", "path": "Name", "value": "Lake Cabin"},
            {"op": "remove", "path": "/sqft"}
        ]);
        assert_eq!(
            PatchOperation::parse_document(&document).unwrap(),
            vec![
                PatchOperation::replace(VillaField::Occupancy, 10),
                PatchOperation::add(VillaField::Name, "Lake Cabin"),
                PatchOperation::remove(VillaField::SquareFootage),
            ]
        );
    }

    #[test]
    fn test_parse_explicit_null_value() {
        let document = json!([{"op": "replace", "path": "/name", "value": null}]);
        assert_eq!(
            PatchOperation::parse_document(&document).unwrap(),
            vec![PatchOperation::replace(VillaField::Name, Value::Null)]
        );
    }

    #[test]
    fn test_parse_rejects_bad_documents() {
        assert!(matches!(
            PatchOperation::parse_document(&json!({"op": "replace"})),
            Err(PatchError::Malformed(_))
        ));
        assert!(matches!(
            PatchOperation::parse_document(&json!([{"path": "/name"}])),
            Err(PatchError::Malformed(_))
        ));
        assert_eq!(
            PatchOperation::parse_document(&json!([{"op": "move", "from": "/name", "path": "/id"}])),
            Err(PatchError::UnsupportedOp("move".into()))
        );
        assert_eq!(
            PatchOperation::parse_document(&json!([{"op": "replace", "path": "/pool", "value": 1}])),
            Err(PatchError::UnknownField("/pool".into()))
        );
        assert_eq!(
            PatchOperation::parse_document(&json!([{"op": "replace", "path": "/name"}])),
            Err(PatchError::MissingValue {
                op: PatchOp::Replace,
                field: VillaField::Name
            })
        );
    }
}
