//! Field constraints of a single Villa.
//!
//! Name uniqueness needs the whole collection and is checked by the create hook instead.

use super::error::ValidationError;
use crate::model::Villa;

/// Longest accepted name, in characters.
pub const MAX_NAME_LENGTH: usize = 20;

/// Checks that `name` is present (non-blank) and at most [`MAX_NAME_LENGTH`] characters.
pub fn validate(villa: &Villa) -> Result<(), ValidationError> {
    if villa.name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    let length = villa.name.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong {
            length,
            max: MAX_NAME_LENGTH,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_regular_names() {
        assert_eq!(validate(&Villa::new("Pool View", 4, 750)), Ok(()));
        assert_eq!(validate(&Villa::new("x".repeat(20), 0, 0)), Ok(()));
    }

    #[test]
    fn test_rejects_empty_and_blank_names() {
        assert_eq!(
            validate(&Villa::new("", 4, 750)),
            Err(ValidationError::NameRequired)
        );
        assert_eq!(
            validate(&Villa::new("   \t", 4, 750)),
            Err(ValidationError::NameRequired)
        );
    }

    #[test]
    fn test_rejects_long_names() {
        assert_eq!(
            validate(&Villa::new("x".repeat(21), 4, 750)),
            Err(ValidationError::NameTooLong {
                length: 21,
                max: MAX_NAME_LENGTH
            })
        );
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(validate(&Villa::new("é".repeat(20), 1, 1)), Ok(()));
    }

    #[test]
    fn test_numeric_fields_are_unconstrained() {
        assert_eq!(validate(&Villa::new("Cabin", -3, 0)), Ok(()));
        assert_eq!(validate(&Villa::new("Cabin", i32::MIN, i32::MAX)), Ok(()));
    }
}
