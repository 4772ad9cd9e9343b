//! Pure validation rules for status input.

use std::borrow::Cow;
use validator::ValidationError;

/// Validate a status name: not blank and raw length within [2, 50].
///
/// The emptiness rule subsumes the length rule, so any given name yields
/// at most one violation.
pub fn status_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("status_name_empty")
            .with_message(Cow::from("Status name cannot be empty.")));
    }

    let length = name.chars().count();
    if !(2..=50).contains(&length) {
        return Err(ValidationError::new("status_name_length").with_message(Cow::from(
            "Status name must be between 2 and 50 characters long.",
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusDto;
    use validator::Validate;

    fn dto(name: &str) -> StatusDto {
        StatusDto {
            id: 0,
            name: name.to_string(),
        }
    }

    #[test]
    fn accepts_names_within_bounds() {
        let max_length = "x".repeat(50);
        for name in ["OK", "In Progress", "ab", max_length.as_str()] {
            assert!(status_name(name).is_ok(), "expected '{}' to be valid", name);
        }
    }

    #[test]
    fn rejects_empty_name() {
        let err = status_name("").unwrap_err();
        assert_eq!(err.code, "status_name_empty");
    }

    #[test]
    fn rejects_whitespace_only_name() {
        let err = status_name("   ").unwrap_err();
        assert_eq!(err.code, "status_name_empty");
    }

    #[test]
    fn rejects_single_character_name() {
        let err = status_name("a").unwrap_err();
        assert_eq!(err.code, "status_name_length");
    }

    #[test]
    fn rejects_name_longer_than_fifty() {
        let err = status_name(&"x".repeat(51)).unwrap_err();
        assert_eq!(err.code, "status_name_length");
    }

    #[test]
    fn dto_validation_reports_exactly_one_error_on_name() {
        let too_long = "x".repeat(51);
        for name in ["", "   ", "a", too_long.as_str()] {
            let errors = dto(name).validate().unwrap_err();
            let field_errors = errors.field_errors();
            let name_errors = field_errors
                .iter()
                .find(|(field, _)| *field == "name")
                .map(|(_, errs)| errs.len())
                .unwrap_or(0);
            assert_eq!(name_errors, 1, "expected one error for '{}'", name);
        }
    }

    #[test]
    fn dto_validation_passes_for_valid_name() {
        assert!(dto("Active").validate().is_ok());
    }
}
