//! Field-level validation rules shared by all offer types.
//!
//! Used from `#[validate(custom(...))]` attributes; the attribute supplies
//! the user-facing message, these functions only decide.

use std::borrow::Cow;

use validator::ValidationError;

use crate::config::DISALLOWED_CHARACTERS;

/// Reject empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", "must not be blank"));
    }
    Ok(())
}

/// Reject strings containing any of `< > ( ) % # @ " '`.
pub fn allowed_characters(value: &str) -> Result<(), ValidationError> {
    match value.chars().find(|c| DISALLOWED_CHARACTERS.contains(c)) {
        Some(found) => {
            let mut err = error("disallowed_character", "contains a disallowed character");
            err.add_param(Cow::from("character"), &found.to_string());
            Err(err)
        }
        None => Ok(()),
    }
}

/// Reject lists that contain the same value twice.
pub fn unique_values<T: PartialEq>(values: &[T]) -> Result<(), ValidationError> {
    let duplicated = values
        .iter()
        .enumerate()
        .any(|(i, value)| values[..i].contains(value));

    if duplicated {
        return Err(error("duplicate", "must not contain duplicates"));
    }
    Ok(())
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::from(message));
    err
}
