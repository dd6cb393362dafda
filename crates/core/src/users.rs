//! User validation rules.
//!
//! Used by the API layer before any row is inserted, so the database
//! only ever sees names that pass these checks (uniqueness excepted,
//! which stays with the storage engine).

use crate::error::CoreError;

/// Maximum length for a user name (characters).
pub const MAX_NAME_LENGTH: usize = 80;

/// Validate a user name supplied at creation time.
///
/// A missing name and an empty name are rejected with the same message;
/// that exact string is part of the `POST /users` wire contract.
/// Whitespace is not trimmed.
pub fn validate_name(name: Option<&str>) -> Result<&str, CoreError> {
    let name = name.unwrap_or("");
    if name.is_empty() {
        return Err(CoreError::Validation("name is required".into()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "name must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(name)
}
