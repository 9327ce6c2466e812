//! Shared validation utilities
//!
//! Input checks that run before any storage call is attempted.
//!
//! # Examples
//!
//! ```rust,ignore
//! use bookdb_server::features::shared::validation::{parse_id, validate_required};
//!
//! validate_required(&command.title, "title")?;
//! let id = parse_id("42")?;
//! ```

use thiserror::Error;

/// Client input is malformed or incomplete
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required and cannot be empty")]
    Required { field: &'static str },

    #[error("{field} must not contain NUL characters")]
    InvalidCharacter { field: &'static str },

    #[error("Invalid id '{0}': must be an integer")]
    InvalidId(String),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

/// Validate a required text field
///
/// # Rules
/// - Must not be the empty string
///
/// Whitespace counts as content; a title of `" "` is accepted.
pub fn validate_required(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

/// Validate a text field bound for a PostgreSQL `TEXT` column
///
/// PostgreSQL cannot store U+0000 in text, so it is rejected here rather than
/// failing the statement.
pub fn validate_text(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::InvalidCharacter { field });
    }
    Ok(())
}

/// Validate a required text field: non-empty and storable
pub fn validate_required_text(value: &str, field: &'static str) -> Result<(), ValidationError> {
    validate_required(value, field)?;
    validate_text(value, field)
}

/// Parse a resource id taken from a path segment
pub fn parse_id(raw: &str) -> Result<i64, ValidationError> {
    raw.parse::<i64>()
        .map_err(|_| ValidationError::InvalidId(raw.to_string()))
}
