//! Shared utilities and types for feature modules
//!
//! - **validation**: input validation run before storage calls
//! - **extract**: write-field extractor for JSON, form, multipart and query input

pub mod extract;
pub mod validation;

pub use extract::FormValues;
pub use validation::{
    parse_id, validate_required, validate_required_text, validate_text, ValidationError,
};
