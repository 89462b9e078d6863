//! Record Validation Error Types

use thiserror::Error;

/// Errors during record coercion and validation
#[derive(Debug, Clone, Error)]
pub enum RecordError {
    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Field value cannot be coerced to a number
    #[error("{field} value {value:?} is not numeric")]
    NonNumeric { field: &'static str, value: String },

    /// Title is present but not a string
    #[error("title must be a string, got {0}")]
    InvalidTitle(String),

    /// The record is not a key/value mapping
    #[error("record is not a JSON object")]
    NotAnObject,
}
