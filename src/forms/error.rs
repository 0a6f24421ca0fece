//! Form error types

use thiserror::Error;

use super::sink::SinkError;
use super::validate::ValidationErrors;

/// Errors returned by validation and submission
#[derive(Error, Debug)]
pub enum FormError {
    /// One or more fields failed their checks. Shown inline, never fatal.
    #[error("Validation failed on {} field(s)", .0.len())]
    Invalid(ValidationErrors),

    /// No form is registered under this key
    #[error("Unknown form: {0}")]
    UnknownForm(String),

    /// Normalized values did not decode into the typed record
    #[error("Record decode error: {0}")]
    Decode(String),

    /// The submission sink rejected a valid record
    #[error("Submission failed: {0}")]
    Sink(#[from] SinkError),
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        FormError::Decode(err.to_string())
    }
}

impl FormError {
    /// Inline field errors, when this is a validation failure
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            FormError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Rejected bulk-upload file
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UploadError {
    #[error("Empty file name")]
    EmptyName,

    #[error("Unsupported file type: {0} (expected .csv, .xlsx or .xls)")]
    UnsupportedType(String),
}
