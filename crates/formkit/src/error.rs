#![forbid(unsafe_code)]

//! Operational errors.
//!
//! A value failing a rule is never an error here; that is reported through a
//! control's `errors`. `FormError` covers misconfiguration only: a date format
//! that does not parse, a schema that does not deserialize, or a schema that
//! names the same field twice.

use std::fmt;

/// Errors raised while configuring validators or building a form.
#[derive(Debug)]
pub enum FormError {
    /// A date format description could not be parsed.
    InvalidDateFormat { format: String, reason: String },
    /// Two fields in one form share a name.
    DuplicateField(String),
    /// A form schema could not be decoded.
    #[cfg(feature = "schema")]
    Schema(serde_json::Error),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::InvalidDateFormat { format, reason } => {
                write!(f, "invalid date format {format:?}: {reason}")
            }
            FormError::DuplicateField(name) => write!(f, "duplicate field name {name:?}"),
            #[cfg(feature = "schema")]
            FormError::Schema(e) => write!(f, "schema error: {e}"),
        }
    }
}

impl std::error::Error for FormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormError::InvalidDateFormat { .. } => None,
            FormError::DuplicateField(_) => None,
            #[cfg(feature = "schema")]
            FormError::Schema(e) => Some(e),
        }
    }
}

#[cfg(feature = "schema")]
impl From<serde_json::Error> for FormError {
    fn from(e: serde_json::Error) -> Self {
        FormError::Schema(e)
    }
}

/// Result type for form configuration.
pub type FormResult<T> = Result<T, FormError>;
