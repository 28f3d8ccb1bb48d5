//! Error types for the Exercise Tracker application

use thiserror::Error;

/// Errors raised while turning raw request fields into typed values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    #[error("Invalid date '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid user ID '{0}'")]
    InvalidId(String),
}

impl FieldError {
    /// Name of the request field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Missing(field) => field,
            FieldError::NotANumber { field, .. } => field,
            FieldError::InvalidDate(_) => "date",
            FieldError::InvalidId(_) => "_id",
        }
    }
}
