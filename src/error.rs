//! Custom error types for the contact book
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::FieldError;

/// The main error type for contact book operations
#[derive(Error, Debug)]
pub enum ContactsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for field values (the message is user-facing)
    #[error("{0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A command line that could not be parsed
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// A `show all` page outside the available range
    #[error("Invalid page number: {page} (of {total_pages})")]
    InvalidPage { page: usize, total_pages: usize },

    /// Storage errors (missing, unreadable or unwritable address book files)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ContactsError {
    /// Create a "not found" error for contacts
    pub fn contact_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            identifier: identifier.into(),
        }
    }

    /// Create an "invalid command" error
    pub fn invalid_command(line: impl Into<String>) -> Self {
        Self::InvalidCommand(line.into())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ContactsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ContactsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<FieldError> for ContactsError {
    fn from(err: FieldError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for contact book operations
pub type ContactsResult<T> = Result<T, ContactsError>;
