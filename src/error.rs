//! Error types for the contact directory.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating or querying the directory.
///
/// All variants are recoverable: a failed operation never leaves the
/// directory partially mutated, and the caller may retry with corrected
/// input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// A contact with the same first and last name already exists
    #[error("Duplicate contact entry: {first_name} {last_name}")]
    DuplicateEntry {
        first_name: String,
        last_name: String,
    },

    /// No contact matched the queried name
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// A field failed its validation rule
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;
