//! Error types for project domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating projects.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyName,

    /// The colour is not part of the project palette.
    #[error("colour '{0}' is not in the project palette")]
    UnknownColor(String),

    /// The project identifier is not a valid UUID.
    #[error("invalid project identifier: {0}")]
    InvalidProjectId(String),
}
