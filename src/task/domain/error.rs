//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task draft does not reference a project.
    #[error("task must belong to a project")]
    MissingProjectId,

    /// The project identifier is not a valid UUID.
    #[error("invalid project identifier: {0}")]
    InvalidProjectId(String),

    /// The task identifier is not a valid UUID.
    #[error("invalid task identifier: {0}")]
    InvalidTaskId(String),

    /// The priority label is not one of `High`, `Medium` or `Low`.
    #[error("unknown task priority: {0}")]
    InvalidPriority(String),

    /// The status label is not one of `To Do`, `In Progress` or `Done`.
    #[error("unknown task status: {0}")]
    InvalidStatus(String),

    /// The due date is not an ISO-8601 calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),
}
