//! Application services for project management.

mod catalog;

pub use catalog::{ProjectDeletion, ProjectService, ProjectServiceError, ProjectServiceResult};
