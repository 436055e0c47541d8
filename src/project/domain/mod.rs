//! Domain model for projects.
//!
//! A project groups tasks under a name, an optional description and a
//! palette colour.

mod color;
mod error;
mod ids;
mod project;

pub use color::ProjectColor;
pub use error::ProjectDomainError;
pub use ids::ProjectId;
pub use project::{PersistedProjectData, Project, ProjectDraft, ProjectPatch};
