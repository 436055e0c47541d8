//! Domain model for tasks.
//!
//! Tasks belong to a project, carry a fixed-label priority and status, and
//! track creation and mutation timestamps. All infrastructure concerns stay
//! outside of this boundary.

mod draft;
mod error;
mod ids;
mod labels;
mod task;

pub use draft::{TaskDraft, TaskPatch, parse_due_date};
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use labels::{TaskPriority, TaskStatus};
pub use task::{PersistedTaskData, Task};
