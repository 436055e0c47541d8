//! Input structures for creating and editing tasks.

use super::{TaskDomainError, TaskPriority, TaskStatus};
use crate::project::domain::ProjectId;
use chrono::NaiveDate;

/// Fields supplied when adding a task.
///
/// Required fields are checked by [`super::Task::create`]; optional text
/// fields that are blank after trimming are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub(crate) project_id: Option<ProjectId>,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) priority: TaskPriority,
    pub(crate) status: TaskStatus,
    pub(crate) assignee: Option<String>,
    pub(crate) due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Creates a draft for the given project with default priority and
    /// status.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Self {
        Self::untargeted(title).with_project(project_id)
    }

    /// Creates a draft that does not yet reference a project.
    ///
    /// Creating a task from such a draft fails until
    /// [`TaskDraft::with_project`] is applied.
    #[must_use]
    pub fn untargeted(title: impl Into<String>) -> Self {
        Self {
            project_id: None,
            title: title.into(),
            description: None,
            priority: TaskPriority::default(),
            status: TaskStatus::default(),
            assignee: None,
            due_date: None,
        }
    }

    /// Sets the owning project.
    #[must_use]
    pub const fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_blank(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = non_blank(assignee.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the owning project, if set.
    #[must_use]
    pub const fn project_id(&self) -> Option<ProjectId> {
        self.project_id
    }

    /// Returns the raw title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Field-level changes applied by a task update.
///
/// Unset fields are left untouched. Optional text and date fields hold
/// `Some(None)` when the update clears them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub(crate) project_id: Option<ProjectId>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<Option<String>>,
    pub(crate) priority: Option<TaskPriority>,
    pub(crate) status: Option<TaskStatus>,
    pub(crate) assignee: Option<Option<String>>,
    pub(crate) due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the task to another project.
    #[must_use]
    pub const fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description; a blank value clears it.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(non_blank(description.into()));
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces the assignee; a blank value clears it.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(non_blank(assignee.into()));
        self
    }

    /// Replaces or clears the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.project_id.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.assignee.is_none()
            && self.due_date.is_none()
    }
}

/// Parses a due date from user input.
///
/// Accepts `YYYY-MM-DD` and full timestamps (only the date part before `T`
/// is kept). Blank input yields `None`.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDueDate`] when the date part is not a
/// valid calendar date.
pub fn parse_due_date(raw: &str) -> Result<Option<NaiveDate>, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let date_part = trimmed.split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| TaskDomainError::InvalidDueDate(raw.to_owned()))
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_owned())
    }
}
