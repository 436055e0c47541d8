//! Request and response bodies of the REST API.

use crate::board::{BoardColumns, BoardSummary, GroupBy, MoveEvent, SortBy, TaskFilters};
use crate::project::domain::{ProjectColor, ProjectDomainError, ProjectDraft, ProjectId, ProjectPatch};
use crate::task::domain::{
    Task, TaskDomainError, TaskDraft, TaskPatch, TaskPriority, TaskStatus, parse_due_date,
};
use serde::{Deserialize, Serialize};

/// Body of every plain confirmation and error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message body.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response to a bulk task deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDeleteResponse {
    /// Confirmation message.
    pub message: String,
    /// How many tasks were removed.
    pub deleted: usize,
}

/// Response to a project deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDeletedResponse {
    /// Confirmation message.
    pub message: String,
    /// How many tasks were removed with the project.
    pub deleted_tasks: usize,
}

/// `POST /api/tasks` body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Task title; required.
    pub title: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Status label; defaults to `To Do`.
    pub status: Option<String>,
    /// Priority label; defaults to `Medium`.
    pub priority: Option<String>,
    /// Owning project; required.
    pub project_id: Option<String>,
    /// Optional assignee.
    pub assignee: Option<String>,
    /// Optional due date, `YYYY-MM-DD`.
    pub due_date: Option<String>,
}

impl CreateTaskRequest {
    /// Validates the body into a draft.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when the title or project is missing or a
    /// field does not parse.
    pub fn into_draft(self) -> Result<TaskDraft, TaskDomainError> {
        let title = self.title.unwrap_or_default();
        if title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let project_id = self
            .project_id
            .filter(|raw| !raw.trim().is_empty())
            .ok_or(TaskDomainError::MissingProjectId)?;
        let project_id: ProjectId = project_id
            .parse()
            .map_err(|_| TaskDomainError::InvalidProjectId(project_id))?;

        let mut draft = TaskDraft::new(project_id, title);
        if let Some(description) = self.description {
            draft = draft.with_description(description);
        }
        if let Some(priority) = non_blank(self.priority) {
            draft = draft.with_priority(priority.parse::<TaskPriority>()?);
        }
        if let Some(status) = non_blank(self.status) {
            draft = draft.with_status(status.parse::<TaskStatus>()?);
        }
        if let Some(assignee) = self.assignee {
            draft = draft.with_assignee(assignee);
        }
        if let Some(due_date) = parse_due_date(self.due_date.as_deref().unwrap_or_default())? {
            draft = draft.with_due_date(due_date);
        }
        Ok(draft)
    }
}

/// `PUT /api/tasks/{id}` body. Absent fields are left unchanged; empty
/// strings clear optional text and date fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New status label.
    pub status: Option<String>,
    /// New priority label.
    pub priority: Option<String>,
    /// New owning project.
    pub project_id: Option<String>,
    /// New assignee.
    pub assignee: Option<String>,
    /// New due date.
    pub due_date: Option<String>,
}

impl UpdateTaskRequest {
    /// Validates the body into a patch.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] when a field does not parse.
    pub fn into_patch(self) -> Result<TaskPatch, TaskDomainError> {
        let mut patch = TaskPatch::new();
        if let Some(title) = self.title {
            patch = patch.with_title(title);
        }
        if let Some(description) = self.description {
            patch = patch.with_description(description);
        }
        if let Some(status) = self.status {
            patch = patch.with_status(status.parse()?);
        }
        if let Some(priority) = self.priority {
            patch = patch.with_priority(priority.parse()?);
        }
        if let Some(project_id) = self.project_id {
            let parsed = project_id
                .parse()
                .map_err(|_| TaskDomainError::InvalidProjectId(project_id))?;
            patch = patch.with_project(parsed);
        }
        if let Some(assignee) = self.assignee {
            patch = patch.with_assignee(assignee);
        }
        if let Some(due_date) = self.due_date {
            patch = patch.with_due_date(parse_due_date(&due_date)?);
        }
        Ok(patch)
    }
}

/// `POST /api/projects` body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// Project name; required.
    pub name: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Palette colour; defaults to the first palette entry.
    pub color: Option<String>,
}

impl CreateProjectRequest {
    /// Validates the body into a draft.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::UnknownColor`] when the colour is not in
    /// the palette.
    pub fn into_draft(self) -> Result<ProjectDraft, ProjectDomainError> {
        let mut draft = ProjectDraft::new(self.name.unwrap_or_default());
        if let Some(description) = self.description {
            draft = draft.with_description(description);
        }
        if let Some(color) = non_blank(self.color) {
            draft = draft.with_color(color.parse::<ProjectColor>()?);
        }
        Ok(draft)
    }
}

/// `PUT /api/projects/{id}` body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New palette colour.
    pub color: Option<String>,
}

impl UpdateProjectRequest {
    /// Validates the body into a patch.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::UnknownColor`] when the colour is not in
    /// the palette.
    pub fn into_patch(self) -> Result<ProjectPatch, ProjectDomainError> {
        let mut patch = ProjectPatch::new();
        if let Some(name) = self.name {
            patch = patch.with_name(name);
        }
        if let Some(description) = self.description {
            patch = patch.with_description(description);
        }
        if let Some(color) = self.color {
            patch = patch.with_color(color.parse()?);
        }
        Ok(patch)
    }
}

/// Query string of `GET /api/projects`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectQuery {
    /// Case-insensitive name search.
    pub search: Option<String>,
}

/// Query string of `GET /api/board`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardQuery {
    /// Restrict to one project.
    pub project_id: Option<String>,
    /// `priority` (default) or `status`.
    pub group_by: Option<String>,
    /// `priority`, `dueDate` or `none` (default).
    pub sort_by: Option<String>,
    /// Free-text search.
    pub search: Option<String>,
    /// Priority filter.
    pub priority: Option<String>,
    /// Status filter.
    pub status: Option<String>,
    /// Assignee filter.
    pub assignee: Option<String>,
    /// Due date filter.
    pub due_date: Option<String>,
}

/// Board view options parsed from a [`BoardQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardOptions {
    /// Project scope, if any.
    pub project_id: Option<ProjectId>,
    /// Group-by field.
    pub group_by: GroupBy,
    /// Sort order.
    pub sort_by: SortBy,
    /// Filters.
    pub filters: TaskFilters,
}

impl BoardQuery {
    /// Parses the query into view options.
    ///
    /// # Errors
    ///
    /// Returns a description of the first parameter that does not parse.
    pub fn into_options(self) -> Result<BoardOptions, String> {
        let project_id = non_blank(self.project_id)
            .map(|raw| raw.parse::<ProjectId>())
            .transpose()
            .map_err(|err| err.to_string())?;
        let group_by = non_blank(self.group_by)
            .map(|raw| raw.parse::<GroupBy>())
            .transpose()
            .map_err(|err| err.to_string())?
            .unwrap_or_default();
        let sort_by = non_blank(self.sort_by)
            .map(|raw| raw.parse::<SortBy>())
            .transpose()
            .map_err(|err| err.to_string())?
            .unwrap_or_default();

        let filters = TaskFilters {
            search: non_blank(self.search),
            priority: non_blank(self.priority)
                .map(|raw| raw.parse())
                .transpose()
                .map_err(|err: TaskDomainError| err.to_string())?,
            status: non_blank(self.status)
                .map(|raw| raw.parse())
                .transpose()
                .map_err(|err: TaskDomainError| err.to_string())?,
            assignee: non_blank(self.assignee),
            due_date: parse_due_date(self.due_date.as_deref().unwrap_or_default())
                .map_err(|err| err.to_string())?,
        };

        Ok(BoardOptions {
            project_id,
            group_by,
            sort_by,
            filters,
        })
    }
}

/// `GET /api/board` response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    /// Columns in label order.
    #[serde(flatten)]
    pub board: BoardColumns,
    /// Active sort order.
    pub sort_by: SortBy,
    /// Counters over the scoped, unfiltered tasks.
    pub summary: BoardSummary,
    /// Suggested next task, if any task is still to do.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_next: Option<Task>,
}

/// `POST /api/board/move` body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    /// The drop itself.
    #[serde(flatten)]
    pub event: MoveEvent,
    /// Field the board was grouped by when the drop happened.
    #[serde(default)]
    pub group_by: GroupBy,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}
