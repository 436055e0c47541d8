//! Filtering, sorting and grouping of tasks into board columns.
//!
//! Columns are always recomputed from the full collection after any change
//! to tasks or to the filter, sort or group-by settings. Task lists are
//! personal-sized, so no incremental maintenance is attempted.

use crate::task::domain::{Task, TaskDomainError, TaskPriority, TaskStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field whose labels become the board columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupBy {
    /// One column per priority.
    #[default]
    Priority,
    /// One column per status.
    Status,
}

impl GroupBy {
    /// Returns every column label for this field, in display order.
    #[must_use]
    pub fn labels(self) -> [ColumnLabel; 3] {
        match self {
            Self::Priority => TaskPriority::ALL.map(ColumnLabel::Priority),
            Self::Status => TaskStatus::ALL.map(ColumnLabel::Status),
        }
    }

    /// Returns the column a task belongs to.
    #[must_use]
    pub const fn column_of(self, task: &Task) -> ColumnLabel {
        match self {
            Self::Priority => ColumnLabel::Priority(task.priority()),
            Self::Status => ColumnLabel::Status(task.status()),
        }
    }

    /// Parses a column label for this field.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPriority`] or
    /// [`TaskDomainError::InvalidStatus`] when the label does not belong to
    /// the field.
    pub fn parse_label(self, raw: &str) -> Result<ColumnLabel, TaskDomainError> {
        match self {
            Self::Priority => raw.parse().map(ColumnLabel::Priority),
            Self::Status => raw.parse().map(ColumnLabel::Status),
        }
    }

    /// Returns the wire name (`priority` or `status`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Status => "status",
        }
    }
}

impl FromStr for GroupBy {
    type Err = ParseViewOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "priority" => Ok(Self::Priority),
            "status" => Ok(Self::Status),
            _ => Err(ParseViewOptionError(value.to_owned())),
        }
    }
}

/// Ordering applied before grouping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortBy {
    /// High, then Medium, then Low; ties keep input order.
    #[serde(rename = "priority")]
    Priority,
    /// Earliest due date first; tasks without a due date last.
    #[serde(rename = "dueDate")]
    DueDate,
    /// Oldest task first.
    #[default]
    #[serde(rename = "none", alias = "createdAt")]
    Created,
}

impl FromStr for SortBy {
    type Err = ParseViewOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "priority" => Ok(Self::Priority),
            "duedate" | "due_date" => Ok(Self::DueDate),
            "" | "none" | "createdat" | "created" => Ok(Self::Created),
            _ => Err(ParseViewOptionError(value.to_owned())),
        }
    }
}

/// Error returned for an unknown group-by or sort option.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view option: {0}")]
pub struct ParseViewOptionError(pub String);

/// A column label: one value of the active group-by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ColumnLabel {
    /// A priority column.
    Priority(TaskPriority),
    /// A status column.
    Status(TaskStatus),
}

impl ColumnLabel {
    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Priority(priority) => priority.label(),
            Self::Status(status) => status.label(),
        }
    }
}

impl fmt::Display for ColumnLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Active filter predicates. Unset fields match every task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilters {
    /// Case-insensitive text searched in title and description.
    pub search: Option<String>,
    /// Exact priority.
    pub priority: Option<TaskPriority>,
    /// Exact status.
    pub status: Option<TaskStatus>,
    /// Case-insensitive substring of the assignee.
    pub assignee: Option<String>,
    /// Exact due date.
    pub due_date: Option<NaiveDate>,
}

impl TaskFilters {
    /// Creates a filter set that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Restricts to one priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts to one status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts to assignees containing `assignee`.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Restricts to one due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns `true` when no predicate is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        active_text(self.search.as_deref()).is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && active_text(self.assignee.as_deref()).is_none()
            && self.due_date.is_none()
    }

    /// Returns `true` when the task satisfies every active predicate.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let search_ok = active_text(self.search.as_deref()).is_none_or(|needle| {
            contains_ignore_case(task.title(), &needle)
                || task
                    .description()
                    .is_some_and(|description| contains_ignore_case(description, &needle))
        });
        let assignee_ok = active_text(self.assignee.as_deref()).is_none_or(|needle| {
            task.assignee()
                .is_some_and(|assignee| contains_ignore_case(assignee, &needle))
        });

        search_ok
            && self.priority.is_none_or(|priority| task.priority() == priority)
            && self.status.is_none_or(|status| task.status() == status)
            && assignee_ok
            && self.due_date.is_none_or(|due| task.due_date() == Some(due))
    }
}

/// Returns the lowercased filter text, or `None` when it is blank.
fn active_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_lowercase)
}

fn contains_ignore_case(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

/// One board column and its tasks in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Column label.
    pub label: ColumnLabel,
    /// Tasks in display order.
    pub tasks: Vec<Task>,
}

/// Every column of the active group-by field, in label order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumns {
    group_by: GroupBy,
    columns: Vec<Column>,
}

impl BoardColumns {
    /// Returns the field the board is grouped by.
    #[must_use]
    pub const fn group_by(&self) -> GroupBy {
        self.group_by
    }

    /// Returns the columns in label order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the tasks of one column, or `None` when the label belongs to
    /// the other group-by field.
    #[must_use]
    pub fn tasks_in(&self, label: ColumnLabel) -> Option<&[Task]> {
        self.columns
            .iter()
            .find(|column| column.label == label)
            .map(|column| column.tasks.as_slice())
    }

    /// Returns how many tasks are shown across all columns.
    #[must_use]
    pub fn total(&self) -> usize {
        self.columns.iter().map(|column| column.tasks.len()).sum()
    }
}

/// Keeps the tasks matching every active filter, in input order.
#[must_use]
pub fn filter_tasks<'a>(tasks: &'a [Task], filters: &TaskFilters) -> Vec<&'a Task> {
    tasks.iter().filter(|task| filters.matches(task)).collect()
}

/// Sorts tasks in place. The sort is stable, so equal keys keep their
/// relative input order.
pub fn sort_tasks(tasks: &mut [&Task], sort_by: SortBy) {
    match sort_by {
        SortBy::Priority => tasks.sort_by_key(|task| task.priority().rank()),
        SortBy::DueDate => tasks.sort_by_key(|task| (task.due_date().is_none(), task.due_date())),
        SortBy::Created => tasks.sort_by_key(|task| task.created_at()),
    }
}

/// Filters, sorts and groups tasks into board columns.
///
/// Every label of `group_by` yields a column, including empty ones. Within a
/// column tasks keep the order produced by `sort_by`.
#[must_use]
pub fn compute_columns(
    tasks: &[Task],
    group_by: GroupBy,
    filters: &TaskFilters,
    sort_by: SortBy,
) -> BoardColumns {
    let mut visible = filter_tasks(tasks, filters);
    sort_tasks(&mut visible, sort_by);

    let columns = group_by
        .labels()
        .into_iter()
        .map(|label| Column {
            label,
            tasks: visible
                .iter()
                .filter(|task| group_by.column_of(task) == label)
                .map(|task| (*task).clone())
                .collect(),
        })
        .collect();

    BoardColumns { group_by, columns }
}
