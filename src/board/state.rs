//! Explicit board UI state and the single reducer that evolves it.

use super::view::{BoardColumns, GroupBy, SortBy, TaskFilters, compute_columns};
use crate::project::domain::ProjectId;
use crate::task::domain::{Task, TaskPriority, TaskStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Colour theme of the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// Returns the other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Immutable snapshot of everything the board view depends on besides the
/// task collection itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    selected_project: Option<ProjectId>,
    filters: TaskFilters,
    sort_by: SortBy,
    group_by: GroupBy,
    theme: Theme,
    sidebar_pinned: bool,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            selected_project: None,
            filters: TaskFilters::default(),
            sort_by: SortBy::Priority,
            group_by: GroupBy::Priority,
            theme: Theme::Light,
            sidebar_pinned: false,
        }
    }
}

/// A user action that changes board state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    /// Select a project, or none.
    SelectProject(Option<ProjectId>),
    /// A project was created; it becomes the selection.
    ProjectCreated(ProjectId),
    /// A project was deleted. `remaining` lists the projects still present,
    /// in sidebar order.
    ProjectDeleted {
        /// The deleted project.
        project_id: ProjectId,
        /// Projects left after the deletion.
        remaining: Vec<ProjectId>,
    },
    /// Replace the free-text search.
    Search(String),
    /// Filter by priority, or clear it.
    FilterPriority(Option<TaskPriority>),
    /// Filter by status, or clear it.
    FilterStatus(Option<TaskStatus>),
    /// Filter by assignee substring, or clear it.
    FilterAssignee(Option<String>),
    /// Filter by due date, or clear it.
    FilterDueDate(Option<NaiveDate>),
    /// Clear every field filter. The search text is kept.
    ClearFilters,
    /// Change the sort order.
    SortBy(SortBy),
    /// Change the group-by field.
    GroupBy(GroupBy),
    /// Switch to a theme.
    SetTheme(Theme),
    /// Switch to the other theme.
    ToggleTheme,
    /// Pin or unpin the project sidebar.
    PinSidebar(bool),
}

impl BoardState {
    /// Restores state on start-up: keeps the saved selection when that
    /// project still exists, otherwise selects the first project.
    #[must_use]
    pub fn restore(saved_selection: Option<ProjectId>, projects: &[ProjectId], theme: Theme) -> Self {
        let selected_project = saved_selection
            .filter(|saved| projects.contains(saved))
            .or_else(|| projects.first().copied());
        Self {
            selected_project,
            theme,
            ..Self::default()
        }
    }

    /// Returns the selected project, if any.
    #[must_use]
    pub const fn selected_project(&self) -> Option<ProjectId> {
        self.selected_project
    }

    /// Returns the active filters.
    #[must_use]
    pub const fn filters(&self) -> &TaskFilters {
        &self.filters
    }

    /// Returns the active sort order.
    #[must_use]
    pub const fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    /// Returns the active group-by field.
    #[must_use]
    pub const fn group_by(&self) -> GroupBy {
        self.group_by
    }

    /// Returns the theme.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns whether the sidebar is pinned open.
    #[must_use]
    pub const fn sidebar_pinned(&self) -> bool {
        self.sidebar_pinned
    }

    /// Computes the columns for the selected project.
    ///
    /// With no project selected every column is empty.
    #[must_use]
    pub fn columns(&self, tasks: &[Task]) -> BoardColumns {
        let scoped: Vec<Task> = self
            .selected_project
            .map(|project_id| {
                tasks
                    .iter()
                    .filter(|task| task.project_id() == project_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        compute_columns(&scoped, self.group_by, &self.filters, self.sort_by)
    }
}

/// Applies one action and returns the resulting state.
#[must_use]
pub fn dispatch(state: &BoardState, action: BoardAction) -> BoardState {
    let mut next = state.clone();
    match action {
        BoardAction::SelectProject(project_id) => next.selected_project = project_id,
        BoardAction::ProjectCreated(project_id) => next.selected_project = Some(project_id),
        BoardAction::ProjectDeleted {
            project_id,
            remaining,
        } => {
            if next.selected_project == Some(project_id) {
                next.selected_project = remaining.into_iter().find(|id| *id != project_id);
            }
        }
        BoardAction::Search(search) => next.filters.search = Some(search),
        BoardAction::FilterPriority(priority) => next.filters.priority = priority,
        BoardAction::FilterStatus(status) => next.filters.status = status,
        BoardAction::FilterAssignee(assignee) => next.filters.assignee = assignee,
        BoardAction::FilterDueDate(due_date) => next.filters.due_date = due_date,
        BoardAction::ClearFilters => {
            next.filters = TaskFilters {
                search: next.filters.search.take(),
                ..TaskFilters::default()
            };
        }
        BoardAction::SortBy(sort_by) => next.sort_by = sort_by,
        BoardAction::GroupBy(group_by) => next.group_by = group_by,
        BoardAction::SetTheme(theme) => next.theme = theme,
        BoardAction::ToggleTheme => next.theme = next.theme.toggled(),
        BoardAction::PinSidebar(pinned) => next.sidebar_pinned = pinned,
    }
    next
}
