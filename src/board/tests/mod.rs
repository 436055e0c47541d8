//! Unit tests for the board module.

mod state_tests;
mod sync_tests;

use crate::project::domain::ProjectId;
use crate::task::domain::{PersistedTaskData, Task, TaskId, TaskPriority, TaskStatus};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Builds a task created `minutes` after a fixed epoch.
pub(super) struct TaskFixture {
    data: PersistedTaskData,
}

impl TaskFixture {
    pub(super) fn new(title: &str, minutes: i64) -> Self {
        let created_at = epoch() + Duration::minutes(minutes);
        Self {
            data: PersistedTaskData {
                id: TaskId::new(),
                project_id: ProjectId::from_uuid(uuid::Uuid::nil()),
                title: title.to_owned(),
                description: None,
                priority: TaskPriority::Medium,
                status: TaskStatus::ToDo,
                assignee: None,
                due_date: None,
                created_at,
                updated_at: created_at,
            },
        }
    }

    pub(super) fn project(mut self, project_id: ProjectId) -> Self {
        self.data.project_id = project_id;
        self
    }

    pub(super) fn priority(mut self, priority: TaskPriority) -> Self {
        self.data.priority = priority;
        self
    }

    pub(super) fn status(mut self, status: TaskStatus) -> Self {
        self.data.status = status;
        self
    }

    pub(super) fn description(mut self, description: &str) -> Self {
        self.data.description = Some(description.to_owned());
        self
    }

    pub(super) fn assignee(mut self, assignee: &str) -> Self {
        self.data.assignee = Some(assignee.to_owned());
        self
    }

    pub(super) fn due(mut self, year: i32, month: u32, day: u32) -> Self {
        self.data.due_date = NaiveDate::from_ymd_opt(year, month, day);
        self
    }

    pub(super) fn build(self) -> Task {
        Task::from_persisted(self.data)
    }
}

pub(super) fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::title).collect()
}
