//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::DragReassignmentService;
use taskboard::project::{
    adapters::memory::InMemoryProjectRepository, domain::Project, domain::ProjectDraft,
    services::ProjectService,
};
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskDraft, TaskPriority, TaskStatus},
    services::TaskService,
};

/// Services wired over one pair of in-memory repositories.
pub struct Services {
    pub tasks: TaskService<InMemoryTaskRepository, DefaultClock>,
    pub projects: ProjectService<InMemoryProjectRepository, InMemoryTaskRepository, DefaultClock>,
    pub drag: DragReassignmentService<InMemoryTaskRepository, DefaultClock>,
}

/// Provides services over empty repositories.
#[fixture]
pub fn services() -> Services {
    let clock = Arc::new(DefaultClock);
    let tasks = TaskService::new(Arc::new(InMemoryTaskRepository::new()), Arc::clone(&clock));
    Services {
        projects: ProjectService::new(
            Arc::new(InMemoryProjectRepository::new()),
            tasks.clone(),
            clock,
        ),
        drag: DragReassignmentService::new(tasks.clone()),
        tasks,
    }
}

impl Services {
    /// Creates a project named `name`.
    pub async fn project(&self, name: &str) -> Project {
        self.projects
            .create(ProjectDraft::new(name))
            .await
            .expect("project creation should succeed")
    }

    /// Creates a task in `project` with the given labels.
    pub async fn task(
        &self,
        project: &Project,
        title: &str,
        priority: TaskPriority,
        status: TaskStatus,
    ) -> Task {
        self.tasks
            .create(
                TaskDraft::new(project.id(), title)
                    .with_priority(priority)
                    .with_status(status),
            )
            .await
            .expect("task creation should succeed")
    }
}
