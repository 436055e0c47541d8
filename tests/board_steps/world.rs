//! Shared world state for board behaviour scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{DragError, DragOutcome, DragReassignmentService};
use taskboard::project::{
    adapters::memory::InMemoryProjectRepository, domain::Project, services::ProjectDeletion,
    services::ProjectService,
};
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskService, TaskServiceError},
};

/// Task service used by the scenarios.
pub type WorldTaskService = TaskService<InMemoryTaskRepository, DefaultClock>;
/// Project service used by the scenarios.
pub type WorldProjectService =
    ProjectService<InMemoryProjectRepository, InMemoryTaskRepository, DefaultClock>;

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub tasks: WorldTaskService,
    pub projects: WorldProjectService,
    pub drag: DragReassignmentService<InMemoryTaskRepository, DefaultClock>,
    pub projects_by_name: HashMap<String, Project>,
    pub tasks_by_title: HashMap<String, Task>,
    pub current_project: Option<Project>,
    pub last_drag: Option<Result<DragOutcome, DragError>>,
    pub last_deletion: Option<ProjectDeletion>,
    pub last_create: Option<Result<Task, TaskServiceError>>,
}

impl BoardWorld {
    /// Creates a world over empty in-memory repositories.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(DefaultClock);
        let tasks = TaskService::new(Arc::new(InMemoryTaskRepository::new()), Arc::clone(&clock));
        let projects = ProjectService::new(
            Arc::new(InMemoryProjectRepository::new()),
            tasks.clone(),
            clock,
        );

        Self {
            drag: DragReassignmentService::new(tasks.clone()),
            tasks,
            projects,
            projects_by_name: HashMap::new(),
            tasks_by_title: HashMap::new(),
            current_project: None,
            last_drag: None,
            last_deletion: None,
            last_create: None,
        }
    }

    /// Returns the task created under `title` earlier in the scenario.
    pub fn task(&self, title: &str) -> Result<&Task, eyre::Report> {
        self.tasks_by_title
            .get(title)
            .ok_or_else(|| eyre::eyre!("no task titled {title} in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
