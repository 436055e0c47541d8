//! Shared application state handed to every handler.

use crate::board::DragReassignmentService;
use crate::local::LocalWorkspace;
use crate::persistence::PgPool;
use crate::project::{
    adapters::{memory::InMemoryProjectRepository, postgres::PostgresProjectRepository},
    ports::ProjectRepository,
    services::ProjectService,
};
use crate::task::{
    adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    ports::TaskRepository,
    services::TaskService,
};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;

/// Task service over a type-erased repository.
pub type SharedTaskService = TaskService<dyn TaskRepository, DefaultClock>;
/// Project service over type-erased repositories.
pub type SharedProjectService = ProjectService<dyn ProjectRepository, dyn TaskRepository, DefaultClock>;
/// Drag service over a type-erased repository.
pub type SharedDragService = DragReassignmentService<dyn TaskRepository, DefaultClock>;

/// Services shared by all workers of the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Task store.
    pub tasks: SharedTaskService,
    /// Project store.
    pub projects: SharedProjectService,
    /// Drag reassignment.
    pub drag: SharedDragService,
    clock: Arc<DefaultClock>,
}

impl AppState {
    /// Wires the services over the given repositories.
    #[must_use]
    pub fn new(projects: Arc<dyn ProjectRepository>, tasks: Arc<dyn TaskRepository>) -> Self {
        let clock = Arc::new(DefaultClock);
        let task_service = TaskService::new(tasks, Arc::clone(&clock));
        Self {
            projects: ProjectService::new(projects, task_service.clone(), Arc::clone(&clock)),
            drag: DragReassignmentService::new(task_service.clone()),
            tasks: task_service,
            clock,
        }
    }

    /// State backed by in-memory repositories.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryProjectRepository::new()),
            Arc::new(InMemoryTaskRepository::new()),
        )
    }

    /// State backed by `PostgreSQL`.
    #[must_use]
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PostgresProjectRepository::new(pool.clone())),
            Arc::new(PostgresTaskRepository::new(pool)),
        )
    }

    /// State backed by a local state directory.
    #[must_use]
    pub fn local(workspace: LocalWorkspace) -> Self {
        let workspace = Arc::new(workspace);
        Self::new(workspace.clone(), workspace)
    }

    /// Returns today's date in UTC.
    #[must_use]
    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.utc().date_naive()
    }
}
