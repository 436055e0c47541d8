//! Service layer for task creation, editing, lookup and removal.

use crate::project::domain::ProjectId;
use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError},
};
use log::{debug, warn};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input validation failed; nothing was written.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// The task does not exist (it may have been deleted concurrently).
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task store: CRUD orchestration over a [`TaskRepository`].
pub struct TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns every task, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        let mut tasks = self.repository.list().await?;
        tasks.reverse();
        Ok(tasks)
    }

    /// Returns the tasks of one project, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list_by_project(&self, project_id: ProjectId) -> TaskServiceResult<Vec<Task>> {
        let mut tasks = self.repository.list_by_project(project_id).await?;
        tasks.reverse();
        Ok(tasks)
    }

    /// Fetches one task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Creates a task from a draft.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the title is blank or no
    /// project is set, and [`TaskServiceError::Repository`] when persistence
    /// fails.
    pub async fn create(&self, draft: TaskDraft) -> TaskServiceResult<Task> {
        let task = Task::create(draft, &*self.clock)?;
        self.repository.store(&task).await?;
        debug!("created task {} in project {}", task.id(), task.project_id());
        Ok(task)
    }

    /// Merges a patch into an existing task and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist
    /// and [`TaskServiceError::Validation`] when the patch is invalid.
    pub async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskServiceResult<Task> {
        let task = self.get(id).await?;
        self.apply_patch(task, patch).await
    }

    /// Merges a patch into a task that was already read and writes it back,
    /// without reading it again.
    pub(crate) async fn apply_patch(&self, mut task: Task, patch: TaskPatch) -> TaskServiceResult<Task> {
        task.apply(patch, &*self.clock)?;
        self.repository.update(&task).await?;
        debug!("updated task {}", task.id());
        Ok(task)
    }

    /// Removes one task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        self.repository.delete(id).await?;
        debug!("deleted task {id}");
        Ok(())
    }

    /// Removes every task of a project and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn delete_by_project(&self, project_id: ProjectId) -> TaskServiceResult<usize> {
        Ok(self.take_project_tasks(project_id).await?.len())
    }

    /// Removes every task of a project, returning the removed records so a
    /// failed cascade can put them back.
    pub(crate) async fn take_project_tasks(
        &self,
        project_id: ProjectId,
    ) -> TaskServiceResult<Vec<Task>> {
        let removed = self.repository.delete_by_project(project_id).await?;
        debug!("deleted {} tasks of project {project_id}", removed.len());
        Ok(removed)
    }

    /// Stores previously removed tasks again, unchanged.
    ///
    /// Every task is attempted; the first failure is reported.
    pub(crate) async fn restore(&self, tasks: &[Task]) -> TaskServiceResult<()> {
        let mut first_error = None;
        for task in tasks {
            if let Err(err) = self.repository.store(task).await {
                warn!("failed to restore task {}: {err}", task.id());
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
        first_error.map_or(Ok(()), |err| Err(err.into()))
    }
}
