//! Service layer for project management, including the delete cascade.

use crate::project::{
    domain::{Project, ProjectDomainError, ProjectDraft, ProjectId, ProjectPatch},
    ports::{ProjectRepository, ProjectRepositoryError},
};
use crate::task::{
    ports::TaskRepository,
    services::{TaskService, TaskServiceError},
};
use log::{debug, info, warn};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for project operations.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    /// Input validation failed; nothing was written.
    #[error(transparent)]
    Validation(#[from] ProjectDomainError),
    /// The project does not exist.
    #[error("project not found: {0}")]
    NotFound(ProjectId),
    /// Project repository operation failed.
    #[error(transparent)]
    Repository(ProjectRepositoryError),
    /// Removing or restoring the project's tasks failed.
    #[error("task cascade failed: {0}")]
    Cascade(#[from] TaskServiceError),
}

impl From<ProjectRepositoryError> for ProjectServiceError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for project service operations.
pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;

/// Outcome of deleting a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectDeletion {
    /// The removed project.
    pub project_id: ProjectId,
    /// How many tasks were removed with it.
    pub removed_tasks: usize,
}

/// Project store: CRUD over projects plus the cascade into tasks.
pub struct ProjectService<P, T, C>
where
    P: ProjectRepository + ?Sized,
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<P>,
    tasks: TaskService<T, C>,
    clock: Arc<C>,
}

impl<P, T, C> Clone for ProjectService<P, T, C>
where
    P: ProjectRepository + ?Sized,
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            tasks: self.tasks.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<P, T, C> ProjectService<P, T, C>
where
    P: ProjectRepository + ?Sized,
    T: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new project service.
    #[must_use]
    pub const fn new(repository: Arc<P>, tasks: TaskService<T, C>, clock: Arc<C>) -> Self {
        Self {
            repository,
            tasks,
            clock,
        }
    }

    /// Returns every project, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] when the lookup fails.
    pub async fn list(&self) -> ProjectServiceResult<Vec<Project>> {
        Ok(self.repository.list().await?)
    }

    /// Returns the projects whose name contains `query`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] when the lookup fails.
    pub async fn search(&self, query: &str) -> ProjectServiceResult<Vec<Project>> {
        let projects = self.repository.list().await?;
        Ok(projects
            .into_iter()
            .filter(|project| project.name_matches(query))
            .collect())
    }

    /// Fetches one project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when the project does not
    /// exist.
    pub async fn get(&self, id: ProjectId) -> ProjectServiceResult<Project> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProjectServiceError::NotFound(id))
    }

    /// Creates a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Validation`] when the name is blank.
    pub async fn create(&self, draft: ProjectDraft) -> ProjectServiceResult<Project> {
        let project = Project::create(draft, &*self.clock)?;
        self.repository.store(&project).await?;
        debug!("created project {}", project.id());
        Ok(project)
    }

    /// Applies a field-level update to a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when the project does not
    /// exist and [`ProjectServiceError::Validation`] when the patch is
    /// invalid.
    pub async fn update(&self, id: ProjectId, patch: ProjectPatch) -> ProjectServiceResult<Project> {
        let mut project = self.get(id).await?;
        project.apply(patch)?;
        self.repository.update(&project).await?;
        debug!("updated project {id}");
        Ok(project)
    }

    /// Deletes a project together with all of its tasks.
    ///
    /// Tasks are removed first. If the project record cannot be removed
    /// afterwards, the tasks are stored again so the cascade is observed
    /// completely or not at all.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::NotFound`] when the project does not
    /// exist, [`ProjectServiceError::Cascade`] when task removal fails, and
    /// the project repository error when the final removal fails.
    pub async fn delete(&self, id: ProjectId) -> ProjectServiceResult<ProjectDeletion> {
        self.get(id).await?;
        let removed = self.tasks.take_project_tasks(id).await?;

        if let Err(err) = self.repository.delete(id).await {
            warn!(
                "restoring {} tasks after failed delete of project {id}: {err}",
                removed.len()
            );
            self.tasks.restore(&removed).await?;
            return Err(err.into());
        }

        info!("deleted project {id} and {} tasks", removed.len());
        Ok(ProjectDeletion {
            project_id: id,
            removed_tasks: removed.len(),
        })
    }
}
