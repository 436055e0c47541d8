//! Repository adapter that mirrors projects and tasks into local state files.

use super::store::{
    LocalStateError, LocalStateStore, PROJECTS_KEY, SELECTED_PROJECT_KEY, TASKS_KEY, THEME_KEY,
};
use crate::board::BoardState;
use crate::project::adapters::memory::sort_oldest_first as sort_projects;
use crate::project::{
    domain::{Project, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};
use crate::task::adapters::memory::sort_oldest_first as sort_tasks;
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Collections {
    projects: HashMap<ProjectId, Project>,
    tasks: HashMap<TaskId, Task>,
}

impl Collections {
    fn sorted_projects(&self) -> Vec<Project> {
        let mut projects: Vec<Project> = self.projects.values().cloned().collect();
        sort_projects(&mut projects);
        projects
    }

    fn sorted_tasks(&self) -> Vec<Task> {
        let mut tasks: Vec<Task> = self.tasks.values().cloned().collect();
        sort_tasks(&mut tasks);
        tasks
    }
}

/// Project and task repository backed by a [`LocalStateStore`].
///
/// Every change rewrites the affected collection file. A failed disk write
/// is logged and returned, but the in-memory change stays in place; it
/// reaches the disk with the next successful write of that collection.
#[derive(Debug, Clone)]
pub struct LocalWorkspace {
    store: Arc<LocalStateStore>,
    state: Arc<Mutex<Collections>>,
}

impl LocalWorkspace {
    /// Loads the projects and tasks currently saved in `store`.
    ///
    /// # Errors
    ///
    /// Returns [`LocalStateError`] when the saved files cannot be read.
    pub fn load(store: LocalStateStore) -> Result<Self, LocalStateError> {
        let snapshot = store.load_snapshot()?;
        let collections = Collections {
            projects: snapshot
                .projects
                .into_iter()
                .map(|project| (project.id(), project))
                .collect(),
            tasks: snapshot
                .tasks
                .into_iter()
                .map(|task| (task.id(), task))
                .collect(),
        };
        debug!(
            "loaded {} projects and {} tasks from local state",
            collections.projects.len(),
            collections.tasks.len()
        );
        Ok(Self {
            store: Arc::new(store),
            state: Arc::new(Mutex::new(collections)),
        })
    }

    /// Rebuilds the board state saved by [`Self::save_board`].
    ///
    /// A saved selection pointing at a project that no longer exists falls
    /// back to the oldest project.
    ///
    /// # Errors
    ///
    /// Returns [`LocalStateError`] when the selection or theme file cannot be
    /// read.
    pub fn restore_board(&self) -> Result<BoardState, LocalStateError> {
        let selection = self
            .store
            .load::<Option<ProjectId>>(SELECTED_PROJECT_KEY)?
            .flatten();
        let theme = self.store.load(THEME_KEY)?.unwrap_or_default();
        let projects: Vec<ProjectId> = self
            .lock()?
            .sorted_projects()
            .iter()
            .map(Project::id)
            .collect();
        Ok(BoardState::restore(selection, &projects, theme))
    }

    /// Saves the selected project and theme of `board`.
    ///
    /// # Errors
    ///
    /// Returns [`LocalStateError`] when either file cannot be written.
    pub fn save_board(&self, board: &BoardState) -> Result<(), LocalStateError> {
        self.store.save_selected_project(board.selected_project())?;
        self.store.save_theme(board.theme())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collections>, std::io::Error> {
        self.state
            .lock()
            .map_err(|err| std::io::Error::other(err.to_string()))
    }

    fn persist_projects(&self, state: &Collections) -> ProjectRepositoryResult<()> {
        self.store
            .save(PROJECTS_KEY, &state.sorted_projects())
            .map_err(|err| {
                warn!("projects kept in memory but not saved: {err}");
                ProjectRepositoryError::persistence(err)
            })
    }

    fn persist_tasks(&self, state: &Collections) -> TaskRepositoryResult<()> {
        self.store
            .save(TASKS_KEY, &state.sorted_tasks())
            .map_err(|err| {
                warn!("tasks kept in memory but not saved: {err}");
                TaskRepositoryError::persistence(err)
            })
    }
}

#[async_trait]
impl ProjectRepository for LocalWorkspace {
    async fn store(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.lock().map_err(ProjectRepositoryError::persistence)?;
        if state.projects.contains_key(&project.id()) {
            return Err(ProjectRepositoryError::DuplicateProject(project.id()));
        }
        state.projects.insert(project.id(), project.clone());
        self.persist_projects(&state)
    }

    async fn update(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.lock().map_err(ProjectRepositoryError::persistence)?;
        let Some(stored) = state.projects.get_mut(&project.id()) else {
            return Err(ProjectRepositoryError::NotFound(project.id()));
        };
        *stored = project.clone();
        self.persist_projects(&state)
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.lock().map_err(ProjectRepositoryError::persistence)?;
        Ok(state.projects.get(&id).cloned())
    }

    async fn list(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.lock().map_err(ProjectRepositoryError::persistence)?;
        Ok(state.sorted_projects())
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        let mut state = self.lock().map_err(ProjectRepositoryError::persistence)?;
        if state.projects.remove(&id).is_none() {
            return Err(ProjectRepositoryError::NotFound(id));
        }
        self.persist_projects(&state)
    }
}

#[async_trait]
impl TaskRepository for LocalWorkspace {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.lock().map_err(TaskRepositoryError::persistence)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        self.persist_tasks(&state)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.lock().map_err(TaskRepositoryError::persistence)?;
        let Some(stored) = state.tasks.get_mut(&task.id()) else {
            return Err(TaskRepositoryError::NotFound(task.id()));
        };
        *stored = task.clone();
        self.persist_tasks(&state)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.lock().map_err(TaskRepositoryError::persistence)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.lock().map_err(TaskRepositoryError::persistence)?;
        Ok(state.sorted_tasks())
    }

    async fn list_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.lock().map_err(TaskRepositoryError::persistence)?;
        let mut tasks = state.sorted_tasks();
        tasks.retain(|task| task.project_id() == project_id);
        Ok(tasks)
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.lock().map_err(TaskRepositoryError::persistence)?;
        if state.tasks.remove(&id).is_none() {
            return Err(TaskRepositoryError::NotFound(id));
        }
        self.persist_tasks(&state)
    }

    async fn delete_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        let mut state = self.lock().map_err(TaskRepositoryError::persistence)?;
        let doomed: Vec<TaskId> = state
            .tasks
            .values()
            .filter(|task| task.project_id() == project_id)
            .map(Task::id)
            .collect();
        let mut removed: Vec<Task> = doomed
            .iter()
            .filter_map(|id| state.tasks.remove(id))
            .collect();
        if removed.is_empty() {
            return Ok(removed);
        }
        self.persist_tasks(&state)?;
        sort_tasks(&mut removed);
        Ok(removed)
    }
}
