//! Service orchestration tests for projects and the delete cascade.

use std::sync::Arc;

use crate::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::{Project, ProjectDomainError, ProjectDraft, ProjectId, ProjectPatch},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
    services::{ProjectService, ProjectServiceError},
};
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::TaskDraft,
    ports::TaskRepository,
    services::TaskService,
};
use crate::test_support::ManualClock;
use async_trait::async_trait;
use chrono::Duration;
use mockall::mock;
use rstest::{fixture, rstest};

mock! {
    ProjectRepo {}

    #[async_trait]
    impl ProjectRepository for ProjectRepo {
        async fn store(&self, project: &Project) -> ProjectRepositoryResult<()>;
        async fn update(&self, project: &Project) -> ProjectRepositoryResult<()>;
        async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>>;
        async fn list(&self) -> ProjectRepositoryResult<Vec<Project>>;
        async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()>;
    }
}

struct Harness {
    projects: ProjectService<InMemoryProjectRepository, InMemoryTaskRepository, ManualClock>,
    tasks: TaskService<InMemoryTaskRepository, ManualClock>,
    task_repository: Arc<InMemoryTaskRepository>,
    clock: Arc<ManualClock>,
}

#[fixture]
fn harness() -> Harness {
    let clock = Arc::new(ManualClock::default());
    let task_repository = Arc::new(InMemoryTaskRepository::new());
    let tasks = TaskService::new(Arc::clone(&task_repository), Arc::clone(&clock));
    Harness {
        projects: ProjectService::new(
            Arc::new(InMemoryProjectRepository::new()),
            tasks.clone(),
            Arc::clone(&clock),
        ),
        tasks,
        task_repository,
        clock,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_list_returns_oldest_first(harness: Harness) {
    let first = harness
        .projects
        .create(ProjectDraft::new("Alpha"))
        .await
        .expect("project creation should succeed");
    harness.clock.advance(Duration::seconds(1));
    let second = harness
        .projects
        .create(ProjectDraft::new("Beta"))
        .await
        .expect("project creation should succeed");

    let listed = harness.projects.list().await.expect("list should succeed");

    assert_eq!(listed, vec![first, second]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_with_blank_name_is_rejected(harness: Harness) {
    let result = harness.projects.create(ProjectDraft::new("  ")).await;

    assert!(matches!(
        result,
        Err(ProjectServiceError::Validation(ProjectDomainError::EmptyName))
    ));
    assert!(harness.projects.list().await.expect("list").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_matches_substrings_ignoring_case(harness: Harness) {
    for name in ["Home chores", "Work", "Homework"] {
        harness
            .projects
            .create(ProjectDraft::new(name))
            .await
            .expect("project creation should succeed");
    }

    let found = harness.projects.search("HOME").await.expect("search");

    let mut names: Vec<&str> = found.iter().map(Project::name).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Home chores", "Homework"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_renames_project(harness: Harness) {
    let project = harness
        .projects
        .create(ProjectDraft::new("Draft"))
        .await
        .expect("project creation should succeed");

    let renamed = harness
        .projects
        .update(project.id(), ProjectPatch::new().with_name("Final"))
        .await
        .expect("update should succeed");

    assert_eq!(renamed.name(), "Final");
    assert_eq!(
        harness.projects.get(project.id()).await.expect("get"),
        renamed
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_missing_project_is_not_found(harness: Harness) {
    let result = harness
        .projects
        .update(ProjectId::new(), ProjectPatch::new().with_name("x"))
        .await;
    assert!(matches!(result, Err(ProjectServiceError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_cascades_to_owned_tasks_only(harness: Harness) {
    let doomed = harness
        .projects
        .create(ProjectDraft::new("Doomed"))
        .await
        .expect("project creation should succeed");
    let kept = harness
        .projects
        .create(ProjectDraft::new("Kept"))
        .await
        .expect("project creation should succeed");
    for title in ["T1", "T2"] {
        harness
            .tasks
            .create(TaskDraft::new(doomed.id(), title))
            .await
            .expect("task creation should succeed");
    }
    let survivor = harness
        .tasks
        .create(TaskDraft::new(kept.id(), "T3"))
        .await
        .expect("task creation should succeed");

    let deletion = harness
        .projects
        .delete(doomed.id())
        .await
        .expect("delete should succeed");

    assert_eq!(deletion.removed_tasks, 2);
    assert_eq!(harness.projects.list().await.expect("list"), vec![kept]);
    assert_eq!(harness.tasks.list().await.expect("list"), vec![survivor]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_of_missing_project_leaves_tasks_alone(harness: Harness) {
    let missing = ProjectId::new();
    harness
        .tasks
        .create(TaskDraft::new(missing, "stray"))
        .await
        .expect("task creation should succeed");

    let result = harness.projects.delete(missing).await;

    assert!(matches!(result, Err(ProjectServiceError::NotFound(id)) if id == missing));
    assert_eq!(harness.task_repository.list().await.expect("list").len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_project_removal_restores_its_tasks() {
    let clock = Arc::new(ManualClock::default());
    let project = Project::create(ProjectDraft::new("Flaky"), &*clock).expect("valid draft");
    let project_id = project.id();

    let mut repository = MockProjectRepo::new();
    repository
        .expect_find_by_id()
        .returning(move |_| Ok(Some(project.clone())));
    repository.expect_delete().times(1).returning(|_| {
        Err(ProjectRepositoryError::persistence(std::io::Error::other(
            "disk full",
        )))
    });

    let task_repository = Arc::new(InMemoryTaskRepository::new());
    let tasks = TaskService::new(Arc::clone(&task_repository), Arc::clone(&clock));
    let created = tasks
        .create(TaskDraft::new(project_id, "Survives"))
        .await
        .expect("task creation should succeed");
    let service = ProjectService::new(Arc::new(repository), tasks, clock);

    let result = service.delete(project_id).await;

    assert!(matches!(result, Err(ProjectServiceError::Repository(_))));
    let remaining = task_repository.list().await.expect("list");
    assert_eq!(remaining, vec![created]);
}
