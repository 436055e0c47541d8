//! Project deletion and task ownership.

use super::helpers::{Services, services};
use rstest::rstest;
use taskboard::project::services::ProjectServiceError;
use taskboard::project::domain::ProjectPatch;
use taskboard::task::domain::{TaskPriority, TaskStatus};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_project_leaves_other_projects_untouched(services: Services) {
    let home = services.project("Home").await;
    let work = services.project("Work").await;
    for title in ["Dishes", "Laundry", "Vacuum"] {
        services
            .task(&home, title, TaskPriority::Medium, TaskStatus::ToDo)
            .await;
    }
    let report = services
        .task(&work, "Report", TaskPriority::High, TaskStatus::InProgress)
        .await;

    let deletion = services
        .projects
        .delete(home.id())
        .await
        .expect("deletion should succeed");

    assert_eq!(deletion.removed_tasks, 3);
    let remaining = services.tasks.list().await.expect("list should succeed");
    assert_eq!(remaining, vec![report]);
    let projects = services.projects.list().await.expect("list should succeed");
    assert_eq!(projects, vec![work]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_missing_project_reports_not_found(services: Services) {
    let home = services.project("Home").await;
    services
        .projects
        .delete(home.id())
        .await
        .expect("first deletion should succeed");

    let result = services.projects.delete(home.id()).await;

    assert!(matches!(result, Err(ProjectServiceError::NotFound(id)) if id == home.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn renaming_a_project_keeps_its_tasks(services: Services) {
    let home = services.project("Home").await;
    let task = services
        .task(&home, "Dishes", TaskPriority::Medium, TaskStatus::ToDo)
        .await;

    let renamed = services
        .projects
        .update(home.id(), ProjectPatch::new().with_name("House"))
        .await
        .expect("rename should succeed");

    assert_eq!(renamed.name(), "House");
    assert_eq!(renamed.created_at(), home.created_at());
    let tasks = services
        .tasks
        .list_by_project(home.id())
        .await
        .expect("list should succeed");
    assert_eq!(tasks, vec![task]);
}
