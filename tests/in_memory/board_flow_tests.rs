//! Board views and drag reassignment over stored tasks.

use super::helpers::{Services, services};
use rstest::rstest;
use taskboard::board::{
    BoardAction, BoardState, ColumnLabel, DragOutcome, GroupBy, MoveEvent, SortBy, TaskFilters,
    compute_columns, dispatch,
};
use taskboard::task::domain::{Task, TaskPriority, TaskStatus};

fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::title).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dragged_task_changes_column_on_the_next_board(services: Services) {
    let home = services.project("Home").await;
    let task = services
        .task(&home, "Fix tap", TaskPriority::Low, TaskStatus::ToDo)
        .await;

    let outcome = services
        .drag
        .handle_move(
            GroupBy::Priority,
            &MoveEvent::new(task.id(), "Low", "High", 0),
        )
        .await
        .expect("drag should succeed");
    assert!(matches!(outcome, DragOutcome::Reassigned(ref moved) if moved.priority() == TaskPriority::High));

    let tasks = services
        .tasks
        .list_by_project(home.id())
        .await
        .expect("list should succeed");
    let board = compute_columns(&tasks, GroupBy::Priority, &TaskFilters::new(), SortBy::Created);
    let high = board
        .tasks_in(ColumnLabel::Priority(TaskPriority::High))
        .expect("priority board has a High column");
    let low = board
        .tasks_in(ColumnLabel::Priority(TaskPriority::Low))
        .expect("priority board has a Low column");
    assert_eq!(titles(high), ["Fix tap"]);
    assert!(low.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_drag_into_done_keeps_priority(services: Services) {
    let home = services.project("Home").await;
    let task = services
        .task(&home, "Dishes", TaskPriority::High, TaskStatus::InProgress)
        .await;

    services
        .drag
        .handle_move(
            GroupBy::Status,
            &MoveEvent::new(task.id(), "In Progress", "Done", 0),
        )
        .await
        .expect("drag should succeed");

    let stored = services.tasks.get(task.id()).await.expect("task exists");
    assert_eq!(stored.status(), TaskStatus::Done);
    assert_eq!(stored.priority(), TaskPriority::High);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_follows_the_selected_project(services: Services) {
    let home = services.project("Home").await;
    let work = services.project("Work").await;
    services
        .task(&home, "Dishes", TaskPriority::Medium, TaskStatus::ToDo)
        .await;
    services
        .task(&work, "Report", TaskPriority::High, TaskStatus::ToDo)
        .await;
    let tasks = services.tasks.list().await.expect("list should succeed");

    let state = dispatch(&BoardState::default(), BoardAction::ProjectCreated(work.id()));
    let board = state.columns(&tasks);

    assert_eq!(board.total(), 1);
    let high = board
        .tasks_in(ColumnLabel::Priority(TaskPriority::High))
        .expect("priority board has a High column");
    assert_eq!(titles(high), ["Report"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_filter_ignores_case(services: Services) {
    let home = services.project("Home").await;
    services
        .task(&home, "Buy milk", TaskPriority::Low, TaskStatus::ToDo)
        .await;
    services
        .task(&home, "Call plumber", TaskPriority::High, TaskStatus::ToDo)
        .await;
    let tasks = services.tasks.list().await.expect("list should succeed");

    let board = compute_columns(
        &tasks,
        GroupBy::Status,
        &TaskFilters::new().with_search("MILK"),
        SortBy::Priority,
    );

    assert_eq!(board.total(), 1);
    let to_do = board
        .tasks_in(ColumnLabel::Status(TaskStatus::ToDo))
        .expect("status board has a To Do column");
    assert_eq!(titles(to_do), ["Buy milk"]);
}
