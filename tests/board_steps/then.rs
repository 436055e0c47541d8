//! Then steps for board behaviour scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use taskboard::board::{DragError, DragOutcome};
use taskboard::task::domain::{Task, TaskDomainError, TaskPriority};
use taskboard::task::services::TaskServiceError;

fn current(world: &BoardWorld, title: &str) -> Result<Task, eyre::Report> {
    let id = world.task(title)?.id();
    run_async(world.tasks.get(id)).wrap_err("fetch task for assertion")
}

#[then(r#"task "{title}" has priority "{priority}""#)]
fn task_has_priority(
    world: &BoardWorld,
    title: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let expected: TaskPriority = priority
        .parse()
        .map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))?;
    let task = current(world, &title)?;
    if task.priority() != expected {
        return Err(eyre::eyre!(
            "expected priority {expected}, found {}",
            task.priority()
        ));
    }
    Ok(())
}

#[then(r#"task "{title}" keeps its creation time"#)]
fn task_keeps_creation_time(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let before = world.task(&title)?;
    let after = current(world, &title)?;
    if after.updated_at() < before.updated_at() {
        return Err(eyre::eyre!(
            "expected updated_at not to move backwards from {}, found {}",
            before.updated_at(),
            after.updated_at()
        ));
    }
    if after.created_at() != before.created_at() {
        return Err(eyre::eyre!("created_at changed during the drag"));
    }
    Ok(())
}

#[then("the last drag left the board unchanged")]
fn drag_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_drag.as_ref() {
        Some(Ok(DragOutcome::Unchanged)) => Ok(()),
        other => Err(eyre::eyre!("expected an unchanged outcome, got {other:?}")),
    }
}

#[then("the drag fails with an invalid column error")]
fn drag_invalid_column(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_drag.as_ref() {
        Some(Err(DragError::InvalidColumn(_))) => Ok(()),
        other => Err(eyre::eyre!("expected an invalid column error, got {other:?}")),
    }
}

#[then("the drag was discarded")]
fn drag_discarded(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_drag.as_ref() {
        Some(Ok(DragOutcome::Dropped(_))) => Ok(()),
        other => Err(eyre::eyre!("expected a dropped outcome, got {other:?}")),
    }
}

#[then("{count:usize} tasks were removed with the project")]
fn tasks_removed(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let deletion = world
        .last_deletion
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing project deletion"))?;
    if deletion.removed_tasks != count {
        return Err(eyre::eyre!(
            "expected {count} removed tasks, found {}",
            deletion.removed_tasks
        ));
    }
    Ok(())
}

#[then(r#"the only remaining task is "{title}""#)]
fn only_remaining_task(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let tasks = run_async(world.tasks.list()).wrap_err("list tasks")?;
    let titles: Vec<&str> = tasks.iter().map(Task::title).collect();
    if titles != [title.as_str()] {
        return Err(eyre::eyre!("expected only {title}, found {titles:?}"));
    }
    Ok(())
}

#[then(r#"the only remaining project is "{name}""#)]
fn only_remaining_project(world: &BoardWorld, name: String) -> Result<(), eyre::Report> {
    let projects = run_async(world.projects.list()).wrap_err("list projects")?;
    let names: Vec<&str> = projects.iter().map(|project| project.name()).collect();
    if names != [name.as_str()] {
        return Err(eyre::eyre!("expected only {name}, found {names:?}"));
    }
    Ok(())
}

#[then("the task creation fails with a validation error")]
fn creation_fails(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_create.as_ref() {
        Some(Err(TaskServiceError::Validation(TaskDomainError::EmptyTitle))) => Ok(()),
        other => Err(eyre::eyre!("expected an empty title error, got {other:?}")),
    }
}

#[then("no tasks are listed")]
fn no_tasks_listed(world: &BoardWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.tasks.list()).wrap_err("list tasks")?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected no tasks, found {}", tasks.len()));
    }
    Ok(())
}
