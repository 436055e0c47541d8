//! Given steps for board behaviour scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::project::domain::ProjectDraft;
use taskboard::task::domain::{TaskDraft, TaskPriority};

#[given(r#"a project named "{name}""#)]
fn project_named(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let project = run_async(world.projects.create(ProjectDraft::new(name.clone())))
        .wrap_err("create project for scenario")?;
    world.current_project = Some(project.clone());
    world.projects_by_name.insert(name, project);
    Ok(())
}

#[given(r#"a task "{title}" with priority "{priority}""#)]
fn task_with_priority(
    world: &mut BoardWorld,
    title: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let project = world
        .current_project
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing current project in scenario world"))?;
    let priority: TaskPriority = priority
        .parse()
        .map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))?;
    let task = run_async(
        world
            .tasks
            .create(TaskDraft::new(project.id(), title.clone()).with_priority(priority)),
    )
    .wrap_err("create task for scenario")?;
    world.tasks_by_title.insert(title, task);
    Ok(())
}

#[given(r#"task "{title}" has been deleted"#)]
fn task_deleted(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task(&title)?.id();
    run_async(world.tasks.delete(id)).wrap_err("delete task for scenario")?;
    Ok(())
}
