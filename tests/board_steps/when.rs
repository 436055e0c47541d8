//! When steps for board behaviour scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::board::{GroupBy, MoveEvent};
use taskboard::task::domain::TaskDraft;

#[when(r#""{title}" is dragged from "{source}" to "{destination}" grouped by "{group_by}""#)]
fn drag_task(
    world: &mut BoardWorld,
    title: String,
    source: String,
    destination: String,
    group_by: String,
) -> Result<(), eyre::Report> {
    let group_by: GroupBy = group_by
        .parse()
        .map_err(|err| eyre::eyre!("invalid group-by in scenario: {err}"))?;
    let id = world.task(&title)?.id();

    let result = run_async(
        world
            .drag
            .handle_move(group_by, &MoveEvent::new(id, source, destination, 0)),
    );
    world.last_drag = Some(result);
    Ok(())
}

#[when(r#"project "{name}" is deleted"#)]
fn delete_project(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let project = world
        .projects_by_name
        .get(&name)
        .ok_or_else(|| eyre::eyre!("no project named {name} in scenario world"))?;
    let deletion =
        run_async(world.projects.delete(project.id())).wrap_err("delete project in scenario")?;
    world.last_deletion = Some(deletion);
    Ok(())
}

#[when("a task with a blank title is created")]
fn create_blank_task(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let project = world
        .current_project
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing current project in scenario world"))?;
    world.last_create = Some(run_async(
        world.tasks.create(TaskDraft::new(project.id(), "   ")),
    ));
    Ok(())
}
