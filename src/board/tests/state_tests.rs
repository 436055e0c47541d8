//! Board state reducer tests.

use super::{TaskFixture, titles};
use crate::board::state::{BoardAction, BoardState, Theme, dispatch};
use crate::board::view::{ColumnLabel, GroupBy, SortBy};
use crate::project::domain::ProjectId;
use crate::task::domain::{TaskPriority, TaskStatus};
use rstest::rstest;

#[rstest]
fn default_state_groups_and_sorts_by_priority() {
    let state = BoardState::default();

    assert_eq!(state.group_by(), GroupBy::Priority);
    assert_eq!(state.sort_by(), SortBy::Priority);
    assert_eq!(state.theme(), Theme::Light);
    assert_eq!(state.selected_project(), None);
    assert!(state.filters().is_empty());
}

#[rstest]
fn restore_keeps_saved_selection_when_project_exists() {
    let first = ProjectId::new();
    let saved = ProjectId::new();

    let state = BoardState::restore(Some(saved), &[first, saved], Theme::Dark);

    assert_eq!(state.selected_project(), Some(saved));
    assert_eq!(state.theme(), Theme::Dark);
}

#[rstest]
#[case(Some(ProjectId::new()))]
#[case(None)]
fn restore_falls_back_to_first_project(#[case] saved: Option<ProjectId>) {
    let first = ProjectId::new();
    let state = BoardState::restore(saved, &[first, ProjectId::new()], Theme::Light);
    assert_eq!(state.selected_project(), Some(first));
}

#[rstest]
fn dispatch_does_not_mutate_the_previous_state() {
    let before = BoardState::default();
    let after = dispatch(&before, BoardAction::GroupBy(GroupBy::Status));

    assert_eq!(before.group_by(), GroupBy::Priority);
    assert_eq!(after.group_by(), GroupBy::Status);
}

#[rstest]
fn creating_a_project_selects_it() {
    let project_id = ProjectId::new();
    let state = dispatch(&BoardState::default(), BoardAction::ProjectCreated(project_id));
    assert_eq!(state.selected_project(), Some(project_id));
}

#[rstest]
fn deleting_the_selected_project_falls_back_to_another() {
    let doomed = ProjectId::new();
    let other = ProjectId::new();
    let state = dispatch(&BoardState::default(), BoardAction::SelectProject(Some(doomed)));

    let state = dispatch(
        &state,
        BoardAction::ProjectDeleted {
            project_id: doomed,
            remaining: vec![other],
        },
    );

    assert_eq!(state.selected_project(), Some(other));
}

#[rstest]
fn deleting_the_last_project_clears_the_selection() {
    let doomed = ProjectId::new();
    let state = dispatch(&BoardState::default(), BoardAction::SelectProject(Some(doomed)));

    let state = dispatch(
        &state,
        BoardAction::ProjectDeleted {
            project_id: doomed,
            remaining: Vec::new(),
        },
    );

    assert_eq!(state.selected_project(), None);
}

#[rstest]
fn deleting_another_project_keeps_the_selection() {
    let selected = ProjectId::new();
    let state = dispatch(&BoardState::default(), BoardAction::SelectProject(Some(selected)));

    let state = dispatch(
        &state,
        BoardAction::ProjectDeleted {
            project_id: ProjectId::new(),
            remaining: vec![selected],
        },
    );

    assert_eq!(state.selected_project(), Some(selected));
}

#[rstest]
fn clearing_filters_keeps_the_search_text() {
    let state = [
        BoardAction::Search("rent".to_owned()),
        BoardAction::FilterPriority(Some(TaskPriority::High)),
        BoardAction::FilterStatus(Some(TaskStatus::Done)),
        BoardAction::FilterAssignee(Some("alice".to_owned())),
        BoardAction::ClearFilters,
    ]
    .into_iter()
    .fold(BoardState::default(), |state, action| dispatch(&state, action));

    assert_eq!(state.filters().search.as_deref(), Some("rent"));
    assert_eq!(state.filters().priority, None);
    assert_eq!(state.filters().status, None);
    assert_eq!(state.filters().assignee, None);
}

#[rstest]
fn toggling_the_theme_twice_returns_to_light() {
    let once = dispatch(&BoardState::default(), BoardAction::ToggleTheme);
    let twice = dispatch(&once, BoardAction::ToggleTheme);

    assert_eq!(once.theme(), Theme::Dark);
    assert_eq!(twice.theme(), Theme::Light);
}

#[rstest]
fn sidebar_pin_is_tracked() {
    let state = dispatch(&BoardState::default(), BoardAction::PinSidebar(true));
    assert!(state.sidebar_pinned());
}

#[rstest]
fn columns_only_show_the_selected_project() {
    let mine = ProjectId::new();
    let tasks = vec![
        TaskFixture::new("mine", 0).project(mine).build(),
        TaskFixture::new("theirs", 1).project(ProjectId::new()).build(),
        TaskFixture::new("also mine", 2)
            .project(mine)
            .priority(TaskPriority::High)
            .build(),
    ];
    let state = dispatch(&BoardState::default(), BoardAction::SelectProject(Some(mine)));

    let board = state.columns(&tasks);

    assert_eq!(board.total(), 2);
    assert_eq!(
        board
            .tasks_in(ColumnLabel::Priority(TaskPriority::High))
            .map(titles),
        Some(vec!["also mine"])
    );
}

#[rstest]
fn columns_are_empty_without_a_selection() {
    let tasks = vec![TaskFixture::new("floating", 0).build()];
    assert_eq!(BoardState::default().columns(&tasks).total(), 0);
}

#[rstest]
fn theme_serialises_lowercase() {
    assert_eq!(
        serde_json::to_value(Theme::Dark).expect("serialise theme"),
        "dark"
    );
}
