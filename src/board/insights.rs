//! Board analytics: next-task suggestion and counters.

use crate::task::domain::{Task, TaskPriority, TaskStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// Suggests the next task to pick up: the highest-priority task still to
/// do, oldest first among equals.
#[must_use]
pub fn suggest_next(tasks: &[Task]) -> Option<&Task> {
    tasks
        .iter()
        .filter(|task| task.status() == TaskStatus::ToDo)
        .min_by_key(|task| (task.priority().rank(), task.created_at()))
}

/// Task counts for one board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    /// All tasks.
    pub total: usize,
    /// Tasks to do.
    pub to_do: usize,
    /// Tasks in progress.
    pub in_progress: usize,
    /// Finished tasks.
    pub done: usize,
    /// High-priority tasks.
    pub high: usize,
    /// Medium-priority tasks.
    pub medium: usize,
    /// Low-priority tasks.
    pub low: usize,
    /// Unfinished tasks whose due date lies before the reference day.
    pub overdue: usize,
}

/// Counts tasks per status and priority, and those overdue on `today`.
#[must_use]
pub fn summarize(tasks: &[Task], today: NaiveDate) -> BoardSummary {
    tasks.iter().fold(BoardSummary::default(), |mut summary, task| {
        summary.total += 1;
        match task.status() {
            TaskStatus::ToDo => summary.to_do += 1,
            TaskStatus::InProgress => summary.in_progress += 1,
            TaskStatus::Done => summary.done += 1,
        }
        match task.priority() {
            TaskPriority::High => summary.high += 1,
            TaskPriority::Medium => summary.medium += 1,
            TaskPriority::Low => summary.low += 1,
        }
        if task.is_overdue(today) {
            summary.overdue += 1;
        }
        summary
    })
}
