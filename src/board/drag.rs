//! Drag-and-drop reassignment of a task between board columns.
//!
//! A drop changes exactly one field: the group-by field of the dragged task.
//! The drop position inside the destination column is not persisted; the
//! task settles wherever the active sort places it on the next recompute.

use super::sync::ResponseGate;
use super::view::{ColumnLabel, GroupBy};
use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskPatch},
    ports::TaskRepository,
    services::{TaskService, TaskServiceError},
};
use log::debug;
use mockable::Clock;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A drop reported by the drag gesture layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveEvent {
    /// The dragged task.
    pub task_id: TaskId,
    /// Label of the column the task was dragged from.
    pub source_column: String,
    /// Label of the column the task was dropped on.
    pub destination_column: String,
    /// Drop position inside the destination column; informational only.
    #[serde(default)]
    pub destination_index: usize,
}

impl MoveEvent {
    /// Creates a move event.
    #[must_use]
    pub fn new(
        task_id: TaskId,
        source_column: impl Into<String>,
        destination_column: impl Into<String>,
        destination_index: usize,
    ) -> Self {
        Self {
            task_id,
            source_column: source_column.into(),
            destination_column: destination_column.into(),
            destination_index,
        }
    }
}

/// Result of handling a drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "task", rename_all = "camelCase")]
pub enum DragOutcome {
    /// The task already sits in the destination column; nothing was written.
    Unchanged,
    /// The task's group-by field was updated.
    Reassigned(Task),
    /// The task no longer exists; the drop was discarded.
    Dropped(TaskId),
    /// A newer move of the same task started while this one was being
    /// written. The newer move's result is the one to apply.
    Superseded(TaskId),
}

/// Errors raised while handling a drop.
#[derive(Debug, Error)]
pub enum DragError {
    /// The destination label does not belong to the group-by field.
    #[error(transparent)]
    InvalidColumn(#[from] TaskDomainError),
    /// The task store failed.
    #[error(transparent)]
    Store(TaskServiceError),
}

/// Tracks in-flight moves per task so late responses can be recognised.
pub type MoveGate = Arc<Mutex<ResponseGate<TaskId>>>;

/// Translates drops into task updates.
pub struct DragReassignmentService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    tasks: TaskService<R, C>,
    gate: MoveGate,
}

impl<R, C> Clone for DragReassignmentService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
            gate: Arc::clone(&self.gate),
        }
    }
}

impl<R, C> DragReassignmentService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a reassignment service writing through `tasks`.
    #[must_use]
    pub fn new(tasks: TaskService<R, C>) -> Self {
        Self::with_gate(tasks, MoveGate::default())
    }

    /// Creates a reassignment service that shares `gate` with other
    /// handlers of the same board.
    #[must_use]
    pub const fn with_gate(tasks: TaskService<R, C>, gate: MoveGate) -> Self {
        Self { tasks, gate }
    }

    /// Handles a drop on a board grouped by `group_by`.
    ///
    /// Dropping a task back on its source column is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::InvalidColumn`] when the destination label is not
    /// a label of `group_by`, and [`DragError::Store`] when the update fails
    /// for a reason other than the task having disappeared.
    pub async fn handle_move(
        &self,
        group_by: GroupBy,
        event: &MoveEvent,
    ) -> Result<DragOutcome, DragError> {
        let destination = group_by.parse_label(&event.destination_column)?;
        if group_by.parse_label(&event.source_column).ok() == Some(destination) {
            return Ok(DragOutcome::Unchanged);
        }
        self.reassign(event.task_id, destination).await
    }

    /// Moves a task into the column `destination`.
    ///
    /// Issues at most one update. A task that already carries the label is
    /// left untouched, so repeating a move changes nothing. When another
    /// move of the same task starts before this one finishes, the result is
    /// reported as [`DragOutcome::Superseded`].
    ///
    /// # Errors
    ///
    /// Returns [`DragError::Store`] when reading or updating the task fails
    /// for a reason other than the task having disappeared.
    pub async fn reassign(
        &self,
        task_id: TaskId,
        destination: ColumnLabel,
    ) -> Result<DragOutcome, DragError> {
        let ticket = self.lock_gate().begin(task_id);
        let outcome = self.write_label(task_id, destination).await;
        let current = self.lock_gate().complete(&ticket);
        match outcome {
            Ok(DragOutcome::Reassigned(_)) if !current => {
                debug!("move of task {task_id} overtaken by a newer move");
                Ok(DragOutcome::Superseded(task_id))
            }
            other => other,
        }
    }

    fn lock_gate(&self) -> MutexGuard<'_, ResponseGate<TaskId>> {
        self.gate.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn write_label(
        &self,
        task_id: TaskId,
        destination: ColumnLabel,
    ) -> Result<DragOutcome, DragError> {
        let task = match self.tasks.get(task_id).await {
            Ok(task) => task,
            Err(TaskServiceError::NotFound(_)) => return Ok(dropped(task_id)),
            Err(err) => return Err(DragError::Store(err)),
        };

        let patch = match destination {
            ColumnLabel::Priority(priority) if task.priority() != priority => {
                TaskPatch::new().with_priority(priority)
            }
            ColumnLabel::Status(status) if task.status() != status => {
                TaskPatch::new().with_status(status)
            }
            _ => return Ok(DragOutcome::Unchanged),
        };

        match self.tasks.apply_patch(task, patch).await {
            Ok(updated) => {
                debug!("moved task {task_id} to column {destination}");
                Ok(DragOutcome::Reassigned(updated))
            }
            Err(TaskServiceError::NotFound(_)) => Ok(dropped(task_id)),
            Err(err) => Err(DragError::Store(err)),
        }
    }
}

fn dropped(task_id: TaskId) -> DragOutcome {
    debug!("discarding move of task {task_id}: task no longer exists");
    DragOutcome::Dropped(task_id)
}
