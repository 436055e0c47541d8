//! Board presentation logic.
//!
//! - [`view`]: filter, sort and group tasks into columns
//! - [`drag`]: turn a drop into a single task update
//! - [`state`]: immutable UI state and its reducer
//! - [`sync`]: discard responses superseded by newer mutations
//! - [`insights`]: next-task suggestion and counters
//!
//! Everything except [`drag`] is pure and synchronous.

pub mod drag;
pub mod insights;
pub mod state;
pub mod sync;
pub mod view;

pub use drag::{DragError, DragOutcome, DragReassignmentService, MoveEvent, MoveGate};
pub use insights::{BoardSummary, summarize, suggest_next};
pub use state::{BoardAction, BoardState, Theme, dispatch};
pub use sync::{ResponseGate, WriteTicket};
pub use view::{
    BoardColumns, Column, ColumnLabel, GroupBy, SortBy, TaskFilters, compute_columns,
};

#[cfg(test)]
mod tests;
