//! Taskboard: a personal project and task tracker with a Kanban board.
//!
//! Tasks belong to projects and carry a priority, a status, an optional
//! assignee and an optional due date. The board groups tasks into columns by
//! priority or status, and a drag between columns rewrites exactly one
//! field of the dragged task.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: In-memory, `PostgreSQL` and local-file implementations
//!
//! # Modules
//!
//! - [`task`]: Task storage and validation
//! - [`project`]: Project storage and the delete cascade
//! - [`board`]: Column computation, drag reassignment and UI state
//! - [`local`]: Client-only persistence in a state directory
//! - [`http`]: REST API
//! - [`config`]: Server configuration
//! - [`persistence`]: Shared `PostgreSQL` pool and schema bootstrap

pub mod board;
pub mod config;
pub mod http;
pub mod local;
pub mod persistence;
pub mod project;
pub mod task;

#[cfg(test)]
mod test_support;
