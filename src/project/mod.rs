//! Project storage for the tracker.
//!
//! Projects own tasks by reference; deleting a project removes its tasks in
//! the same logical action. Layout mirrors [`crate::task`]:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
