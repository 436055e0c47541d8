//! Persistence adapters for the task module.
//!
//! - [`memory::InMemoryTaskRepository`]: thread-safe in-memory storage
//! - [`postgres::PostgresTaskRepository`]: `PostgreSQL` persistence using
//!   Diesel
//!
//! The local state directory adapter lives in [`crate::local`] because it
//! serves projects and tasks from one snapshot.

pub mod memory;
pub mod postgres;
