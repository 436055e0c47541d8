//! Persistence adapters for the project module.

pub mod memory;
pub mod postgres;
