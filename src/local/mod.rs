//! Client-only persistence: projects, tasks, the selected project and the
//! theme saved as JSON files in a local state directory.

pub mod store;
pub mod workspace;

pub use store::{LocalSnapshot, LocalStateError, LocalStateStore};
pub use workspace::LocalWorkspace;
