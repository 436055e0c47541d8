//! Application services for task persistence orchestration.

mod store;

pub use store::{TaskService, TaskServiceError, TaskServiceResult};
