//! In-memory repository integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `board_flow_tests`: Board views and drag reassignment over stored tasks
//! - `project_cascade_tests`: Project deletion and task ownership

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod in_memory {
    pub mod helpers;

    mod board_flow_tests;
    mod project_cascade_tests;
}
