//! Unit tests for the project module.

mod service_tests;
