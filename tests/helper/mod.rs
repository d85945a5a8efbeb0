//! Shared helpers for integration tests

#![allow(dead_code)]

pub mod project;
pub mod source;

pub use project::{TestProject, cache_file, create_test_cache};
pub use source::MockSource;
