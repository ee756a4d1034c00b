//! Node integration tests
//!
//! Tests are organized by capability group: navigation, mutation,
//! iteration and merging.

mod navigation_tests;
