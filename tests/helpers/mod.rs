// Shared fixtures for unit and integration tests
//
// Usage from a test target:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;

#![allow(dead_code)]

pub mod test_database;

pub use test_data::*;
