//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - Manual mocks are more explicit and easier to debug
//! - The in-memory repository doubles as a model of the store's
//!   per-record serialization, so concurrency behavior is testable

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
