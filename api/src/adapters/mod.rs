//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod postgres;
pub mod redaction;

pub use postgres::PostgresStoryRepository;
pub use redaction::NoopRedactor;
