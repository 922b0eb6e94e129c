//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod story_repo;

pub use story_repo::PostgresStoryRepository;
