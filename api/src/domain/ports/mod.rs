//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod redaction;
pub mod repositories;

pub use redaction::Redactor;
pub use repositories::StoryRepository;
