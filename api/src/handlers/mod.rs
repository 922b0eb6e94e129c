//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod moderation;
pub mod stories;

pub use moderation::{get_story_admin, list_queue, moderate_story};
pub use stories::{get_story, list_published, submit_story};
