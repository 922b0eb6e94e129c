//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `moderation`: The status transition table driven by admin actions
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod moderation;
pub mod ports;

pub use moderation::ModerationAction;
