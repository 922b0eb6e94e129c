//! Authentication
//!
//! Bearer-token middleware for the admin moderation routes.

pub mod admin;

pub use admin::{admin_auth_middleware, hash_admin_key};
