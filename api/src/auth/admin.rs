//! Admin bearer-token authentication middleware

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use sha2::{Digest, Sha256};

use crate::error::AppError;
use crate::AppState;

/// Extract the bearer token from the Authorization header
fn extract_bearer_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Hash an admin key for comparison and storage
pub fn hash_admin_key(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    hex::encode(hasher.finalize())
}

/// Admin authentication middleware
///
/// Validates the bearer token against the configured admin key. The
/// moderation routes are mounted behind this middleware.
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(&request).ok_or(AppError::Unauthorized)?;

    // Compare digests rather than the raw keys
    if hash_admin_key(token) != state.admin_key_hash {
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
