//! Admin moderation handlers
//!
//! The moderation queue and the action endpoint. All routes here sit behind
//! the admin auth middleware.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{StoryId, StoryStatus};
use crate::domain::moderation::ModerationAction;
use crate::domain::ports::StoryRepository;
use crate::error::AppError;
use crate::handlers::stories::StoryResponse;
use crate::AppState;

const MAX_PAGE_SIZE: u64 = 100;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for the moderation queue
#[derive(Debug, Deserialize)]
pub struct QueueQuery {
    /// Status filter (pending, approved, rejected, published)
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

fn default_status() -> String {
    "pending".to_string()
}

fn default_limit() -> u64 {
    20
}

/// Moderation queue response
#[derive(Debug, Serialize)]
pub struct QueueResponse {
    pub status: StoryStatus,
    /// Total number of stories with this status
    pub total: u64,
    pub stories: Vec<StoryResponse>,
}

/// Request body for a moderation action
#[derive(Debug, Deserialize)]
pub struct ModerateRequest {
    pub action: ModerationAction,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /admin/stories
///
/// List the moderation queue for a status (pending by default).
pub async fn list_queue(
    State(state): State<AppState>,
    Query(query): Query<QueueQuery>,
) -> Result<Json<QueueResponse>, AppError> {
    let status: StoryStatus = query
        .status
        .parse()
        .map_err(AppError::BadRequest)?;
    let limit = query.limit.min(MAX_PAGE_SIZE);

    let total = state.story_repo.count_by_status(status).await?;
    let stories = state
        .story_repo
        .list_by_status(status, limit, query.offset)
        .await?;

    Ok(Json(QueueResponse {
        status,
        total,
        stories: stories.into_iter().map(Into::into).collect(),
    }))
}

/// GET /admin/stories/:id
///
/// Get a single story regardless of status (audit read).
pub async fn get_story_admin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StoryResponse>, AppError> {
    let story_id = StoryId(id);

    let story = state
        .story_repo
        .find_by_id(&story_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Story {} not found", id)))?;

    Ok(Json(story.into()))
}

/// POST /admin/stories/:id/moderate
///
/// Apply an approve/reject action to a story.
pub async fn moderate_story(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ModerateRequest>,
) -> Result<Json<StoryResponse>, AppError> {
    let story_id = StoryId(id);

    let story = state
        .moderation_service
        .moderate(&story_id, request.action)
        .await?;

    Ok(Json(story.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_moderate_request_approve() {
        let request: ModerateRequest = serde_json::from_str(r#"{"action": "approve"}"#).unwrap();
        assert_eq!(request.action, ModerationAction::Approve);
    }

    #[test]
    fn parse_moderate_request_reject() {
        let request: ModerateRequest = serde_json::from_str(r#"{"action": "reject"}"#).unwrap();
        assert_eq!(request.action, ModerationAction::Reject);
    }

    #[test]
    fn parse_moderate_request_unknown_action() {
        let result: Result<ModerateRequest, _> = serde_json::from_str(r#"{"action": "delete"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn queue_query_defaults_to_pending() {
        let query: QueueQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.status, "pending");
        assert_eq!(query.limit, 20);
    }
}
