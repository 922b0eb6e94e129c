//! Public story handlers
//!
//! Submission intake and the public read boundary. Public readers only ever
//! see published stories.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::StorySubmission;
use crate::domain::entities::{Story, StoryId, StoryStatus};
use crate::domain::ports::StoryRepository;
use crate::error::AppError;
use crate::AppState;

/// Maximum page size for listings
const MAX_PAGE_SIZE: u64 = 100;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for submitting a story
#[derive(Debug, Deserialize)]
pub struct SubmitStoryRequest {
    pub title: String,
    pub author: String,
    pub body: String,
    pub category: String,
    pub ai_tool: String,
    #[serde(default)]
    pub outcome_type: Option<String>,
}

/// Response body for a submitted story
#[derive(Debug, Serialize)]
pub struct SubmitStoryResponse {
    pub id: String,
    pub status: StoryStatus,
    pub message: String,
}

/// Story response for read endpoints
#[derive(Debug, Serialize)]
pub struct StoryResponse {
    pub id: String,
    pub status: StoryStatus,
    pub author: String,
    pub title: String,
    pub body: String,
    pub category: String,
    pub ai_tool: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome_type: Option<String>,
    pub created_at: String,
}

impl From<Story> for StoryResponse {
    fn from(story: Story) -> Self {
        StoryResponse {
            id: story.id.to_string(),
            status: story.status,
            author: story.author,
            title: story.title,
            body: story.body,
            category: story.category,
            ai_tool: story.ai_tool,
            outcome_type: story.outcome_type,
            created_at: story.created_at.to_rfc3339(),
        }
    }
}

/// Query parameters for listing published stories
#[derive(Debug, Deserialize)]
pub struct ListStoriesQuery {
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

fn default_limit() -> u64 {
    20
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /stories
///
/// Submit a new story. The story enters the moderation queue as pending.
pub async fn submit_story(
    State(state): State<AppState>,
    Json(request): Json<SubmitStoryRequest>,
) -> Result<Json<SubmitStoryResponse>, AppError> {
    let submission = StorySubmission {
        title: request.title,
        author: request.author,
        body: request.body,
        category: request.category,
        ai_tool: request.ai_tool,
        outcome_type: request.outcome_type,
    };

    let story = state.intake_service.submit(submission).await?;

    Ok(Json(SubmitStoryResponse {
        id: story.id.to_string(),
        status: story.status,
        message: "Story submitted for review.".to_string(),
    }))
}

/// GET /stories
///
/// List published stories, most recent first.
pub async fn list_published(
    State(state): State<AppState>,
    Query(query): Query<ListStoriesQuery>,
) -> Result<Json<Vec<StoryResponse>>, AppError> {
    let limit = query.limit.min(MAX_PAGE_SIZE);

    let stories = state
        .story_repo
        .list_by_status(StoryStatus::Published, limit, query.offset)
        .await?;

    Ok(Json(stories.into_iter().map(Into::into).collect()))
}

/// GET /stories/:id
///
/// Get a single published story. Anything not yet (or no longer) published
/// is absent from the public boundary.
pub async fn get_story(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StoryResponse>, AppError> {
    let story_id = StoryId(id);

    let story = state
        .story_repo
        .find_by_id(&story_id)
        .await?
        .filter(|s| s.is_public())
        .ok_or_else(|| AppError::NotFound(format!("Story {} not found", id)))?;

    Ok(Json(story.into()))
}
